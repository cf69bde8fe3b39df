#![no_main]
use category_picker::CategoryForest;
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the category payload parser.
///
/// Also wraps input as a single node's `children` array so deeper payload
/// fields are reached instead of failing at the top-level array.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Try raw input first
        let _ = CategoryForest::from_json(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                r#"[{{"id":1,"name":"Bisutería","parentId":0,"children":[{s}]}}]"#,
            );
            let _ = CategoryForest::from_json(&wrapped);
        }
    }
});
