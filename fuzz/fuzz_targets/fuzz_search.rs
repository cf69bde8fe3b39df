#![no_main]
use category_picker::{prefix_search, CategoryForest};
use libfuzzer_sys::fuzz_target;

/// Fuzz prefix search and ancestor-path reconstruction over a fixed forest.
///
/// Arbitrary UTF-8 terms exercise the trim/lowercase/prefix path, including
/// multi-byte characters that change length under lowercasing.
fuzz_target!(|data: &[u8]| {
    if let Ok(term) = std::str::from_utf8(data) {
        let forest = CategoryForest::from_json(
            r#"[
                {"id": 1, "name": "Bisutería", "parentId": 0, "children": [
                    {"id": 11, "name": "Aretes", "parentId": 1},
                    {"id": 12, "name": "Collares", "parentId": 1}
                ]},
                {"id": 2, "name": "Cerámica", "parentId": 0, "children": [
                    {"id": 21, "name": "Vajillas", "parentId": 2}
                ]}
            ]"#,
        )
        .expect("fixed forest parses");

        for node in prefix_search(&forest, term) {
            // Every hit must resolve to a full root-to-node trail.
            assert!(!forest.ancestor_path(node.id).is_empty());
        }
    }
});
