//! Externally supplied category data and its availability states.
//!
//! The surrounding page owns the fetch; the picker only receives the result
//! plus the loading/error flags exactly as the category service reported
//! them, and uses them to decide whether it may open at all.

use super::forest::CategoryForest;

/// Category data as handed over by the embedding page.
#[derive(Debug, Clone, Default)]
pub struct CategorySource {
    /// The taxonomy snapshot, possibly empty while loading or after an error
    pub forest: CategoryForest,
    /// The fetch has not finished yet
    pub loading: bool,
    /// The fetch failed
    pub failed: bool,
}

impl CategorySource {
    /// A source whose fetch completed successfully.
    #[must_use]
    pub fn ready(forest: CategoryForest) -> Self {
        Self {
            forest,
            loading: false,
            failed: false,
        }
    }

    /// A source whose fetch is still in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// A source whose fetch failed.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            failed: true,
            ..Self::default()
        }
    }

    /// Availability for rendering. Anything but [`Availability::Ready`]
    /// means the selector shows a disabled panel and refuses to open.
    ///
    /// `loading` wins over `failed` when both flags are set: a retry in
    /// flight supersedes the earlier failure.
    #[must_use]
    pub fn availability(&self) -> Availability {
        if self.loading {
            Availability::Loading
        } else if self.failed {
            Availability::Failed
        } else if self.forest.is_empty() {
            Availability::Empty
        } else {
            Availability::Ready
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.availability() == Availability::Ready
    }
}

/// Render state of the selector shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Data present; the picker may open
    Ready,
    /// Fetch in flight; show a loading placeholder
    Loading,
    /// Fetch failed; show an error placeholder
    Failed,
    /// Fetch succeeded but the taxonomy is empty
    Empty,
}

impl Availability {
    /// Short label for logs and status lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryNode;

    fn one_node_forest() -> CategoryForest {
        CategoryForest::new(vec![CategoryNode {
            id: 1,
            name: "Bisutería".to_string(),
            parent_id: 0,
            children: Vec::new(),
        }])
    }

    #[test]
    fn test_availability_states() {
        assert_eq!(CategorySource::loading().availability(), Availability::Loading);
        assert_eq!(CategorySource::failed().availability(), Availability::Failed);
        assert_eq!(
            CategorySource::ready(CategoryForest::default()).availability(),
            Availability::Empty
        );
        assert_eq!(
            CategorySource::ready(one_node_forest()).availability(),
            Availability::Ready
        );
    }

    #[test]
    fn test_loading_wins_over_failed() {
        let source = CategorySource {
            forest: CategoryForest::default(),
            loading: true,
            failed: true,
        };
        assert_eq!(source.availability(), Availability::Loading);
    }

    #[test]
    fn test_is_ready() {
        assert!(CategorySource::ready(one_node_forest()).is_ready());
        assert!(!CategorySource::loading().is_ready());
    }
}
