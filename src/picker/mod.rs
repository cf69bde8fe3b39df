//! The category picker state machine.
//!
//! [`CategoryPicker`] is the selection controller an embedding form drives:
//! one instance per selector field, nothing shared between instances, and
//! all ephemeral state (breadcrumb, search, warnings) recreated when the
//! widget opens. The committed value itself lives in the form; the picker
//! receives it as a parameter and hands picks back through the `on_change`
//! callback.
//!
//! Every transition returns a [`PickerEvent`] so the form can react (close
//! the modal, show a warning, refresh its display) without reaching into
//! picker internals. Input that cannot apply (a click on a vanished id, a
//! stale animation token, any call while closed) comes back as
//! [`PickerEvent::Ignored`] and leaves the state untouched.

mod navigation;
mod search;
mod status;

pub use navigation::{NavAction, NavigationState, PendingNav};
pub use search::SearchState;
pub use status::StatusMessage;

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::PickerConfig;
use crate::model::{Availability, CategoryForest, CategoryId, CategorySource};

/// Warning raised when "Done" is pressed with nothing drilled into.
pub const EMPTY_SELECTION_WARNING: &str = "Select a category before confirming";

/// Callback invoked exactly once per committed category.
pub type OnChange = Box<dyn FnMut(CategoryId)>;

/// Outcome of a picker transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The widget opened
    Opened,
    /// The widget refused to open; render the disabled panel instead
    Unavailable(Availability),
    /// Drilled into an internal category
    Drilled(CategoryId),
    /// Jumped back via the breadcrumb; payload is the crumb landed on,
    /// `None` for the root level
    JumpedBack(Option<CategoryId>),
    /// A category was committed; `on_change` has fired and the widget closed
    Committed(CategoryId),
    /// "Done" pressed with an empty breadcrumb; a warning was raised and
    /// nothing was committed
    BlockedEmptySelection,
    /// The widget closed without committing
    Closed,
    /// The input did not apply; state is unchanged
    Ignored,
}

/// One breadcrumb entry as the form displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub id: CategoryId,
    pub name: String,
}

/// Hierarchical category selector state.
///
/// The picker never stores the forest or the committed value; both belong
/// to the embedding form and are passed into each call. That keeps a picker
/// reusable across payload refreshes without any cache invalidation.
///
/// # Example
///
/// ```
/// use category_picker::{CategoryForest, CategoryPicker, CategorySource, PickerConfig, PickerEvent};
///
/// let forest = CategoryForest::from_json(r#"[
///     {"id": 1, "name": "Bisutería", "parentId": 0, "children": [
///         {"id": 11, "name": "Aretes", "parentId": 1}
///     ]}
/// ]"#)?;
/// let source = CategorySource::ready(forest);
///
/// let mut picker = CategoryPicker::new(PickerConfig::default());
/// picker.open(&source, None);
/// picker.select_category(&source.forest, 1);
///
/// let event = picker.select_category(&source.forest, 11);
/// assert_eq!(event, PickerEvent::Committed(11));
/// assert!(!picker.is_open());
/// # Ok::<(), category_picker::PickerError>(())
/// ```
pub struct CategoryPicker {
    config: PickerConfig,
    nav: NavigationState,
    search: SearchState,
    status: StatusMessage,
    open: bool,
    on_change: Option<OnChange>,
}

impl CategoryPicker {
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        let status = StatusMessage::with_ttl(config.status_ttl());
        Self {
            config,
            nav: NavigationState::new(),
            search: SearchState::new(),
            status,
            open: false,
            on_change: None,
        }
    }

    /// Register the commit callback, builder-style.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(CategoryId) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Navigation state, for embedders that render the breadcrumb bar.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Search state, for embedders that render the results panel.
    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Delay an animating embedder should wait between
    /// [`begin_drill`](Self::begin_drill) and
    /// [`complete_drill`](Self::complete_drill).
    #[must_use]
    pub const fn transition_delay(&self) -> Duration {
        self.config.transition_delay()
    }

    /// Open the widget.
    ///
    /// With a `value` that resolves in the forest, the breadcrumb starts at
    /// its full ancestor path; otherwise at the root level. Any leftover
    /// search term from a previous session is cleared. A source that is
    /// loading, failed, or empty refuses to open.
    pub fn open(&mut self, source: &CategorySource, value: Option<CategoryId>) -> PickerEvent {
        let availability = source.availability();
        if availability != Availability::Ready {
            tracing::debug!(state = availability.label(), "Picker cannot open");
            return PickerEvent::Unavailable(availability);
        }

        self.nav.initialize(&source.forest, value);
        self.search.clear();
        self.status.clear();
        self.open = true;
        tracing::debug!(value = ?value, depth = self.nav.depth(), "Picker opened");
        PickerEvent::Opened
    }

    /// Click a category tile.
    ///
    /// An internal node drills down; a leaf is a terminal pick that commits
    /// and closes. Unknown ids are ignored.
    pub fn select_category(&mut self, forest: &CategoryForest, id: CategoryId) -> PickerEvent {
        if !self.open {
            return PickerEvent::Ignored;
        }
        let is_leaf = match forest.find(id) {
            Some(node) => node.is_leaf(),
            None => return PickerEvent::Ignored,
        };

        if is_leaf {
            self.commit(id)
        } else if self.nav.drill(forest, id) {
            self.status.clear();
            PickerEvent::Drilled(id)
        } else {
            PickerEvent::Ignored
        }
    }

    /// Begin an animated drill into an internal category.
    ///
    /// Returns `None` for leaves (terminal picks never animate), unknown
    /// ids, or a closed picker. The token goes back in through
    /// [`complete_drill`](Self::complete_drill) after the transition delay.
    pub fn begin_drill(&mut self, forest: &CategoryForest, id: CategoryId) -> Option<PendingNav> {
        if !self.open {
            return None;
        }
        match forest.find(id) {
            Some(node) if !node.is_leaf() => Some(self.nav.begin(NavAction::Drill(id))),
            _ => None,
        }
    }

    /// Complete a drill begun earlier.
    ///
    /// A stale token (the picker closed or reopened since
    /// [`begin_drill`](Self::begin_drill)) is discarded and the state stays
    /// as it is.
    pub fn complete_drill(&mut self, forest: &CategoryForest, pending: PendingNav) -> PickerEvent {
        if !self.open {
            return PickerEvent::Ignored;
        }
        if !self.nav.complete(forest, pending) {
            return PickerEvent::Ignored;
        }
        self.status.clear();
        match pending.action() {
            NavAction::Drill(id) => PickerEvent::Drilled(id),
            NavAction::JumpRoot | NavAction::JumpCrumb(_) => {
                PickerEvent::JumpedBack(self.nav.current())
            }
        }
    }

    /// Click the breadcrumb bar. `None` is the synthetic root crumb; an
    /// index past the current trail is ignored.
    pub fn select_breadcrumb(
        &mut self,
        forest: &CategoryForest,
        index: Option<usize>,
    ) -> PickerEvent {
        if !self.open {
            return PickerEvent::Ignored;
        }
        let applied = match index {
            None => self.nav.jump_to_root(forest),
            Some(i) => {
                if i >= self.nav.depth() {
                    return PickerEvent::Ignored;
                }
                self.nav.jump_to_crumb(forest, i)
            }
        };
        if applied {
            self.status.clear();
            PickerEvent::JumpedBack(self.nav.current())
        } else {
            PickerEvent::Ignored
        }
    }

    /// Type into the search box. Matches recompute against the whole
    /// forest, wherever the drill-down currently stands.
    pub fn set_search_term(&mut self, forest: &CategoryForest, term: &str) {
        if !self.open {
            return;
        }
        self.search.set_term(forest, term);
    }

    /// Pick a search result.
    ///
    /// The breadcrumb is rebuilt from the node's full ancestor path before
    /// committing, so the pick leaves exactly the state a drill-down commit
    /// of the same node would have left. Results are committable whether or
    /// not the node is a leaf.
    pub fn select_search_result(&mut self, forest: &CategoryForest, id: CategoryId) -> PickerEvent {
        if !self.open {
            return PickerEvent::Ignored;
        }
        if forest.find(id).is_none() {
            tracing::debug!(id, "Search result no longer in forest; ignoring");
            return PickerEvent::Ignored;
        }
        self.nav.initialize(forest, Some(id));
        self.commit(id)
    }

    /// Press "Done": commit whatever the breadcrumb currently points at.
    ///
    /// An empty breadcrumb raises [`EMPTY_SELECTION_WARNING`] and commits
    /// nothing; the widget stays open.
    pub fn confirm_current(&mut self) -> PickerEvent {
        if !self.open {
            return PickerEvent::Ignored;
        }
        match self.nav.current() {
            Some(id) => self.commit(id),
            None => {
                tracing::debug!("Confirm blocked: nothing selected");
                self.status.set(EMPTY_SELECTION_WARNING);
                PickerEvent::BlockedEmptySelection
            }
        }
    }

    /// Commit a category: fire `on_change` exactly once, then close.
    ///
    /// Normally reached through a terminal pick, a search pick, or "Done";
    /// calling it directly commits unconditionally.
    pub fn commit(&mut self, id: CategoryId) -> PickerEvent {
        tracing::info!(id, "Category committed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(id);
        }
        self.shutdown();
        PickerEvent::Committed(id)
    }

    /// Close without committing; all ephemeral state is discarded.
    pub fn close(&mut self) -> PickerEvent {
        self.shutdown();
        PickerEvent::Closed
    }

    fn shutdown(&mut self) {
        // reset bumps the epoch, so pending navigations die here
        self.nav.reset();
        self.search.clear();
        self.status.clear();
        self.open = false;
    }

    /// Current user-facing warning, expiring TTL'd warnings first.
    pub fn warning(&mut self) -> Option<&str> {
        self.status.message()
    }

    /// Current warning without the expiry check.
    #[must_use]
    pub fn peek_warning(&self) -> Option<&str> {
        self.status.peek()
    }

    /// The panel of categories at the current drill position.
    #[must_use]
    pub fn current_level<'f>(
        &self,
        forest: &'f CategoryForest,
    ) -> Vec<&'f crate::model::CategoryNode> {
        self.nav.current_level(forest)
    }

    /// The breadcrumb as displayable entries.
    #[must_use]
    pub fn breadcrumb_entries(&self, forest: &CategoryForest) -> Vec<BreadcrumbEntry> {
        self.nav
            .breadcrumb_nodes(forest)
            .iter()
            .map(|n| BreadcrumbEntry {
                id: n.id,
                name: n.name.clone(),
            })
            .collect()
    }

    /// Display label for a committed value, derived purely from the forest:
    /// the full root-to-value trail, or empty when the value is unset or no
    /// longer present.
    ///
    /// This is an associated function on purpose. The label must be
    /// renderable while the picker is closed, from nothing but the form's
    /// stored value.
    #[must_use]
    pub fn breadcrumb_label(
        forest: &CategoryForest,
        value: Option<CategoryId>,
    ) -> Vec<BreadcrumbEntry> {
        match value {
            Some(id) => forest
                .ancestor_path(id)
                .iter()
                .map(|n| BreadcrumbEntry {
                    id: n.id,
                    name: n.name.clone(),
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for CategoryPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl fmt::Debug for CategoryPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryPicker")
            .field("open", &self.open)
            .field("nav", &self.nav)
            .field("search", &self.search)
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_source() -> CategorySource {
        CategorySource::ready(
            CategoryForest::from_json(
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
            .unwrap(),
        )
    }

    #[test]
    fn test_closed_picker_ignores_everything() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();

        assert_eq!(picker.select_category(&source.forest, 1), PickerEvent::Ignored);
        assert_eq!(picker.confirm_current(), PickerEvent::Ignored);
        assert_eq!(
            picker.select_breadcrumb(&source.forest, None),
            PickerEvent::Ignored
        );
        assert!(picker.begin_drill(&source.forest, 1).is_none());
    }

    #[test]
    fn test_open_requires_ready_source() {
        let mut picker = CategoryPicker::default();

        assert_eq!(
            picker.open(&CategorySource::loading(), None),
            PickerEvent::Unavailable(Availability::Loading)
        );
        assert_eq!(
            picker.open(&CategorySource::failed(), None),
            PickerEvent::Unavailable(Availability::Failed)
        );
        assert_eq!(
            picker.open(&CategorySource::ready(CategoryForest::default()), None),
            PickerEvent::Unavailable(Availability::Empty)
        );
        assert!(!picker.is_open());
    }

    #[test]
    fn test_commit_fires_callback_once_and_closes() {
        let source = sample_source();
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        let mut picker =
            CategoryPicker::default().on_change(move |id| sink.borrow_mut().push(id));

        picker.open(&source, None);
        assert_eq!(picker.select_category(&source.forest, 1), PickerEvent::Drilled(1));
        assert_eq!(
            picker.select_category(&source.forest, 11),
            PickerEvent::Committed(11)
        );

        assert_eq!(*committed.borrow(), vec![11]);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_confirm_with_empty_breadcrumb_blocks() {
        let source = sample_source();
        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);
        let mut picker = CategoryPicker::default().on_change(move |_| *sink.borrow_mut() += 1);

        picker.open(&source, None);
        assert_eq!(picker.confirm_current(), PickerEvent::BlockedEmptySelection);

        assert_eq!(*fired.borrow(), 0);
        assert!(picker.is_open(), "blocked confirm keeps the widget open");
        assert_eq!(picker.peek_warning(), Some(EMPTY_SELECTION_WARNING));
    }

    #[test]
    fn test_confirm_commits_current_crumb() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();

        picker.open(&source, None);
        picker.select_category(&source.forest, 2);
        assert_eq!(picker.confirm_current(), PickerEvent::Committed(2));
    }

    #[test]
    fn test_open_with_value_restores_trail_and_clears_search() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();

        picker.open(&source, None);
        picker.set_search_term(&source.forest, "are");
        picker.close();

        picker.open(&source, Some(11));
        assert_eq!(picker.navigation().breadcrumb(), &[1, 11]);
        assert_eq!(picker.search().term(), "");
        assert!(!picker.search().is_active());
    }

    #[test]
    fn test_search_pick_equals_drill_pick() {
        let source = sample_source();

        let mut via_drill = CategoryPicker::default();
        via_drill.open(&source, None);
        via_drill.select_category(&source.forest, 1);
        let drill_event = via_drill.select_category(&source.forest, 11);

        let mut via_search = CategoryPicker::default();
        via_search.open(&source, None);
        via_search.set_search_term(&source.forest, "are");
        assert_eq!(via_search.search().results(), &[11]);
        let search_event = via_search.select_search_result(&source.forest, 11);

        assert_eq!(drill_event, search_event);
    }

    #[test]
    fn test_search_result_vanished_from_forest_is_ignored() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, None);

        assert_eq!(
            picker.select_search_result(&source.forest, 999),
            PickerEvent::Ignored
        );
        assert!(picker.is_open());
    }

    #[test]
    fn test_breadcrumb_jump_events() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, Some(11));

        assert_eq!(
            picker.select_breadcrumb(&source.forest, Some(0)),
            PickerEvent::JumpedBack(Some(1))
        );
        assert_eq!(
            picker.select_breadcrumb(&source.forest, None),
            PickerEvent::JumpedBack(None)
        );
        assert_eq!(
            picker.select_breadcrumb(&source.forest, Some(5)),
            PickerEvent::Ignored
        );
    }

    #[test]
    fn test_deferred_drill_happy_path() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, None);

        let pending = picker.begin_drill(&source.forest, 1).unwrap();
        assert!(picker.navigation().is_transitioning());

        assert_eq!(
            picker.complete_drill(&source.forest, pending),
            PickerEvent::Drilled(1)
        );
        assert_eq!(picker.navigation().breadcrumb(), &[1]);
    }

    #[test]
    fn test_deferred_drill_across_reopen_is_discarded() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, None);

        let pending = picker.begin_drill(&source.forest, 1).unwrap();

        // Session torn down and rebuilt before the timer fires.
        picker.close();
        picker.open(&source, Some(2));

        assert_eq!(
            picker.complete_drill(&source.forest, pending),
            PickerEvent::Ignored
        );
        assert_eq!(picker.navigation().breadcrumb(), &[2]);
    }

    #[test]
    fn test_begin_drill_refuses_leaves() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, None);

        assert!(picker.begin_drill(&source.forest, 11).is_none());
        assert!(picker.begin_drill(&source.forest, 999).is_none());
    }

    #[test]
    fn test_breadcrumb_label_is_pure() {
        let source = sample_source();

        let label = CategoryPicker::breadcrumb_label(&source.forest, Some(11));
        let names: Vec<_> = label.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bisutería", "Aretes"]);

        assert!(CategoryPicker::breadcrumb_label(&source.forest, None).is_empty());
        assert!(CategoryPicker::breadcrumb_label(&source.forest, Some(999)).is_empty());
    }

    #[test]
    fn test_drill_clears_previous_warning() {
        let source = sample_source();
        let mut picker = CategoryPicker::default();
        picker.open(&source, None);

        picker.confirm_current();
        assert!(picker.peek_warning().is_some());

        picker.select_category(&source.forest, 1);
        assert!(picker.peek_warning().is_none());
    }
}
