//! Drill-down navigation over a category forest.
//!
//! The breadcrumb holds category ids from a root down to the node whose
//! children are on screen. The "current level" (the panel of tiles rendered
//! next) is always derived from the breadcrumb's last entry, so the two can
//! never drift apart.
//!
//! Navigation may be animated: [`NavigationState::begin`] hands out a token,
//! the embedder waits out the transition delay, then passes the token to
//! [`NavigationState::complete`]. The token carries the session epoch it was
//! minted under; a token from a session that has since been reset (the
//! picker closed or reopened) is discarded instead of clobbering the fresh
//! session. Embedders that don't animate use the synchronous helpers, which
//! pair the two calls.

use crate::model::{CategoryForest, CategoryId, CategoryNode};

/// One navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Descend into a category's children
    Drill(CategoryId),
    /// Jump back to the root level (breadcrumb emptied)
    JumpRoot,
    /// Jump back to the breadcrumb entry at this index, dropping everything
    /// after it
    JumpCrumb(usize),
}

/// A navigation begun but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNav {
    epoch: u64,
    action: NavAction,
}

impl PendingNav {
    /// The step this token will apply.
    #[must_use]
    pub const fn action(&self) -> NavAction {
        self.action
    }
}

/// Breadcrumb-driven navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Ids from a root down to the node whose children are displayed
    breadcrumb: Vec<CategoryId>,
    /// A begun navigation has not completed yet
    transitioning: bool,
    /// Bumped on every reset; stale [`PendingNav`] tokens die against it
    epoch: u64,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the root level and invalidate every outstanding
    /// [`PendingNav`].
    pub fn reset(&mut self) {
        self.breadcrumb.clear();
        self.transitioning = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Reset, then point the breadcrumb at `value`'s full ancestor path.
    ///
    /// A `value` that is `None` or does not resolve in the forest lands at
    /// the root level.
    pub fn initialize(&mut self, forest: &CategoryForest, value: Option<CategoryId>) {
        self.reset();
        if let Some(id) = value {
            self.breadcrumb = forest.ancestor_path(id).iter().map(|n| n.id).collect();
        }
    }

    /// The breadcrumb as raw ids, root first.
    #[must_use]
    pub fn breadcrumb(&self) -> &[CategoryId] {
        &self.breadcrumb
    }

    /// The breadcrumb resolved to nodes for display, skipping ids that no
    /// longer resolve.
    #[must_use]
    pub fn breadcrumb_nodes<'f>(&self, forest: &'f CategoryForest) -> Vec<&'f CategoryNode> {
        self.breadcrumb.iter().filter_map(|id| forest.find(*id)).collect()
    }

    /// Current drill depth; `0` means the root level is displayed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.breadcrumb.len()
    }

    /// The node whose children are displayed, or `None` at the root level.
    #[must_use]
    pub fn current(&self) -> Option<CategoryId> {
        self.breadcrumb.last().copied()
    }

    /// Whether a begun navigation is still waiting for its completion.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Current session epoch.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The panel to render: the last crumb's children, or the roots when
    /// the breadcrumb is empty. Derived on every call, never stored.
    #[must_use]
    pub fn current_level<'f>(&self, forest: &'f CategoryForest) -> Vec<&'f CategoryNode> {
        match self.breadcrumb.last() {
            Some(id) => forest
                .find(*id)
                .map(|n| n.children.iter().collect())
                .unwrap_or_default(),
            None => forest.roots().collect(),
        }
    }

    /// Start a navigation, raising the transition flag.
    ///
    /// The returned token must come back via [`complete`](Self::complete);
    /// embedders that animate hold it for the transition delay first.
    pub fn begin(&mut self, action: NavAction) -> PendingNav {
        self.transitioning = true;
        PendingNav {
            epoch: self.epoch,
            action,
        }
    }

    /// Apply a previously begun navigation.
    ///
    /// Returns `false` without touching the breadcrumb when the token is
    /// stale (the session was reset after `begin`) or when a drill target
    /// cannot be resolved anywhere in the forest.
    pub fn complete(&mut self, forest: &CategoryForest, pending: PendingNav) -> bool {
        if pending.epoch != self.epoch {
            tracing::debug!(
                pending_epoch = pending.epoch,
                epoch = self.epoch,
                "Discarding stale navigation token"
            );
            return false;
        }
        self.transitioning = false;
        match pending.action {
            NavAction::Drill(id) => self.splice(forest, id),
            NavAction::JumpRoot => {
                self.breadcrumb.clear();
                true
            }
            NavAction::JumpCrumb(index) => {
                // Truncating past the end is a no-op, matching a click on a
                // crumb that a concurrent jump already removed.
                self.breadcrumb.truncate(index + 1);
                true
            }
        }
    }

    /// Synchronous drill: begin and complete in one step.
    pub fn drill(&mut self, forest: &CategoryForest, id: CategoryId) -> bool {
        let pending = self.begin(NavAction::Drill(id));
        self.complete(forest, pending)
    }

    /// Synchronous jump to the root level.
    pub fn jump_to_root(&mut self, forest: &CategoryForest) -> bool {
        let pending = self.begin(NavAction::JumpRoot);
        self.complete(forest, pending)
    }

    /// Synchronous jump to the breadcrumb entry at `index`.
    pub fn jump_to_crumb(&mut self, forest: &CategoryForest, index: usize) -> bool {
        let pending = self.begin(NavAction::JumpCrumb(index));
        self.complete(forest, pending)
    }

    /// Splice a drill target into the breadcrumb. Three cases, matching the
    /// three ways a category tile can be clicked:
    ///
    /// 1. a root tile restarts the trail at that root;
    /// 2. a tile that is a direct child of some crumb cuts the trail back
    ///    to that crumb and descends;
    /// 3. a tile from a panel that no longer lines up with the breadcrumb
    ///    rebuilds the whole trail from the tree.
    fn splice(&mut self, forest: &CategoryForest, target: CategoryId) -> bool {
        if forest.roots().any(|r| r.id == target) {
            self.breadcrumb.clear();
            self.breadcrumb.push(target);
            return true;
        }

        for i in (0..self.breadcrumb.len()).rev() {
            let crumb = match forest.find(self.breadcrumb[i]) {
                Some(node) => node,
                None => continue,
            };
            if crumb.has_child(target) {
                self.breadcrumb.truncate(i + 1);
                self.breadcrumb.push(target);
                return true;
            }
        }

        let path = forest.ancestor_path(target);
        if path.is_empty() {
            tracing::debug!(target, "Drill target not present in forest; ignoring");
            return false;
        }
        self.breadcrumb = path.iter().map(|n| n.id).collect();
        true
    }
}
