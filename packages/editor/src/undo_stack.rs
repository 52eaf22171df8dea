//! # Undo/Redo Stack
//!
//! Snapshot-based history: before every mutating action the session captures
//! a deep copy of the full undoable state and pushes it here. Undo swaps the
//! live state for the most recent snapshot; redo swaps back.
//!
//! ## Design
//!
//! - Snapshots are whole-state deep copies, not diffs or inverse operations,
//!   so correctness never depends on how an individual mutation was applied
//! - `past` is bounded (50 entries, oldest evicted first); memory cost is
//!   O(depth × document size), which the cap keeps acceptable
//! - Any new action while not undoing/redoing clears `future`
//! - Empty-stack undo/redo is a no-op, not an error
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! stack.record(session.current_snapshot());   // before mutating
//! // ... mutate live state ...
//!
//! if let Some(prev) = stack.undo(session.current_snapshot()) {
//!     session.restore(prev);
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use gridstudio_dna::DnaRegistry;

use crate::document::ContentBlock;
use crate::theme::UiTheme;

/// Maximum number of history entries kept in `past`
pub const MAX_HISTORY: usize = 50;

/// A deep, independent copy of everything undo must be able to restore.
///
/// Cloning this struct clones every page, block, override tree, parameter
/// and theme field — nothing is shared with live state, which is what makes
/// the isolation guarantee hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub pages: IndexMap<String, Vec<ContentBlock>>,
    #[serde(rename = "globalSettings")]
    pub settings: DnaRegistry,
    #[serde(rename = "uiTheme")]
    pub ui_theme: UiTheme,
}

/// Bounded past / cleared-on-edit future
#[derive(Debug, Default)]
pub struct UndoStack {
    /// Pre-mutation snapshots, oldest first
    past: Vec<StateSnapshot>,

    /// Undone states, most recently undone first
    future: Vec<StateSnapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-mutation snapshot. Evicts the oldest entry beyond the
    /// cap and clears the redo side (a new edit invalidates the future).
    pub fn record(&mut self, snapshot: StateSnapshot) {
        self.past.push(snapshot);
        if self.past.len() > MAX_HISTORY {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Pop the most recent past snapshot, parking `current` on the future
    /// side. Returns `None` (and drops `current`) when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: StateSnapshot) -> Option<StateSnapshot> {
        let previous = self.past.pop()?;
        self.future.insert(0, current);
        Some(previous)
    }

    /// Inverse of [`UndoStack::undo`]
    pub fn redo(&mut self, current: StateSnapshot) -> Option<StateSnapshot> {
        if self.future.is_empty() {
            return None;
        }
        let next = self.future.remove(0);
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Read access to the retained pre-mutation snapshots, oldest first
    pub fn past(&self) -> &[StateSnapshot] {
        &self.past
    }

    /// Read access to the undone states, most recently undone first
    pub fn future(&self) -> &[StateSnapshot] {
        &self.future
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SiteDocument;
    use serde_json::json;

    fn snapshot_with_marker(marker: u64) -> StateSnapshot {
        let mut doc = SiteDocument::new();
        doc.current_blocks_mut().push(ContentBlock::new(
            "B0901",
            json!({ "layout": { "height": marker.to_string() } }),
        ));
        StateSnapshot {
            pages: doc.pages,
            settings: DnaRegistry::default(),
            ui_theme: UiTheme::default(),
        }
    }

    fn marker(snapshot: &StateSnapshot) -> String {
        snapshot.pages["home"][0].local_overrides["layout"]["height"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_empty_stack_is_inert() {
        let mut stack = UndoStack::new();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(stack.undo(snapshot_with_marker(0)).is_none());
        assert!(stack.redo(snapshot_with_marker(0)).is_none());
    }

    #[test]
    fn test_record_then_undo_redo() {
        let mut stack = UndoStack::new();
        stack.record(snapshot_with_marker(1));

        let restored = stack.undo(snapshot_with_marker(2)).unwrap();
        assert_eq!(marker(&restored), "1");
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 1);

        let redone = stack.redo(snapshot_with_marker(1)).unwrap();
        assert_eq!(marker(&redone), "2");
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_record_clears_future() {
        let mut stack = UndoStack::new();
        stack.record(snapshot_with_marker(1));
        stack.undo(snapshot_with_marker(2)).unwrap();
        assert_eq!(stack.redo_levels(), 1);

        stack.record(snapshot_with_marker(3));
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut stack = UndoStack::new();
        for i in 0..60 {
            stack.record(snapshot_with_marker(i));
        }

        assert_eq!(stack.undo_levels(), MAX_HISTORY);
        // The oldest ten (0..10) were evicted
        assert_eq!(marker(&stack.past()[0]), "10");
    }

    #[test]
    fn test_future_ordering_is_most_recent_first() {
        let mut stack = UndoStack::new();
        stack.record(snapshot_with_marker(1));
        stack.record(snapshot_with_marker(2));

        // Live state is "3"; undo twice
        let s2 = stack.undo(snapshot_with_marker(3)).unwrap();
        assert_eq!(marker(&s2), "2");
        let s1 = stack.undo(s2.clone()).unwrap();
        assert_eq!(marker(&s1), "1");

        // Redo must come back in the same order it left
        let back2 = stack.redo(s1).unwrap();
        assert_eq!(marker(&back2), "2");
        let back3 = stack.redo(back2).unwrap();
        assert_eq!(marker(&back3), "3");
    }
}
