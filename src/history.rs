//! Undo/redo history over full editor snapshots.
//!
//! DESIGN
//! ======
//! Linear history: `past` (oldest first), one `present`, `future` (next redo
//! first). Any push clears `future`. `past` is capped; the oldest snapshot is
//! evicted first. Pushing a snapshot equal to `present` records nothing, so
//! callers can push after every edit without checking for no-op edits.
//!
//! TRADE-OFFS
//! ==========
//! De-duplication uses derived `PartialEq`, a structural walk that stops at
//! the first difference. No operation fails; undo/redo at either end of the
//! stack simply return the present snapshot.

use std::collections::VecDeque;

use crate::state::EditorState;

/// Maximum number of snapshots kept in `past`.
pub const MAX_HISTORY: usize = 50;

/// Bounded undo/redo stack for one document editing session.
#[derive(Debug, Clone)]
pub struct HistoryManager<S = EditorState> {
    past: VecDeque<S>,
    present: S,
    future: VecDeque<S>,
    limit: usize,
}

impl<S: Clone + PartialEq> HistoryManager<S> {
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self::with_limit(initial, MAX_HISTORY)
    }

    /// History keeping at most `limit` undo steps.
    #[must_use]
    pub fn with_limit(initial: S, limit: usize) -> Self {
        Self { past: VecDeque::new(), present: initial, future: VecDeque::new(), limit }
    }

    /// Start over from `initial`, dropping both stacks.
    pub fn initialize(&mut self, initial: S) {
        self.past.clear();
        self.future.clear();
        self.present = initial;
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record `state` as the new present. Returns `false` (and changes
    /// nothing) when it equals the current present.
    pub fn push(&mut self, state: S) -> bool {
        if state == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, state);
        self.push_past(previous);
        self.future.clear();
        true
    }

    /// Step back one snapshot and return the new present.
    pub fn undo(&mut self) -> &S {
        if let Some(previous) = self.past.pop_back() {
            let current = std::mem::replace(&mut self.present, previous);
            self.future.push_front(current);
        }
        &self.present
    }

    /// Step forward one snapshot and return the new present.
    pub fn redo(&mut self) -> &S {
        if let Some(next) = self.future.pop_front() {
            let current = std::mem::replace(&mut self.present, next);
            self.push_past(current);
        }
        &self.present
    }

    #[must_use]
    pub fn current_state(&self) -> &S {
        &self.present
    }

    /// Forget undo and redo history, keeping the present snapshot.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    #[must_use]
    pub fn past(&self) -> &VecDeque<S> {
        &self.past
    }

    #[must_use]
    pub fn future(&self) -> &VecDeque<S> {
        &self.future
    }

    fn push_past(&mut self, state: S) {
        self.past.push_back(state);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
