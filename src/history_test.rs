use super::*;
use crate::state::test_helpers::{dummy_component, numbered_state};

fn history_with(pushes: usize) -> HistoryManager {
    let mut history = HistoryManager::new(numbered_state(0));
    for n in 1..=pushes {
        history.push(numbered_state(n));
    }
    history
}

// =========================================================================
// initialize / basics
// =========================================================================

#[test]
fn new_history_has_nothing_to_undo_or_redo() {
    let history = HistoryManager::new(numbered_state(0));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.current_state(), &numbered_state(0));
}

#[test]
fn initialize_resets_both_stacks() {
    let mut history = history_with(3);
    history.undo();
    history.initialize(numbered_state(99));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.current_state(), &numbered_state(99));
}

// =========================================================================
// push
// =========================================================================

#[test]
fn push_equal_state_is_noop() {
    let mut history = history_with(2);
    history.undo();
    let past_before = history.past().clone();
    let future_before = history.future().clone();

    // Rebuilt from scratch, not the same allocation.
    assert!(!history.push(numbered_state(1)));

    assert_eq!(history.past(), &past_before);
    assert_eq!(history.future(), &future_before);
    assert_eq!(history.current_state(), &numbered_state(1));
    assert!(history.can_redo());
}

#[test]
fn push_compares_whole_tree() {
    let component = dummy_component("a");
    let base = numbered_state(0).with_components([component.clone()]);
    let mut history = HistoryManager::new(base.clone());

    let mut edited = base.clone();
    edited.components[0].version = 2;
    assert!(history.push(edited));
    assert!(!history.push(history.current_state().clone()));
    assert_eq!(history.past().len(), 1);
}

#[test]
fn push_caps_past_at_fifty() {
    let history = history_with(60);
    assert_eq!(history.past().len(), MAX_HISTORY);
    // States 0..=9 evicted; past holds 10..=59, present is 60.
    assert_eq!(history.past().front(), Some(&numbered_state(10)));
    assert_eq!(history.past().back(), Some(&numbered_state(59)));
    assert_eq!(history.current_state(), &numbered_state(60));
}

#[test]
fn push_clears_redo() {
    let mut history = history_with(3);
    history.undo();
    history.undo();
    assert!(history.can_redo());

    assert!(history.push(numbered_state(42)));
    assert!(!history.can_redo());
    assert!(history.future().is_empty());
}

#[test]
fn custom_limit_is_respected() {
    let mut history = HistoryManager::with_limit(numbered_state(0), 2);
    for n in 1..=5 {
        history.push(numbered_state(n));
    }
    assert_eq!(history.past().iter().cloned().collect::<Vec<_>>(), vec![numbered_state(3), numbered_state(4)]);
}

// =========================================================================
// undo / redo
// =========================================================================

#[test]
fn undo_then_redo_restores_present() {
    for pushes in 1..=5 {
        for undos in 0..pushes {
            let mut history = history_with(pushes);
            for _ in 0..undos {
                history.undo();
            }
            let before = history.current_state().clone();
            let past_len = history.past().len();
            let future_len = history.future().len();

            history.undo();
            let after = history.redo().clone();

            assert_eq!(after, before, "pushes={pushes} undos={undos}");
            assert_eq!(history.past().len(), past_len);
            assert_eq!(history.future().len(), future_len);
        }
    }
}

#[test]
fn undo_walks_back_in_order() {
    let mut history = history_with(3);
    assert_eq!(history.undo(), &numbered_state(2));
    assert_eq!(history.undo(), &numbered_state(1));
    assert_eq!(history.undo(), &numbered_state(0));
    assert_eq!(history.future().front(), Some(&numbered_state(1)));
    assert_eq!(history.future().back(), Some(&numbered_state(3)));
}

#[test]
fn undo_on_empty_past_is_noop() {
    let mut history = HistoryManager::new(numbered_state(0));
    assert_eq!(history.undo(), &numbered_state(0));
    assert!(history.past().is_empty());
    assert!(history.future().is_empty());
}

#[test]
fn redo_on_empty_future_is_noop() {
    let mut history = history_with(2);
    assert_eq!(history.redo(), &numbered_state(2));
    assert_eq!(history.past().len(), 2);
    assert!(history.future().is_empty());
}

#[test]
fn redo_respects_cap() {
    let mut history = HistoryManager::with_limit(numbered_state(0), 1);
    history.push(numbered_state(1));
    history.undo();
    assert_eq!(history.redo(), &numbered_state(1));
    assert_eq!(history.past().len(), 1);
    assert_eq!(history.past().front(), Some(&numbered_state(0)));
}

// =========================================================================
// clear
// =========================================================================

#[test]
fn clear_keeps_present() {
    let mut history = history_with(4);
    history.undo();
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.current_state(), &numbered_state(3));
}
