use super::*;
use std::sync::{Arc, Mutex};

fn recording_setter() -> (Callback<bool>, Arc<Mutex<Vec<bool>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let setter = Callback::new(move |open: bool| sink.lock().unwrap().push(open));
    (setter, calls)
}

// =============================================================
// Uncontrolled
// =============================================================

#[test]
fn uncontrolled_starts_closed() {
    let state = ModalState::uncontrolled();
    assert!(!state.is_controlled());
    assert!(!state.is_open());
}

#[test]
fn uncontrolled_open_then_backdrop_close() {
    let state = ModalState::uncontrolled();
    state.open();
    assert!(state.is_open());
    state.close();
    assert!(!state.is_open());
}

// =============================================================
// Controlled
// =============================================================

#[test]
fn controlled_routes_changes_through_parent_setter() {
    let parent = RwSignal::new(false);
    let (setter, calls) = recording_setter();
    let state = ModalState::controlled(parent.into(), setter);

    state.open();
    state.close();

    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    assert!(!state.internal.get_untracked());
}

#[test]
fn controlled_reads_parent_value_only() {
    let parent = RwSignal::new(true);
    let (setter, _) = recording_setter();
    let state = ModalState::controlled(parent.into(), setter);
    assert!(state.is_open());

    // The setter records but does not write back, so the parent still says open.
    state.close();
    assert!(state.is_open());
    assert!(!state.internal.get_untracked());
}

#[test]
fn controlled_parent_that_applies_changes() {
    let parent = RwSignal::new(false);
    let setter = Callback::new(move |open: bool| parent.set(open));
    let state = ModalState::controlled(parent.into(), setter);

    state.open();
    assert!(parent.get_untracked());
    assert!(state.is_open());
    assert!(!state.internal.get_untracked());
}

#[test]
fn from_props_requires_both_halves_for_control() {
    let (setter, calls) = recording_setter();
    let only_setter = ModalState::from_props(None, Some(setter));
    assert!(!only_setter.is_controlled());
    only_setter.open();
    assert!(only_setter.is_open());
    assert!(calls.lock().unwrap().is_empty());

    let seeded = ModalState::from_props(Some(Signal::stored(true)), None);
    assert!(!seeded.is_controlled());
    assert!(seeded.is_open());
}

// =============================================================
// Keyboard dismissal
// =============================================================

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("e"));
}
