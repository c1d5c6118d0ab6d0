use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Records every theme applied to it.
#[derive(Clone, Default)]
struct FakeSink {
    applied: Rc<RefCell<Vec<Theme>>>,
}

impl ThemeSink for FakeSink {
    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

impl FakeSink {
    fn last(&self) -> Option<Theme> {
        self.applied.borrow().last().copied()
    }
}

/// In-memory preference store, optionally pre-seeded.
#[derive(Clone, Default)]
struct FakeStore {
    value: Rc<RefCell<Option<Theme>>>,
}

impl PreferenceStore for FakeStore {
    fn load(&self) -> Option<Theme> {
        *self.value.borrow()
    }

    fn store(&self, theme: Theme) {
        *self.value.borrow_mut() = Some(theme);
    }
}

fn toggler() -> (ThemeToggler<FakeSink, FakeStore>, FakeSink, FakeStore) {
    let sink = FakeSink::default();
    let store = FakeStore::default();
    (ThemeToggler::new(sink.clone(), store.clone()), sink, store)
}

// =============================================================
// activate
// =============================================================

#[test]
fn activate_dark_applies_persists_and_offers_light_next() {
    let (toggler, sink, store) = toggler();

    let label = toggler.activate(Theme::Dark);

    assert_eq!(sink.last(), Some(Theme::Dark));
    assert_eq!(store.load(), Some(Theme::Dark));
    assert_eq!(label, Theme::Light);
}

#[test]
fn activate_light_applies_persists_and_offers_dark_next() {
    let (toggler, sink, store) = toggler();

    let label = toggler.activate(Theme::Light);

    assert_eq!(sink.last(), Some(Theme::Light));
    assert_eq!(store.load(), Some(Theme::Light));
    assert_eq!(label, Theme::Dark);
}

#[test]
fn activate_overwrites_the_stored_preference() {
    let (toggler, _sink, store) = toggler();

    toggler.activate(Theme::Dark);
    toggler.activate(Theme::Light);

    assert_eq!(store.load(), Some(Theme::Light));
}

#[test]
fn alternating_activations_return_to_the_starting_state() {
    let (toggler, sink, store) = toggler();

    // Label starts at "dark"; each activation switches to what the label
    // named and flips the label.
    let label = toggler.activate(Theme::Dark);
    assert_eq!(label, Theme::Light);

    let label = toggler.activate(label);
    assert_eq!(label, Theme::Dark);

    let label = toggler.activate(label);
    assert_eq!(label, Theme::Light);
    assert_eq!(sink.last(), Some(Theme::Dark));
    assert_eq!(store.load(), Some(Theme::Dark));
    assert_eq!(sink.applied.borrow().as_slice(), &[
        Theme::Dark,
        Theme::Light,
        Theme::Dark
    ]);
}

// =============================================================
// initial
// =============================================================

#[test]
fn initial_prefers_the_stored_theme_over_the_fallback() {
    let (toggler, sink, store) = toggler();
    store.store(Theme::Dark);

    let theme = toggler.initial(Theme::Light);

    assert_eq!(theme, Theme::Dark);
    assert_eq!(sink.last(), Some(Theme::Dark));
}

#[test]
fn initial_uses_the_fallback_when_nothing_is_stored() {
    let (toggler, sink, _store) = toggler();

    let theme = toggler.initial(Theme::Dark);

    assert_eq!(theme, Theme::Dark);
    assert_eq!(sink.last(), Some(Theme::Dark));
}

#[test]
fn initial_does_not_write_a_preference() {
    let (toggler, _sink, store) = toggler();

    toggler.initial(Theme::Dark);

    assert_eq!(store.load(), None);
}
