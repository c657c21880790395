#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn attr_round_trips_and_rejects_unknown() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_attr(theme.as_attr()), Some(theme));
    }
    assert_eq!(Theme::from_attr("true"), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
