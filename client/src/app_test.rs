use super::*;

// =============================================================
// AppRoute
// =============================================================

#[test]
fn paths_match_router_segments() {
    for route in AppRoute::ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn from_path_resolves_known_routes() {
    assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Landing));
    assert_eq!(AppRoute::from_path("/dashboard"), Some(AppRoute::Dashboard));
}

#[test]
fn from_path_tolerates_trailing_slash() {
    assert_eq!(AppRoute::from_path("/dashboard/"), Some(AppRoute::Dashboard));
}

#[test]
fn from_path_rejects_unknown() {
    assert_eq!(AppRoute::from_path("/settings"), None);
    assert_eq!(AppRoute::from_path("/dashboard/extra"), None);
    assert_eq!(AppRoute::from_path(""), None);
}

#[test]
fn only_dashboard_requires_auth() {
    assert!(!AppRoute::Landing.requires_auth());
    assert!(AppRoute::Dashboard.requires_auth());
}
