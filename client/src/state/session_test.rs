use super::*;

#[test]
fn navigation_failure_names_target_and_reason() {
    assert_eq!(
        navigation_failure("/login", "no window"),
        "navigation to /login failed: no window"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hard_navigate_is_inert_off_browser() {
    hard_navigate(AppRoute::Login.path());
}
