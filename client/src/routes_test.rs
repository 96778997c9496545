use super::*;

#[test]
fn protected_route_requirements_match_table() {
    use Role::{Admin, Citizen, LawEnforcement};

    let expected: [(&str, &[Role]); 8] = [
        ("/dashboard", &[Citizen]),
        ("/submit-report", &[Citizen, LawEnforcement, Admin]),
        ("/reports", &[LawEnforcement, Admin]),
        ("/all-reports", &[Citizen, LawEnforcement, Admin]),
        ("/manage-reports", &[LawEnforcement]),
        ("/admin-dashboard", &[Admin]),
        ("/analytics", &[Admin, LawEnforcement]),
        ("/notifications", &[Citizen, LawEnforcement, Admin]),
    ];
    for (path, roles) in expected {
        let route = AppRoute::from_path(path).unwrap();
        assert_eq!(route.access(), Access::Protected(roles), "{path}");
    }
}

#[test]
fn home_and_unauthorized_are_unguarded() {
    assert_eq!(AppRoute::Home.access(), Access::Open);
    assert_eq!(AppRoute::Unauthorized.access(), Access::Open);
    assert!(AppRoute::Unauthorized.required_roles().is_empty());
}

#[test]
fn login_and_register_are_guest_routes() {
    assert_eq!(AppRoute::Login.access(), Access::Guest);
    assert_eq!(AppRoute::Register.access(), Access::Guest);
}

#[test]
fn paths_are_unique_and_round_trip() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
    assert_eq!(AppRoute::from_path("/nope"), None);
}

#[test]
fn segment_drops_leading_slash() {
    assert_eq!(AppRoute::Home.segment(), "");
    assert_eq!(AppRoute::SubmitReport.segment(), "submit-report");
}

#[test]
fn landing_route_by_role() {
    assert_eq!(AppRoute::landing_for(Role::Admin).path(), "/admin-dashboard");
    assert_eq!(AppRoute::landing_for(Role::LawEnforcement).path(), "/reports");
    assert_eq!(AppRoute::landing_for(Role::Citizen).path(), "/dashboard");
}

#[test]
fn from_path_requires_exact_match() {
    assert_eq!(AppRoute::from_path("/manage-reports"), Some(AppRoute::ManageReports));
    assert_eq!(AppRoute::from_path("/manage-reports/"), None);
    assert_eq!(AppRoute::from_path("manage-reports"), None);
}
