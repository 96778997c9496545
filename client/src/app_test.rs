use super::*;
use crate::routes::Access;

#[test]
fn every_protected_route_except_forms_has_a_list() {
    for route in AppRoute::ALL {
        let is_list = matches!(route.access(), Access::Protected(_))
            && !matches!(route, AppRoute::Dashboard | AppRoute::SubmitReport);
        assert_eq!(!record_sections(route).is_empty(), is_list, "{route:?}");
    }
}

#[test]
fn manage_reports_lists_all_reports_with_status_actions() {
    assert_eq!(
        record_sections(AppRoute::ManageReports),
        vec![RecordSection {
            title: "Manage Reports",
            endpoint: api::ALL_REPORTS_ENDPOINT,
            actions: RecordActions::ReportStatus,
        }]
    );
    assert_ne!(record_sections(AppRoute::ManageReports), record_sections(AppRoute::Reports));
}

#[test]
fn admin_dashboard_manages_users_and_reports() {
    let sections = record_sections(AppRoute::AdminDashboard);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].endpoint, api::USERS_ENDPOINT);
    assert_eq!(sections[0].actions, RecordActions::UserAdmin);
    assert_eq!(sections[1].actions, RecordActions::ReportStatus);
}

#[test]
fn read_only_lists_offer_no_actions() {
    for route in [AppRoute::Reports, AppRoute::AllReports, AppRoute::Analytics] {
        assert!(record_sections(route).iter().all(|s| s.actions == RecordActions::None));
    }
    assert_eq!(record_sections(AppRoute::Notifications)[0].actions, RecordActions::MarkRead);
}
