use pretty_assertions::assert_eq;
use shared_types::{dashboard_for, DashboardView, Role};

#[test]
fn routing_table_is_total() {
    assert_eq!(dashboard_for(None), DashboardView::AuthFlow);
    assert_eq!(dashboard_for(Some(Role::Patient)), DashboardView::Patient);
    assert_eq!(dashboard_for(Some(Role::Doctor)), DashboardView::Doctor);
    assert_eq!(
        dashboard_for(Some(Role::Receptionist)),
        DashboardView::Receptionist
    );
    assert_eq!(dashboard_for(Some(Role::Admin)), DashboardView::Receptionist);
}

#[test]
fn unknown_role_strings_fail_closed() {
    // The old UI silently defaulted unknown roles to the patient view.
    // Here an unknown string never becomes a role, so the router can
    // only send it to the auth flow.
    let parsed = Role::parse("superuser");
    assert_eq!(parsed, None);
    assert_eq!(dashboard_for(parsed), DashboardView::AuthFlow);
}

#[test]
fn routing_is_pure() {
    for _ in 0..3 {
        assert_eq!(dashboard_for(Some(Role::Admin)), DashboardView::Receptionist);
    }
}
