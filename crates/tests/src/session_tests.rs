use pretty_assertions::assert_eq;
use shared_types::{dashboard_for, DashboardView, Role, Session};

#[test]
fn fresh_session_renders_the_auth_flow() {
    let session = Session::new();
    assert_eq!(dashboard_for(session.role()), DashboardView::AuthFlow);
}

#[test]
fn authenticate_then_logout_lands_back_on_the_auth_flow() {
    let mut session = Session::new();

    session.authenticate(Role::Doctor);
    assert_eq!(dashboard_for(session.role()), DashboardView::Doctor);

    session.logout();
    assert_eq!(dashboard_for(session.role()), DashboardView::AuthFlow);
}

#[test]
fn dashboard_is_rendered_iff_a_role_is_set() {
    let mut session = Session::new();
    assert!(!session.is_authenticated());
    assert_eq!(dashboard_for(session.role()), DashboardView::AuthFlow);

    for role in [Role::Patient, Role::Doctor, Role::Receptionist, Role::Admin] {
        session.authenticate(role);
        assert!(session.is_authenticated());
        assert_ne!(dashboard_for(session.role()), DashboardView::AuthFlow);
    }
}

#[test]
fn logout_is_idempotent() {
    let mut session = Session::new();
    session.logout();
    assert_eq!(session.role(), None);

    session.authenticate(Role::Patient);
    session.logout();
    session.logout();
    assert_eq!(session.role(), None);
}
