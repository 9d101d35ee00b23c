use crate::models::Role;

/// Which top-level view the portal renders for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// No authenticated role: the login/signup flow.
    AuthFlow,
    Patient,
    Doctor,
    /// Shared front-desk view for receptionists and admins.
    Receptionist,
}

/// Map the session role to the view to render.
///
/// Total over `Option<Role>`. The closed enum leaves no unrecognized
/// role to fall back from, so there is no silent default view.
pub fn dashboard_for(role: Option<Role>) -> DashboardView {
    match role {
        None => DashboardView::AuthFlow,
        Some(Role::Patient) => DashboardView::Patient,
        Some(Role::Doctor) => DashboardView::Doctor,
        Some(Role::Receptionist) | Some(Role::Admin) => DashboardView::Receptionist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn dashboard_for_covers_every_role() {
        assert_eq!(dashboard_for(None), DashboardView::AuthFlow);
        assert_eq!(dashboard_for(Some(Role::Patient)), DashboardView::Patient);
        assert_eq!(dashboard_for(Some(Role::Doctor)), DashboardView::Doctor);
        assert_eq!(
            dashboard_for(Some(Role::Receptionist)),
            DashboardView::Receptionist
        );
        assert_eq!(
            dashboard_for(Some(Role::Admin)),
            DashboardView::Receptionist
        );
    }

    #[test]
    fn logout_returns_to_the_auth_flow() {
        let mut session = Session::new();
        session.authenticate(Role::Doctor);
        session.logout();
        assert_eq!(dashboard_for(session.role()), DashboardView::AuthFlow);
    }
}
