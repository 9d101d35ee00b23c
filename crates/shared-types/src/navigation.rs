use crate::models::Role;

/// Icon identifier for a navigation item, resolved to an SVG glyph by
/// the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Activity,
    Calendar,
    FileText,
    MessageCircle,
    Users,
}

/// A single entry in the role-keyed navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

const PATIENT_MENU: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/patient/dashboard",
        icon: NavIcon::Activity,
    },
    NavItem {
        label: "Medical Profile",
        path: "/patient/profile",
        icon: NavIcon::FileText,
    },
    NavItem {
        label: "Scan Reports",
        path: "/patient/scans",
        icon: NavIcon::FileText,
    },
    NavItem {
        label: "Appointments",
        path: "/patient/appointments",
        icon: NavIcon::Calendar,
    },
    NavItem {
        label: "Chat",
        path: "/patient/chat",
        icon: NavIcon::MessageCircle,
    },
];

const DOCTOR_MENU: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/doctor/dashboard",
        icon: NavIcon::Activity,
    },
    NavItem {
        label: "Appointments",
        path: "/doctor/appointments",
        icon: NavIcon::Calendar,
    },
    NavItem {
        label: "Scan Reviews",
        path: "/doctor/scans",
        icon: NavIcon::FileText,
    },
    NavItem {
        label: "Patients",
        path: "/doctor/patients",
        icon: NavIcon::Users,
    },
];

const FRONT_DESK_MENU: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/receptionist/dashboard",
        icon: NavIcon::Activity,
    },
    NavItem {
        label: "Appointment Queue",
        path: "/receptionist/queue",
        icon: NavIcon::Calendar,
    },
    NavItem {
        label: "User Management",
        path: "/receptionist/users",
        icon: NavIcon::Users,
    },
    NavItem {
        label: "Chat Support",
        path: "/receptionist/chat",
        icon: NavIcon::MessageCircle,
    },
];

/// Fixed ordered menu for a session role; empty when unauthenticated.
///
/// Admins share the front-desk menu, matching their dashboard.
pub fn menu_for(role: Option<Role>) -> &'static [NavItem] {
    match role {
        None => &[],
        Some(Role::Patient) => PATIENT_MENU,
        Some(Role::Doctor) => DOCTOR_MENU,
        Some(Role::Receptionist) | Some(Role::Admin) => FRONT_DESK_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_menu_is_empty() {
        assert!(menu_for(None).is_empty());
    }

    #[test]
    fn every_role_has_a_menu() {
        assert_eq!(menu_for(Some(Role::Patient)).len(), 5);
        assert_eq!(menu_for(Some(Role::Doctor)).len(), 4);
        assert_eq!(menu_for(Some(Role::Receptionist)).len(), 4);
        assert_eq!(menu_for(Some(Role::Admin)).len(), 4);
    }

    #[test]
    fn every_menu_leads_with_the_dashboard() {
        for role in [Role::Patient, Role::Doctor, Role::Receptionist, Role::Admin] {
            assert_eq!(menu_for(Some(role))[0].label, "Dashboard");
        }
    }

    #[test]
    fn admin_shares_the_front_desk_menu() {
        assert_eq!(menu_for(Some(Role::Admin)), menu_for(Some(Role::Receptionist)));
    }

    #[test]
    fn menu_paths_are_role_scoped() {
        for item in menu_for(Some(Role::Patient)) {
            assert!(item.path.starts_with("/patient/"), "{}", item.path);
        }
        for item in menu_for(Some(Role::Doctor)) {
            assert!(item.path.starts_with("/doctor/"), "{}", item.path);
        }
    }
}
