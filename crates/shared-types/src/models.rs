use serde::{Deserialize, Serialize};

/// Portal user role controlling which dashboard and menu are shown.
///
/// - `Patient` — personal appointments, scan reports, health metrics.
/// - `Doctor` — daily schedule, scan reviews, patient roster.
/// - `Receptionist` — front-desk queue and patient inquiries.
/// - `Admin` — provisioned staff account; shares the front-desk view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Receptionist,
    Admin,
}

/// All roles selectable on the login form, in display order.
pub const LOGIN_ROLES: &[Role] = &[
    Role::Patient,
    Role::Doctor,
    Role::Receptionist,
    Role::Admin,
];

/// Roles offered on the signup form. Admin accounts are provisioned by
/// staff, never self-registered.
pub const SIGNUP_ROLES: &[Role] = &[Role::Patient, Role::Doctor, Role::Receptionist];

impl Role {
    /// Lowercase key used for select values and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Receptionist => "Receptionist",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role key. Unknown values yield `None`; there is no
    /// default role to fall back to.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "receptionist" => Some(Role::Receptionist),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Medical specialization selectable when registering a doctor account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Specialization {
    Cardiology,
    Dermatology,
    Neurology,
    Orthopedics,
    Pediatrics,
    General,
}

/// All specializations in display order.
pub const ALL_SPECIALIZATIONS: &[Specialization] = &[
    Specialization::Cardiology,
    Specialization::Dermatology,
    Specialization::Neurology,
    Specialization::Orthopedics,
    Specialization::Pediatrics,
    Specialization::General,
];

impl Specialization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Cardiology => "cardiology",
            Specialization::Dermatology => "dermatology",
            Specialization::Neurology => "neurology",
            Specialization::Orthopedics => "orthopedics",
            Specialization::Pediatrics => "pediatrics",
            Specialization::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Specialization::Cardiology => "Cardiology",
            Specialization::Dermatology => "Dermatology",
            Specialization::Neurology => "Neurology",
            Specialization::Orthopedics => "Orthopedics",
            Specialization::Pediatrics => "Pediatrics",
            Specialization::General => "General Medicine",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cardiology" => Some(Specialization::Cardiology),
            "dermatology" => Some(Specialization::Dermatology),
            "neurology" => Some(Specialization::Neurology),
            "orthopedics" => Some(Specialization::Orthopedics),
            "pediatrics" => Some(Specialization::Pediatrics),
            "general" => Some(Specialization::General),
            _ => None,
        }
    }
}

/// Authenticated user info held by the session context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub display_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_as_str_roundtrip() {
        for role in LOGIN_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Doctor"), Some(Role::Doctor));
        assert_eq!(Role::parse("RECEPTIONIST"), Some(Role::Receptionist));
    }

    #[test]
    fn role_parse_unknown_yields_none() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("nurse"), None);
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn signup_roles_exclude_admin() {
        assert!(!SIGNUP_ROLES.contains(&Role::Admin));
        assert_eq!(SIGNUP_ROLES.len(), 3);
    }

    #[test]
    fn specialization_as_str_roundtrip() {
        for spec in ALL_SPECIALIZATIONS {
            assert_eq!(Specialization::parse(spec.as_str()), Some(*spec));
        }
    }

    #[test]
    fn specialization_parse_unknown_yields_none() {
        assert_eq!(Specialization::parse("podiatry"), None);
        assert_eq!(Specialization::parse(""), None);
    }

    #[test]
    fn auth_user_serialization_roundtrip() {
        let user = AuthUser {
            display_name: "Sarah Johnson".into(),
            email: "sarah.johnson@example.com".into(),
            role: Role::Doctor,
            specialization: Some(Specialization::Cardiology),
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: AuthUser = serde_json::from_str(&json).unwrap();

        assert_eq!(user, deserialized);
    }

    #[test]
    fn auth_user_specialization_omitted_when_absent() {
        let user = AuthUser {
            display_name: "John Doe".into(),
            email: "john@example.com".into(),
            role: Role::Patient,
            specialization: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("specialization"));
    }
}
