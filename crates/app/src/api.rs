//! Stub authentication backend.
//!
//! The portal's only boundary to a future backend service. Every call
//! completes locally and logs the attempt. A real implementation must
//! verify credentials server-side and derive the account's true role
//! itself instead of trusting the client's selection; nothing here is
//! a contract to preserve.

use shared_types::{AuthError, AuthUser, LoginIntent, RoleProfile, SignupIntent};
use tracing::info;

/// Verify credentials and resolve the account.
///
/// TODO: swap in the real credential check when the backend service
/// lands. Until then the client-selected role is trusted as-is.
pub fn login(intent: &LoginIntent) -> Result<AuthUser, AuthError> {
    info!(email = %intent.email, role = intent.role.as_str(), "login attempt");

    Ok(AuthUser {
        display_name: display_name_from_email(&intent.email),
        email: intent.email.clone(),
        role: intent.role,
        specialization: None,
    })
}

/// Create the account and sign it in.
pub fn signup(intent: &SignupIntent) -> Result<AuthUser, AuthError> {
    info!(email = %intent.email, role = intent.role().as_str(), "signup attempt");

    let specialization = match intent.profile {
        RoleProfile::Doctor { specialization } => specialization,
        RoleProfile::Patient | RoleProfile::Receptionist => None,
    };

    Ok(AuthUser {
        display_name: intent.display_name(),
        email: intent.email.clone(),
        role: intent.role(),
        specialization,
    })
}

/// Invalidate any server-side session. Nothing to invalidate yet.
pub fn logout() {
    info!("logout");
}

/// Greeting name for accounts that signed in with just an email.
fn display_name_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) => local.to_string(),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Role, Specialization};

    #[test]
    fn login_stub_trusts_the_client_selected_role() {
        let intent = LoginIntent {
            email: "a@b.com".into(),
            password: "x".into(),
            role: Role::Patient,
        };

        let user = login(&intent).unwrap();
        assert_eq!(user.role, Role::Patient);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.display_name, "a");
    }

    #[test]
    fn signup_stub_carries_the_doctor_specialization() {
        let intent = SignupIntent {
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah@example.com".into(),
            phone: "+1 (555) 000-1111".into(),
            password: "hunter22".into(),
            profile: RoleProfile::Doctor {
                specialization: Some(Specialization::Cardiology),
            },
        };

        let user = signup(&intent).unwrap();
        assert_eq!(user.role, Role::Doctor);
        assert_eq!(user.specialization, Some(Specialization::Cardiology));
        assert_eq!(user.display_name, "Sarah Johnson");
    }

    #[test]
    fn display_name_falls_back_to_the_raw_email() {
        assert_eq!(display_name_from_email("not-an-email"), "not-an-email");
    }
}
