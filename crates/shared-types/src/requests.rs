use serde::{Deserialize, Serialize};

use crate::error::SignupError;
use crate::models::{Role, Specialization};

/// A validated login submission handed to the authentication backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginIntent {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Raw login form state as the user edits it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl LoginDraft {
    /// Build the intent, or `None` while any field is still empty.
    ///
    /// The rendered form marks every field `required`, so the browser
    /// normally blocks incomplete submissions before this runs; the
    /// check here keeps the no-emission guarantee independent of that.
    pub fn intent(&self) -> Option<LoginIntent> {
        if self.email.is_empty() || self.password.is_empty() {
            return None;
        }
        let role = self.role?;
        Some(LoginIntent {
            email: self.email.clone(),
            password: self.password.clone(),
            role,
        })
    }
}

/// Role-specific part of a signup submission.
///
/// Only the doctor variant can carry a specialization. The selector is
/// offered to doctors and not required; other roles cannot have one at
/// all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Patient,
    Doctor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specialization: Option<Specialization>,
    },
    Receptionist,
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Patient => Role::Patient,
            RoleProfile::Doctor { .. } => Role::Doctor,
            RoleProfile::Receptionist => Role::Receptionist,
        }
    }
}

/// A validated registration submission handed to the authentication
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupIntent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub profile: RoleProfile,
}

impl SignupIntent {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw registration form state captured at submit time.
///
/// Field presence is the browser's concern (`required` attributes); the
/// draft only runs the two cross-field checks and builds the intent.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Selected specialization; only consulted for doctor signups.
    pub specialization: Option<Specialization>,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl SignupDraft {
    /// Run the form's validation in order and build the intent.
    ///
    /// Password equality is checked before terms acceptance; the first
    /// failure wins and no intent is produced.
    pub fn validate(&self) -> Result<SignupIntent, SignupError> {
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }

        let profile = match self.role {
            Role::Doctor => RoleProfile::Doctor {
                specialization: self.specialization,
            },
            Role::Patient => RoleProfile::Patient,
            // Admin accounts are provisioned, not self-registered; a
            // draft carrying the role registers as front-desk staff.
            Role::Receptionist | Role::Admin => RoleProfile::Receptionist,
        };

        Ok(SignupIntent {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(role: Role) -> SignupDraft {
        SignupDraft {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            role,
            specialization: None,
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn login_draft_with_all_fields_builds_the_intent() {
        let draft = LoginDraft {
            email: "a@b.com".into(),
            password: "x".into(),
            role: Some(Role::Patient),
        };

        let intent = draft.intent().unwrap();
        assert_eq!(intent.email, "a@b.com");
        assert_eq!(intent.password, "x");
        assert_eq!(intent.role, Role::Patient);
    }

    #[test]
    fn login_draft_missing_any_field_builds_nothing() {
        let complete = LoginDraft {
            email: "a@b.com".into(),
            password: "x".into(),
            role: Some(Role::Doctor),
        };

        let mut no_email = complete.clone();
        no_email.email.clear();
        assert_eq!(no_email.intent(), None);

        let mut no_password = complete.clone();
        no_password.password.clear();
        assert_eq!(no_password.intent(), None);

        let mut no_role = complete;
        no_role.role = None;
        assert_eq!(no_role.intent(), None);
    }

    #[test]
    fn signup_password_mismatch_wins_over_terms() {
        // Both checks would fail; mismatch must be reported first.
        let mut d = draft(Role::Patient);
        d.confirm_password = "different".into();
        d.agreed_to_terms = false;
        assert_eq!(d.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn signup_unaccepted_terms_blocks_the_intent() {
        let mut d = draft(Role::Patient);
        d.agreed_to_terms = false;
        assert_eq!(d.validate(), Err(SignupError::TermsNotAccepted));
    }

    #[test]
    fn signup_mismatch_blocks_even_with_valid_fields() {
        let mut d = draft(Role::Doctor);
        d.specialization = Some(Specialization::Neurology);
        d.confirm_password = "hunter23".into();
        assert_eq!(d.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn doctor_signup_carries_the_specialization() {
        let mut d = draft(Role::Doctor);
        d.specialization = Some(Specialization::Cardiology);

        let intent = d.validate().unwrap();
        assert_eq!(intent.role(), Role::Doctor);
        assert_eq!(
            intent.profile,
            RoleProfile::Doctor {
                specialization: Some(Specialization::Cardiology)
            }
        );
    }

    #[test]
    fn doctor_signup_without_specialization_is_accepted() {
        let d = draft(Role::Doctor);
        let intent = d.validate().unwrap();
        assert_eq!(
            intent.profile,
            RoleProfile::Doctor {
                specialization: None
            }
        );
    }

    #[test]
    fn non_doctor_signup_discards_a_stale_specialization() {
        // Pick doctor + specialization, then switch role: the selection
        // must not leak into the emitted profile.
        let mut d = draft(Role::Patient);
        d.specialization = Some(Specialization::Dermatology);

        let intent = d.validate().unwrap();
        assert_eq!(intent.profile, RoleProfile::Patient);
    }

    #[test]
    fn intent_display_name_joins_first_and_last() {
        let intent = draft(Role::Patient).validate().unwrap();
        assert_eq!(intent.display_name(), "John Doe");
    }

    #[test]
    fn signup_intent_serialization_roundtrip() {
        let intent = draft(Role::Doctor).validate().unwrap();
        let json = serde_json::to_string(&intent).unwrap();
        let parsed: SignupIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, parsed);
    }
}
