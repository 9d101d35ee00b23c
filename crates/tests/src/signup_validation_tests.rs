use pretty_assertions::assert_eq;
use shared_types::{
    Role, RoleProfile, SignupDraft, SignupError, Specialization,
};

fn valid_draft(role: Role) -> SignupDraft {
    SignupDraft {
        first_name: "Emma".into(),
        last_name: "Wilson".into(),
        email: "emma.wilson@example.com".into(),
        phone: "+1 (555) 987-6543".into(),
        role,
        specialization: None,
        password: "correct horse".into(),
        confirm_password: "correct horse".into(),
        agreed_to_terms: true,
    }
}

#[test]
fn password_mismatch_never_emits_an_intent() {
    let mut draft = valid_draft(Role::Patient);
    draft.confirm_password = "correct h0rse".into();

    assert_eq!(draft.validate(), Err(SignupError::PasswordMismatch));
}

#[test]
fn unaccepted_terms_never_emit_an_intent() {
    let mut draft = valid_draft(Role::Receptionist);
    draft.agreed_to_terms = false;

    assert_eq!(draft.validate(), Err(SignupError::TermsNotAccepted));
}

#[test]
fn mismatch_is_reported_before_terms() {
    let mut draft = valid_draft(Role::Patient);
    draft.confirm_password = "other".into();
    draft.agreed_to_terms = false;

    assert_eq!(draft.validate(), Err(SignupError::PasswordMismatch));
}

#[test]
fn mismatch_blocks_regardless_of_other_field_validity() {
    // Everything else is as broken as it can be; the mismatch still
    // decides the outcome.
    let draft = SignupDraft {
        first_name: String::new(),
        last_name: String::new(),
        email: "not-an-email".into(),
        phone: String::new(),
        role: Role::Doctor,
        specialization: Some(Specialization::General),
        password: "one".into(),
        confirm_password: "two".into(),
        agreed_to_terms: true,
    };

    assert_eq!(draft.validate(), Err(SignupError::PasswordMismatch));
}

#[test]
fn valid_draft_emits_one_matching_intent() {
    let draft = valid_draft(Role::Patient);
    let intent = draft.validate().unwrap();

    assert_eq!(intent.first_name, "Emma");
    assert_eq!(intent.last_name, "Wilson");
    assert_eq!(intent.email, "emma.wilson@example.com");
    assert_eq!(intent.role(), Role::Patient);
    assert_eq!(intent.profile, RoleProfile::Patient);
}

#[test]
fn only_doctor_profiles_can_carry_a_specialization() {
    let mut draft = valid_draft(Role::Doctor);
    draft.specialization = Some(Specialization::Pediatrics);

    let intent = draft.validate().unwrap();
    assert_eq!(
        intent.profile,
        RoleProfile::Doctor {
            specialization: Some(Specialization::Pediatrics)
        }
    );

    // The same selection under any other role is dropped on the floor:
    // the profile variants for non-doctors have no slot for it.
    let mut draft = valid_draft(Role::Receptionist);
    draft.specialization = Some(Specialization::Pediatrics);
    assert_eq!(draft.validate().unwrap().profile, RoleProfile::Receptionist);
}

#[test]
fn failed_validation_leaves_the_draft_untouched() {
    let mut draft = valid_draft(Role::Patient);
    draft.agreed_to_terms = false;

    let before = draft.clone();
    let _ = draft.validate();
    assert_eq!(draft, before);
}
