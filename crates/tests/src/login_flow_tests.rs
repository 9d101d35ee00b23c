use pretty_assertions::assert_eq;
use shared_types::{
    dashboard_for, DashboardView, LoginDraft, LoginIntent, Role, Session,
};

/// Collects emitted intents the way a form's `on_login` handler would.
fn submit(draft: &LoginDraft, emitted: &mut Vec<LoginIntent>) {
    if let Some(intent) = draft.intent() {
        emitted.push(intent);
    }
}

#[test]
fn complete_submission_emits_exactly_one_equal_intent() {
    let draft = LoginDraft {
        email: "a@b.com".into(),
        password: "x".into(),
        role: Some(Role::Patient),
    };

    let mut emitted = Vec::new();
    submit(&draft, &mut emitted);

    assert_eq!(
        emitted,
        vec![LoginIntent {
            email: "a@b.com".into(),
            password: "x".into(),
            role: Role::Patient,
        }]
    );
}

#[test]
fn login_flow_ends_on_the_selected_dashboard() {
    // Fill the form, submit, hand the intent to the session holder.
    let draft = LoginDraft {
        email: "a@b.com".into(),
        password: "x".into(),
        role: Some(Role::Patient),
    };

    let mut emitted = Vec::new();
    submit(&draft, &mut emitted);
    assert_eq!(emitted.len(), 1);

    let mut session = Session::new();
    session.authenticate(emitted[0].role);

    assert_eq!(session.role(), Some(Role::Patient));
    assert_eq!(dashboard_for(session.role()), DashboardView::Patient);
}

#[test]
fn incomplete_submissions_emit_nothing() {
    let complete = LoginDraft {
        email: "a@b.com".into(),
        password: "x".into(),
        role: Some(Role::Doctor),
    };

    let wipes: &[fn(&mut LoginDraft)] = &[
        |d| d.email.clear(),
        |d| d.password.clear(),
        |d| d.role = None,
    ];

    for wipe in wipes {
        let mut draft = complete.clone();
        wipe(&mut draft);

        let mut emitted = Vec::new();
        submit(&draft, &mut emitted);
        assert_eq!(emitted, vec![]);
    }
}

#[test]
fn intent_survives_a_serde_roundtrip() {
    let intent = LoginIntent {
        email: "front.desk@clinic.example".into(),
        password: "s3cret".into(),
        role: Role::Receptionist,
    };

    let json = serde_json::to_string(&intent).unwrap();
    assert!(json.contains(r#""role":"receptionist""#));

    let parsed: LoginIntent = serde_json::from_str(&json).unwrap();
    assert_eq!(intent, parsed);
}
