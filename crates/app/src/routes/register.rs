use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::{
    Role, SignupDraft, SignupError, SignupIntent, Specialization, ALL_SPECIALIZATIONS,
    SIGNUP_ROLES,
};
use shared_ui::{
    AlertDialog, Card, CardContent, CardDescription, CardHeader, CardTitle, Checkbox, Input,
    Label, Select,
};

/// Registration form.
///
/// Cross-field validation runs at submit in a fixed order: password
/// mismatch first, then terms acceptance. A failure opens a blocking
/// dialog, emits nothing, and leaves every field as the user typed it.
/// On success exactly one `SignupIntent` goes out through `on_signup`.
#[component]
pub fn SignupForm(
    on_signup: EventHandler<SignupIntent>,
    on_switch_to_login: EventHandler<()>,
) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Option::<Role>::None);
    let mut specialization = use_signal(|| Option::<Specialization>::None);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut agreed_to_terms = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);

    let mut error = use_signal(|| Option::<SignupError>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // The role select is required, so the browser blocks submission
        // while it is unset; this guard covers the same case typewise.
        let Some(role) = role() else { return };

        let draft = SignupDraft {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone: phone(),
            role,
            specialization: specialization(),
            password: password(),
            confirm_password: confirm_password(),
            agreed_to_terms: agreed_to_terms(),
        };

        match draft.validate() {
            Ok(intent) => on_signup.call(intent),
            Err(err) => error.set(Some(err)),
        }
    };

    let password_type = if show_password() { "text" } else { "password" };
    let confirm_type = if show_confirm() { "text" } else { "password" };
    let role_value = role().map(|r| r.as_str()).unwrap_or("");
    let spec_value = specialization().map(|s| s.as_str()).unwrap_or("");
    let dialog_title = error().map(|e| e.title()).unwrap_or_default();
    let dialog_message = error().map(|e| e.message()).unwrap_or_default();

    rsx! {
        AlertDialog {
            open: error().is_some(),
            title: "{dialog_title}",
            message: "{dialog_message}",
            on_dismiss: move |_| error.set(None),
        }

        Card { class: "auth-card",
            CardHeader {
                div { class: "auth-card-heading",
                    div { class: "auth-card-glyph auth-card-glyph-signup",
                        Icon::<LdUserPlus> { icon: LdUserPlus, width: 28, height: 28 }
                    }
                    CardTitle { "Create Account" }
                    CardDescription { "Join our medical portal today" }
                }
            }
            CardContent {
                form { onsubmit: handle_submit,
                    div { class: "auth-grid",
                        div { class: "auth-field",
                            Label { html_for: "first_name", "First Name" }
                            Input {
                                id: "first_name",
                                placeholder: "John",
                                required: true,
                                value: first_name(),
                                on_input: move |e: FormEvent| first_name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "last_name", "Last Name" }
                            Input {
                                id: "last_name",
                                placeholder: "Doe",
                                required: true,
                                value: last_name(),
                                on_input: move |e: FormEvent| last_name.set(e.value()),
                            }
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "signup_email", "Email Address" }
                        Input {
                            id: "signup_email",
                            input_type: "email",
                            placeholder: "john.doe@example.com",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "phone", "Phone Number" }
                        Input {
                            id: "phone",
                            input_type: "tel",
                            placeholder: "+1 (555) 123-4567",
                            required: true,
                            value: phone(),
                            on_input: move |e: FormEvent| phone.set(e.value()),
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "signup_role", "Role" }
                        Select {
                            id: "signup_role",
                            required: true,
                            value: "{role_value}",
                            on_change: move |e: FormEvent| role.set(Role::parse(&e.value())),
                            option { value: "", disabled: true, "Select your role" }
                            for r in SIGNUP_ROLES {
                                option { value: r.as_str(), {r.display_name()} }
                            }
                        }
                    }

                    // Doctors pick a specialization; everyone else never
                    // sees the selector.
                    if role() == Some(Role::Doctor) {
                        div { class: "auth-field",
                            Label { html_for: "specialization", "Specialization" }
                            Select {
                                id: "specialization",
                                value: "{spec_value}",
                                on_change: move |e: FormEvent| {
                                    specialization.set(Specialization::parse(&e.value()))
                                },
                                option { value: "", disabled: true, "Select specialization" }
                                for s in ALL_SPECIALIZATIONS {
                                    option { value: s.as_str(), {s.display_name()} }
                                }
                            }
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "signup_password", "Password" }
                        div { class: "auth-password",
                            Input {
                                id: "signup_password",
                                input_type: "{password_type}",
                                placeholder: "Create a strong password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            button {
                                r#type: "button",
                                class: "auth-password-toggle",
                                aria_label: "Toggle password visibility",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() {
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                } else {
                                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                }
                            }
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "confirm_password", "Confirm Password" }
                        div { class: "auth-password",
                            Input {
                                id: "confirm_password",
                                input_type: "{confirm_type}",
                                placeholder: "Confirm your password",
                                required: true,
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                            button {
                                r#type: "button",
                                class: "auth-password-toggle",
                                aria_label: "Toggle confirmation visibility",
                                onclick: move |_| show_confirm.set(!show_confirm()),
                                if show_confirm() {
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                } else {
                                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                }
                            }
                        }
                    }

                    div { class: "auth-terms",
                        Checkbox {
                            id: "terms",
                            checked: agreed_to_terms(),
                            on_change: move |checked: bool| agreed_to_terms.set(checked),
                        }
                        Label { html_for: "terms",
                            "I agree to the Terms & Conditions and Privacy Policy"
                        }
                    }

                    button { r#type: "submit", class: "button auth-submit", "Create Account" }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    button {
                        r#type: "button",
                        class: "auth-switch-link",
                        onclick: move |_| on_switch_to_login.call(()),
                        "Sign in here"
                    }
                }
            }
        }
    }
}
