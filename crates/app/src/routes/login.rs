use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{LoginDraft, LoginIntent, Role, LOGIN_ROLES};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Select};

/// Credential form: email, password, role.
///
/// Emits exactly one `LoginIntent` per complete submission through
/// `on_login`. Empty-field blocking is the browser's: every control is
/// `required` and there is no custom error path.
#[component]
pub fn LoginForm(
    on_login: EventHandler<LoginIntent>,
    on_switch_to_signup: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Option::<Role>::None);
    // Local toggle only; no effect on the emitted intent.
    let mut show_password = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = LoginDraft {
            email: email(),
            password: password(),
            role: role(),
        };
        if let Some(intent) = draft.intent() {
            on_login.call(intent);
        }
    };

    let password_type = if show_password() { "text" } else { "password" };
    let role_value = role().map(|r| r.as_str()).unwrap_or("");

    rsx! {
        Card { class: "auth-card",
            CardHeader {
                div { class: "auth-card-heading",
                    div { class: "auth-card-glyph",
                        Icon::<LdStethoscope> { icon: LdStethoscope, width: 28, height: 28 }
                    }
                    CardTitle { "Welcome Back" }
                    CardDescription { "Sign in to your medical portal account" }
                }
            }
            CardContent {
                form { onsubmit: handle_submit,
                    div { class: "auth-field",
                        Label { html_for: "email", "Email Address" }
                        Input {
                            id: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }

                    div { class: "auth-field",
                        Label { html_for: "password", "Password" }
                        div { class: "auth-password",
                            Input {
                                id: "password",
                                input_type: "{password_type}",
                                placeholder: "Enter your password",
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
                        Label { html_for: "role", "Login as" }
                        Select {
                            id: "role",
                            required: true,
                            value: "{role_value}",
                            on_change: move |e: FormEvent| role.set(Role::parse(&e.value())),
                            option { value: "", disabled: true, "Select your role" }
                            for r in LOGIN_ROLES {
                                option { value: r.as_str(), {r.display_name()} }
                            }
                        }
                    }

                    button { r#type: "submit", class: "button auth-submit", "Sign In" }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    button {
                        r#type: "button",
                        class: "auth-switch-link",
                        onclick: move |_| on_switch_to_signup.call(()),
                        "Sign up here"
                    }
                }
            }
        }
    }
}
