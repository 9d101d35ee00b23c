use dioxus::prelude::*;
use shared_types::{LoginIntent, SignupIntent};

use crate::api;
use crate::auth::use_auth;

use super::login::LoginForm;
use super::register::SignupForm;

/// Login/signup flow with the marketing hero panel.
///
/// Owns the handlers the forms emit their intents into: each calls the
/// stub backend and, on success, transitions the session. Which pane is
/// showing is local state, like everything else on this page.
#[component]
pub fn AuthPage() -> Element {
    let mut auth = use_auth();
    let mut show_login = use_signal(|| true);

    let handle_login = move |intent: LoginIntent| match api::login(&intent) {
        Ok(user) => auth.set_user(user),
        Err(err) => tracing::warn!(%err, "login rejected"),
    };

    let handle_signup = move |intent: SignupIntent| match api::signup(&intent) {
        Ok(user) => auth.set_user(user),
        Err(err) => tracing::warn!(%err, "signup rejected"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-hero",
                h1 { class: "auth-hero-title",
                    "Your Health,"
                    br {}
                    span { class: "auth-hero-accent", "Our Priority" }
                }
                p { class: "auth-hero-copy",
                    "Comprehensive medical portal connecting patients, doctors, and healthcare providers."
                }
                ul { class: "auth-hero-points",
                    li { "AI-Powered Diagnostics" }
                    li { "Seamless Appointment Booking" }
                    li { "Secure Medical Records" }
                    li { "Real-time Communication" }
                }
            }

            div { class: "auth-pane",
                div { class: "auth-pane-masthead",
                    h1 { "MediPortal" }
                    p { "Your comprehensive healthcare management system" }
                }

                if show_login() {
                    LoginForm {
                        on_login: handle_login,
                        on_switch_to_signup: move |_| show_login.set(false),
                    }
                } else {
                    SignupForm {
                        on_signup: handle_signup,
                        on_switch_to_login: move |_| show_login.set(true),
                    }
                }

                p { class: "auth-footnote",
                    "By continuing, you agree to our Terms of Service and Privacy Policy"
                }
            }
        }
    }
}
