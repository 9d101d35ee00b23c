pub mod auth;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdFileText, LdHeart, LdLogOut, LdMenu, LdMessageCircle, LdSettings,
    LdUsers, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{menu_for, NavIcon, NavItem};
use shared_ui::{
    Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarFlyout, NavbarNav, Separator,
};

use crate::api;
use crate::auth::{use_auth, use_role};
use auth::AuthPage;
use dashboard::Dashboard;
use not_found::NotFound;

/// Application routes.
///
/// A single stateful page: which view `/` shows is decided by the
/// session role, not the URL.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gate between the auth flow and the signed-in shell.
///
/// A dashboard is rendered iff a role is authenticated; the auth flow
/// renders bare, outside the shell.
#[component]
fn Home() -> Element {
    let role = use_role();

    if role.is_none() {
        return rsx! { AuthPage {} };
    }

    rsx! {
        AppShell {
            Dashboard {}
        }
    }
}

/// Role-aware navigation shell: brand block, role-derived menu,
/// settings/logout actions, and a mobile flyout.
#[component]
fn AppShell(children: Element) -> Element {
    let mut auth = use_auth();
    let role = use_role();
    let items = menu_for(role);

    // Cosmetic only: whether the mobile flyout is expanded.
    let mut flyout_open = use_signal(|| false);

    let on_logout = move |_| {
        api::logout();
        auth.clear_auth();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }

        Navbar {
            NavbarBrand {
                div { class: "brand-mark",
                    Icon::<LdHeart> { icon: LdHeart, width: 22, height: 22 }
                }
                div {
                    h1 { class: "brand-name", "MediPortal" }
                    p { class: "brand-tagline", "Healthcare Management" }
                }
            }

            NavbarNav {
                for item in items {
                    NavButton { item: *item }
                }
            }

            NavbarActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "shell-action",
                    onclick: move |_| tracing::debug!("settings opened"),
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    span { "Settings" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "shell-action shell-logout",
                    onclick: on_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    span { "Logout" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "shell-menu-toggle",
                    onclick: move |_| flyout_open.set(!flyout_open()),
                    if flyout_open() {
                        Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                }
            }

            if flyout_open() {
                NavbarFlyout {
                    for item in items {
                        NavButton { item: *item }
                    }
                    Separator {}
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "shell-action",
                        onclick: move |_| tracing::debug!("settings opened"),
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        span { "Settings" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "shell-action shell-logout",
                        onclick: on_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }
        }

        main { class: "page-content", {children} }
    }
}

/// One menu entry. The per-section pages are not built yet, so
/// selecting an item logs the navigation intent and nothing else.
#[component]
fn NavButton(item: NavItem) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "nav-item",
            onclick: move |_| tracing::debug!(path = item.path, "navigate"),
            NavGlyph { icon: item.icon }
            span { "{item.label}" }
        }
    }
}

/// Resolve a menu icon id to its lucide glyph.
#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Activity => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 16, height: 16 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
        NavIcon::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
        NavIcon::MessageCircle => {
            rsx! { Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 16, height: 16 } }
        }
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
    }
}
