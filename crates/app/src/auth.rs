use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Global authentication state.
///
/// Holds the whole authenticated user; the role the router and shell
/// consume is derived from it. Cleared on logout, lost on reload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The session role, or `None` when unauthenticated.
pub fn use_role() -> Option<Role> {
    let auth = use_auth();
    let role = auth.current_user.read().as_ref().map(|u| u.role);
    role
}

/// Display name of the signed-in user, for dashboard greetings.
pub fn use_display_name() -> String {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_else(|| "there".to_string());
    name
}
