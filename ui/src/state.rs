use payloads::{UserRole, responses};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            AuthState::Unknown | AuthState::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user().map(|profile| profile.role)
    }

    pub fn is_provider(&self) -> bool {
        matches!(self.role(), Some(UserRole::Provider))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role(), Some(UserRole::Admin))
    }

    /// Resource hooks hold no cross-mount caches, so logging out only
    /// has to drop the auth state. User-scoped data disappears with the
    /// components that fetched it.
    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
