use crate::responses::UserProfile;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A logged-in session: the bearer tokens plus the profile they were
/// issued for. This is what the browser persists between page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

impl Session {
    pub fn from_tokens(tokens: crate::responses::AuthTokens) -> Self {
        Self {
            access: tokens.access,
            refresh: tokens.refresh,
            user: tokens.user,
        }
    }
}

/// Source of the bearer token the API client attaches to requests.
///
/// The client never reaches into ambient browser storage; whoever
/// constructs it decides where tokens live (localStorage in the
/// browser, memory in tests).
pub trait SessionProvider {
    fn access_token(&self) -> Option<String>;
}

/// In-memory token source for tests and command-line tools.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard =
            self.token.lock().unwrap_or_else(|poison| poison.into_inner());
        *guard = token;
    }
}

impl SessionProvider for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

/// A provider that never yields a token, for unauthenticated flows.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSession;

impl SessionProvider for NoSession {
    fn access_token(&self) -> Option<String> {
        None
    }
}
