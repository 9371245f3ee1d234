use leptos::prelude::*;

/// Credential context handed to every API call.
///
/// Lives only in memory; a page reload starts logged out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
}

impl SessionContext {
    /// Snapshot of the current session, taken without subscribing.
    pub fn current(&self) -> Session {
        self.session.get_untracked()
    }
}
