//! Stub identity provider for the shell
//!
//! There is no real authentication: a single demo account is accepted and
//! everything else is rejected with a fixed message.

use log::{info, warn};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Who is signed in, plus the last login failure
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to sign in. A failed attempt signs out any current user and
    /// records the error.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email.trim() == DEMO_EMAIL && password == DEMO_PASSWORD {
            info!("Signed in as {DEMO_EMAIL}");
            self.user = Some(User {
                id: 1,
                name: "Demo User".to_string(),
                email: DEMO_EMAIL.to_string(),
            });
            self.error = None;
            true
        } else {
            warn!("Rejected login for {}", email.trim());
            self.user = None;
            self.error = Some(INVALID_CREDENTIALS.to_string());
            false
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
