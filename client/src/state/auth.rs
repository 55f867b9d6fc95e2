//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once by the dashboard's fire-and-forget user fetch. A missing user
//! is a normal state, not an error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Name to greet the user by, if one is known.
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|name| !name.is_empty())
    }
}
