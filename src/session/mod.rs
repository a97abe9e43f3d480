//! Authenticated session context
//!
//! The signed-in user is passed explicitly to the code that needs it
//! rather than read from ambient state. The session is created once at
//! sign-in and its user is replaced wholesale after a confirmed profile
//! update.

use serde::{Deserialize, Serialize};

/// A user profile as returned by the backend
///
/// Like `Task`, the field set is the contract; unexpected fields in a
/// response fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Unique user identifier, assigned by the backend
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Role shown on the overview page
    pub role: String,
}

/// Session state for the signed-in user
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    /// Create a session for the given user
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The current user
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Replace the session user with the backend's copy
    pub fn replace_user(&mut self, user: User) {
        self.user = user;
    }
}
