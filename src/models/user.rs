//! User account model for storage.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account stored in Firestore.
///
/// The password hash stays on this struct so it round-trips through the
/// store; API responses go through `routes::users::UserResponse`, which
/// omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document ID (UUIDv7)
    pub id: String,
    pub name: String,
    /// Email address, unique, used for login
    pub email: String,
    /// Argon2id password hash
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Gravatar URL derived from the email
    pub avatar: String,
    /// When the account was created (RFC 3339)
    #[serde(rename = "date")]
    pub created_at: String,
}

/// Request body for registering an account.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(default)]
    #[validate(length(min = 2, max = 30, message = "Name must be between 2 and 30 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request body for logging in.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password field is required"))]
    pub password: String,
}
