// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Error bodies are single-entry JSON maps `{<errorKey>: <message>}`,
//! matching the wire contract of the original API. Validation failures
//! carry the whole field→message map instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;

/// Field→message map produced by request validation.
pub type FieldErrors = BTreeMap<String, String>;

/// Entity kinds that can be missing, used to pick the error key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Plan,
    Activity,
    Profile,
    User,
}

impl Entity {
    /// Lowercase noun used in error keys and messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Entity::Plan => "plan",
            Entity::Activity => "activity",
            Entity::Profile => "profile",
            Entity::User => "user",
        }
    }

    fn not_found_key(&self) -> &'static str {
        match self {
            Entity::Plan => "plannotfound",
            Entity::Activity => "activitynotfound",
            Entity::Profile => "profilenotfound",
            Entity::User => "usernotfound",
        }
    }

    fn not_found_message(&self) -> &'static str {
        match self {
            Entity::Plan => "No plan found",
            Entity::Activity => "No activity found",
            Entity::Profile => "There is no profile for this user",
            Entity::User => "User not found",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("No {0} found")]
    NotFound(Entity),

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("User not authorized")]
    NotAuthorized,

    #[error("User already liked this {0}")]
    AlreadyLiked(Entity),

    #[error("You have not yet liked this {0}")]
    NotLiked(Entity),

    #[error("Email already exists")]
    EmailExists,

    #[error("That handle already exists")]
    HandleExists,

    #[error("No user registered with that email")]
    EmailNotFound,

    #[error("Password incorrect")]
    PasswordIncorrect,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status and `{key: message}` body for this error.
    fn parts(&self) -> (StatusCode, serde_json::Value) {
        match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                json!({ entity.not_found_key(): entity.not_found_message() }),
            ),
            AppError::CommentNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "commentnotexists": "Comment does not exist" }),
            ),
            AppError::NotAuthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "notauthorized": "User not authorized" }),
            ),
            AppError::AlreadyLiked(entity) => (
                StatusCode::BAD_REQUEST,
                json!({ "alreadyliked": format!("User already liked this {}", entity) }),
            ),
            AppError::NotLiked(entity) => (
                StatusCode::BAD_REQUEST,
                json!({ "notliked": format!("You have not yet liked this {}", entity) }),
            ),
            AppError::EmailExists => (
                StatusCode::BAD_REQUEST,
                json!({ "email": "Email already exists" }),
            ),
            AppError::HandleExists => (
                StatusCode::BAD_REQUEST,
                json!({ "handle": "That handle already exists" }),
            ),
            AppError::EmailNotFound => {
                (StatusCode::NOT_FOUND, json!({ "email": "User not found" }))
            }
            AppError::PasswordIncorrect => (
                StatusCode::BAD_REQUEST,
                json!({ "password": "Password incorrect" }),
            ),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "database": "Database error" }),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "internal": "Internal server error" }),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.parts();
        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
