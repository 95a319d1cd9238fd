// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration, login, and session routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{LoginInput, RegisterInput, User};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Public account routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
}

/// Account routes requiring authentication.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/current", get(current))
}

/// Public view of a user account. Never carries the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub date: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.created_at,
        }
    }
}

/// Session token response.
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Register a new account.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<UserResponse>> {
    let user = state.users.register(input).await?;
    Ok(Json(user.into()))
}

/// Log in and receive a bearer token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginInput>,
) -> Result<Json<LoginResponse>> {
    let token = state.users.login(input).await?;
    Ok(Json(LoginResponse {
        success: true,
        token: format!("Bearer {}", token),
    }))
}

/// The authenticated caller's account.
async fn current(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>> {
    let account = state.users.current(&user.user_id).await?;
    Ok(Json(account.into()))
}
