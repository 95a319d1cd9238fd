// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Profile, ProfileInput};
use crate::routes::SuccessResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public profile routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile/all", get(all_profiles))
        .route("/api/profile/handle/{handle}", get(profile_by_handle))
}

/// Profile routes requiring authentication.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/profile",
        get(my_profile).post(upsert_profile).delete(delete_profile),
    )
}

/// All profiles, newest first.
async fn all_profiles(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Profile>>> {
    Ok(Json(state.profiles.list().await?))
}

async fn profile_by_handle(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profiles.get_by_handle(&handle).await?))
}

/// The authenticated caller's profile.
async fn my_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profiles.get_by_user(&user.user_id).await?))
}

/// Create or update the caller's profile.
async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profiles.upsert(&user.user_id, input).await?))
}

/// Delete the caller's profile and account.
async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SuccessResponse>> {
    state.profiles.delete(&user.user_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
