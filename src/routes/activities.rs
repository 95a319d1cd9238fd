// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scheduled workout routes. Mirrors the plan routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::social::CommentInput;
use crate::models::{Activity, ActivityInput};
use crate::routes::SuccessResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public activity routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities))
        .route("/api/activities/{id}", get(get_activity))
}

/// Activity routes requiring authentication.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(create_activity))
        .route("/api/activities/{id}", delete(delete_activity))
        .route("/api/activities/like/{id}", post(like_activity))
        .route("/api/activities/unlike/{id}", post(unlike_activity))
        .route("/api/activities/comment/{id}", post(comment_activity))
        .route(
            "/api/activities/comment/{id}/{comment_id}",
            delete(uncomment_activity),
        )
}

/// All activities, newest first.
async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    Ok(Json(state.activities.list().await?))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.get(&id).await?))
}

async fn create_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<ActivityInput>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.create(&user.user_id, input).await?))
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    state.activities.delete(&user.user_id, &id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn like_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.like(&user.user_id, &id).await?))
}

async fn unlike_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Activity>> {
    Ok(Json(state.activities.unlike(&user.user_id, &id).await?))
}

async fn comment_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Activity>> {
    Ok(Json(
        state
            .activities
            .add_comment(&user.user_id, &id, input)
            .await?,
    ))
}

async fn uncomment_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Activity>> {
    Ok(Json(
        state
            .activities
            .remove_comment(&user.user_id, &id, &comment_id)
            .await?,
    ))
}
