// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::social::CommentInput;
use crate::models::{Plan, PlanInput};
use crate::routes::SuccessResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public plan routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plans", get(list_plans))
        .route("/api/plans/{id}", get(get_plan))
}

/// Plan routes requiring authentication.
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plans", post(create_plan))
        .route("/api/plans/{id}", delete(delete_plan))
        .route("/api/plans/like/{id}", post(like_plan))
        .route("/api/plans/unlike/{id}", post(unlike_plan))
        .route("/api/plans/comment/{id}", post(comment_plan))
        .route("/api/plans/comment/{id}/{comment_id}", delete(uncomment_plan))
}

/// All plans, newest first.
async fn list_plans(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Plan>>> {
    Ok(Json(state.plans.list().await?))
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Plan>> {
    Ok(Json(state.plans.get(&id).await?))
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<PlanInput>,
) -> Result<Json<Plan>> {
    Ok(Json(state.plans.create(&user.user_id, input).await?))
}

async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    state.plans.delete(&user.user_id, &id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn like_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Plan>> {
    Ok(Json(state.plans.like(&user.user_id, &id).await?))
}

async fn unlike_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Plan>> {
    Ok(Json(state.plans.unlike(&user.user_id, &id).await?))
}

async fn comment_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(input): Json<CommentInput>,
) -> Result<Json<Plan>> {
    Ok(Json(state.plans.add_comment(&user.user_id, &id, input).await?))
}

async fn uncomment_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Plan>> {
    Ok(Json(
        state
            .plans
            .remove_comment(&user.user_id, &id, &comment_id)
            .await?,
    ))
}
