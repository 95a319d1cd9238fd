// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan business logic.

use crate::db::{collections, FirestoreDb};
use crate::error::Result;
use crate::models::social::CommentInput;
use crate::models::{Plan, PlanInput};
use crate::services::social;
use crate::validation;

/// Plan CRUD and social operations.
#[derive(Clone)]
pub struct PlanService {
    db: FirestoreDb,
    comment_owner_check: bool,
}

impl PlanService {
    pub fn new(db: FirestoreDb, comment_owner_check: bool) -> Self {
        Self {
            db,
            comment_owner_check,
        }
    }

    /// All plans, newest first.
    pub async fn list(&self) -> Result<Vec<Plan>> {
        social::list(&self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Plan> {
        social::get_by_id(&self.db, id).await
    }

    /// Create a plan owned by the authenticated caller.
    pub async fn create(&self, user_id: &str, input: PlanInput) -> Result<Plan> {
        validation::validate(&input)?;

        let plan = Plan {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            title: input.title,
            start_date: input.start_date,
            end_date: input.end_date,
            week_length: input.week_length,
            week_start: input.week_start,
            public: input.public,
            completed: input.completed,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.db.set(collections::PLANS, &plan.id, &plan).await?;
        tracing::info!(plan = %plan.id, user = user_id, "Plan created");
        Ok(plan)
    }

    /// Permanently delete a plan owned by the requester.
    ///
    /// Does not cascade: the plan's activities stay behind.
    pub async fn delete(&self, requester_id: &str, id: &str) -> Result<()> {
        social::delete::<Plan>(&self.db, requester_id, id).await
    }

    pub async fn like(&self, requester_id: &str, id: &str) -> Result<Plan> {
        social::like(&self.db, requester_id, id).await
    }

    pub async fn unlike(&self, requester_id: &str, id: &str) -> Result<Plan> {
        social::unlike(&self.db, requester_id, id).await
    }

    pub async fn add_comment(
        &self,
        requester_id: &str,
        id: &str,
        input: CommentInput,
    ) -> Result<Plan> {
        social::add_comment(&self.db, requester_id, id, input).await
    }

    pub async fn remove_comment(
        &self,
        requester_id: &str,
        id: &str,
        comment_id: &str,
    ) -> Result<Plan> {
        social::remove_comment(&self.db, requester_id, id, comment_id, self.comment_owner_check)
            .await
    }
}
