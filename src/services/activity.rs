// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scheduled workout business logic.

use crate::db::{collections, FirestoreDb};
use crate::error::Result;
use crate::models::social::CommentInput;
use crate::models::{Activity, ActivityInput, Plan};
use crate::services::social;
use crate::validation;

/// Activity CRUD and social operations.
#[derive(Clone)]
pub struct ActivityService {
    db: FirestoreDb,
    comment_owner_check: bool,
}

impl ActivityService {
    pub fn new(db: FirestoreDb, comment_owner_check: bool) -> Self {
        Self {
            db,
            comment_owner_check,
        }
    }

    /// All activities, newest first.
    pub async fn list(&self) -> Result<Vec<Activity>> {
        social::list(&self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Activity> {
        social::get_by_id(&self.db, id).await
    }

    /// Create an activity owned by the authenticated caller.
    ///
    /// The referenced plan must exist before the activity is persisted.
    pub async fn create(&self, user_id: &str, input: ActivityInput) -> Result<Activity> {
        validation::validate(&input)?;

        let _: Plan = social::get_by_id(&self.db, &input.plan).await?;

        let activity = Activity {
            id: uuid::Uuid::now_v7().to_string(),
            plan_id: input.plan,
            user_id: user_id.to_string(),
            name: input.name,
            avatar: input.avatar,
            sport: input.sport,
            title: input.title,
            distance: input.distance,
            duration_seconds: input.duration_seconds,
            pace: input.pace,
            notes: input.notes,
            elevation: input.elevation,
            time_of_day: input.time_of_day,
            completed: input.completed,
            strava_activity: input.strava_activity,
            week: input.week.unwrap_or_default(),
            day: input.day,
            race: input.race,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.db
            .set(collections::ACTIVITIES, &activity.id, &activity)
            .await?;
        tracing::info!(
            activity = %activity.id,
            plan = %activity.plan_id,
            user = user_id,
            "Activity created"
        );
        Ok(activity)
    }

    /// Permanently delete an activity owned by the requester.
    pub async fn delete(&self, requester_id: &str, id: &str) -> Result<()> {
        social::delete::<Activity>(&self.db, requester_id, id).await
    }

    pub async fn like(&self, requester_id: &str, id: &str) -> Result<Activity> {
        social::like(&self.db, requester_id, id).await
    }

    pub async fn unlike(&self, requester_id: &str, id: &str) -> Result<Activity> {
        social::unlike(&self.db, requester_id, id).await
    }

    pub async fn add_comment(
        &self,
        requester_id: &str,
        id: &str,
        input: CommentInput,
    ) -> Result<Activity> {
        social::add_comment(&self.db, requester_id, id, input).await
    }

    pub async fn remove_comment(
        &self,
        requester_id: &str,
        id: &str,
        comment_id: &str,
    ) -> Result<Activity> {
        social::remove_comment(&self.db, requester_id, id, comment_id, self.comment_owner_check)
            .await
    }
}
