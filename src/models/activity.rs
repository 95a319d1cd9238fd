// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scheduled workout model for storage and API.
//!
//! The original schema declared `time` twice (elapsed seconds, then an
//! am/pm marker); here those are the separate `durationSeconds` and
//! `timeOfDay` fields.

use crate::db::collections;
use crate::error::Entity;
use crate::models::social::{Comment, Like, SocialEntity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sport an activity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Running,
    Cycling,
    Swimming,
    Strength,
}

/// Morning or evening slot for a scheduled workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Am,
    Pm,
}

/// Stored activity document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Document ID (UUIDv7)
    pub id: String,
    /// Plan this activity belongs to
    #[serde(rename = "plan")]
    pub plan_id: String,
    /// Owning user's ID
    #[serde(rename = "user")]
    pub user_id: String,
    /// Creator display name, snapshotted at write time
    pub name: Option<String>,
    /// Creator avatar URL, snapshotted at write time
    pub avatar: Option<String>,
    pub sport: Sport,
    pub title: Option<String>,
    pub distance: Option<f64>,
    /// Elapsed time in seconds
    pub duration_seconds: Option<u32>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub elevation: Option<f64>,
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub completed: bool,
    /// External Strava activity reference
    pub strava_activity: Option<String>,
    /// Week number within the plan
    pub week: u32,
    /// Day number within the week
    pub day: Option<u32>,
    #[serde(default)]
    pub race: bool,
    /// Most recent first
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Most recent first
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When the activity was created (RFC 3339)
    #[serde(rename = "date")]
    pub created_at: String,
}

impl SocialEntity for Activity {
    const COLLECTION: &'static str = collections::ACTIVITIES;
    const ENTITY: Entity = Entity::Activity;

    fn id(&self) -> &str {
        &self.id
    }
    fn owner_id(&self) -> &str {
        &self.user_id
    }
    fn likes(&self) -> &[Like] {
        &self.likes
    }
    fn likes_mut(&mut self) -> &mut Vec<Like> {
        &mut self.likes
    }
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
    fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }
}

/// Request body for creating an activity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Plan is required"))]
    pub plan: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub sport: Sport,
    pub title: Option<String>,
    pub distance: Option<f64>,
    pub duration_seconds: Option<u32>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub elevation: Option<f64>,
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub completed: bool,
    pub strava_activity: Option<String>,
    #[validate(required(message = "Week is required"))]
    pub week: Option<u32>,
    pub day: Option<u32>,
    #[serde(default)]
    pub race: bool,
}
