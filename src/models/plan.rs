// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan model for storage and API.

use crate::db::collections;
use crate::error::Entity;
use crate::models::social::{Comment, Like, SocialEntity};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Weekday a training week starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Stored plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Document ID (UUIDv7)
    pub id: String,
    /// Owning user's ID
    #[serde(rename = "user")]
    pub user_id: String,
    pub title: String,
    /// Plan start date (ISO 8601)
    pub start_date: String,
    /// Plan end date (ISO 8601)
    pub end_date: String,
    pub week_length: u32,
    pub week_start: WeekStart,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub completed: bool,
    /// Most recent first
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Most recent first
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When the plan was created (RFC 3339)
    #[serde(rename = "date")]
    pub created_at: String,
}

impl SocialEntity for Plan {
    const COLLECTION: &'static str = collections::PLANS;
    const ENTITY: Entity = Entity::Plan;

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

fn default_week_length() -> u32 {
    7
}

/// Request body for creating a plan.
///
/// Missing string fields deserialize to empty strings so the validator
/// reports them field by field instead of the request failing to parse.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(
        function = crate::validation::iso8601_date,
        message = "Start date must be a valid Date"
    ))]
    pub start_date: String,
    #[serde(default)]
    #[validate(custom(
        function = crate::validation::iso8601_date,
        message = "End date must be a valid Date"
    ))]
    pub end_date: String,
    #[serde(default = "default_week_length")]
    pub week_length: u32,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub completed: bool,
}
