// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile stored in Firestore, keyed by the owning user's ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning user's ID (also the document ID)
    #[serde(rename = "user")]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique human-chosen identifier, 4-40 chars, no whitespace
    pub handle: String,
    pub avatar: Option<String>,
    /// Linked Strava athlete ID
    pub strava_id: Option<String>,
    /// When the profile was created (RFC 3339)
    #[serde(rename = "date")]
    pub created_at: String,
}

/// Request body for creating or updating the caller's profile.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    #[validate(custom(function = crate::validation::profile_handle))]
    pub handle: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last Name (or initial) is required"))]
    pub last_name: String,
    pub avatar: Option<String>,
    pub strava_id: Option<String>,
}
