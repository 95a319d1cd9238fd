// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile business logic.

use crate::db::{collections, FirestoreDb};
use crate::error::{AppError, Entity, Result};
use crate::models::{Profile, ProfileInput};
use crate::validation;

/// Profile lookup and maintenance.
///
/// Profiles are keyed by the owning user's ID, so there is at most one
/// per account.
#[derive(Clone)]
pub struct ProfileService {
    db: FirestoreDb,
}

impl ProfileService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// All profiles, newest first.
    pub async fn list(&self) -> Result<Vec<Profile>> {
        self.db.list_newest_first(collections::PROFILES).await
    }

    /// The profile belonging to a user.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Profile> {
        self.db
            .get(collections::PROFILES, user_id)
            .await?
            .ok_or(AppError::NotFound(Entity::Profile))
    }

    /// Look up a profile by its unique handle.
    pub async fn get_by_handle(&self, handle: &str) -> Result<Profile> {
        self.db
            .find_by_field::<Profile>(collections::PROFILES, "handle", handle)
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::NotFound(Entity::Profile))
    }

    /// Create or replace the caller's profile.
    ///
    /// The creation timestamp survives updates.
    pub async fn upsert(&self, user_id: &str, input: ProfileInput) -> Result<Profile> {
        validation::validate(&input)?;

        // Handle uniqueness across users; the caller may keep their own.
        let taken = self
            .db
            .find_by_field::<Profile>(collections::PROFILES, "handle", &input.handle)
            .await?
            .into_iter()
            .any(|p| p.user_id != user_id);
        if taken {
            return Err(AppError::HandleExists);
        }

        let existing: Option<Profile> = self.db.get(collections::PROFILES, user_id).await?;
        let created_at = existing
            .map(|p| p.created_at)
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let profile = Profile {
            user_id: user_id.to_string(),
            first_name: input.first_name,
            last_name: input.last_name,
            handle: input.handle,
            avatar: input.avatar,
            strava_id: input.strava_id,
            created_at,
        };

        self.db
            .set(collections::PROFILES, user_id, &profile)
            .await?;
        tracing::info!(user = user_id, handle = %profile.handle, "Profile saved");
        Ok(profile)
    }

    /// Delete the caller's profile and account in one transaction.
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.db
            .delete_all_in_transaction(&[
                (collections::PROFILES, user_id),
                (collections::USERS, user_id),
            ])
            .await?;
        tracing::info!(user = user_id, "Profile and account deleted");
        Ok(())
    }
}
