// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Embedded like/comment lists shared by plans and activities.

use crate::error::Entity;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

/// Per-user like marker embedded in a plan or activity document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    /// Liking user's ID
    #[serde(rename = "user")]
    pub user_id: String,
}

/// Comment embedded in a plan or activity document.
///
/// Author display fields are snapshotted at write time. Renaming a user
/// does not retroactively update past comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Commenting user's ID
    #[serde(rename = "user")]
    pub user_id: String,
    pub text: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    /// When the comment was written (RFC 3339)
    #[serde(rename = "date")]
    pub created_at: String,
}

/// Request body for adding a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Text field is required"))]
    pub text: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
}

/// A document type carrying embedded like and comment lists.
///
/// Plans and activities share identical social semantics; the generic
/// operations in `services::social` are written against this trait.
pub trait SocialEntity:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Firestore collection holding this entity.
    const COLLECTION: &'static str;
    /// Entity kind used in error keys and messages.
    const ENTITY: Entity;

    fn id(&self) -> &str;
    fn owner_id(&self) -> &str;
    fn likes(&self) -> &[Like];
    fn likes_mut(&mut self) -> &mut Vec<Like>;
    fn comments(&self) -> &[Comment];
    fn comments_mut(&mut self) -> &mut Vec<Comment>;
}
