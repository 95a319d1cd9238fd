// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared like/comment operations for plans and activities.
//!
//! Both entity types carry identical embedded social lists, so the
//! operations here are generic over `SocialEntity`. Every
//! read-modify-write cycle runs inside a Firestore transaction; a
//! concurrent writer fails the commit instead of losing the update.
//!
//! New likes and comments are prepended (most recent first); removal
//! preserves the relative order of the remaining entries.

use crate::db::FirestoreDb;
use crate::error::{AppError, Entity, Result};
use crate::models::social::{Comment, CommentInput, Like, SocialEntity};
use crate::validation;

/// List all entities, newest first. An empty store yields an empty vec.
pub async fn list<E: SocialEntity>(db: &FirestoreDb) -> Result<Vec<E>> {
    db.list_newest_first(E::COLLECTION).await
}

/// Look up a single entity by ID.
pub async fn get_by_id<E: SocialEntity>(db: &FirestoreDb, id: &str) -> Result<E> {
    db.get(E::COLLECTION, id)
        .await?
        .ok_or(AppError::NotFound(E::ENTITY))
}

/// Permanently delete an entity owned by the requester.
pub async fn delete<E: SocialEntity>(db: &FirestoreDb, requester_id: &str, id: &str) -> Result<()> {
    let entity: E = get_by_id(db, id).await?;
    if entity.owner_id() != requester_id {
        return Err(AppError::NotAuthorized);
    }

    db.delete(E::COLLECTION, id).await?;
    tracing::info!(entity = E::ENTITY.noun(), id, user = requester_id, "Deleted");
    Ok(())
}

/// Record the requester's like on an entity.
pub async fn like<E: SocialEntity>(db: &FirestoreDb, requester_id: &str, id: &str) -> Result<E> {
    let requester = requester_id.to_string();
    let updated = db
        .mutate_in_transaction(E::COLLECTION, id, |entity: &mut E| {
            push_like(entity.likes_mut(), &requester, E::ENTITY)
        })
        .await?
        .ok_or(AppError::NotFound(E::ENTITY))?;

    tracing::debug!(entity = E::ENTITY.noun(), id, user = requester_id, "Liked");
    Ok(updated)
}

/// Withdraw the requester's like from an entity.
pub async fn unlike<E: SocialEntity>(db: &FirestoreDb, requester_id: &str, id: &str) -> Result<E> {
    let requester = requester_id.to_string();
    let updated = db
        .mutate_in_transaction(E::COLLECTION, id, |entity: &mut E| {
            remove_like(entity.likes_mut(), &requester, E::ENTITY)
        })
        .await?
        .ok_or(AppError::NotFound(E::ENTITY))?;

    tracing::debug!(entity = E::ENTITY.noun(), id, user = requester_id, "Unliked");
    Ok(updated)
}

/// Add a comment to an entity, snapshotting the author display fields.
pub async fn add_comment<E: SocialEntity>(
    db: &FirestoreDb,
    requester_id: &str,
    id: &str,
    input: CommentInput,
) -> Result<E> {
    validation::validate(&input)?;

    let comment = build_comment(requester_id, &input);
    let comment_id = comment.id.clone();

    let updated = db
        .mutate_in_transaction(E::COLLECTION, id, |entity: &mut E| {
            entity.comments_mut().insert(0, comment);
            Ok(())
        })
        .await?
        .ok_or(AppError::NotFound(E::ENTITY))?;

    tracing::debug!(
        entity = E::ENTITY.noun(),
        id,
        comment = %comment_id,
        user = requester_id,
        "Comment added"
    );
    Ok(updated)
}

/// Remove a comment from an entity by its ID.
///
/// With `owner_check` off (the historical behavior) any authenticated
/// caller may remove any comment.
pub async fn remove_comment<E: SocialEntity>(
    db: &FirestoreDb,
    requester_id: &str,
    id: &str,
    comment_id: &str,
    owner_check: bool,
) -> Result<E> {
    let requester = requester_id.to_string();
    let comment_id = comment_id.to_string();

    db.mutate_in_transaction(E::COLLECTION, id, move |entity: &mut E| {
        remove_comment_entry(entity.comments_mut(), &comment_id, &requester, owner_check)
    })
    .await?
    .ok_or(AppError::NotFound(E::ENTITY))
}

// ─── List Mutations ──────────────────────────────────────────────

/// Prepend a like for `user_id`, rejecting duplicates.
pub fn push_like(likes: &mut Vec<Like>, user_id: &str, entity: Entity) -> Result<()> {
    if likes.iter().any(|like| like.user_id == user_id) {
        return Err(AppError::AlreadyLiked(entity));
    }

    likes.insert(
        0,
        Like {
            user_id: user_id.to_string(),
        },
    );
    Ok(())
}

/// Remove the first like entry matching `user_id`.
pub fn remove_like(likes: &mut Vec<Like>, user_id: &str, entity: Entity) -> Result<()> {
    let Some(pos) = likes.iter().position(|like| like.user_id == user_id) else {
        return Err(AppError::NotLiked(entity));
    };

    likes.remove(pos);
    Ok(())
}

/// Build a comment from validated input.
///
/// Author display fields are snapshotted here and never re-joined from
/// the profile at read time.
pub fn build_comment(user_id: &str, input: &CommentInput) -> Comment {
    Comment {
        id: uuid::Uuid::now_v7().to_string(),
        user_id: user_id.to_string(),
        text: input.text.clone(),
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        avatar: input.avatar.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Remove a comment by ID, optionally requiring the requester to be its
/// author.
pub fn remove_comment_entry(
    comments: &mut Vec<Comment>,
    comment_id: &str,
    requester_id: &str,
    owner_check: bool,
) -> Result<()> {
    let Some(pos) = comments.iter().position(|c| c.id == comment_id) else {
        return Err(AppError::CommentNotFound);
    };

    if owner_check && comments[pos].user_id != requester_id {
        return Err(AppError::NotAuthorized);
    }

    comments.remove(pos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, user_id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            user_id: user_id.to_string(),
            text: "nice run".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("L".to_string()),
            avatar: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_push_like_prepends() {
        let mut likes = Vec::new();
        push_like(&mut likes, "u1", Entity::Plan).unwrap();
        push_like(&mut likes, "u2", Entity::Plan).unwrap();

        assert_eq!(likes.len(), 2);
        assert_eq!(likes[0].user_id, "u2");
        assert_eq!(likes[1].user_id, "u1");
    }

    #[test]
    fn test_second_like_by_same_user_rejected() {
        let mut likes = Vec::new();
        push_like(&mut likes, "u1", Entity::Plan).unwrap();

        let err = push_like(&mut likes, "u1", Entity::Plan).unwrap_err();
        assert!(matches!(err, AppError::AlreadyLiked(Entity::Plan)));
        assert_eq!(likes.len(), 1);
    }

    #[test]
    fn test_remove_like_preserves_order() {
        let mut likes = Vec::new();
        for user in ["u1", "u2", "u3"] {
            push_like(&mut likes, user, Entity::Activity).unwrap();
        }

        remove_like(&mut likes, "u2", Entity::Activity).unwrap();

        let remaining: Vec<&str> = likes.iter().map(|l| l.user_id.as_str()).collect();
        assert_eq!(remaining, ["u3", "u1"]);
    }

    #[test]
    fn test_unlike_without_like_rejected() {
        let mut likes = Vec::new();
        let err = remove_like(&mut likes, "u1", Entity::Plan).unwrap_err();
        assert!(matches!(err, AppError::NotLiked(Entity::Plan)));
    }

    #[test]
    fn test_build_comment_snapshots_author_fields() {
        let input = CommentInput {
            text: "great pace".to_string(),
            first_name: Some("Grace".to_string()),
            last_name: Some("H".to_string()),
            avatar: Some("https://example.com/a.png".to_string()),
        };

        let comment = build_comment("u7", &input);

        assert_eq!(comment.user_id, "u7");
        assert_eq!(comment.text, "great pace");
        assert_eq!(comment.first_name.as_deref(), Some("Grace"));
        assert!(!comment.id.is_empty());
    }

    #[test]
    fn test_remove_comment_entry_by_id() {
        let mut comments = vec![comment("c1", "u1"), comment("c2", "u2")];

        remove_comment_entry(&mut comments, "c1", "u2", false).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, "c2");

        let err = remove_comment_entry(&mut comments, "c1", "u2", false).unwrap_err();
        assert!(matches!(err, AppError::CommentNotFound));
    }

    #[test]
    fn test_remove_comment_owner_check() {
        let mut comments = vec![comment("c1", "u1")];

        // Policy on: only the author may remove.
        let err = remove_comment_entry(&mut comments, "c1", "u2", true).unwrap_err();
        assert!(matches!(err, AppError::NotAuthorized));
        assert_eq!(comments.len(), 1);

        remove_comment_entry(&mut comments, "c1", "u1", true).unwrap();
        assert!(comments.is_empty());
    }

    #[test]
    fn test_remove_comment_without_owner_check_allows_any_caller() {
        let mut comments = vec![comment("c1", "u1")];

        remove_comment_entry(&mut comments, "c1", "u2", false).unwrap();
        assert!(comments.is_empty());
    }
}
