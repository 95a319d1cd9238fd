// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration and login.

use crate::db::{collections, FirestoreDb};
use crate::error::{AppError, Entity, Result};
use crate::middleware::auth::create_jwt;
use crate::models::{LoginInput, RegisterInput, User};
use crate::validation;
use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use sha2::{Digest, Sha256};

/// User account service.
#[derive(Clone)]
pub struct UserService {
    db: FirestoreDb,
    jwt_signing_key: Vec<u8>,
}

impl UserService {
    pub fn new(db: FirestoreDb, jwt_signing_key: Vec<u8>) -> Self {
        Self {
            db,
            jwt_signing_key,
        }
    }

    /// Register a new account.
    pub async fn register(&self, input: RegisterInput) -> Result<User> {
        validation::validate(&input)?;

        let existing: Vec<User> = self
            .db
            .find_by_field(collections::USERS, "email", &input.email)
            .await?;
        if !existing.is_empty() {
            return Err(AppError::EmailExists);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        let user = User {
            id: uuid::Uuid::now_v7().to_string(),
            name: input.name,
            avatar: gravatar_url(&input.email),
            email: input.email,
            password_hash,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        self.db.set(collections::USERS, &user.id, &user).await?;
        tracing::info!(user = %user.id, "User registered");
        Ok(user)
    }

    /// Verify credentials and mint a session token.
    pub async fn login(&self, input: LoginInput) -> Result<String> {
        validation::validate(&input)?;

        let user: User = self
            .db
            .find_by_field(collections::USERS, "email", &input.email)
            .await?
            .into_iter()
            .next()
            .ok_or(AppError::EmailNotFound)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored hash unreadable: {}", e)))?;
        Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .map_err(|_| AppError::PasswordIncorrect)?;

        let token = create_jwt(&user.id, &self.jwt_signing_key)?;
        tracing::info!(user = %user.id, "User logged in");
        Ok(token)
    }

    /// The authenticated user's account.
    pub async fn current(&self, user_id: &str) -> Result<User> {
        self.db
            .get(collections::USERS, user_id)
            .await?
            .ok_or(AppError::NotFound(Entity::User))
    }
}

/// Gravatar URL for an email address.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm",
        hex::encode(digest)
    )
}
