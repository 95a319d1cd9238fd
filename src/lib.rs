// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paceline: training-plan tracking API
//!
//! This crate provides the backend API for training plans, scheduled
//! activities, and their social features (likes and comments).

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validation;

use config::Config;
use db::FirestoreDb;
use services::{ActivityService, PlanService, ProfileService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub plans: PlanService,
    pub activities: ActivityService,
    pub profiles: ProfileService,
    pub users: UserService,
}

impl AppState {
    /// Wire up services over a database connection.
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        let plans = PlanService::new(db.clone(), config.comment_delete_owner_check);
        let activities = ActivityService::new(db.clone(), config.comment_delete_owner_check);
        let profiles = ProfileService::new(db.clone());
        let users = UserService::new(db.clone(), config.jwt_signing_key.clone());

        Self {
            config,
            db,
            plans,
            activities,
            profiles,
            users,
        }
    }
}
