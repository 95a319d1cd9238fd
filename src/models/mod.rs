// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod plan;
pub mod profile;
pub mod social;
pub mod user;

pub use activity::{Activity, ActivityInput, Sport, TimeOfDay};
pub use plan::{Plan, PlanInput, WeekStart};
pub use profile::{Profile, ProfileInput};
pub use social::{Comment, CommentInput, Like, SocialEntity};
pub use user::{LoginInput, RegisterInput, User};
