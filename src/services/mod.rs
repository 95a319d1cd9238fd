// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod plan;
pub mod profile;
pub mod social;
pub mod user;

pub use activity::ActivityService;
pub use plan::PlanService;
pub use profile::ProfileService;
pub use user::UserService;
