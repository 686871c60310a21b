//! Course Platform API - An online-course web application backend
//!
//! This crate provides a clean architecture implementation of a course
//! platform: browsing the catalog, enrolling, viewing lessons, tracking
//! per-lesson progress, and managing a user profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities and the pure view-model derivations
//!   (catalog filtering, access gating, lesson navigation, dashboard
//!   aggregation)
//! - **services**: Application use cases orchestrating domain + stores
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Course, Enrollment, Lesson, Profile, Progress};
pub use errors::{AppError, AppResult};
