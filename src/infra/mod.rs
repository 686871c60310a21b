//! Infrastructure layer - External systems integration
//!
//! This module handles the store the application delegates persistence
//! to: database connection, repositories, and the Unit of Work that
//! hands them to the service layer.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CourseRepository, CourseStore, EnrollmentRepository, EnrollmentStore, ProfileRepository,
    ProfileStore, ProgressRepository, ProgressStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCourseRepository, MockEnrollmentRepository, MockProfileRepository, MockProgressRepository,
};
