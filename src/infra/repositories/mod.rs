//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each trait mirrors one of the collaborator contracts the view-model
//! services consume.

mod course_repository;
mod enrollment_repository;
pub(crate) mod entities;
mod profile_repository;
mod progress_repository;

pub use course_repository::{CourseRepository, CourseStore};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use progress_repository::{ProgressRepository, ProgressStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use progress_repository::MockProgressRepository;
