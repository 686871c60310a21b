//! Unit of Work - centralized repository access.
//!
//! Services receive a single `UnitOfWork` handle instead of individual
//! repositories, so collaborators are always passed explicitly and can
//! be swapped for mocks in tests. Cross-record consistency (one
//! enrollment per course, one progress record per lesson) is enforced by
//! the store's unique indexes rather than application-level
//! transactions, matching the upsert semantics of the repositories.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CourseRepository, CourseStore, EnrollmentRepository, EnrollmentStore, ProfileRepository,
    ProfileStore, ProgressRepository, ProgressStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get course repository (catalog provider)
    fn courses(&self) -> Arc<dyn CourseRepository>;

    /// Get enrollment repository (enrollment store)
    fn enrollments(&self) -> Arc<dyn EnrollmentRepository>;

    /// Get progress repository (progress store)
    fn progress(&self) -> Arc<dyn ProgressRepository>;

    /// Get profile repository
    fn profiles(&self) -> Arc<dyn ProfileRepository>;
}

/// Concrete implementation of UnitOfWork over one database connection
pub struct Persistence {
    course_repo: Arc<CourseStore>,
    enrollment_repo: Arc<EnrollmentStore>,
    progress_repo: Arc<ProgressStore>,
    profile_repo: Arc<ProfileStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            course_repo: Arc::new(CourseStore::new(db.clone())),
            enrollment_repo: Arc::new(EnrollmentStore::new(db.clone())),
            progress_repo: Arc::new(ProgressStore::new(db.clone())),
            profile_repo: Arc::new(ProfileStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.course_repo.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repo.clone()
    }

    fn progress(&self) -> Arc<dyn ProgressRepository> {
        self.progress_repo.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repo.clone()
    }
}
