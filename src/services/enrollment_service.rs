//! Enrollment service - the enroll use case.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Enrollment;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Enroll the user in a course.
    ///
    /// Idempotent: re-enrolling returns the existing record unchanged.
    async fn enroll(&self, user_id: Uuid, course_id: Uuid) -> AppResult<Enrollment>;
}

/// Concrete implementation of EnrollmentService using Unit of Work.
pub struct Enroller<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Enroller<U> {
    /// Create new enrollment service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EnrollmentService for Enroller<U> {
    async fn enroll(&self, user_id: Uuid, course_id: Uuid) -> AppResult<Enrollment> {
        // The course must exist; the store's create-if-absent handles
        // the rest, including concurrent double-enrolls.
        let course = self
            .uow
            .courses()
            .get_with_lessons(course_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !course.0.published {
            return Err(AppError::invalid_operation(
                "Course is not open for enrollment",
            ));
        }

        self.uow
            .enrollments()
            .create_if_absent(user_id, course_id)
            .await
    }
}
