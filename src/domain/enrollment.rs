//! Enrollment entity and the course access gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Enrollment lifecycle states.
///
/// Enrollments are created `Active` and may transition to `Completed` or
/// `Cancelled` by externally-triggered updates; they are never deleted.
/// Finishing every lesson does NOT flip the status automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Cancelled,
}

impl From<&str> for EnrollmentStatus {
    fn from(s: &str) -> Self {
        match s {
            "completed" => EnrollmentStatus::Completed,
            "cancelled" => EnrollmentStatus::Cancelled,
            _ => EnrollmentStatus::Active,
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Completed => write!(f, "completed"),
            EnrollmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Enrollment domain entity.
///
/// At most one enrollment exists per (user, course); the store's unique
/// index enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Whether this enrollment grants access to lesson content.
    /// Cancelled enrollments behave like no enrollment at all.
    pub fn grants_access(&self) -> bool {
        matches!(
            self.status,
            EnrollmentStatus::Active | EnrollmentStatus::Completed
        )
    }
}

/// View mode of the course detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseAccess {
    /// Anonymous visitor: metadata and lesson titles only
    Preview,
    /// Logged in but not enrolled: metadata plus the enroll action
    Enroll,
    /// Active or completed enrollment: full lesson access
    Viewer,
}

/// Decide the view mode from the current session and enrollment snapshot.
/// Pure decision only; the enroll write itself lives in the store.
pub fn course_access(has_session: bool, enrollment: Option<&Enrollment>) -> CourseAccess {
    if !has_session {
        return CourseAccess::Preview;
    }
    match enrollment {
        Some(e) if e.grants_access() => CourseAccess::Viewer,
        _ => CourseAccess::Enroll,
    }
}

/// Enrollment response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            course_id: enrollment.course_id,
            status: enrollment.status,
            created_at: enrollment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn anonymous_visitors_get_preview_mode() {
        let enrolled = enrollment(EnrollmentStatus::Active);
        // Even with a stale enrollment record, no session means preview
        assert_eq!(course_access(false, Some(&enrolled)), CourseAccess::Preview);
        assert_eq!(course_access(false, None), CourseAccess::Preview);
    }

    #[test]
    fn session_without_enrollment_gets_enroll_mode() {
        assert_eq!(course_access(true, None), CourseAccess::Enroll);
    }

    #[test]
    fn cancelled_enrollment_behaves_like_none() {
        let cancelled = enrollment(EnrollmentStatus::Cancelled);
        assert_eq!(course_access(true, Some(&cancelled)), CourseAccess::Enroll);
    }

    #[test]
    fn active_and_completed_enrollments_get_viewer_mode() {
        let active = enrollment(EnrollmentStatus::Active);
        let completed = enrollment(EnrollmentStatus::Completed);
        assert_eq!(course_access(true, Some(&active)), CourseAccess::Viewer);
        assert_eq!(course_access(true, Some(&completed)), CourseAccess::Viewer);
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(EnrollmentStatus::from("active"), EnrollmentStatus::Active);
        assert_eq!(
            EnrollmentStatus::from("completed"),
            EnrollmentStatus::Completed
        );
        assert_eq!(
            EnrollmentStatus::from("cancelled"),
            EnrollmentStatus::Cancelled
        );
        assert_eq!(EnrollmentStatus::Active.to_string(), "active");
    }
}
