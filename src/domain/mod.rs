//! Domain layer - Core business entities and logic
//!
//! Contains the entities mirrored from the store plus the pure
//! view-model derivations: catalog filtering, the enrollment access
//! gate, lesson navigation, and dashboard aggregation. Everything here
//! is a synchronous function of already-fetched snapshots; no I/O.

pub mod course;
pub mod dashboard;
pub mod enrollment;
pub mod navigation;
pub mod password;
pub mod profile;
pub mod progress;

pub use course::{
    filter_and_sort, Course, CourseDetailView, CourseFilter, CourseResponse, CourseSort, Lesson,
    LessonOverview,
};
pub use dashboard::{
    aggregate, recent_activity, summarize_course, ActivityEntry, CourseProgressSummary,
    DashboardStats, DashboardView, EnrolledCourseView,
};
pub use enrollment::{
    course_access, CourseAccess, Enrollment, EnrollmentResponse, EnrollmentStatus,
};
pub use navigation::{
    after_completion, ensure_actionable, lesson_view, locate, LessonRef, LessonView,
    NextDestination,
};
pub use password::Password;
pub use profile::{Profile, ProfileResponse, UpdateProfile};
pub use progress::{CompletionSet, Progress, ProgressResponse};
