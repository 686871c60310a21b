//! Dashboard aggregation: per-course completion summaries and the
//! account-wide totals derived from them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{LESSON_DURATION_MINUTES, RECENT_ACTIVITY_LIMIT};

use super::course::{CourseResponse, Lesson};
use super::enrollment::{Enrollment, EnrollmentStatus};
use super::progress::Progress;

/// Completion summary for one enrolled course.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseProgressSummary {
    pub completed_lessons: u64,
    pub total_lessons: u64,
    /// Rounded completion percentage in 0..=100; 0 for courses without
    /// lessons
    pub percentage: u8,
    /// Most recent completion, falling back to the enrollment date when
    /// nothing is completed yet
    pub last_activity_date: DateTime<Utc>,
    pub estimated_minutes: u64,
}

/// Summarize a user's progress in one course.
///
/// `records` may span other courses; only records whose lesson belongs to
/// this course's lesson list are counted.
pub fn summarize_course(
    lessons: &[Lesson],
    enrollment: &Enrollment,
    records: &[Progress],
) -> CourseProgressSummary {
    let completed: Vec<&Progress> = records
        .iter()
        .filter(|p| p.completed && lessons.iter().any(|l| l.id == p.lesson_id))
        .collect();

    let completed_lessons = completed.len() as u64;
    let total_lessons = lessons.len() as u64;

    let last_activity_date = completed
        .iter()
        .filter_map(|p| p.completed_at)
        .max()
        .unwrap_or(enrollment.created_at);

    CourseProgressSummary {
        completed_lessons,
        total_lessons,
        percentage: percentage(completed_lessons, total_lessons),
        last_activity_date,
        estimated_minutes: total_lessons * LESSON_DURATION_MINUTES,
    }
}

/// Rounded completion percentage; courses without lessons count as 0
/// rather than dividing by zero.
fn percentage(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Account-wide totals across all enrolled courses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_courses: u64,
    pub completed_lessons: u64,
    /// Rounded mean of per-course percentages; 0 with no enrollments
    pub average_progress: u8,
    /// Time-spent estimate derived from completed lessons
    pub minutes_spent: u64,
}

/// Fold per-course summaries into the global stats.
pub fn aggregate(summaries: &[CourseProgressSummary]) -> DashboardStats {
    let total_courses = summaries.len() as u64;
    let completed_lessons: u64 = summaries.iter().map(|s| s.completed_lessons).sum();

    let average_progress = if summaries.is_empty() {
        0
    } else {
        let sum: u64 = summaries.iter().map(|s| s.percentage as u64).sum();
        (sum as f64 / summaries.len() as f64).round() as u8
    };

    DashboardStats {
        total_courses,
        completed_lessons,
        average_progress,
        minutes_spent: completed_lessons * LESSON_DURATION_MINUTES,
    }
}

/// One recently-completed lesson in the activity feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityEntry {
    pub lesson_id: Uuid,
    pub lesson_title: String,
    pub course_id: Uuid,
    pub course_title: String,
    pub completed_at: DateTime<Utc>,
}

/// Order activity newest-first and keep the feed short.
pub fn recent_activity(mut entries: Vec<ActivityEntry>) -> Vec<ActivityEntry> {
    entries.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    entries.truncate(RECENT_ACTIVITY_LIMIT);
    entries
}

/// One enrolled course as shown on the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrolledCourseView {
    pub course: CourseResponse,
    pub enrollment_status: EnrollmentStatus,
    pub progress: CourseProgressSummary,
}

/// The dashboard view model.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub courses: Vec<EnrolledCourseView>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn lesson(course_id: Uuid, order_index: i32) -> Lesson {
        Lesson {
            id: Uuid::new_v4(),
            course_id,
            title: format!("Lesson {}", order_index + 1),
            content: "body".to_string(),
            order_index,
        }
    }

    fn enrollment(course_id: Uuid) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id,
            status: EnrollmentStatus::Active,
            created_at: Utc::now() - Duration::days(7),
        }
    }

    fn completed_record(user_id: Uuid, lesson_id: Uuid, at: DateTime<Utc>) -> Progress {
        Progress {
            id: Uuid::new_v4(),
            user_id,
            lesson_id,
            completed: true,
            completed_at: Some(at),
            created_at: at,
        }
    }

    #[test]
    fn percentage_stays_within_bounds() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn course_without_lessons_summarizes_to_zero() {
        let course_id = Uuid::new_v4();
        let summary = summarize_course(&[], &enrollment(course_id), &[]);

        assert_eq!(summary.total_lessons, 0);
        assert_eq!(summary.completed_lessons, 0);
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn summary_only_counts_this_courses_lessons() {
        let course_id = Uuid::new_v4();
        let lessons = vec![lesson(course_id, 0), lesson(course_id, 1)];
        let enr = enrollment(course_id);
        let now = Utc::now();

        let records = vec![
            completed_record(enr.user_id, lessons[0].id, now),
            // Progress in some other course must not leak in
            completed_record(enr.user_id, Uuid::new_v4(), now),
        ];

        let summary = summarize_course(&lessons, &enr, &records);
        assert_eq!(summary.completed_lessons, 1);
        assert_eq!(summary.total_lessons, 2);
        assert_eq!(summary.percentage, 50);
    }

    #[test]
    fn last_activity_prefers_completions_over_enrollment_date() {
        let course_id = Uuid::new_v4();
        let lessons = vec![lesson(course_id, 0), lesson(course_id, 1)];
        let enr = enrollment(course_id);

        // No completions: fall back to the enrollment date
        let summary = summarize_course(&lessons, &enr, &[]);
        assert_eq!(summary.last_activity_date, enr.created_at);

        // With completions: the most recent completed_at wins
        let older = Utc::now() - Duration::days(2);
        let newer = Utc::now() - Duration::days(1);
        let records = vec![
            completed_record(enr.user_id, lessons[0].id, older),
            completed_record(enr.user_id, lessons[1].id, newer),
        ];
        let summary = summarize_course(&lessons, &enr, &records);
        assert_eq!(summary.last_activity_date, newer);
    }

    #[test]
    fn aggregate_with_no_enrollments_is_all_zeros() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_courses, 0);
        assert_eq!(stats.completed_lessons, 0);
        assert_eq!(stats.average_progress, 0);
    }

    #[test]
    fn single_enrollment_average_equals_its_percentage() {
        let course_id = Uuid::new_v4();
        let lessons = vec![lesson(course_id, 0), lesson(course_id, 1)];
        let enr = enrollment(course_id);
        let records = vec![completed_record(enr.user_id, lessons[0].id, Utc::now())];

        let summary = summarize_course(&lessons, &enr, &records);
        let stats = aggregate(&[summary.clone()]);
        assert_eq!(stats.average_progress, summary.percentage);
        assert_eq!(stats.total_courses, 1);
    }

    #[test]
    fn full_and_untouched_courses_average_to_fifty() {
        let done_course = Uuid::new_v4();
        let done_lessons = vec![lesson(done_course, 0), lesson(done_course, 1)];
        let done_enr = enrollment(done_course);
        let records: Vec<Progress> = done_lessons
            .iter()
            .map(|l| completed_record(done_enr.user_id, l.id, Utc::now()))
            .collect();

        let fresh_course = Uuid::new_v4();
        let fresh_lessons = vec![lesson(fresh_course, 0)];
        let fresh_enr = enrollment(fresh_course);

        let summaries = vec![
            summarize_course(&done_lessons, &done_enr, &records),
            summarize_course(&fresh_lessons, &fresh_enr, &[]),
        ];

        assert_eq!(summaries[0].percentage, 100);
        assert_eq!(summaries[1].percentage, 0);
        assert_eq!(aggregate(&summaries).average_progress, 50);
    }

    #[test]
    fn recent_activity_is_newest_first_and_capped() {
        let base = Utc::now();
        let entries: Vec<ActivityEntry> = (0..8)
            .map(|i| ActivityEntry {
                lesson_id: Uuid::new_v4(),
                lesson_title: format!("Lesson {}", i),
                course_id: Uuid::new_v4(),
                course_title: "Course".to_string(),
                completed_at: base - Duration::hours(i),
            })
            .collect();

        let feed = recent_activity(entries);
        assert_eq!(feed.len(), RECENT_ACTIVITY_LIMIT);
        for pair in feed.windows(2) {
            assert!(pair[0].completed_at >= pair[1].completed_at);
        }
        assert_eq!(feed[0].lesson_title, "Lesson 0");
    }
}
