//! Dashboard service - joins enrollments, courses, and progress into
//! the dashboard view model.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    aggregate, recent_activity, summarize_course, ActivityEntry, Course, CourseResponse,
    DashboardView, Enrollment, EnrolledCourseView, Lesson,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

use super::parallel;

/// Dashboard service trait for dependency injection.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Build the user's dashboard from the latest snapshots
    async fn dashboard(&self, user_id: Uuid) -> AppResult<DashboardView>;
}

/// Concrete implementation of DashboardService using Unit of Work.
pub struct DashboardBuilder<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DashboardBuilder<U> {
    /// Create new dashboard service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardBuilder<U> {
    async fn dashboard(&self, user_id: Uuid) -> AppResult<DashboardView> {
        // Cancelled enrollments don't appear on the dashboard
        let enrollments: Vec<Enrollment> = self
            .uow
            .enrollments()
            .list_for_user(user_id)
            .await?
            .into_iter()
            .filter(Enrollment::grants_access)
            .collect();

        // Course snapshots must be loaded before the progress join; the
        // fetches themselves are independent and run concurrently.
        let courses = self.uow.courses();
        let loaded = parallel::join_all(
            enrollments
                .iter()
                .map(|e| courses.get_with_lessons(e.course_id))
                .collect(),
        )
        .await?;

        let mut entries: Vec<(Enrollment, Course, Vec<Lesson>)> = Vec::new();
        for (enrollment, loaded) in enrollments.into_iter().zip(loaded) {
            match loaded {
                Some((course, lessons)) => entries.push((enrollment, course, lessons)),
                None => {
                    tracing::warn!(
                        course_id = %enrollment.course_id,
                        "Enrollment references a course that no longer loads"
                    );
                }
            }
        }

        // One progress query across every enrolled course's lessons
        let all_lesson_ids: Vec<Uuid> = entries
            .iter()
            .flat_map(|(_, _, lessons)| lessons.iter().map(|l| l.id))
            .collect();
        let records = self
            .uow
            .progress()
            .list_for_lessons(user_id, all_lesson_ids)
            .await?;

        // Lesson lookup for the activity feed
        let lesson_titles: HashMap<Uuid, (String, Uuid, String)> = entries
            .iter()
            .flat_map(|(_, course, lessons)| {
                lessons.iter().map(|l| {
                    (
                        l.id,
                        (l.title.clone(), course.id, course.title.clone()),
                    )
                })
            })
            .collect();

        let mut summaries = Vec::with_capacity(entries.len());
        let mut course_views = Vec::with_capacity(entries.len());
        for (enrollment, course, lessons) in entries {
            let summary = summarize_course(&lessons, &enrollment, &records);
            summaries.push(summary.clone());
            course_views.push(EnrolledCourseView {
                course: CourseResponse::from(course),
                enrollment_status: enrollment.status,
                progress: summary,
            });
        }

        let activity = records
            .iter()
            .filter(|p| p.completed)
            .filter_map(|p| {
                let completed_at = p.completed_at?;
                let (lesson_title, course_id, course_title) = lesson_titles.get(&p.lesson_id)?;
                Some(ActivityEntry {
                    lesson_id: p.lesson_id,
                    lesson_title: lesson_title.clone(),
                    course_id: *course_id,
                    course_title: course_title.clone(),
                    completed_at,
                })
            })
            .collect();

        Ok(DashboardView {
            stats: aggregate(&summaries),
            courses: course_views,
            recent_activity: recent_activity(activity),
        })
    }
}
