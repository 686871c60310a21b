//! Lesson navigation: locating a lesson within its course order,
//! adjacent-lesson links, and the completion guard.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

use super::course::Lesson;
use super::progress::CompletionSet;

/// Lightweight reference to an adjacent lesson
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonRef {
    pub id: Uuid,
    pub title: String,
}

impl From<&Lesson> for LessonRef {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title.clone(),
        }
    }
}

/// Lesson view model: the lesson itself plus its position and
/// neighbours within the course order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonView {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    /// Markdown body; empty while the lesson is in development
    pub content: String,
    /// 1-based position, for "Lesson N of M" display
    pub position: usize,
    pub total: usize,
    pub previous: Option<LessonRef>,
    pub next: Option<LessonRef>,
    pub is_in_development: bool,
    pub is_completed: bool,
}

/// Where the client should go after completing a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum NextDestination {
    /// Continue to the next lesson
    Lesson(Uuid),
    /// Last lesson finished; return to the course page
    Course(Uuid),
}

/// Position of the target lesson in the course's display order.
///
/// Fails with `NotFound` when the id is absent from the loaded list.
pub fn locate(lessons: &[Lesson], lesson_id: Uuid) -> AppResult<usize> {
    lessons
        .iter()
        .position(|l| l.id == lesson_id)
        .ok_or(AppError::NotFound)
}

/// Build the navigation view for one lesson of an ordered course.
pub fn lesson_view(
    lessons: &[Lesson],
    lesson_id: Uuid,
    completed: &CompletionSet,
) -> AppResult<LessonView> {
    let index = locate(lessons, lesson_id)?;
    let lesson = &lessons[index];

    Ok(LessonView {
        id: lesson.id,
        course_id: lesson.course_id,
        title: lesson.title.clone(),
        content: lesson.content.clone(),
        position: index + 1,
        total: lessons.len(),
        previous: index.checked_sub(1).map(|i| LessonRef::from(&lessons[i])),
        next: lessons.get(index + 1).map(LessonRef::from),
        is_in_development: lesson.is_in_development(),
        is_completed: completed.contains(lesson.id),
    })
}

/// Guard for the mark-complete action: in-development lessons are
/// non-actionable.
pub fn ensure_actionable(lesson: &Lesson) -> AppResult<()> {
    if lesson.is_in_development() {
        return Err(AppError::invalid_operation(
            "Lesson is still in development and cannot be completed",
        ));
    }
    Ok(())
}

/// Navigation target after completing the lesson at `index`: the next
/// lesson when one exists, otherwise back to the course detail view.
/// This never touches the enrollment status.
pub fn after_completion(lessons: &[Lesson], index: usize) -> NextDestination {
    match lessons.get(index + 1) {
        Some(next) => NextDestination::Lesson(next.id),
        None => NextDestination::Course(lessons[index].course_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::progress::Progress;
    use chrono::Utc;

    fn lesson(course_id: Uuid, title: &str, content: &str, order_index: i32) -> Lesson {
        Lesson {
            id: Uuid::new_v4(),
            course_id,
            title: title.to_string(),
            content: content.to_string(),
            order_index,
        }
    }

    fn fixture() -> (Uuid, Vec<Lesson>) {
        let course_id = Uuid::new_v4();
        let lessons = vec![
            lesson(course_id, "L1", "x", 0),
            lesson(course_id, "L2", "y", 1),
            lesson(course_id, "L3", "", 2),
        ];
        (course_id, lessons)
    }

    fn completed(ids: &[Uuid]) -> CompletionSet {
        let records: Vec<Progress> = ids
            .iter()
            .map(|&lesson_id| Progress {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                lesson_id,
                completed: true,
                completed_at: Some(Utc::now()),
                created_at: Utc::now(),
            })
            .collect();
        CompletionSet::from_records(&records)
    }

    #[test]
    fn locate_fails_for_unknown_lesson() {
        let (_, lessons) = fixture();
        let result = locate(&lessons, Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn boundaries_have_no_neighbours() {
        let (_, lessons) = fixture();
        let none = CompletionSet::default();

        let first = lesson_view(&lessons, lessons[0].id, &none).unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.as_ref().unwrap().id, lessons[1].id);
        assert_eq!(first.position, 1);
        assert_eq!(first.total, 3);

        let last = lesson_view(&lessons, lessons[2].id, &none).unwrap();
        assert_eq!(last.previous.as_ref().unwrap().id, lessons[1].id);
        assert!(last.next.is_none());
    }

    #[test]
    fn empty_content_marks_lesson_in_development() {
        let (_, lessons) = fixture();
        let view = lesson_view(&lessons, lessons[2].id, &CompletionSet::default()).unwrap();
        assert!(view.is_in_development);

        assert!(ensure_actionable(&lessons[2]).is_err());
        assert!(ensure_actionable(&lessons[0]).is_ok());
    }

    #[test]
    fn completing_moves_to_next_lesson_then_course() {
        let (course_id, lessons) = fixture();

        // Completing L1 navigates to L2
        assert_eq!(
            after_completion(&lessons, 0),
            NextDestination::Lesson(lessons[1].id)
        );
        // Completing the final lesson returns to the course
        assert_eq!(
            after_completion(&lessons, 2),
            NextDestination::Course(course_id)
        );
    }

    #[test]
    fn walkthrough_with_in_development_tail() {
        let (_, lessons) = fixture();
        let none = CompletionSet::default();

        // No progress yet: L3 is flagged in development
        let l3 = lesson_view(&lessons, lessons[2].id, &none).unwrap();
        assert!(l3.is_in_development);

        // Completing L1 navigates to L2
        let index = locate(&lessons, lessons[0].id).unwrap();
        assert!(ensure_actionable(&lessons[index]).is_ok());
        assert_eq!(
            after_completion(&lessons, index),
            NextDestination::Lesson(lessons[1].id)
        );

        // Completing L2 then attempting L3 fails the guard
        let index = locate(&lessons, lessons[1].id).unwrap();
        assert!(ensure_actionable(&lessons[index]).is_ok());
        let result = ensure_actionable(&lessons[2]);
        assert!(matches!(result, Err(AppError::InvalidOperation(_))));
    }

    #[test]
    fn completion_flag_reflects_progress_records() {
        let (_, lessons) = fixture();
        let set = completed(&[lessons[0].id]);

        let view = lesson_view(&lessons, lessons[0].id, &set).unwrap();
        assert!(view.is_completed);

        let view = lesson_view(&lessons, lessons[1].id, &set).unwrap();
        assert!(!view.is_completed);
    }
}
