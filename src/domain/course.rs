//! Course and lesson domain entities, catalog filtering, and view types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::LESSON_DURATION_MINUTES;

use super::enrollment::CourseAccess;
use super::progress::CompletionSet;

/// Course domain entity.
///
/// Courses are instructor-authored content; this application reads them
/// and never mutates anything besides the denormalized enrollment count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    /// Non-negative one-time price
    pub price: f64,
    pub category: Option<String>,
    pub published: bool,
    /// Denormalized count maintained by the enrollment store,
    /// used by the `popular` sort
    pub enrollment_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Lesson domain entity.
///
/// Lessons are displayed in `order_index` order, never creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    /// Markdown body; an empty string marks a lesson that has not been
    /// authored yet
    pub content: String,
    pub order_index: i32,
}

impl Lesson {
    /// A lesson without content cannot be completed or opened as current.
    pub fn is_in_development(&self) -> bool {
        self.content.is_empty()
    }
}

/// Catalog sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourseSort {
    #[default]
    Latest,
    PriceAsc,
    PriceDesc,
    Popular,
}

/// Catalog filter parameters
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    /// Case-insensitive substring match on title
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    pub sort: CourseSort,
}

/// Produce the ordered subset of published courses matching the filter.
///
/// Sorting is stable, so courses that compare equal keep their input order.
pub fn filter_and_sort(courses: Vec<Course>, filter: &CourseFilter) -> Vec<Course> {
    let search = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut result: Vec<Course> = courses
        .into_iter()
        .filter(|c| c.published)
        .filter(|c| match &search {
            Some(term) => c.title.to_lowercase().contains(term),
            None => true,
        })
        .filter(|c| match &filter.category {
            Some(category) => c.category.as_deref() == Some(category.as_str()),
            None => true,
        })
        .collect();

    match filter.sort {
        CourseSort::Latest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        CourseSort::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        CourseSort::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        CourseSort::Popular => {
            result.sort_by(|a, b| b.enrollment_count.cmp(&a.enrollment_count))
        }
    }

    result
}

/// Course response (safe subset for clients)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: Uuid,
    #[schema(example = "React Fundamentals")]
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    #[schema(example = 99.0)]
    pub price: f64,
    #[schema(example = "development")]
    pub category: Option<String>,
    pub enrollment_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail_url: course.thumbnail_url,
            price: course.price,
            category: course.category,
            enrollment_count: course.enrollment_count,
            created_at: course.created_at,
        }
    }
}

/// One lesson row in the course detail view. Content is never included
/// here; it is served by the lesson endpoint once access is granted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LessonOverview {
    pub id: Uuid,
    pub title: String,
    pub order_index: i32,
    /// False for lessons still in development
    pub available: bool,
    pub completed: bool,
    pub duration_minutes: u64,
}

/// Course detail view model: metadata, gating decision, and the ordered
/// lesson list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseDetailView {
    pub course: CourseResponse,
    pub access: CourseAccess,
    pub total_lessons: u64,
    pub estimated_minutes: u64,
    pub lessons: Vec<LessonOverview>,
}

impl CourseDetailView {
    /// Assemble the detail view from loaded snapshots. Completion flags
    /// are only meaningful (and only computed) in viewer mode.
    pub fn assemble(
        course: Course,
        lessons: Vec<Lesson>,
        access: CourseAccess,
        completed: &CompletionSet,
    ) -> Self {
        let total_lessons = lessons.len() as u64;
        let lessons = lessons
            .into_iter()
            .map(|lesson| LessonOverview {
                available: !lesson.is_in_development(),
                completed: access == CourseAccess::Viewer && completed.contains(lesson.id),
                id: lesson.id,
                title: lesson.title,
                order_index: lesson.order_index,
                duration_minutes: LESSON_DURATION_MINUTES,
            })
            .collect();

        Self {
            course: CourseResponse::from(course),
            access,
            total_lessons,
            estimated_minutes: total_lessons * LESSON_DURATION_MINUTES,
            lessons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, price: f64, published: bool) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            thumbnail_url: None,
            price,
            category: None,
            published,
            enrollment_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn no_filters_returns_exactly_the_published_subset() {
        let mut a = course("Rust Basics", 10.0, true);
        let b = course("Hidden Draft", 20.0, false);
        let mut c = course("Advanced Rust", 30.0, true);
        // Distinct timestamps so the latest ordering is deterministic
        a.created_at = Utc::now() - chrono::Duration::days(2);
        c.created_at = Utc::now() - chrono::Duration::days(1);

        let result = filter_and_sort(vec![a.clone(), b, c.clone()], &CourseFilter::default());

        assert_eq!(result.len(), 2);
        // Latest first
        assert_eq!(result[0].id, c.id);
        assert_eq!(result[1].id, a.id);
    }

    #[test]
    fn search_is_case_insensitive_and_complete() {
        let a = course("Intro to REACT", 0.0, true);
        let b = course("Vue Basics", 0.0, true);
        let c = course("react hooks deep dive", 0.0, true);

        let filter = CourseFilter {
            search: Some("React".to_string()),
            ..Default::default()
        };
        let result = filter_and_sort(vec![a, b, c], &filter);

        assert_eq!(result.len(), 2);
        for found in &result {
            assert!(found.title.to_lowercase().contains("react"));
        }
    }

    #[test]
    fn category_filter_is_exact() {
        let mut a = course("A", 0.0, true);
        a.category = Some("development".to_string());
        let mut b = course("B", 0.0, true);
        b.category = Some("design".to_string());
        let c = course("C", 0.0, true);

        let filter = CourseFilter {
            category: Some("development".to_string()),
            ..Default::default()
        };
        let result = filter_and_sort(vec![a.clone(), b, c], &filter);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, a.id);
    }

    #[test]
    fn price_sorts_in_both_directions() {
        let a = course("A", 30.0, true);
        let b = course("B", 10.0, true);
        let c = course("C", 20.0, true);

        let asc = filter_and_sort(
            vec![a.clone(), b.clone(), c.clone()],
            &CourseFilter {
                sort: CourseSort::PriceAsc,
                ..Default::default()
            },
        );
        assert_eq!(
            asc.iter().map(|x| x.price).collect::<Vec<_>>(),
            vec![10.0, 20.0, 30.0]
        );

        let desc = filter_and_sort(
            vec![a, b, c],
            &CourseFilter {
                sort: CourseSort::PriceDesc,
                ..Default::default()
            },
        );
        assert_eq!(
            desc.iter().map(|x| x.price).collect::<Vec<_>>(),
            vec![30.0, 20.0, 10.0]
        );
    }

    #[test]
    fn popular_sorts_by_enrollment_count_with_stable_ties() {
        let mut a = course("A", 0.0, true);
        a.enrollment_count = 5;
        let mut b = course("B", 0.0, true);
        b.enrollment_count = 9;
        let mut c = course("C", 0.0, true);
        c.enrollment_count = 5;

        let result = filter_and_sort(
            vec![a.clone(), b.clone(), c.clone()],
            &CourseFilter {
                sort: CourseSort::Popular,
                ..Default::default()
            },
        );

        assert_eq!(result[0].id, b.id);
        // A and C tie on count; input order is preserved
        assert_eq!(result[1].id, a.id);
        assert_eq!(result[2].id, c.id);
    }

    #[test]
    fn empty_result_set_is_valid() {
        let filter = CourseFilter {
            search: Some("nonexistent".to_string()),
            ..Default::default()
        };
        let result = filter_and_sort(vec![course("A", 0.0, true)], &filter);
        assert!(result.is_empty());
    }

    #[test]
    fn lesson_without_content_is_in_development() {
        let lesson = Lesson {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            title: "State and Events".to_string(),
            content: String::new(),
            order_index: 2,
        };
        assert!(lesson.is_in_development());
    }
}
