//! Lesson viewing and completion handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{LessonView, NextDestination, ProgressResponse};
use crate::errors::AppResult;

/// Response for the mark-complete action
#[derive(Debug, Serialize, ToSchema)]
pub struct CompleteLessonResponse {
    pub progress: ProgressResponse,
    /// Where the client should navigate next
    pub next: NextDestination,
}

/// Create lesson routes (nested under /courses, session required)
pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/:course_id/lessons/:lesson_id", get(get_lesson))
        .route("/:course_id/lessons/:lesson_id/complete", post(complete_lesson))
}

/// Lesson content with navigation context
#[utoipa::path(
    get,
    path = "/courses/{course_id}/lessons/{lesson_id}",
    tag = "Lessons",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("lesson_id" = Uuid, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson view", body = LessonView),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not enrolled in this course"),
        (status = 404, description = "Course or lesson not found")
    )
)]
pub async fn get_lesson(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((course_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<LessonView>> {
    let view = state
        .progress_service
        .lesson_view(current_user.id, course_id, lesson_id)
        .await?;

    Ok(Json(view))
}

/// Mark a lesson complete
#[utoipa::path(
    post,
    path = "/courses/{course_id}/lessons/{lesson_id}/complete",
    tag = "Lessons",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("lesson_id" = Uuid, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson marked complete", body = CompleteLessonResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not enrolled in this course"),
        (status = 404, description = "Course or lesson not found"),
        (status = 409, description = "Lesson is still in development")
    )
)]
pub async fn complete_lesson(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path((course_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<CompleteLessonResponse>> {
    let (progress, next) = state
        .progress_service
        .complete_lesson(current_user.id, course_id, lesson_id)
        .await?;

    Ok(Json(CompleteLessonResponse {
        progress: ProgressResponse::from(progress),
        next,
    }))
}
