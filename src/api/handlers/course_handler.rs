//! Course catalog handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::middleware::{CurrentUser, OptionalUser};
use crate::api::AppState;
use crate::domain::{CourseDetailView, CourseFilter, CourseResponse, CourseSort, EnrollmentResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Catalog listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseListQuery {
    /// Case-insensitive title search
    pub search: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
    /// Sort key: latest (default), price_asc, price_desc, popular
    pub sort: Option<CourseSort>,
}

impl From<CourseListQuery> for CourseFilter {
    fn from(query: CourseListQuery) -> Self {
        Self {
            search: query.search,
            category: query.category,
            sort: query.sort.unwrap_or_default(),
        }
    }
}

/// Create public course routes (no session required)
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/featured", get(featured_courses))
        .route("/:course_id", get(get_course))
}

/// Create course routes that require a session
pub fn course_member_routes() -> Router<AppState> {
    Router::new().route("/:course_id/enroll", post(enroll))
}

/// List published courses with optional search/filter/sort
#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Published courses matching the filter", body = Vec<CourseResponse>)
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.catalog_service.list_courses(query.into()).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// The newest published courses, for the landing page
#[utoipa::path(
    get,
    path = "/courses/featured",
    tag = "Courses",
    responses(
        (status = 200, description = "Featured courses", body = Vec<CourseResponse>)
    )
)]
pub async fn featured_courses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.catalog_service.featured_courses().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Course detail with lesson list, gated by session and enrollment
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = "Courses",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course detail view", body = CourseDetailView),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    OptionalUser(user): OptionalUser,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> AppResult<Json<CourseDetailView>> {
    let view = state
        .catalog_service
        .course_detail(course_id, user.map(|u| u.id))
        .await?;

    Ok(Json(view))
}

/// Enroll the current user in a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/enroll",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrollment created (or already present)", body = EnrollmentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course not open for enrollment")
    )
)]
pub async fn enroll(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> AppResult<Created<EnrollmentResponse>> {
    let enrollment = state
        .enrollment_service
        .enroll(current_user.id, course_id)
        .await?;

    Ok(Created(EnrollmentResponse::from(enrollment)))
}
