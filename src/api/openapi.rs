//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, course_handler, dashboard_handler, lesson_handler, profile_handler,
};
use crate::domain::{
    ActivityEntry, CourseAccess, CourseDetailView, CourseProgressSummary, CourseResponse,
    CourseSort, DashboardStats, DashboardView, EnrolledCourseView, EnrollmentResponse,
    EnrollmentStatus, LessonOverview, LessonRef, LessonView, NextDestination, ProfileResponse,
    ProgressResponse, UpdateProfile,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Course Platform API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Platform API",
        version = "0.1.0",
        description = "An online-course platform API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://api.example.com", description = "Production server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Catalog endpoints
        course_handler::list_courses,
        course_handler::featured_courses,
        course_handler::get_course,
        course_handler::enroll,
        // Lesson endpoints
        lesson_handler::get_lesson,
        lesson_handler::complete_lesson,
        // User-scoped views
        dashboard_handler::dashboard,
        profile_handler::get_profile,
        profile_handler::update_profile,
    ),
    components(
        schemas(
            // Catalog types
            CourseSort,
            CourseResponse,
            CourseAccess,
            LessonOverview,
            CourseDetailView,
            // Enrollment and progress types
            EnrollmentStatus,
            EnrollmentResponse,
            ProgressResponse,
            LessonRef,
            LessonView,
            NextDestination,
            lesson_handler::CompleteLessonResponse,
            // Dashboard types
            CourseProgressSummary,
            DashboardStats,
            ActivityEntry,
            EnrolledCourseView,
            DashboardView,
            // Profile types
            ProfileResponse,
            UpdateProfile,
            profile_handler::UpdateProfileRequest,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Courses", description = "Catalog browsing and enrollment"),
        (name = "Lessons", description = "Lesson viewing and completion"),
        (name = "Dashboard", description = "Progress overview"),
        (name = "Profile", description = "Profile management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
