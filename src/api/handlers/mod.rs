//! HTTP request handlers.

pub mod auth_handler;
pub mod course_handler;
pub mod dashboard_handler;
pub mod lesson_handler;
pub mod profile_handler;

pub use auth_handler::auth_routes;
pub use course_handler::{course_member_routes, course_routes};
pub use dashboard_handler::dashboard_routes;
pub use lesson_handler::lesson_routes;
pub use profile_handler::profile_routes;
