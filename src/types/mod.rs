//! Shared types used across API layers.

mod response;

pub use response::{ApiResponse, Created};
