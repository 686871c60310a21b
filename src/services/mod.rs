//! Application services layer - Use cases and business logic.
//!
//! Services fetch snapshots through the Unit of Work, hand them to the
//! pure view-model functions in the domain layer, and return the
//! derived views. They depend on abstractions (traits) for dependency
//! inversion and never hold state of their own.

mod auth_service;
mod catalog_service;
pub mod container;
mod dashboard_service;
mod enrollment_service;
mod profile_service;
mod progress_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use catalog_service::{Catalog, CatalogService};
pub use dashboard_service::{DashboardBuilder, DashboardService};
pub use enrollment_service::{Enroller, EnrollmentService};
pub use profile_service::{ProfileManager, ProfileService};
pub use progress_service::{ProgressService, ProgressTracker};

// Parallel execution utilities
pub use container::parallel;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
