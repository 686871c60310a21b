//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure. Collaborators are always passed in explicitly; there
//! are no ambient singletons.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthService, CatalogService, DashboardService, EnrollmentService, ProfileService,
    ProgressService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Course catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Enrollment service
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Lesson progress service
    pub progress_service: Arc<dyn ProgressService>,
    /// Dashboard service
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Profile service
    pub profile_service: Arc<dyn ProfileService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    ///
    /// This is the recommended way to create AppState as it wires every
    /// service through the shared Unit of Work.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            catalog_service: container.catalog(),
            enrollment_service: container.enrollments(),
            progress_service: container.progress(),
            dashboard_service: container.dashboard(),
            profile_service: container.profiles(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Intended for tests that substitute mock services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        enrollment_service: Arc<dyn EnrollmentService>,
        progress_service: Arc<dyn ProgressService>,
        dashboard_service: Arc<dyn DashboardService>,
        profile_service: Arc<dyn ProfileService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            enrollment_service,
            progress_service,
            dashboard_service,
            profile_service,
            database,
        }
    }
}
