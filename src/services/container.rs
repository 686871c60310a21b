//! Service Container - centralized service access.
//!
//! Depends on service traits, not implementations, so handlers and
//! tests can swap in alternatives. Also hosts the small parallel-join
//! helpers the snapshot-fetching services use.

use std::future::Future;
use std::sync::Arc;

use super::{
    AuthService, CatalogService, DashboardService, EnrollmentService, ProfileService,
    ProgressService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get enrollment service
    fn enrollments(&self) -> Arc<dyn EnrollmentService>;

    /// Get progress service
    fn progress(&self) -> Arc<dyn ProgressService>;

    /// Get dashboard service
    fn dashboard(&self) -> Arc<dyn DashboardService>;

    /// Get profile service
    fn profiles(&self) -> Arc<dyn ProfileService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    enrollment_service: Arc<dyn EnrollmentService>,
    progress_service: Arc<dyn ProgressService>,
    dashboard_service: Arc<dyn DashboardService>,
    profile_service: Arc<dyn ProfileService>,
}

impl Services {
    /// Create service container from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            Authenticator, Catalog, DashboardBuilder, Enroller, ProfileManager, ProgressTracker,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            catalog_service: Arc::new(Catalog::new(uow.clone())),
            enrollment_service: Arc::new(Enroller::new(uow.clone())),
            progress_service: Arc::new(ProgressTracker::new(uow.clone())),
            dashboard_service: Arc::new(DashboardBuilder::new(uow.clone())),
            profile_service: Arc::new(ProfileManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }

    fn progress(&self) -> Arc<dyn ProgressService> {
        self.progress_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }
}

/// Parallel execution utilities for running independent snapshot
/// fetches concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently; if either fails the error is
    /// returned immediately.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join_all() {
        let futures: Vec<_> = (0..5).map(|i| async move { Ok(i) as AppResult<i32> }).collect();
        let results = parallel::join_all(futures).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_parallel_join_all_propagates_errors() {
        use crate::errors::AppError;

        let futures = vec![
            Box::pin(async { Ok(1) }) as std::pin::Pin<Box<dyn Future<Output = AppResult<i32>>>>,
            Box::pin(async { Err(AppError::NotFound) }),
        ];
        let result = parallel::join_all(futures).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
