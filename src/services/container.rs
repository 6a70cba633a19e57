//! Service Container - Centralized service access.
//!
//! Provides a single place to wire repositories into services and hands
//! out trait objects so consumers depend on abstractions only.

use std::sync::Arc;

use super::{
    ApplicationReviewer, DashboardService, Dashboards, ReviewService, SessionManager,
    SessionService, UuidIdProvider,
};
use crate::store::InMemoryCatalog;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get session service
    fn session(&self) -> Arc<dyn SessionService>;

    /// Get application review service
    fn review(&self) -> Arc<dyn ReviewService>;

    /// Get dashboard statistics service
    fn dashboards(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    session_service: Arc<dyn SessionService>,
    review_service: Arc<dyn ReviewService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        session_service: Arc<dyn SessionService>,
        review_service: Arc<dyn ReviewService>,
        dashboard_service: Arc<dyn DashboardService>,
    ) -> Self {
        Self {
            session_service,
            review_service,
            dashboard_service,
        }
    }

    /// Wire the full container from a loaded catalog.
    pub fn from_catalog(catalog: Arc<InMemoryCatalog>) -> Self {
        let session_service = Arc::new(SessionManager::new(Arc::new(UuidIdProvider)));
        let review_service = Arc::new(ApplicationReviewer::new(catalog.clone()));
        let dashboard_service = Arc::new(Dashboards::new(
            catalog.clone(),
            catalog.clone(),
            catalog,
        ));

        Self {
            session_service,
            review_service,
            dashboard_service,
        }
    }
}

impl ServiceContainer for Services {
    fn session(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn review(&self) -> Arc<dyn ReviewService> {
        self.review_service.clone()
    }

    fn dashboards(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}
