//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the data catalog to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod dashboard_service;
mod review_service;
mod session_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use dashboard_service::{
    AdminOverview, DashboardService, Dashboards, StudentOverview, WriterOverview,
};
pub use review_service::{ApplicationReviewer, ReviewService};
pub use session_service::{IdProvider, SessionManager, SessionService, UuidIdProvider};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use dashboard_service::MockDashboardService;
#[cfg(any(test, feature = "test-utils"))]
pub use review_service::MockReviewService;
#[cfg(any(test, feature = "test-utils"))]
pub use session_service::{MockIdProvider, MockSessionService};
