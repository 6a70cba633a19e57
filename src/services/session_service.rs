//! Session service - Handles the mock authentication state machine.
//!
//! Authentication is simulated by design: any non-empty email/password
//! pair succeeds and no credential store is consulted. A real deployment
//! replaces this service with one backed by an authentication
//! collaborator; the trait is the seam.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Identity, LoginRequest, SignupRequest};
use crate::errors::{AppError, AppResult};

/// Source of session identity ids.
///
/// Injected so tests can supply deterministic ids.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdProvider: Send + Sync {
    /// Produce a fresh unique id
    fn generate(&self) -> String;
}

/// Production id provider backed by random UUIDs
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Session service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Sign in; on success the new identity becomes the active session
    async fn login(&self, request: LoginRequest) -> AppResult<Identity>;

    /// Register; on success the new identity becomes the active session
    async fn signup(&self, request: SignupRequest) -> AppResult<Identity>;

    /// Clear the active session; idempotent
    async fn logout(&self);

    /// Snapshot of the active identity, if any
    async fn current(&self) -> Option<Identity>;
}

/// Concrete implementation holding the single process-wide session.
pub struct SessionManager {
    identity: RwLock<Option<Identity>>,
    ids: Arc<dyn IdProvider>,
}

impl SessionManager {
    /// Create a new session manager with no active identity
    pub fn new(ids: Arc<dyn IdProvider>) -> Self {
        Self {
            identity: RwLock::new(None),
            ids,
        }
    }

    fn set_identity(&self, identity: Identity) -> AppResult<Identity> {
        let mut guard = self
            .identity
            .write()
            .map_err(|_| AppError::internal("session lock poisoned"))?;
        *guard = Some(identity.clone());
        Ok(identity)
    }
}

#[async_trait]
impl SessionService for SessionManager {
    async fn login(&self, request: LoginRequest) -> AppResult<Identity> {
        // Mock auth: the only check is that both fields are present.
        // Failure leaves any existing session untouched.
        if request.validate().is_err() {
            tracing::debug!("Login rejected: missing credentials");
            return Err(AppError::InvalidCredentials);
        }

        let identity =
            Identity::from_email(self.ids.generate(), request.email, request.role);
        tracing::info!(role = %identity.role, "Session established");
        self.set_identity(identity)
    }

    async fn signup(&self, request: SignupRequest) -> AppResult<Identity> {
        if request.validate().is_err() {
            tracing::debug!("Signup rejected: missing fields");
            return Err(AppError::InvalidCredentials);
        }

        let identity = Identity::new(
            self.ids.generate(),
            request.email,
            request.name,
            request.role,
        );
        tracing::info!(role = %identity.role, "Session established via signup");
        self.set_identity(identity)
    }

    async fn logout(&self) {
        // Unconditional; a second logout is a no-op.
        match self.identity.write() {
            Ok(mut guard) => {
                if guard.take().is_some() {
                    tracing::info!("Session cleared");
                }
            }
            Err(poisoned) => {
                poisoned.into_inner().take();
            }
        }
    }

    async fn current(&self) -> Option<Identity> {
        match self.identity.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }
}
