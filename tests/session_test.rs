//! Session service unit tests.

use std::sync::Arc;

use scribemarket::domain::{LoginRequest, Role, SignupRequest};
use scribemarket::errors::AppError;
use scribemarket::services::{MockIdProvider, SessionManager, SessionService};

fn manager_with_fixed_id(id: &str) -> SessionManager {
    let mut ids = MockIdProvider::new();
    let id = id.to_string();
    ids.expect_generate().returning(move || id.clone());
    SessionManager::new(Arc::new(ids))
}

fn login_request(email: &str, password: &str, role: Role) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

#[tokio::test]
async fn test_login_succeeds_with_non_empty_credentials() {
    let session = manager_with_fixed_id("session-1");

    let identity = session
        .login(login_request("alex.turner@example.com", "secret", Role::Student))
        .await
        .unwrap();

    assert_eq!(identity.id, "session-1");
    assert_eq!(identity.role, Role::Student);
    assert_eq!(identity.name, "alex.turner");
    assert_eq!(session.current().await, Some(identity));
}

#[tokio::test]
async fn test_login_name_falls_back_to_whole_email() {
    let session = manager_with_fixed_id("session-1");

    let identity = session
        .login(login_request("no-at-sign", "secret", Role::Writer))
        .await
        .unwrap();

    assert_eq!(identity.name, "no-at-sign");
}

#[tokio::test]
async fn test_login_fails_on_empty_email() {
    let session = manager_with_fixed_id("session-1");

    let result = session.login(login_request("", "x", Role::Admin)).await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    assert_eq!(session.current().await, None);
}

#[tokio::test]
async fn test_login_fails_on_empty_password() {
    let session = manager_with_fixed_id("session-1");

    let result = session.login(login_request("x", "", Role::Admin)).await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    assert_eq!(session.current().await, None);
}

#[tokio::test]
async fn test_failed_login_leaves_existing_session_untouched() {
    let session = manager_with_fixed_id("session-1");

    let identity = session
        .login(login_request("admin@example.com", "secret", Role::Admin))
        .await
        .unwrap();
    let result = session.login(login_request("", "", Role::Student)).await;

    assert!(result.is_err());
    assert_eq!(session.current().await, Some(identity));
}

#[tokio::test]
async fn test_signup_uses_given_name() {
    let session = manager_with_fixed_id("session-2");

    let identity = session
        .signup(SignupRequest {
            email: "jess@example.com".to_string(),
            password: "secret".to_string(),
            name: "Jessica Lee".to_string(),
            role: Role::Student,
        })
        .await
        .unwrap();

    assert_eq!(identity.name, "Jessica Lee");
    assert_eq!(session.current().await, Some(identity));
}

#[tokio::test]
async fn test_signup_fails_on_missing_name() {
    let session = manager_with_fixed_id("session-2");

    let result = session
        .signup(SignupRequest {
            email: "jess@example.com".to_string(),
            password: "secret".to_string(),
            name: String::new(),
            role: Role::Student,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    assert_eq!(session.current().await, None);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let session = manager_with_fixed_id("session-3");

    session
        .login(login_request("writer@example.com", "secret", Role::Writer))
        .await
        .unwrap();

    session.logout().await;
    assert_eq!(session.current().await, None);

    // A second logout with no active session is a no-op
    session.logout().await;
    assert_eq!(session.current().await, None);
}
