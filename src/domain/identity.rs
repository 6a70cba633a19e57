//! Identity domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_STUDENT, ROLE_WRITER};
use crate::errors::AppError;

/// Marketplace roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Writer,
    Student,
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_WRITER => Ok(Role::Writer),
            ROLE_STUDENT => Ok(Role::Student),
            other => Err(AppError::validation(format!("unknown role: {other}"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::Writer => write!(f, "{}", ROLE_WRITER),
            Role::Student => write!(f, "{}", ROLE_STUDENT),
        }
    }
}

/// The current authenticated actor's profile snapshot for the session.
///
/// At most one identity is active at a time; the role is fixed at creation
/// and the whole record is dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Identity {
    /// Create a new identity with an explicit display name
    pub fn new(id: String, email: String, name: String, role: Role) -> Self {
        Self {
            id,
            email,
            name,
            role,
        }
    }

    /// Create an identity whose display name is derived from the email's
    /// local part (the substring before `@`).
    pub fn from_email(id: String, email: String, role: Role) -> Self {
        let name = match email.split_once('@') {
            Some((local, _)) => local.to_string(),
            None => email.clone(),
        };
        Self::new(id, email, name, role)
    }
}

/// Login request payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email address
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Account password
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Dashboard role to sign in as
    pub role: Role,
}

/// Signup request payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// Account email address
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Account password
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Dashboard role to register as
    pub role: Role,
}
