//! Role-gated route access.
//!
//! A pure decision function over the current identity and the requested
//! route. Callers must re-evaluate on every navigation; decisions are
//! never cached.

use serde::Serialize;

use crate::config::{DASHBOARD_PATH_SUFFIX, ROUTE_HOME, ROUTE_LOGIN, ROUTE_SIGNUP};
use crate::domain::{Identity, Role};

/// Navigable routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    /// Role-gated dashboard; the payload is the role required to enter
    Dashboard(Role),
    Unknown,
}

impl Route {
    /// Parse a path into a route. Anything unrecognized is `Unknown`,
    /// which the router sends back home.
    pub fn parse(path: &str) -> Self {
        match path {
            p if p == ROUTE_HOME => Route::Home,
            p if p == ROUTE_LOGIN => Route::Login,
            p if p == ROUTE_SIGNUP => Route::Signup,
            _ => {
                let mut segments = path.trim_matches('/').split('/');
                match (segments.next(), segments.next(), segments.next()) {
                    (Some(role), Some(suffix), None) if suffix == DASHBOARD_PATH_SUFFIX => {
                        match role.parse::<Role>() {
                            Ok(role) => Route::Dashboard(role),
                            Err(_) => Route::Unknown,
                        }
                    }
                    _ => Route::Unknown,
                }
            }
        }
    }

    /// The role required to enter this route, if it is protected
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Dashboard(role) => Some(*role),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Home | Route::Unknown => write!(f, "{}", ROUTE_HOME),
            Route::Login => write!(f, "{}", ROUTE_LOGIN),
            Route::Signup => write!(f, "{}", ROUTE_SIGNUP),
            Route::Dashboard(role) => write!(f, "/{role}/{DASHBOARD_PATH_SUFFIX}"),
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide whether the current identity may enter the requested route.
///
/// Public routes are always allowed. Dashboards require an identity with
/// the matching role: a missing identity redirects to login, a role
/// mismatch redirects home. Unknown routes also redirect home.
pub fn authorize(identity: Option<&Identity>, route: Route) -> Access {
    match route {
        Route::Home | Route::Login | Route::Signup => Access::Allow,
        Route::Unknown => Access::RedirectToHome,
        Route::Dashboard(required) => match identity {
            None => Access::RedirectToLogin,
            Some(identity) if identity.role == required => Access::Allow,
            Some(_) => Access::RedirectToHome,
        },
    }
}
