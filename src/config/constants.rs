//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Platform administrator role
pub const ROLE_ADMIN: &str = "admin";

/// Academic writer role
pub const ROLE_WRITER: &str = "writer";

/// Student (client) role
pub const ROLE_STUDENT: &str = "student";

// =============================================================================
// Routes
// =============================================================================

/// Landing page path
pub const ROUTE_HOME: &str = "/";

/// Login page path
pub const ROUTE_LOGIN: &str = "/login";

/// Signup page path
pub const ROUTE_SIGNUP: &str = "/signup";

/// Path suffix shared by all role dashboards (`/{role}/dashboard`)
pub const DASHBOARD_PATH_SUFFIX: &str = "dashboard";

// =============================================================================
// Demo session defaults
// =============================================================================

/// Seed dataset student used by the student dashboard demo
pub const DEFAULT_STUDENT_ID: &str = "s1";

/// Seed dataset writer used by the writer dashboard demo
pub const DEFAULT_WRITER_ID: &str = "w1";

// =============================================================================
// Validation
// =============================================================================

/// Maximum project progress percentage
pub const PROGRESS_COMPLETE: u8 = 100;

/// Maximum rating on the five-star scale
pub const RATING_MAX: f32 = 5.0;
