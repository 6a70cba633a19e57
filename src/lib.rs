//! Scribemarket - Role-gated marketplace core
//!
//! Domain core of a demo marketplace connecting students with academic
//! writers. Authentication is intentionally mocked and all data is
//! seeded in memory; the repository and service traits mark the seams
//! where a real backend would plug in.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **access**: Role-gated route decisions
//! - **store**: Seeded in-memory data catalog
//! - **services**: Application use cases and business logic
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Sign in and see which dashboards are reachable
//! cargo run -- login -e student@example.com -p secret -r student
//!
//! # Review writer applications
//! cargo run -- applications approve 1
//!
//! # Per-role dashboard numbers
//! cargo run -- stats -r admin
//! ```

pub mod access;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

// Re-export commonly used types at crate root
pub use access::{authorize, Access, Route};
pub use config::Config;
pub use domain::{Identity, Project, Role, Writer, WriterApplication};
pub use errors::{AppError, AppResult};
pub use store::InMemoryCatalog;
