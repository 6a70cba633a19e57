//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::domain::Role;

/// Scribemarket - role-gated marketplace core demo
#[derive(Parser, Debug)]
#[command(name = "scribemarket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed data file path (overrides the built-in dataset)
    #[arg(long, global = true, env = "SEED_PATH")]
    pub seed: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and show where the session may navigate
    Login(LoginArgs),

    /// Register and show where the session may navigate
    Signup(SignupArgs),

    /// Review writer applications
    Applications(ApplicationsArgs),

    /// List projects, optionally filtered by writer or student
    Projects(ProjectsArgs),

    /// Show a role dashboard overview
    Stats(StatsArgs),
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,

    /// Dashboard role to sign in as
    #[arg(short, long, value_enum)]
    pub role: Role,
}

/// Arguments for the signup command
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,

    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Dashboard role to register as
    #[arg(short, long, value_enum)]
    pub role: Role,
}

/// Arguments for the applications command
#[derive(Parser, Debug)]
pub struct ApplicationsArgs {
    #[command(subcommand)]
    pub action: ApplicationsAction,
}

/// Application review actions
#[derive(Subcommand, Debug)]
pub enum ApplicationsAction {
    /// List all writer applications
    List,
    /// Approve a pending application
    Approve {
        /// Application id
        id: String,
    },
    /// Reject a pending application
    Reject {
        /// Application id
        id: String,
    },
}

/// Arguments for the projects command
#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Only projects assigned to this writer
    #[arg(short, long, conflicts_with = "student")]
    pub writer: Option<String>,

    /// Only projects posted by this student
    #[arg(short, long)]
    pub student: Option<String>,
}

/// Arguments for the stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Dashboard to summarize
    #[arg(short, long, value_enum)]
    pub role: Role,

    /// Writer or student id (defaults come from the environment)
    #[arg(short, long)]
    pub id: Option<String>,
}
