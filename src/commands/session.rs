//! Session commands - Mock login/signup walkthrough.
//!
//! Establishes a session, then runs the route gate for each dashboard to
//! show where the new identity may navigate.

use crate::access::{authorize, Access, Route};
use crate::cli::args::{LoginArgs, SignupArgs};
use crate::domain::{Identity, LoginRequest, Role, SignupRequest};
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the login command
pub async fn execute_login(args: LoginArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let identity = services
        .session()
        .login(LoginRequest {
            email: args.email,
            password: args.password,
            role: args.role,
        })
        .await?;

    report(&identity);
    Ok(())
}

/// Execute the signup command
pub async fn execute_signup(args: SignupArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let identity = services
        .session()
        .signup(SignupRequest {
            email: args.email,
            password: args.password,
            name: args.name,
            role: args.role,
        })
        .await?;

    report(&identity);
    Ok(())
}

fn report(identity: &Identity) {
    println!(
        "Signed in as {} <{}> ({})",
        identity.name, identity.email, identity.role
    );

    for role in [Role::Admin, Role::Writer, Role::Student] {
        let route = Route::Dashboard(role);
        let decision = authorize(Some(identity), route);
        let outcome = match decision {
            Access::Allow => "allow".to_string(),
            Access::RedirectToLogin => format!("redirect to {}", Route::Login),
            Access::RedirectToHome => format!("redirect to {}", Route::Home),
        };
        println!("  {route} -> {outcome}");
    }
}
