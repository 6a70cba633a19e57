//! Applications command - Admin review of writer applications.

use crate::cli::args::{ApplicationsAction, ApplicationsArgs};
use crate::domain::WriterApplication;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the applications command
pub async fn execute(args: ApplicationsArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let review = services.review();

    match args.action {
        ApplicationsAction::List => {
            let applications = review.list_applications().await?;
            for application in &applications {
                print_row(application);
            }
        }
        ApplicationsAction::Approve { id } => {
            let application = review.approve(&id).await?;
            println!("Application {} approved", application.id);
            print_row(&application);
        }
        ApplicationsAction::Reject { id } => {
            let application = review.reject(&id).await?;
            println!("Application {} rejected", application.id);
            print_row(&application);
        }
    }

    Ok(())
}

fn print_row(application: &WriterApplication) {
    println!(
        "  [{}] {} <{}> - {} (applied {})",
        application.id,
        application.name,
        application.email,
        application.status,
        application.applied_date
    );
}
