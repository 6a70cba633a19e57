//! Stats command - Per-role dashboard overviews.

use crate::cli::args::StatsArgs;
use crate::config::Config;
use crate::domain::Role;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the stats command
pub async fn execute(
    args: StatsArgs,
    services: &dyn ServiceContainer,
    config: &Config,
) -> AppResult<()> {
    let dashboards = services.dashboards();

    match args.role {
        Role::Admin => {
            let overview = dashboards.admin_overview().await?;
            println!("Admin dashboard");
            println!("  pending applications: {}", overview.pending_applications);
            println!("  writers:              {}", overview.total_writers);
            println!("  projects:             {}", overview.total_projects);
            println!("  in progress:          {}", overview.active_projects);
        }
        Role::Student => {
            let student_id = args.id.unwrap_or_else(|| config.student_id.clone());
            let overview = dashboards.student_overview(&student_id).await?;
            println!("Student dashboard ({student_id})");
            println!("  active:    {}", overview.active.len());
            println!("  completed: {}", overview.completed.len());
            println!("  pending:   {}", overview.pending.len());
            for project in &overview.active {
                println!("    {} at {}%", project.title, project.progress);
            }
        }
        Role::Writer => {
            let writer_id = args.id.unwrap_or_else(|| config.writer_id.clone());
            let overview = dashboards.writer_overview(&writer_id).await?;
            println!("Writer dashboard ({writer_id})");
            println!("  earnings:           {}", overview.earnings);
            println!("  completed projects: {}", overview.completed_projects);
            println!("  rating:             {:.1}", overview.rating);
            println!("  in progress:        {}", overview.active_projects);
        }
    }

    Ok(())
}
