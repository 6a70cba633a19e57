//! Projects command - Project queries over the catalog.

use std::sync::Arc;

use crate::cli::args::ProjectsArgs;
use crate::domain::Project;
use crate::errors::AppResult;
use crate::store::{InMemoryCatalog, ProjectRepository};

/// Execute the projects command
pub async fn execute(args: ProjectsArgs, catalog: Arc<InMemoryCatalog>) -> AppResult<()> {
    // InMemoryCatalog implements several repository traits; qualify the
    // project one explicitly.
    let projects: Vec<Project> = if let Some(writer_id) = args.writer {
        ProjectRepository::find_by_writer(catalog.as_ref(), &writer_id)?
    } else if let Some(student_id) = args.student {
        ProjectRepository::find_by_student(catalog.as_ref(), &student_id)?
    } else {
        ProjectRepository::list(catalog.as_ref())?
    };

    if projects.is_empty() {
        println!("No matching projects");
        return Ok(());
    }

    for project in &projects {
        let assignee = project.writer_name.as_deref().unwrap_or("unassigned");
        println!(
            "  [{}] {} - {} ({}%, due {}, {})",
            project.id, project.title, project.status, project.progress, project.deadline, assignee
        );
    }

    Ok(())
}
