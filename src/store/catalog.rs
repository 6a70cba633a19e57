//! In-memory catalog implementing the repository traits.
//!
//! Records live in insertion-ordered maps keyed by id, so queries are
//! stable and updates replace a single entry without disturbing the rest.
//! Only writer applications are mutable; writers and projects are fixed
//! for the lifetime of the process.

use std::sync::RwLock;

use indexmap::IndexMap;

use super::repository::{ApplicationRepository, ProjectRepository, WriterRepository};
use super::seed::SeedData;
use crate::config::Config;
use crate::domain::{Project, Writer, WriterApplication};
use crate::errors::{AppError, AppResult};

/// Seeded in-memory data catalog
pub struct InMemoryCatalog {
    applications: RwLock<IndexMap<String, WriterApplication>>,
    writers: IndexMap<String, Writer>,
    projects: IndexMap<String, Project>,
}

impl InMemoryCatalog {
    /// Build a catalog from parsed seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let applications = seed
            .applications
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();
        let writers = seed.writers.into_iter().map(|w| (w.id.clone(), w)).collect();
        let projects = seed
            .projects
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        Self {
            applications: RwLock::new(applications),
            writers,
            projects,
        }
    }

    /// Load the catalog configured by the environment: the seed file if
    /// one is set, the built-in dataset otherwise.
    pub fn load(config: &Config) -> AppResult<Self> {
        let seed = match &config.seed_path {
            Some(path) => {
                tracing::info!(path = %path, "Loading seed data from file");
                SeedData::from_file(path)?
            }
            None => SeedData::builtin()?,
        };
        Ok(Self::from_seed(seed))
    }

    fn read_applications(&self) -> AppResult<Vec<WriterApplication>> {
        let guard = self
            .applications
            .read()
            .map_err(|_| AppError::internal("application store lock poisoned"))?;
        Ok(guard.values().cloned().collect())
    }
}

impl ApplicationRepository for InMemoryCatalog {
    fn list(&self) -> AppResult<Vec<WriterApplication>> {
        self.read_applications()
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<WriterApplication>> {
        let guard = self
            .applications
            .read()
            .map_err(|_| AppError::internal("application store lock poisoned"))?;
        Ok(guard.get(id).cloned())
    }

    fn save(&self, application: WriterApplication) -> AppResult<WriterApplication> {
        let mut guard = self
            .applications
            .write()
            .map_err(|_| AppError::internal("application store lock poisoned"))?;
        // Applications are seeded, never created here; an unknown id is a bug.
        if !guard.contains_key(&application.id) {
            return Err(AppError::NotFound);
        }
        guard.insert(application.id.clone(), application.clone());
        Ok(application)
    }
}

impl WriterRepository for InMemoryCatalog {
    fn list(&self) -> AppResult<Vec<Writer>> {
        Ok(self.writers.values().cloned().collect())
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<Writer>> {
        Ok(self.writers.get(id).cloned())
    }
}

impl ProjectRepository for InMemoryCatalog {
    fn list(&self) -> AppResult<Vec<Project>> {
        Ok(self.projects.values().cloned().collect())
    }

    fn find_by_writer(&self, writer_id: &str) -> AppResult<Vec<Project>> {
        Ok(self
            .projects
            .values()
            .filter(|p| p.writer_id.as_deref() == Some(writer_id))
            .cloned()
            .collect())
    }

    fn find_by_student(&self, student_id: &str) -> AppResult<Vec<Project>> {
        Ok(self
            .projects
            .values()
            .filter(|p| p.student_id == student_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApplicationStatus;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_seed(SeedData::builtin().unwrap())
    }

    #[test]
    fn projects_by_student_preserve_insertion_order() {
        let catalog = catalog();
        let projects = ProjectRepository::find_by_student(&catalog, "s1").unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);
    }

    #[test]
    fn projects_by_writer_preserve_insertion_order() {
        let catalog = catalog();
        let projects = ProjectRepository::find_by_writer(&catalog, "w1").unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn queries_are_total() {
        let catalog = catalog();
        assert!(ProjectRepository::find_by_student(&catalog, "s99")
            .unwrap()
            .is_empty());
        assert!(ProjectRepository::find_by_writer(&catalog, "w99")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn save_replaces_exactly_one_record() {
        let catalog = catalog();
        let mut first = ApplicationRepository::find_by_id(&catalog, "1")
            .unwrap()
            .unwrap();
        let before = ApplicationRepository::list(&catalog).unwrap();

        first.status = ApplicationStatus::Approved;
        ApplicationRepository::save(&catalog, first.clone()).unwrap();

        let after = ApplicationRepository::list(&catalog).unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], first);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn save_of_unknown_id_is_not_found() {
        let catalog = catalog();
        let mut unknown = ApplicationRepository::find_by_id(&catalog, "1")
            .unwrap()
            .unwrap();
        unknown.id = "999".to_string();
        let err = ApplicationRepository::save(&catalog, unknown).unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
