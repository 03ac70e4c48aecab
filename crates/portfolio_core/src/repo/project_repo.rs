//! Project repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insert/update/remove/list over the backing project list.
//! - Assign ids at insertion time.
//!
//! # Invariants
//! - A new id is `max(existing) + 1` (or `1` for an empty store), so ids
//!   stay unique even after removals.
//! - Unknown ids are reported through return values, never as errors.
//! - `list_projects` returns an owned snapshot.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    /// Appends a project built from `draft` and returns its assigned id.
    fn insert_project(&mut self, draft: ProjectDraft) -> ProjectId;
    /// Merges `patch` into the project with `id`. Returns `false` when absent.
    fn update_project(&mut self, id: ProjectId, patch: &ProjectPatch) -> bool;
    /// Removes the project with `id`, returning it when present.
    fn remove_project(&mut self, id: ProjectId) -> Option<Project>;
    fn get_project(&self, id: ProjectId) -> Option<&Project>;
    /// Borrowed view in store order.
    fn projects(&self) -> &[Project];
    /// Owned snapshot in store order.
    fn list_projects(&self) -> Vec<Project> {
        self.projects().to_vec()
    }
}

/// Vec-backed repository; the only storage this crate ships.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `seed` drafts, ids `1..=n`.
    pub fn with_seed(seed: impl IntoIterator<Item = ProjectDraft>) -> Self {
        let mut repo = Self::new();
        for draft in seed {
            repo.insert_project(draft);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn next_id(&self) -> ProjectId {
        self.projects
            .iter()
            .map(|project| project.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn position(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn insert_project(&mut self, draft: ProjectDraft) -> ProjectId {
        let id = self.next_id();
        self.projects.push(draft.into_project(id));
        id
    }

    fn update_project(&mut self, id: ProjectId, patch: &ProjectPatch) -> bool {
        match self.position(id) {
            Some(index) => {
                self.projects[index].apply_patch(patch);
                true
            }
            None => false,
        }
    }

    fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        let index = self.position(id)?;
        Some(self.projects.remove(index))
    }

    fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryProjectRepository, ProjectRepository};
    use crate::model::project::ProjectDraft;

    #[test]
    fn ids_start_at_one() {
        let mut repo = InMemoryProjectRepository::new();
        assert_eq!(repo.insert_project(ProjectDraft::new("a", "b")), 1);
        assert_eq!(repo.insert_project(ProjectDraft::new("c", "d")), 2);
    }

    #[test]
    fn id_after_removing_middle_entry_does_not_collide() {
        let mut repo = InMemoryProjectRepository::with_seed([
            ProjectDraft::new("a", "a"),
            ProjectDraft::new("b", "b"),
            ProjectDraft::new("c", "c"),
        ]);
        repo.remove_project(2).expect("project 2 exists");

        let id = repo.insert_project(ProjectDraft::new("d", "d"));
        assert_eq!(id, 4);
        let ids: Vec<_> = repo.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn unknown_id_is_reported_not_raised() {
        let mut repo = InMemoryProjectRepository::with_seed([ProjectDraft::new("a", "a")]);
        assert!(!repo.update_project(9, &Default::default()));
        assert!(repo.remove_project(9).is_none());
        assert_eq!(repo.len(), 1);
    }
}
