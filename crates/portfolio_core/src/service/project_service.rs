//! Project store use-case service.
//!
//! # Responsibility
//! - Provide the add/update/remove/list/render/filter entry points.
//! - Redraw the card container and notify the user after every mutation.
//!
//! # Invariants
//! - The repository is only mutated through this service.
//! - Update/remove on an unknown id is a silent no-op: no redraw, no
//!   notification, no error.
//! - Rendering without an attached container does nothing.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::notify::toast::{NotificationKind, Notifier};
use crate::render::container::CardContainer;
use crate::repo::project_repo::ProjectRepository;
use crate::viewport::Viewport;
use log::{debug, info};

pub const MSG_PROJECT_ADDED: &str = "Project added successfully!";
pub const MSG_PROJECT_UPDATED: &str = "Project updated successfully!";
pub const MSG_PROJECT_REMOVED: &str = "Project removed successfully!";

/// Owned project store: repository + render target + notification sink.
pub struct ProjectService<R: ProjectRepository, N: Notifier> {
    repo: R,
    notifier: N,
    container: Option<CardContainer>,
    viewport: Viewport,
}

impl<R: ProjectRepository, N: Notifier> ProjectService<R, N> {
    /// Creates a service with no render target attached.
    pub fn new(repo: R, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            container: None,
            viewport: Viewport::default(),
        }
    }

    /// Attaches `container` and renders the current projects into it.
    pub fn with_container(mut self, container: CardContainer) -> Self {
        self.attach_container(container);
        self
    }

    pub fn attach_container(&mut self, container: CardContainer) {
        self.container = Some(container);
        self.render();
    }

    /// Appends a project, redraws, and emits a success notification.
    pub fn add(&mut self, draft: ProjectDraft) -> ProjectId {
        let id = self.repo.insert_project(draft);
        info!("event=project_add module=store status=ok id={id}");
        self.render();
        self.notifier
            .notify(MSG_PROJECT_ADDED, NotificationKind::Success);
        id
    }

    /// Shallow-merges `patch` into project `id`.
    ///
    /// Returns whether a project matched. Unknown ids change nothing.
    pub fn update(&mut self, id: ProjectId, patch: &ProjectPatch) -> bool {
        if !self.repo.update_project(id, patch) {
            debug!("event=project_update module=store status=not_found id={id}");
            return false;
        }
        info!("event=project_update module=store status=ok id={id}");
        self.render();
        self.notifier
            .notify(MSG_PROJECT_UPDATED, NotificationKind::Success);
        true
    }

    /// Removes project `id`.
    ///
    /// Returns whether a project matched. Unknown ids change nothing.
    pub fn remove(&mut self, id: ProjectId) -> bool {
        if self.repo.remove_project(id).is_none() {
            debug!("event=project_remove module=store status=not_found id={id}");
            return false;
        }
        info!("event=project_remove module=store status=ok id={id}");
        self.render();
        self.notifier.notify(MSG_PROJECT_REMOVED, NotificationKind::Info);
        true
    }

    /// Owned snapshot of the store in insertion order.
    pub fn list(&self) -> Vec<Project> {
        self.repo.list_projects()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.repo.get_project(id)
    }

    pub fn len(&self) -> usize {
        self.repo.projects().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.projects().is_empty()
    }

    /// Full redraw of every project into the attached container.
    pub fn render(&mut self) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        container.redraw(self.repo.projects(), self.viewport);
        debug!(
            "event=project_render module=render cards={}",
            container.len()
        );
    }

    /// Shows only rendered cards matching `token`; `"all"` shows every card.
    ///
    /// Returns the visible card count, or `0` without a container.
    pub fn filter(&mut self, token: &str) -> usize {
        match self.container.as_mut() {
            Some(container) => container.apply_filter(token),
            None => 0,
        }
    }

    /// Redraws and signals the scroll-animation layer to re-measure.
    pub fn refresh_layout(&mut self) {
        self.render();
        if let Some(container) = self.container.as_mut() {
            container.signal_layout_refresh();
        }
    }

    /// Updates viewport metrics.
    ///
    /// Cards are redrawn for the new animation stagger, and the active tag
    /// filter is re-applied so a resize never changes which cards show.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        let Some(container) = self.container.as_mut() else {
            return;
        };
        let active_filter = container.active_filter().map(str::to_string);
        container.redraw(self.repo.projects(), viewport);
        if let Some(token) = active_filter {
            container.apply_filter(&token);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn container(&self) -> Option<&CardContainer> {
        self.container.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
