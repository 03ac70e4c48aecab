//! Portfolio page API.
//!
//! # Responsibility
//! - Expose one owned entry point for project CRUD, filtering, toasts and
//!   form submission.
//! - Act as the page-level error boundary.
//!
//! # Invariants
//! - Exactly one project store per `PortfolioApi`; callers get `&mut` access
//!   through this type only.
//! - Rejected forms never reach the store.

use crate::config::PortfolioConfig;
use crate::form::contact_form::{ContactForm, ContactSubmission};
use crate::form::project_form::ProjectForm;
use crate::form::FormValidationError;
use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::notify::toast::{system_now_ms, NotificationKind, Toast, ToastCenter};
use crate::render::container::CardContainer;
use crate::repo::project_repo::InMemoryProjectRepository;
use crate::service::project_service::ProjectService;
use crate::viewport::{BreakpointChange, BreakpointTracker, Viewport};
use log::{error, info, warn};

pub const MSG_CONTACT_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_GENERIC_ERROR: &str = "Something went wrong. Please refresh the page.";
pub const MSG_OFFLINE: &str = "You are currently offline. Some features may not work.";
pub const MSG_ONLINE: &str = "Connection restored!";
pub const MSG_WELCOME_MOBILE: &str = "Welcome to my portfolio!";
pub const MSG_WELCOME_DESKTOP: &str = "Welcome to my portfolio! Use Ctrl+1-5 for quick navigation.";

/// Welcome text for `viewport`; the keyboard hint is desktop-only.
pub fn welcome_message(viewport: Viewport) -> &'static str {
    if viewport.is_mobile() {
        MSG_WELCOME_MOBILE
    } else {
        MSG_WELCOME_DESKTOP
    }
}

type Store = ProjectService<InMemoryProjectRepository, ToastCenter>;

/// Owned portfolio page state.
pub struct PortfolioApi {
    store: Store,
    filter_tokens: Vec<String>,
    breakpoints: BreakpointTracker,
    online: bool,
}

impl Default for PortfolioApi {
    fn default() -> Self {
        Self::from_config(&PortfolioConfig::default())
    }
}

impl PortfolioApi {
    /// Builds the page state: seeds the store, attaches the card container
    /// and renders once.
    pub fn from_config(config: &PortfolioConfig) -> Self {
        let viewport = config.viewport();
        let repo = InMemoryProjectRepository::with_seed(config.projects.iter().cloned());
        let toasts = ToastCenter::new(config.toast_timing(), viewport);
        let mut store = ProjectService::new(repo, toasts);
        store.set_viewport(viewport);
        let store = store.with_container(CardContainer::new());

        info!(
            "event=portfolio_init module=api status=ok projects={} width={}",
            store.len(),
            viewport.width
        );

        Self {
            store,
            filter_tokens: config.filter_tokens(),
            breakpoints: BreakpointTracker::new(viewport),
            online: true,
        }
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> ProjectId {
        self.store.add(draft)
    }

    /// Validates the add-project form, stores it and clears the form.
    ///
    /// # Errors
    /// Returns every failing field; the store and the form are left untouched.
    pub fn submit_project_form(
        &mut self,
        form: &mut ProjectForm,
    ) -> Result<ProjectId, FormValidationError> {
        let draft = form.to_draft().map_err(|err| {
            warn!(
                "event=project_form module=api status=invalid fields={}",
                err.errors.len()
            );
            err
        })?;
        let id = self.store.add(draft);
        form.reset();
        Ok(id)
    }

    /// Returns `false` (and does nothing else) for unknown ids.
    pub fn remove_project(&mut self, id: ProjectId) -> bool {
        self.store.remove(id)
    }

    /// Snapshot copy of every project.
    pub fn get_projects(&self) -> Vec<Project> {
        self.store.list()
    }

    /// Returns `false` (and does nothing else) for unknown ids.
    pub fn update_project(&mut self, id: ProjectId, patch: &ProjectPatch) -> bool {
        self.store.update(id, patch)
    }

    /// Shows a toast; returns its id.
    pub fn show_notification(&mut self, message: &str, kind: NotificationKind) -> u64 {
        self.store.notifier_mut().show(message, kind)
    }

    /// Closes a toast before its deadline.
    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        self.store.notifier_mut().dismiss(id)
    }

    /// Drops expired toasts.
    pub fn prune_notifications(&mut self, now_ms: i64) -> usize {
        self.store.notifier_mut().prune(now_ms)
    }

    pub fn notifications(&self) -> &[Toast] {
        self.store.notifier().active()
    }

    pub fn refresh_layout(&mut self) {
        self.store.refresh_layout();
    }

    /// Applies a filter token to the rendered cards; returns visible count.
    pub fn filter_projects(&mut self, token: &str) -> usize {
        self.store.filter(token)
    }

    /// Filter button tokens, `"all"` first.
    pub fn filter_tokens(&self) -> &[String] {
        &self.filter_tokens
    }

    pub fn cards(&self) -> Option<&CardContainer> {
        self.store.container()
    }

    /// Markup of the currently visible cards.
    pub fn render_html(&self) -> String {
        self.store
            .container()
            .map(CardContainer::to_html)
            .unwrap_or_default()
    }

    /// Validates and accepts a contact message, then confirms with a toast.
    pub fn submit_contact_form(
        &mut self,
        form: ContactForm,
    ) -> Result<ContactSubmission, FormValidationError> {
        let submission = form.submit(system_now_ms()).map_err(|err| {
            warn!(
                "event=contact_form module=api status=invalid fields={}",
                err.errors.len()
            );
            err
        })?;
        info!(
            "event=contact_form module=api status=ok has_phone={}",
            submission.phone.is_some()
        );
        self.store
            .notifier_mut()
            .show(MSG_CONTACT_SENT, NotificationKind::Success);
        Ok(submission)
    }

    /// Page-level error boundary: logs and shows a generic error toast.
    pub fn report_error(&mut self, context: &str, message: &str) -> u64 {
        error!(
            "event=page_error module=api status=error context={} message_len={}",
            context,
            message.chars().count()
        );
        self.store
            .notifier_mut()
            .show(MSG_GENERIC_ERROR, NotificationKind::Error)
    }

    /// Shows the device-dependent welcome toast.
    pub fn show_welcome(&mut self) -> u64 {
        let message = welcome_message(self.viewport());
        self.store
            .notifier_mut()
            .show(message, NotificationKind::Info)
    }

    /// Records a connectivity change.
    ///
    /// Going offline shows a warning, coming back shows a success toast.
    /// Repeating the current state shows nothing and returns `None`.
    pub fn set_online(&mut self, online: bool) -> Option<u64> {
        if self.online == online {
            return None;
        }
        self.online = online;
        info!("event=network_status module=api online={online}");
        let toasts = self.store.notifier_mut();
        Some(if online {
            toasts.show(MSG_ONLINE, NotificationKind::Success)
        } else {
            toasts.show(MSG_OFFLINE, NotificationKind::Warning)
        })
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Body device class for the current viewport.
    pub fn device_class(&self) -> &'static str {
        self.viewport().device_class()
    }

    /// Applies a new viewport width; reports a breakpoint change if any.
    pub fn resize(&mut self, width: u32) -> Option<BreakpointChange> {
        let viewport = Viewport::new(width);
        self.store.set_viewport(viewport);
        self.store.notifier_mut().set_viewport(viewport);
        self.breakpoints.observe(viewport)
    }

    pub fn viewport(&self) -> Viewport {
        self.store.viewport()
    }
}
