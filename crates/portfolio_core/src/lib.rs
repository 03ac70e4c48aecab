//! Core logic for the portfolio page.
//! The project store, card rendering, toasts and form rules live here; the
//! browser shell only forwards events.

pub mod api;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod render;
pub mod repo;
pub mod service;
pub mod viewport;

pub use api::{welcome_message, PortfolioApi};
pub use config::{ConfigError, PortfolioConfig};
pub use form::contact_form::{
    remaining_chars, CharacterCounter, ContactForm, ContactSubmission, MESSAGE_MAX_CHARS,
};
pub use form::project_form::ProjectForm;
pub use form::{FieldError, FormValidationError};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::project::{
    parse_technologies, placeholder_image_url, Project, ProjectDraft, ProjectId, ProjectPatch,
};
pub use notify::toast::{NotificationKind, Notifier, Toast, ToastCenter, ToastTiming};
pub use render::container::{CardContainer, RenderedCard, FILTER_ALL};
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository};
pub use service::project_service::ProjectService;
pub use viewport::{Breakpoint, BreakpointChange, BreakpointTracker, Viewport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
