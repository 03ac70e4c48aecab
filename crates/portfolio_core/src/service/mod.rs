//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository writes, card re-rendering and notifications.
//! - Keep API/CLI layers decoupled from storage and markup details.

pub mod project_service;
