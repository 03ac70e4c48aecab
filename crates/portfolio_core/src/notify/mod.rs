//! Transient user notifications (toasts).
//!
//! # Responsibility
//! - Define the notification sink used by the project service.
//! - Queue toasts with device-aware placement and auto-dismiss deadlines.
//!
//! # Invariants
//! - Toast ids are unique and increasing within one center.
//! - Expiry is evaluated by callers passing the current time; nothing here
//!   spawns timers.

pub mod toast;
