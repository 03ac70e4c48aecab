//! Domain model for portfolio entries.
//!
//! # Responsibility
//! - Define the project record shown as one card on the page.
//! - Define caller-facing input shapes for insertion and partial update.
//!
//! # Invariants
//! - Every project is identified by a store-unique `ProjectId`.
//! - Technology lists never contain empty tokens.

pub mod project;
