//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Own the canonical ordered project collection.
//! - Keep id assignment and lookup rules out of the service layer.
//!
//! # Invariants
//! - Ids are unique for the lifetime of one repository.
//! - Ordering is insertion order; repositories never sort.

pub mod project_repo;
