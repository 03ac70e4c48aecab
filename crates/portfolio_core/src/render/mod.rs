//! HTML rendering of project cards and the card container.
//!
//! # Responsibility
//! - Turn project records into card markup.
//! - Own the rendered card list that tag filtering acts on.
//!
//! # Invariants
//! - Every interpolated value is HTML-escaped.
//! - The container is always fully redrawn; there is no diffing.

pub mod card;
pub mod container;
mod escape;

pub use escape::escape_html;
