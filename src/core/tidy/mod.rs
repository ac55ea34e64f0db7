//! Photo tidy module.
//!
//! Reconciles the raw folder against the edited working copy and marks
//! the raw set as finalized.

mod reconciler;
mod types;

pub use reconciler::Reconciler;
pub use types::*;
