//! # Photo Tidier
//!
//! Organizes a flat directory of photographs into an editing workflow and
//! tidies the raw files once editing is done.
//!
//! ## Workflow
//! 1. **Organize** - raw files move into a raw folder, rendered files into a
//!    rendered folder, and a working copy of the rendered folder is staged
//!    for editing.
//! 2. **Edit** - the user edits inside the working copy, deleting the
//!    rendered files they don't want to keep.
//! 3. **Tidy** - raw files without a surviving working-copy counterpart are
//!    deleted and the raw folder is renamed to mark it finalized.
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and presentation
//! layers:
//! - `core` - the classify/stage/reconcile pipeline
//! - `events` - event-driven progress reporting (GUI-ready)
//! - `error` - user-friendly error types
//! - `cli` - command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, TidierError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
