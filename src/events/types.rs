//! Event type definitions for progress reporting.

use crate::core::organize::{Category, OrganizeSummary};
use crate::core::tidy::TidySummary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Organize phase events (classify + stage)
    Organize(OrganizeEvent),
    /// Tidy phase events (reconcile)
    Tidy(TidyEvent),
}

/// Events during the organize phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrganizeEvent {
    /// Scanning the workspace has started
    Started { workspace: PathBuf },
    /// A file was moved into a category folder
    FileMoved {
        file: String,
        destination: PathBuf,
        category: Category,
    },
    /// Classification finished; staging begins next
    ScanCompleted { files_scanned: usize },
    /// A previous working copy was removed before re-staging
    WorkingCopyReplaced { path: PathBuf },
    /// A file was copied into the working copy
    FileStaged { file: String, destination: PathBuf },
    /// Nothing to stage: the rendered folder had no files
    StageSkipped,
    /// Organize completed successfully
    Completed { summary: OrganizeSummary },
}

/// Events during the tidy phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TidyEvent {
    /// Scanning the working copy has started
    Started { workspace: PathBuf },
    /// The base-name set was collected from the working copy
    EditedSetCollected { stems: usize },
    /// A raw file was kept (edited counterpart exists)
    FileKept { path: PathBuf },
    /// A raw file was deleted (no edited counterpart)
    FileRemoved { path: PathBuf },
    /// The raw folder was renamed to its finalized name
    Renamed { from: PathBuf, to: PathBuf },
    /// Tidy completed successfully
    Completed { summary: TidySummary },
}
