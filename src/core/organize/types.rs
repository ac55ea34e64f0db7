//! Types for the organize module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The category a classified file belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Raw camera files
    Raw,
    /// Rendered files
    Rendered,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Raw => write!(f, "raw"),
            Category::Rendered => write!(f, "rendered"),
        }
    }
}

/// Counts from a classification run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifySummary {
    /// Immediate workspace files examined (recognized or not)
    pub files_scanned: usize,
    /// Files moved into the raw folder
    pub moved_to_raw: usize,
    /// Files moved into the rendered folder
    pub moved_to_rendered: usize,
}

/// What happened to the staging step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    /// The working copy was (re)created
    Staged {
        destination: PathBuf,
        files_copied: usize,
    },
    /// The rendered folder had no files, so no working copy was made
    Skipped,
}

impl StageOutcome {
    /// Whether a working copy was produced
    pub fn staged(&self) -> bool {
        matches!(self, StageOutcome::Staged { .. })
    }
}

/// Result of a full organize run (classify + stage)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizeSummary {
    pub files_scanned: usize,
    pub moved_to_raw: usize,
    pub moved_to_rendered: usize,
    pub stage: StageOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_serializable() {
        let summary = OrganizeSummary {
            files_scanned: 4,
            moved_to_raw: 2,
            moved_to_rendered: 2,
            stage: StageOutcome::Staged {
                destination: PathBuf::from("/photos/JPG - Edit 1"),
                files_copied: 2,
            },
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("JPG - Edit 1"));
        assert!(json.contains("\"status\":\"staged\""));
    }

    #[test]
    fn skipped_outcome_reports_not_staged() {
        assert!(!StageOutcome::Skipped.staged());
    }
}
