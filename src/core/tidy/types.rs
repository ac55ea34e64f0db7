//! Types for the tidy module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of a tidy run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TidySummary {
    /// Raw files examined
    pub total_raw: usize,
    /// Raw files kept (edited counterpart exists)
    pub kept: usize,
    /// Raw files permanently deleted
    pub removed: usize,
    /// Final path of the renamed raw folder
    pub finalized_path: PathBuf,
}
