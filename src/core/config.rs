//! Workflow configuration: folder names and extension pair.

use serde::{Deserialize, Serialize};

/// Names the folders and extensions the pipeline operates on.
///
/// Folder names and extensions are configuration, not identity, so the
/// same pipeline works for other raw/rendered format pairs (e.g. a
/// `nef`/`tif` shoot). Extensions are matched case-insensitively and may
/// be given with or without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Extension of raw camera files
    pub raw_extension: String,
    /// Extension of rendered files
    pub rendered_extension: String,
    /// Folder that receives raw files during classification
    pub raw_folder: String,
    /// Folder that receives rendered files during classification
    pub rendered_folder: String,
    /// Folder holding the editable duplicate of the rendered folder
    pub working_copy_folder: String,
    /// Name the raw folder takes once tidying finishes
    pub finalized_raw_folder: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            raw_extension: "cr2".to_string(),
            rendered_extension: "jpg".to_string(),
            raw_folder: "RAW".to_string(),
            rendered_folder: "JPG".to_string(),
            working_copy_folder: "JPG - Edit 1".to_string(),
            finalized_raw_folder: "RAW - Edit 1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_naming_scheme() {
        let config = WorkflowConfig::default();
        assert_eq!(config.raw_extension, "cr2");
        assert_eq!(config.rendered_extension, "jpg");
        assert_eq!(config.raw_folder, "RAW");
        assert_eq!(config.rendered_folder, "JPG");
        assert_eq!(config.working_copy_folder, "JPG - Edit 1");
        assert_eq!(config.finalized_raw_folder, "RAW - Edit 1");
    }

    #[test]
    fn config_is_serializable() {
        let config = WorkflowConfig {
            raw_extension: "nef".to_string(),
            rendered_extension: "tif".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("nef"));
        assert!(json.contains("tif"));
    }
}
