//! # Error Module
//!
//! User-friendly error types for the photo tidier.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **User-friendly messages** - non-technical users should understand
//! - **Recovery hints** - suggest how to fix when possible

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum TidierError {
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("Classify error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Stage error: {0}")]
    Stage(#[from] StageError),

    #[error("Tidy error: {0}")]
    Tidy(#[from] TidyError),
}

/// Errors raised when opening or scanning a workspace
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while classifying files into category folders
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error(transparent)]
    Scan(#[from] WorkspaceError),

    #[error("Failed to create category folder {path}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Move target already exists: {path}")]
    DestinationExists { path: PathBuf },

    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while staging the working copy
#[derive(Error, Debug)]
pub enum StageError {
    #[error(transparent)]
    Scan(#[from] WorkspaceError),

    #[error("Failed to read staging source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to remove previous working copy {path}: {source}")]
    RemoveWorkingCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create working-copy folder {path}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while tidying the raw folder
#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Raw folder not found at {path}. Run the organize step first.")]
    MissingRawFolder { path: PathBuf },

    #[error("Working-copy folder not found at {path}. Run the organize step first.")]
    MissingWorkingCopy { path: PathBuf },

    #[error(transparent)]
    Scan(#[from] WorkspaceError),

    #[error("Failed to delete raw file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot finalize: {path} already exists")]
    FinalizedExists { path: PathBuf },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, TidierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_error_includes_path() {
        let error = WorkspaceError::DirectoryNotFound {
            path: PathBuf::from("/photos/shoot"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/shoot"));
    }

    #[test]
    fn classify_error_names_both_paths() {
        let error = ClassifyError::Move {
            from: PathBuf::from("/photos/a.cr2"),
            to: PathBuf::from("/photos/RAW/a.cr2"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/a.cr2"));
        assert!(message.contains("/photos/RAW/a.cr2"));
    }

    #[test]
    fn tidy_error_suggests_recovery() {
        let error = TidyError::MissingRawFolder {
            path: PathBuf::from("/photos/RAW"),
        };
        let message = error.to_string();
        assert!(message.contains("organize step"));
    }

    #[test]
    fn finalized_exists_names_the_collision() {
        let error = TidyError::FinalizedExists {
            path: PathBuf::from("/photos/RAW - Edit 1"),
        };
        assert!(error.to_string().contains("RAW - Edit 1"));
    }
}
