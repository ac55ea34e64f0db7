//! Workspace handle and file-entry snapshot utilities.

use crate::error::WorkspaceError;
use std::fs;
use std::path::{Path, PathBuf};

/// The root directory a pipeline invocation operates on.
///
/// The workspace is supplied by the caller and only read and mutated in
/// place; the core never creates or deletes the root itself.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open a workspace, verifying the root exists and is a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let root = root.into();

        if !root.exists() {
            return Err(WorkspaceError::DirectoryNotFound { path: root });
        }

        if !root.is_dir() {
            return Err(WorkspaceError::NotADirectory { path: root });
        }

        Ok(Self { root })
    }

    /// The workspace root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a category folder directly under the workspace
    pub fn folder(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Snapshot the immediate file entries of a folder, sorted by name.
    ///
    /// The listing is collected before the caller mutates anything, so
    /// each entry is visited exactly once even while files are being
    /// moved out of the folder. Subdirectories are not descended into.
    pub fn snapshot_files(dir: &Path) -> Result<Vec<FileEntry>, WorkspaceError> {
        let entries = fs::read_dir(dir).map_err(|source| WorkspaceError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| WorkspaceError::ReadDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(FileEntry::new(path));
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// Whether a folder contains at least one immediate file entry
    pub fn has_files(dir: &Path) -> Result<bool, WorkspaceError> {
        Ok(!Self::snapshot_files(dir)?.is_empty())
    }
}

/// An immediate child file of a scanned folder
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path of the file
    pub path: PathBuf,
    /// File name including extension
    pub name: String,
    /// File name without extension
    pub stem: String,
}

impl FileEntry {
    fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name, stem }
    }

    /// Case-insensitive extension match.
    ///
    /// Accepts the wanted extension with or without a leading dot.
    pub fn extension_is(&self, wanted: &str) -> bool {
        let wanted = wanted.trim_start_matches('.');
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(wanted))
            .unwrap_or(false)
    }
}
