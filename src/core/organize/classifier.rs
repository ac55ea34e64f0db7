//! Classifier: partitions workspace files into category folders.

use super::types::{Category, ClassifySummary};
use crate::core::config::WorkflowConfig;
use crate::core::workspace::Workspace;
use crate::error::ClassifyError;
use crate::events::{Event, EventSender, OrganizeEvent};
use std::fs;
use std::path::Path;
use tracing::info;

/// Moves raw and rendered files from the workspace root into their
/// category folders.
pub struct Classifier<'a> {
    config: &'a WorkflowConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config }
    }

    /// Classify the workspace's immediate files.
    ///
    /// Category folders are created if absent (a second run on an
    /// already-classified workspace is a no-op). The file listing is a
    /// snapshot taken before the first move, non-recursive, so entries
    /// already inside category folders are never re-scanned. Files
    /// matching neither extension are left in place.
    ///
    /// A failed move stops the run; files moved before the failure stay
    /// moved.
    pub fn classify(
        &self,
        workspace: &Workspace,
        events: &EventSender,
    ) -> Result<ClassifySummary, ClassifyError> {
        let raw_folder = workspace.folder(&self.config.raw_folder);
        let rendered_folder = workspace.folder(&self.config.rendered_folder);

        info!("Scanning {} for photo files", workspace.root().display());
        events.send(Event::Organize(OrganizeEvent::Started {
            workspace: workspace.root().to_path_buf(),
        }));

        ensure_folder(&raw_folder)?;
        ensure_folder(&rendered_folder)?;

        let snapshot = Workspace::snapshot_files(workspace.root())?;

        let mut summary = ClassifySummary {
            files_scanned: 0,
            moved_to_raw: 0,
            moved_to_rendered: 0,
        };

        for entry in snapshot {
            summary.files_scanned += 1;

            let (destination_folder, category) = if entry.extension_is(&self.config.raw_extension) {
                (&raw_folder, Category::Raw)
            } else if entry.extension_is(&self.config.rendered_extension) {
                (&rendered_folder, Category::Rendered)
            } else {
                continue;
            };

            let destination = destination_folder.join(&entry.name);
            if destination.exists() {
                return Err(ClassifyError::DestinationExists { path: destination });
            }

            move_file(&entry.path, &destination).map_err(|source| ClassifyError::Move {
                from: entry.path.clone(),
                to: destination.clone(),
                source,
            })?;

            info!("Moved {} file: {} -> {}", category, entry.name, destination.display());
            events.send(Event::Organize(OrganizeEvent::FileMoved {
                file: entry.name,
                destination,
                category,
            }));

            match category {
                Category::Raw => summary.moved_to_raw += 1,
                Category::Rendered => summary.moved_to_rendered += 1,
            }
        }

        info!(
            "Classification complete: {} files scanned, {} raw, {} rendered",
            summary.files_scanned, summary.moved_to_raw, summary.moved_to_rendered
        );
        events.send(Event::Organize(OrganizeEvent::ScanCompleted {
            files_scanned: summary.files_scanned,
        }));

        Ok(summary)
    }
}

fn ensure_folder(path: &Path) -> Result<(), ClassifyError> {
    fs::create_dir_all(path).map_err(|source| ClassifyError::CreateFolder {
        path: path.to_path_buf(),
        source,
    })
}

/// Move a file, falling back to copy+delete across filesystems.
///
/// The destination size is verified against the source before the
/// source is deleted.
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::rename(from, to).or_else(|_| {
        let source_size = fs::metadata(from)?.len();
        fs::copy(from, to)?;

        let dest_size = fs::metadata(to)?.len();
        if dest_size != source_size {
            // Copy was incomplete, don't delete source
            let _ = fs::remove_file(to);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "Copy verification failed: source {} bytes, dest {} bytes",
                    source_size, dest_size
                ),
            ));
        }

        fs::remove_file(from)
    })
}
