//! Reconciler: deletes raw files without an edited counterpart and
//! finalizes the raw folder.

use super::types::TidySummary;
use crate::core::config::WorkflowConfig;
use crate::core::workspace::Workspace;
use crate::error::TidyError;
use crate::events::{Event, EventSender, TidyEvent};
use std::collections::HashSet;
use std::fs;
use tracing::info;

/// Reconciles the raw folder against the working copy.
///
/// Not transactional: the per-file deletions and the folder rename are
/// separate steps. If the rename fails after deletions succeeded, the
/// workspace is left reconciled but not renamed, and the error names
/// the rename target.
pub struct Reconciler<'a> {
    config: &'a WorkflowConfig,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config }
    }

    /// Reconcile raw files against the working copy, then rename the
    /// raw folder to its finalized name.
    ///
    /// Membership is decided purely on filename stem equality; only
    /// extension case is normalized. A missing raw or working-copy
    /// folder aborts cleanly before any mutation.
    pub fn reconcile(
        &self,
        workspace: &Workspace,
        events: &EventSender,
    ) -> Result<TidySummary, TidyError> {
        let raw_folder = workspace.folder(&self.config.raw_folder);
        let working_copy = workspace.folder(&self.config.working_copy_folder);

        if !raw_folder.is_dir() {
            return Err(TidyError::MissingRawFolder { path: raw_folder });
        }
        if !working_copy.is_dir() {
            return Err(TidyError::MissingWorkingCopy { path: working_copy });
        }

        info!("Scanning {} for edited photos", working_copy.display());
        events.send(Event::Tidy(TidyEvent::Started {
            workspace: workspace.root().to_path_buf(),
        }));

        // Step 1: base-name set of the edited rendered files
        let edited_stems: HashSet<String> = Workspace::snapshot_files(&working_copy)?
            .into_iter()
            .filter(|f| f.extension_is(&self.config.rendered_extension))
            .map(|f| f.stem)
            .collect();

        info!("Found {} edited files", edited_stems.len());
        events.send(Event::Tidy(TidyEvent::EditedSetCollected {
            stems: edited_stems.len(),
        }));

        // Step 2: keep raw files with an edited counterpart, delete the rest
        let mut summary = TidySummary {
            total_raw: 0,
            kept: 0,
            removed: 0,
            finalized_path: workspace.folder(&self.config.finalized_raw_folder),
        };

        for entry in Workspace::snapshot_files(&raw_folder)? {
            if !entry.extension_is(&self.config.raw_extension) {
                continue;
            }
            summary.total_raw += 1;

            if edited_stems.contains(&entry.stem) {
                summary.kept += 1;
                info!("Keeping raw file: {}", entry.name);
                events.send(Event::Tidy(TidyEvent::FileKept { path: entry.path }));
            } else {
                info!("Removing raw file: {}", entry.name);
                fs::remove_file(&entry.path).map_err(|source| TidyError::Remove {
                    path: entry.path.clone(),
                    source,
                })?;
                summary.removed += 1;
                events.send(Event::Tidy(TidyEvent::FileRemoved { path: entry.path }));
            }
        }

        // Step 3: mark the raw set finalized
        if summary.finalized_path.exists() {
            return Err(TidyError::FinalizedExists {
                path: summary.finalized_path,
            });
        }

        fs::rename(&raw_folder, &summary.finalized_path).map_err(|source| TidyError::Rename {
            from: raw_folder.clone(),
            to: summary.finalized_path.clone(),
            source,
        })?;

        info!(
            "Renamed {} -> {}",
            raw_folder.display(),
            summary.finalized_path.display()
        );
        events.send(Event::Tidy(TidyEvent::Renamed {
            from: raw_folder,
            to: summary.finalized_path.clone(),
        }));

        Ok(summary)
    }
}
