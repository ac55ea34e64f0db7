//! Stager: duplicates the rendered folder into an editable working copy.

use super::types::StageOutcome;
use crate::core::config::WorkflowConfig;
use crate::core::workspace::Workspace;
use crate::error::StageError;
use crate::events::{Event, EventSender, OrganizeEvent};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Produces the working copy of the rendered folder.
///
/// Replace semantics: any pre-existing working copy is recursively
/// deleted before the new one is written. If the copy fails partway the
/// workspace is left with an incomplete working copy; re-running the
/// stage replaces it wholesale. This is the one destructive step of the
/// organize path.
pub struct Stager<'a> {
    config: &'a WorkflowConfig,
}

impl<'a> Stager<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config }
    }

    /// Stage the rendered folder into the working-copy folder.
    ///
    /// When the rendered folder is missing or holds no files the stage
    /// is skipped: nothing is created and an existing working copy is
    /// left untouched.
    pub fn stage(
        &self,
        workspace: &Workspace,
        events: &EventSender,
    ) -> Result<StageOutcome, StageError> {
        let source = workspace.folder(&self.config.rendered_folder);
        let destination = workspace.folder(&self.config.working_copy_folder);

        if !source.is_dir() || !Workspace::has_files(&source)? {
            warn!(
                "No {} files found to copy into {}",
                self.config.rendered_extension, self.config.working_copy_folder
            );
            events.send(Event::Organize(OrganizeEvent::StageSkipped));
            return Ok(StageOutcome::Skipped);
        }

        if destination.exists() {
            info!("Removing existing working copy: {}", destination.display());
            fs::remove_dir_all(&destination).map_err(|source| {
                StageError::RemoveWorkingCopy {
                    path: destination.clone(),
                    source,
                }
            })?;
            events.send(Event::Organize(OrganizeEvent::WorkingCopyReplaced {
                path: destination.clone(),
            }));
        }

        let files_copied = copy_tree(&source, &destination, events)?;

        info!(
            "Created working copy {} with {} files",
            destination.display(),
            files_copied
        );

        Ok(StageOutcome::Staged {
            destination,
            files_copied,
        })
    }
}

/// Recursively copy `source` into `destination`, preserving relative
/// structure and filenames. Returns the number of files copied.
fn copy_tree(
    source: &Path,
    destination: &Path,
    events: &EventSender,
) -> Result<usize, StageError> {
    fs::create_dir_all(destination).map_err(|e| StageError::CreateFolder {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut files_copied = 0;

    for entry_result in WalkDir::new(source).min_depth(1) {
        let entry = entry_result.map_err(|e| StageError::ReadSource {
            path: source.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| StageError::CreateFolder {
                path: target.clone(),
                source: e,
            })?;
        } else {
            fs::copy(path, &target).map_err(|e| StageError::Copy {
                from: path.to_path_buf(),
                to: target.clone(),
                source: e,
            })?;
            files_copied += 1;

            events.send(Event::Organize(OrganizeEvent::FileStaged {
                file: relative.to_string_lossy().into_owned(),
                destination: target,
            }));
        }
    }

    Ok(files_copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::null_sender;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(b"data").unwrap();
    }

    fn stage(dir: &Path) -> Result<StageOutcome, StageError> {
        let config = WorkflowConfig::default();
        let workspace = Workspace::open(dir).unwrap();
        Stager::new(&config).stage(&workspace, &null_sender())
    }

    #[test]
    fn stage_duplicates_the_rendered_folder() {
        let temp_dir = TempDir::new().unwrap();
        let jpg = temp_dir.path().join("JPG");
        fs::create_dir(&jpg).unwrap();
        create_file(&jpg, "a.jpg");
        create_file(&jpg, "c.jpg");

        let outcome = stage(temp_dir.path()).unwrap();

        match outcome {
            StageOutcome::Staged {
                destination,
                files_copied,
            } => {
                assert_eq!(files_copied, 2);
                assert_eq!(destination, temp_dir.path().join("JPG - Edit 1"));
            }
            StageOutcome::Skipped => panic!("Expected staging to run"),
        }
        assert!(temp_dir.path().join("JPG - Edit 1/a.jpg").exists());
        assert!(temp_dir.path().join("JPG - Edit 1/c.jpg").exists());
        // Source folder is untouched
        assert!(jpg.join("a.jpg").exists());
    }

    #[test]
    fn stage_preserves_nested_structure() {
        let temp_dir = TempDir::new().unwrap();
        let jpg = temp_dir.path().join("JPG");
        fs::create_dir_all(jpg.join("picks")).unwrap();
        create_file(&jpg, "a.jpg");
        create_file(&jpg.join("picks"), "b.jpg");

        let outcome = stage(temp_dir.path()).unwrap();

        assert!(outcome.staged());
        assert!(temp_dir.path().join("JPG - Edit 1/picks/b.jpg").exists());
    }

    #[test]
    fn stage_skips_when_rendered_folder_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let outcome = stage(temp_dir.path()).unwrap();

        assert_eq!(outcome, StageOutcome::Skipped);
        assert!(!temp_dir.path().join("JPG - Edit 1").exists());
    }

    #[test]
    fn stage_skips_when_rendered_folder_has_no_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("JPG")).unwrap();

        let outcome = stage(temp_dir.path()).unwrap();

        assert_eq!(outcome, StageOutcome::Skipped);
        assert!(!temp_dir.path().join("JPG - Edit 1").exists());
    }

    #[test]
    fn skip_leaves_a_previous_working_copy_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let edit = temp_dir.path().join("JPG - Edit 1");
        fs::create_dir(&edit).unwrap();
        create_file(&edit, "keeper.jpg");

        let outcome = stage(temp_dir.path()).unwrap();

        assert_eq!(outcome, StageOutcome::Skipped);
        assert!(edit.join("keeper.jpg").exists());
    }

    #[test]
    fn restaging_replaces_the_working_copy_entirely() {
        let temp_dir = TempDir::new().unwrap();
        let jpg = temp_dir.path().join("JPG");
        fs::create_dir(&jpg).unwrap();
        create_file(&jpg, "first.jpg");

        stage(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join("JPG - Edit 1/first.jpg").exists());

        // Source changes between runs
        fs::remove_file(jpg.join("first.jpg")).unwrap();
        create_file(&jpg, "second.jpg");

        stage(temp_dir.path()).unwrap();

        assert!(!temp_dir.path().join("JPG - Edit 1/first.jpg").exists());
        assert!(temp_dir.path().join("JPG - Edit 1/second.jpg").exists());
    }
}
