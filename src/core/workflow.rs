//! Workflow entry points: builds and runs `organize` and `tidy`.

use crate::core::config::WorkflowConfig;
use crate::core::organize::{Classifier, OrganizeSummary, Stager};
use crate::core::tidy::{Reconciler, TidySummary};
use crate::core::workspace::Workspace;
use crate::error::Result;
use crate::events::{null_sender, Event, EventSender, OrganizeEvent, TidyEvent};
use std::path::PathBuf;
use tracing::info;

/// Builder for a workflow
pub struct WorkflowBuilder {
    workspace: PathBuf,
    config: WorkflowConfig,
}

impl WorkflowBuilder {
    /// Create a new workflow builder
    pub fn new() -> Self {
        Self {
            workspace: PathBuf::new(),
            config: WorkflowConfig::default(),
        }
    }

    /// Set the workspace directory to operate on
    pub fn workspace(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace = path.into();
        self
    }

    /// Set the folder/extension configuration
    pub fn config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the workflow
    pub fn build(self) -> Workflow {
        Workflow {
            workspace: self.workspace,
            config: self.config,
        }
    }
}

impl Default for WorkflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured pipeline bound to one workspace.
///
/// Operations are synchronous and blocking; the caller decides
/// scheduling. Invocations against the same workspace must not overlap:
/// single-flight per workspace is a precondition, not an internal
/// guarantee.
pub struct Workflow {
    workspace: PathBuf,
    config: WorkflowConfig,
}

impl Workflow {
    /// Create a new workflow builder
    pub fn builder() -> WorkflowBuilder {
        WorkflowBuilder::new()
    }

    /// Run organize (classify + stage) without events
    pub fn organize(&self) -> Result<OrganizeSummary> {
        self.organize_with_events(&null_sender())
    }

    /// Run organize (classify + stage) with event reporting
    pub fn organize_with_events(&self, events: &EventSender) -> Result<OrganizeSummary> {
        info!(
            "photo-tidier v{}: organizing {}",
            env!("CARGO_PKG_VERSION"),
            self.workspace.display()
        );

        let workspace = Workspace::open(&self.workspace)?;

        let classify = Classifier::new(&self.config).classify(&workspace, events)?;
        let stage = Stager::new(&self.config).stage(&workspace, events)?;

        let summary = OrganizeSummary {
            files_scanned: classify.files_scanned,
            moved_to_raw: classify.moved_to_raw,
            moved_to_rendered: classify.moved_to_rendered,
            stage,
        };

        info!("Organize completed successfully");
        events.send(Event::Organize(OrganizeEvent::Completed {
            summary: summary.clone(),
        }));

        Ok(summary)
    }

    /// Run tidy (reconcile) without events
    pub fn tidy(&self) -> Result<TidySummary> {
        self.tidy_with_events(&null_sender())
    }

    /// Run tidy (reconcile) with event reporting
    pub fn tidy_with_events(&self, events: &EventSender) -> Result<TidySummary> {
        info!(
            "photo-tidier v{}: tidying {}",
            env!("CARGO_PKG_VERSION"),
            self.workspace.display()
        );

        let workspace = Workspace::open(&self.workspace)?;

        let summary = Reconciler::new(&self.config).reconcile(&workspace, events)?;

        info!("Tidy completed successfully");
        events.send(Event::Tidy(TidyEvent::Completed {
            summary: summary.clone(),
        }));

        Ok(summary)
    }
}
