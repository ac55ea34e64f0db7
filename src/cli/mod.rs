//! # CLI Module
//!
//! Command-line interface for the photo tidier.
//!
//! ## Usage
//! ```bash
//! # Sort a shoot into RAW/JPG and stage the editing copy
//! photo-tidy organize ~/Photos/shoot-01
//!
//! # After editing, drop raw files without an edited counterpart
//! photo-tidy tidy ~/Photos/shoot-01
//!
//! # Other format pairs
//! photo-tidy organize ~/Photos/shoot-01 --raw-ext nef --rendered-ext tif
//!
//! # JSON output
//! photo-tidy tidy ~/Photos/shoot-01 --output json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use photo_tidier::core::organize::StageOutcome;
use photo_tidier::core::{OrganizeSummary, TidySummary, Workflow, WorkflowConfig};
use photo_tidier::error::Result;
use photo_tidier::events::{Event, EventChannel, OrganizeEvent, TidyEvent};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Photo Tidier - organize a shoot, edit, tidy the leftovers
#[derive(Parser, Debug)]
#[command(name = "photo-tidy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort raw/rendered files into folders and stage a working copy
    Organize {
        /// Photo directory to organize
        path: PathBuf,

        #[command(flatten)]
        naming: NamingArgs,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Show every file action
        #[arg(short, long)]
        verbose: bool,
    },
    /// Delete raw files without an edited counterpart and finalize
    Tidy {
        /// Photo directory to tidy
        path: PathBuf,

        #[command(flatten)]
        naming: NamingArgs,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Show every file action
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Folder and extension names (all optional, defaults match the
/// cr2/jpg reference scheme)
#[derive(Args, Debug)]
struct NamingArgs {
    /// Raw file extension
    #[arg(long)]
    raw_ext: Option<String>,

    /// Rendered file extension
    #[arg(long)]
    rendered_ext: Option<String>,

    /// Raw folder name
    #[arg(long)]
    raw_folder: Option<String>,

    /// Rendered folder name
    #[arg(long)]
    rendered_folder: Option<String>,

    /// Working-copy folder name
    #[arg(long)]
    working_copy_folder: Option<String>,

    /// Finalized raw folder name
    #[arg(long)]
    finalized_folder: Option<String>,
}

impl NamingArgs {
    fn into_config(self) -> WorkflowConfig {
        let mut config = WorkflowConfig::default();
        if let Some(ext) = self.raw_ext {
            config.raw_extension = ext;
        }
        if let Some(ext) = self.rendered_ext {
            config.rendered_extension = ext;
        }
        if let Some(name) = self.raw_folder {
            config.raw_folder = name;
        }
        if let Some(name) = self.rendered_folder {
            config.rendered_folder = name;
        }
        if let Some(name) = self.working_copy_folder {
            config.working_copy_folder = name;
        }
        if let Some(name) = self.finalized_folder {
            config.finalized_raw_folder = name;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    photo_tidier::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Organize {
            path,
            naming,
            output,
            verbose,
        } => run_organize(path, naming.into_config(), output, verbose),
        Commands::Tidy {
            path,
            naming,
            output,
            verbose,
        } => run_tidy(path, naming.into_config(), output, verbose),
    }
}

fn run_organize(
    path: PathBuf,
    config: WorkflowConfig,
    output: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();
    print_header(&term, output);

    let workflow = Workflow::builder()
        .workspace(path)
        .config(config.clone())
        .build();

    let (sender, receiver) = EventChannel::new();
    let progress = spinner(output);
    let progress_clone = progress.clone();

    // Per-file actions arrive on a separate thread while the operation runs
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Organize(OrganizeEvent::Started { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Classifying...");
                    }
                }
                Event::Organize(OrganizeEvent::FileMoved {
                    file, destination, ..
                }) => {
                    if verbose {
                        if let Some(ref pb) = progress_clone {
                            pb.println(format!(
                                "  moved  {} -> {}",
                                file,
                                display_path(&destination)
                            ));
                        }
                    }
                }
                Event::Organize(OrganizeEvent::ScanCompleted { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Staging working copy...");
                    }
                }
                Event::Organize(OrganizeEvent::FileStaged { file, .. }) => {
                    if verbose {
                        if let Some(ref pb) = progress_clone {
                            pb.println(format!("  staged {}", file));
                        }
                    }
                }
                _ => {}
            }
        }
    });

    let result = workflow.organize_with_events(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summary = result?;

    match output {
        OutputFormat::Pretty => print_organize_results(&term, &config, &summary),
        OutputFormat::Json => print_json(&summary),
    }

    Ok(())
}

fn run_tidy(
    path: PathBuf,
    config: WorkflowConfig,
    output: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();
    print_header(&term, output);

    let workflow = Workflow::builder()
        .workspace(path)
        .config(config.clone())
        .build();

    let (sender, receiver) = EventChannel::new();
    let progress = spinner(output);
    let progress_clone = progress.clone();

    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Tidy(TidyEvent::Started { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Reconciling...");
                    }
                }
                Event::Tidy(TidyEvent::FileKept { path }) => {
                    if verbose {
                        if let Some(ref pb) = progress_clone {
                            pb.println(format!("  kept    {}", display_path(&path)));
                        }
                    }
                }
                Event::Tidy(TidyEvent::FileRemoved { path }) => {
                    if verbose {
                        if let Some(ref pb) = progress_clone {
                            pb.println(format!("  removed {}", display_path(&path)));
                        }
                    }
                }
                _ => {}
            }
        }
    });

    let result = workflow.tidy_with_events(&sender);

    drop(sender);
    event_thread.join().ok();
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summary = result?;

    match output {
        OutputFormat::Pretty => print_tidy_results(&term, &config, &summary),
        OutputFormat::Json => print_json(&summary),
    }

    Ok(())
}

fn print_header(term: &Term, output: OutputFormat) {
    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Photo Tidier").bold().cyan(),
            style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
        ))
        .ok();
        term.write_line("").ok();
    }
}

/// Indeterminate spinner: the core reports no percentage, only
/// per-file events and a final summary.
fn spinner(output: OutputFormat) -> Option<ProgressBar> {
    if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    }
}

fn print_organize_results(term: &Term, config: &WorkflowConfig, summary: &OrganizeSummary) {
    term.write_line(&format!("{} Organize Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} files scanned",
        style(summary.files_scanned).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} .{} files moved to {}",
        style(summary.moved_to_raw).cyan(),
        config.raw_extension,
        config.raw_folder
    ))
    .ok();
    term.write_line(&format!(
        "  {} .{} files moved to {}",
        style(summary.moved_to_rendered).cyan(),
        config.rendered_extension,
        config.rendered_folder
    ))
    .ok();

    match &summary.stage {
        StageOutcome::Staged {
            destination,
            files_copied,
        } => {
            term.write_line(&format!(
                "  {} files staged in {}",
                style(files_copied).cyan(),
                display_path(destination)
            ))
            .ok();
            term.write_line("").ok();
            term.write_line(&format!(
                "{}",
                style(format!(
                    "Edit the photos in '{}', then run photo-tidy tidy on this directory.",
                    config.working_copy_folder
                ))
                .dim()
            ))
            .ok();
        }
        StageOutcome::Skipped => {
            term.write_line(&format!(
                "  {} no .{} files found, working copy not created",
                style("!").yellow().bold(),
                config.rendered_extension
            ))
            .ok();
        }
    }
}

fn print_tidy_results(term: &Term, config: &WorkflowConfig, summary: &TidySummary) {
    term.write_line(&format!("{} Tidy Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} .{} files kept (have an edited .{})",
        style(summary.kept).cyan(),
        config.raw_extension,
        config.rendered_extension
    ))
    .ok();
    term.write_line(&format!(
        "  {} .{} files removed (no edited .{})",
        style(summary.removed).cyan(),
        config.raw_extension,
        config.rendered_extension
    ))
    .ok();
    term.write_line(&format!(
        "  {} renamed to {}",
        config.raw_folder,
        style(display_path(&summary.finalized_path)).cyan()
    ))
    .ok();
}

fn print_json<T: serde::Serialize>(summary: &T) {
    println!("{}", serde_json::to_string_pretty(summary).unwrap());
}

fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
