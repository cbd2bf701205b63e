//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `nodekit-adapters` crate provides the filesystem, subprocess, and
//! plugin-lookup implementations; the CLI provides the prompter and the
//! progress reporter.

use std::path::{Path, PathBuf};

use crate::domain::{GroupedPackages, PackageManager, SetupAnswers, ShellCommand};
use crate::error::NodekitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nodekit_adapters::filesystem::LocalFilesystem` (production)
/// - `nodekit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> NodekitResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> NodekitResult<()>;

    /// Mark a file executable (0o755 on Unix; no-op elsewhere).
    fn set_executable(&self, path: &Path) -> NodekitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NodekitResult<()>;
}

/// Port for running external programs (package managers, `npx`).
///
/// Implementations run the command to completion with the user's terminal
/// attached and fail on a non-zero exit status.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ShellCommand) -> NodekitResult<()>;
}

/// Outcome of looking up an ESLint plugin package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginLookup {
    Found,
    Missing,
}

/// Port answering whether a plugin package is available to the project.
#[cfg_attr(test, mockall::automock)]
pub trait PluginResolver: Send + Sync {
    fn resolve(&self, plugin: &str) -> PluginLookup;
}

/// Port for asking the user questions.
///
/// Both operations return `ApplicationError::Cancelled` when the user
/// dismisses the prompt (Esc, `q`, Ctrl-C).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> NodekitResult<usize>;

    /// Yes / no question.
    fn confirm(&self, prompt: &str, default: bool) -> NodekitResult<bool>;
}

/// Something worth telling the user while a flow runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Numbered step of a multi-step flow.
    Step {
        index: usize,
        total: usize,
        title: String,
    },
    /// The collected answers.
    Summary(SetupAnswers),
    /// Packages about to be requested, grouped for display.
    PackagePlan {
        manager: PackageManager,
        groups: Vec<GroupedPackages>,
    },
    /// The install command is starting.
    Installing { command: String },
    Installed { count: usize },
    /// A file was written; `overwritten` when it existed before.
    FileWritten { path: PathBuf, overwritten: bool },
    /// An existing JSON file was merged with new keys.
    FileUpdated { path: PathBuf, change: String },
    HookWritten {
        name: String,
        description: String,
        overwritten: bool,
    },
    /// A file update was skipped and the flow carried on.
    Skipped { path: PathBuf, reason: String },
    Info(String),
    Warning(String),
    /// The user declined the install; nothing was changed.
    Declined,
    Cancelled,
    Completed,
}

/// Port for progress output. Reporting never fails.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}
