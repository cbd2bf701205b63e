//! Infrastructure adapters for nodekit.
//!
//! This crate implements the ports defined in `nodekit_core::application::ports`.
//! It contains the filesystem, subprocess, and plugin-lookup I/O, plus the
//! in-memory and recording doubles used by the flow tests.

pub mod filesystem;
pub mod process;
pub mod recording;
pub mod resolver;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, ShellCommandRunner};
pub use recording::{RecordingReporter, Reply, ScriptedPrompter};
pub use resolver::{FixedResolver, NodeModulesResolver};
