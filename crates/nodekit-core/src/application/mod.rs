//! Application layer for nodekit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService, NodePresetService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences I/O around the domain layer. Package
//! selection and document contents are decided in `crate::domain`.

pub mod error;
pub mod options;
pub mod ports;
pub mod services;

pub use services::{
    ConfigEmitter, NodePresetService, PresetOutcome, SetupOutcome, SetupService, collect_answers,
};

pub use ports::{
    CommandRunner, Filesystem, PluginLookup, PluginResolver, ProgressEvent, ProgressReporter,
    Prompter,
};

pub use error::ApplicationError;
pub use options::SetupOptions;
