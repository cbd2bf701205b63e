//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Package manager and `npx` invocations
//!   - `PluginResolver`: Installed-package lookups
//!   - `Prompter`: Interactive questions
//!   - `ProgressReporter`: User-facing progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `SetupService::run`, `NodePresetService::run`

pub mod output;

pub use output::{
    CommandRunner, Filesystem, PluginLookup, PluginResolver, ProgressEvent, ProgressReporter,
    Prompter,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockPluginResolver, MockPrompter};
