//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments and configuration into core services built
//! from the real adapters, run them, and report the outcome.  No setup logic
//! lives here.

pub mod completions;
pub mod config;
pub mod node;
pub mod setup;

use nodekit_core::application::{Prompter, SetupOptions};

use crate::error::{CliError, CliResult};

/// Check that the project directory exists before any adapter touches it.
fn ensure_project_dir(options: &SetupOptions) -> CliResult<()> {
    if options.root.is_dir() {
        Ok(())
    } else {
        Err(CliError::ProjectDirNotFound {
            path: options.root.clone(),
        })
    }
}

#[cfg(feature = "interactive")]
fn prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(crate::prompt::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
