//! `nodekit setup`: the interactive setup, also run when no subcommand is
//! given.

use tracing::{info, instrument};

use nodekit_adapters::{LocalFilesystem, NodeModulesResolver, ShellCommandRunner};
use nodekit_core::application::{SetupOptions, SetupOutcome, SetupService};

use crate::{
    cli::SetupArgs, config::AppConfig, error::CliResult, output::OutputManager,
    progress::TerminalReporter,
};

pub fn execute(args: SetupArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = config.setup_options(&args);
    super::ensure_project_dir(&options)?;
    run(options, &output)
}

/// Build the service from the real adapters and run it.
///
/// Shared with `nodekit node`, which continues here when the user asks for it.
#[instrument(skip_all, fields(root = %options.root.display()))]
pub(crate) fn run(options: SetupOptions, output: &OutputManager) -> CliResult<()> {
    let service = SetupService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ShellCommandRunner::new(options.root.clone())),
        Box::new(NodeModulesResolver::new(options.root.clone())),
        super::prompter()?,
        Box::new(TerminalReporter::new(output.clone())),
        options,
    );

    match service.run()? {
        SetupOutcome::Completed => info!("setup completed"),
        SetupOutcome::Declined => info!("setup declined"),
        SetupOutcome::Cancelled => info!("setup cancelled"),
    }

    Ok(())
}
