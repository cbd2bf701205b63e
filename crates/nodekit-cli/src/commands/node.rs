//! `nodekit node`: TypeScript scaffolding for a Node.js project, optionally
//! followed by the interactive setup.

use tracing::{info, instrument};

use nodekit_adapters::{LocalFilesystem, ShellCommandRunner};
use nodekit_core::application::{NodePresetService, PresetOutcome};

use crate::{
    cli::SetupArgs, config::AppConfig, error::CliResult, output::OutputManager,
    progress::TerminalReporter,
};

#[instrument(skip_all)]
pub fn execute(args: SetupArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = config.setup_options(&args);
    super::ensure_project_dir(&options)?;

    let preset = NodePresetService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ShellCommandRunner::new(options.root.clone())),
        super::prompter()?,
        Box::new(TerminalReporter::new(output.clone())),
        options.clone(),
    );

    match preset.run()? {
        PresetOutcome::ContinueSetup => {
            info!("continuing with interactive setup");
            super::setup::run(options, &output)
        }
        PresetOutcome::Finished => Ok(()),
    }
}
