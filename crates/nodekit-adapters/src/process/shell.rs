//! Runs commands with `std::process::Command`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use nodekit_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ShellCommand,
    error::NodekitResult,
};

/// Production runner. Inherits the terminal so package-manager progress and
/// prompts reach the user.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    working_dir: PathBuf,
}

impl ShellCommandRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, command: &ShellCommand) -> Command {
        // npm, npx, yarn and pnpm are .cmd shims on Windows
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command.program());
            cmd
        } else {
            Command::new(command.program())
        };

        cmd.args(command.args())
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &ShellCommand) -> NodekitResult<()> {
        info!(%command, dir = %self.working_dir.display(), "running command");

        let status = self
            .command(command)
            .status()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(%command, ?status, "command exited");
        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: match status.code() {
                    Some(code) => format!("exited with status {code}"),
                    None => "terminated by signal".into(),
                },
            }
            .into())
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nodekit_core::error::NodekitError;

    #[test]
    fn successful_command() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ShellCommandRunner::new(dir.path());
        runner.run(&ShellCommand::new("true", vec![])).unwrap();
    }

    #[test]
    fn non_zero_exit_is_command_failed() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellCommandRunner::new(dir.path())
            .run(&ShellCommand::new("false", vec![]))
            .unwrap_err();

        let NodekitError::Application(ApplicationError::CommandFailed { command, reason }) = err
        else {
            panic!("expected CommandFailed");
        };
        assert_eq!(command, "false");
        assert!(reason.contains("status 1"));
    }

    #[test]
    fn missing_program_is_command_failed() {
        let dir = tempfile::tempdir().unwrap();
        let result = ShellCommandRunner::new(dir.path()).run(&ShellCommand::new(
            "nodekit-definitely-not-a-program",
            vec![],
        ));
        assert!(result.is_err());
    }
}
