//! Command runner that records instead of executing.

use std::sync::{Arc, Mutex, MutexGuard};

use nodekit_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ShellCommand,
    error::NodekitResult,
};

/// Test runner: records every command and optionally fails programs.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    commands: Vec<ShellCommand>,
    failing: Vec<String>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every command whose program is `program` fail.
    pub fn failing(self, program: impl Into<String>) -> Self {
        self.lock().failing.push(program.into());
        self
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<ShellCommand> {
        self.lock().commands.clone()
    }

    /// The recorded commands rendered as strings.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().commands.iter().map(ToString::to_string).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, command: &ShellCommand) -> NodekitResult<()> {
        let mut recorded = self.lock();
        recorded.commands.push(command.clone());

        if recorded.failing.iter().any(|p| p == command.program()) {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: "exited with status 1".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_fails_by_program() {
        let runner = RecordingCommandRunner::new().failing("npx");

        runner
            .run(&ShellCommand::new("npm", vec!["install".into()]))
            .unwrap();
        assert!(runner.run(&ShellCommand::husky_init()).is_err());

        assert_eq!(runner.command_lines(), ["npm install", "npx husky init"]);
    }
}
