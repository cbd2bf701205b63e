//! Subprocess adapters.

mod recording;
mod shell;

pub use recording::RecordingCommandRunner;
pub use shell::ShellCommandRunner;
