//! Flags shared by every nodekit subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so
//! `nodekit -q setup` and `nodekit setup -q` mean the same thing.

use clap::{ArgAction, Args, ValueEnum};
use std::path::PathBuf;

/// Verbosity, colour, config file and rendering.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Log more while setting up: -v info, -vv debug, -vvv trace
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        long_help = "Log more while setting up. Logs go to stderr.
    (none)  warnings and errors
    -v      each setup step
    -vv     file writes, lookups and commands
    -vvv    everything

RUST_LOG overrides this flag."
    )]
    pub verbose: u8,

    /// Print only errors and the values of `config` queries
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print without ANSI colours (also set by NO_COLOR)
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the user and project config files
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Progress rendering; `auto` picks human on a terminal, plain otherwise
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto
    )]
    pub output_format: OutputFormat,
}

/// Rendering of progress events and command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured lines with status glyphs.
    Human,
    /// The same lines with no colour.
    Plain,
    /// One JSON object per progress event.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from(["nodekit", "setup", "-vv", "--output-format", "json"])
            .unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["nodekit", "-q", "-v"]).is_err());
    }

    #[test]
    fn config_file_flag_is_a_path() {
        let cli = Cli::try_parse_from(["nodekit", "node", "-c", "ci/nodekit.toml"]).unwrap();
        assert_eq!(cli.global.config, Some(PathBuf::from("ci/nodekit.toml")));
    }
}
