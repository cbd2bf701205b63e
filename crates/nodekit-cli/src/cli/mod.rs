//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "nodekit",
    bin_name = "nodekit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Dev-tooling setup for JavaScript and TypeScript projects",
    long_about = "nodekit asks a few questions about your project, installs ESLint, \
                  Prettier, Commitlint, lint-staged and Husky with the package manager \
                  your lockfile points at, and writes their configuration files.",
    after_help = "EXAMPLES:\n\
        \x20 nodekit                 # interactive setup in the current directory\n\
        \x20 nodekit setup -C web    # interactive setup in ./web\n\
        \x20 nodekit node            # TypeScript scaffolding for a Node.js service\n\
        \x20 nodekit completions bash > /usr/share/bash-completion/completions/nodekit",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive setup when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive setup (the default).
    #[command(
        about = "Run the interactive setup",
        after_help = "EXAMPLES:\n\
            \x20 nodekit setup\n\
            \x20 nodekit setup --dir packages/web --eslint-ext js\n\
            \x20 nodekit setup --skip-husky-init"
    )]
    Setup(SetupArgs),

    /// Prepare a plain Node.js project for TypeScript, then offer the setup.
    #[command(
        about = "Node.js TypeScript preset",
        after_help = "EXAMPLES:\n\
            \x20 nodekit node\n\
            \x20 nodekit node --dir services/api"
    )]
    Node(SetupArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 nodekit completions bash > ~/.local/share/bash-completion/completions/nodekit\n\
            \x20 nodekit completions zsh  > ~/.zfunc/_nodekit\n\
            \x20 nodekit completions fish > ~/.config/fish/completions/nodekit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the nodekit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 nodekit config get setup.hooks_dir\n\
            \x20 nodekit config list\n\
            \x20 nodekit config init --local"
    )]
    Config(ConfigCommands),
}

// ── setup / node ──────────────────────────────────────────────────────────────

/// Arguments shared by `nodekit setup` and `nodekit node`.
///
/// Each flag overrides the matching `setup.*` configuration key.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Project directory.
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// ESLint config file extension.
    #[arg(
        long = "eslint-ext",
        value_name = "EXT",
        help = "Extension of the generated eslint.config file (mjs, js, cjs)"
    )]
    pub eslint_extension: Option<String>,

    /// Module the generated ESLint config imports from.
    #[arg(
        long = "eslint-preset",
        value_name = "MODULE",
        help = "Module the generated ESLint config imports its helpers from"
    )]
    pub eslint_preset: Option<String>,

    /// Hooks directory, relative to the project.
    #[arg(long = "hooks-dir", value_name = "DIR", help = "Git hooks directory")]
    pub hooks_dir: Option<PathBuf>,

    /// Do not run `npx husky init`.
    #[arg(
        long = "skip-husky-init",
        help = "Create the hooks directory without running husky init"
    )]
    pub skip_husky_init: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `nodekit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `nodekit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `setup.hooks_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Write `.nodekit.toml` in the current directory instead.
        #[arg(long = "local", help = "Create .nodekit.toml in the current directory")]
        local: bool,

        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_setup() {
        let cli = Cli::parse_from(["nodekit"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_setup_overrides() {
        let cli = Cli::parse_from([
            "nodekit",
            "setup",
            "-C",
            "web",
            "--eslint-ext",
            "js",
            "--skip-husky-init",
        ]);
        let Some(Commands::Setup(args)) = cli.command else {
            panic!("expected Setup command");
        };
        assert_eq!(args.dir, Some(PathBuf::from("web")));
        assert_eq!(args.eslint_extension.as_deref(), Some("js"));
        assert!(args.skip_husky_init);
        assert!(args.eslint_preset.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["nodekit", "node", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
        assert!(matches!(cli.command, Some(Commands::Node(_))));
    }

    #[test]
    fn config_init_flags() {
        let cli = Cli::parse_from(["nodekit", "config", "init", "--local", "-f"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Init {
                local: true,
                force: true
            }))
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["nodekit", "--quiet", "--verbose", "setup"]);
        assert!(result.is_err());
    }
}
