//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`SetupOptions`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by [`AppConfig::setup_options`])
//! 2. Environment variables `NODEKIT_*`, `__` between nesting levels
//!    (`NODEKIT_SETUP__HOOKS_DIR=.githooks`)
//! 3. `--config FILE`, or else the global file followed by `.nodekit.toml`
//!    in the working directory
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use nodekit_core::application::SetupOptions;
use nodekit_core::domain::{DEFAULT_ESLINT_EXTENSION, DEFAULT_ESLINT_PRESET, DEFAULT_HOOKS_DIR};

use crate::cli::SetupArgs;

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".nodekit.toml";

const ENV_PREFIX: &str = "NODEKIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Defaults for the setup flows.
    pub setup: SetupConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub eslint_extension: String,
    pub eslint_preset: String,
    pub hooks_dir: PathBuf,
    pub run_husky_init: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            setup: SetupConfig {
                eslint_extension: DEFAULT_ESLINT_EXTENSION.into(),
                eslint_preset: DEFAULT_ESLINT_PRESET.into(),
                hooks_dir: PathBuf::from(DEFAULT_HOOKS_DIR),
                run_husky_init: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  Without
    /// it the global and project-local files are read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let files = match config_file {
            Some(path) => vec![(path.clone(), true)],
            None => vec![
                (Self::config_path(), false),
                (PathBuf::from(LOCAL_CONFIG_FILE), false),
            ],
        };
        Self::load_from(&files)
    }

    fn load_from(files: &[(PathBuf, bool)]) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .set_default("setup.eslint_extension", defaults.setup.eslint_extension)?
            .set_default("setup.eslint_preset", defaults.setup.eslint_preset)?
            .set_default(
                "setup.hooks_dir",
                defaults.setup.hooks_dir.to_string_lossy().into_owned(),
            )?
            .set_default("setup.run_husky_init", defaults.setup.run_husky_init)?;

        for (path, required) in files {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.nodekit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "nodekit", "nodekit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Merge the `setup` section with per-invocation flags.
    pub fn setup_options(&self, args: &SetupArgs) -> SetupOptions {
        let root = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        SetupOptions::new(root)
            .with_eslint_extension(
                args.eslint_extension
                    .clone()
                    .unwrap_or_else(|| self.setup.eslint_extension.clone()),
            )
            .with_eslint_preset(
                args.eslint_preset
                    .clone()
                    .unwrap_or_else(|| self.setup.eslint_preset.clone()),
            )
            .with_hooks_dir(
                args.hooks_dir
                    .clone()
                    .unwrap_or_else(|| self.setup.hooks_dir.clone()),
            )
            .with_husky_init(self.setup.run_husky_init && !args.skip_husky_init)
    }

    /// Serialize to the TOML written by `config init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }
}

/// Default location for `config init`.
pub fn init_path(local: bool) -> PathBuf {
    if local {
        Path::new(".").join(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    }
}
