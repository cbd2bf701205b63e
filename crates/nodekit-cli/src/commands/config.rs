//! `nodekit config`: inspect and create configuration files.

use std::path::Path;

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, init_path},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.value(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&config.to_toml().map_err(CliError::config)?)?;
        }

        ConfigCommands::Path => {
            output.value(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init { local, force } => {
            let path = init_path(local);
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }
            write_default_config(&path)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `setup.hooks_dir`.
///
/// Strings print bare; other values print as JSON.  Sections are not values.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let tree = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let value = key
        .split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .ok_or_else(unknown)?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(_) => Err(unknown()),
        other => Ok(other.to_string()),
    }
}

fn write_default_config(path: &Path) -> CliResult<()> {
    let toml = AppConfig::default().to_toml().map_err(CliError::config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_string_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "setup.hooks_dir").unwrap(), ".husky");
        assert_eq!(
            get_config_value(&cfg, "setup.eslint_preset").unwrap(),
            "@jjuidev/node-devtools"
        );
    }

    #[test]
    fn get_bool_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "setup.run_husky_init").unwrap(), "true");
    }

    #[test]
    fn unknown_key_is_configuration_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn section_is_not_a_value() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "setup").is_err());
    }

    #[test]
    fn default_config_file_is_loadable() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }
}
