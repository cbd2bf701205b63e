//! Run options shared by the setup flows.

use std::path::{Path, PathBuf};

use crate::domain::{DEFAULT_ESLINT_EXTENSION, DEFAULT_ESLINT_PRESET, DEFAULT_HOOKS_DIR, eslint_config_file};

/// Where and how the setup writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// Project root; every artifact path is relative to it.
    pub root: PathBuf,
    /// Hooks directory, relative to `root`.
    pub hooks_dir: PathBuf,
    pub eslint_extension: String,
    /// Module the ESLint config imports its helpers from.
    pub eslint_preset: String,
    /// Run `npx husky init` before writing hooks.
    pub run_husky_init: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            hooks_dir: PathBuf::from(DEFAULT_HOOKS_DIR),
            eslint_extension: DEFAULT_ESLINT_EXTENSION.into(),
            eslint_preset: DEFAULT_ESLINT_PRESET.into(),
            run_husky_init: true,
        }
    }
}

impl SetupOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_hooks_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.hooks_dir = dir.into();
        self
    }

    pub fn with_eslint_extension(mut self, extension: impl Into<String>) -> Self {
        self.eslint_extension = extension.into();
        self
    }

    pub fn with_eslint_preset(mut self, preset: impl Into<String>) -> Self {
        self.eslint_preset = preset.into();
        self
    }

    pub fn with_husky_init(mut self, enabled: bool) -> Self {
        self.run_husky_init = enabled;
        self
    }

    /// Resolve a project-relative path.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn hooks_path(&self) -> PathBuf {
        self.root.join(&self.hooks_dir)
    }

    pub fn eslint_config_path(&self) -> PathBuf {
        self.root.join(eslint_config_file(&self.eslint_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_generated_layout() {
        let options = SetupOptions::new("/work");
        assert_eq!(options.hooks_path(), PathBuf::from("/work/.husky"));
        assert_eq!(options.eslint_config_path(), PathBuf::from("/work/eslint.config.mjs"));
        assert!(options.run_husky_init);
    }

    #[test]
    fn overrides_apply() {
        let options = SetupOptions::new("/work")
            .with_hooks_dir(".githooks")
            .with_eslint_extension("js")
            .with_husky_init(false);
        assert_eq!(options.hooks_path(), PathBuf::from("/work/.githooks"));
        assert_eq!(options.eslint_config_path(), PathBuf::from("/work/eslint.config.js"));
        assert!(!options.run_husky_init);
    }
}
