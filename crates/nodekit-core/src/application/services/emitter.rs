//! Config emitters: turn generated documents into files.
//!
//! Required artifacts (`.commitlintrc.json`, `.prettierrc.json`, the ESLint
//! config, hooks) propagate their errors. Non-critical updates (`.gitignore`,
//! the `package.json` patch, the tsconfig alias) are reported as skipped and
//! the flow carries on.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::ApplicationError;
use crate::application::SetupOptions;
use crate::application::ports::{
    Filesystem, PluginLookup, PluginResolver, ProgressEvent, ProgressReporter,
};
use crate::domain::{
    COMMITLINT_CONFIG_FILE, GIT_HOOKS, GITIGNORE_FILE, PACKAGE_JSON_FILE, PRETTIER_CONFIG_FILE,
    PackageManager, SetupAnswers, TSCONFIG_FILE, apply_typescript_alias, build_lint_templates,
    gitignore_content, recommended_commitlint_config, to_json_pretty,
};
use crate::error::NodekitResult;

/// Writes artifacts under the project root.
pub struct ConfigEmitter<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn ProgressReporter,
    options: &'a SetupOptions,
}

impl<'a> ConfigEmitter<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        reporter: &'a dyn ProgressReporter,
        options: &'a SetupOptions,
    ) -> Self {
        Self {
            filesystem,
            reporter,
            options,
        }
    }

    // -------------------------------------------------------------------------
    // Primitives
    // -------------------------------------------------------------------------

    /// Write `content` to `path`, replacing any existing file.
    pub fn write(&self, path: &Path, content: &str) -> NodekitResult<()> {
        let overwritten = self.filesystem.exists(path);
        if overwritten {
            debug!(path = %path.display(), "overwriting existing file");
        }

        self.filesystem.write_file(path, content)?;
        self.reporter.report(ProgressEvent::FileWritten {
            path: self.display_path(path),
            overwritten,
        });
        Ok(())
    }

    /// Rewrite a JSON file that was merged in place.
    pub fn update(
        &self,
        path: &Path,
        content: &str,
        change: impl Into<String>,
    ) -> NodekitResult<()> {
        self.filesystem.write_file(path, content)?;
        self.reporter.report(ProgressEvent::FileUpdated {
            path: self.display_path(path),
            change: change.into(),
        });
        Ok(())
    }

    /// Read and parse a JSON file. `Ok(None)` when it does not exist.
    pub fn read_json(&self, path: &Path) -> NodekitResult<Option<Value>> {
        if !self.filesystem.exists(path) {
            return Ok(None);
        }

        let text = self.filesystem.read_to_string(path)?;
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| {
                ApplicationError::MalformedFile {
                    path: self.display_path(path),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn skip(&self, path: &Path, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(path = %path.display(), %reason, "skipping file update");
        self.reporter.report(ProgressEvent::Skipped {
            path: self.display_path(path),
            reason,
        });
    }

    /// Report a non-critical failure instead of propagating it.
    fn non_critical(&self, path: &Path, result: NodekitResult<()>) {
        if let Err(e) = result {
            self.skip(path, e.to_string());
        }
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.options.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    // -------------------------------------------------------------------------
    // Artifacts
    // -------------------------------------------------------------------------

    /// `.commitlintrc.json` from the recommended commit types.
    pub fn emit_commitlint(&self) -> NodekitResult<()> {
        let config = recommended_commitlint_config()?;
        let content = to_json_pretty(&config, COMMITLINT_CONFIG_FILE)?;
        self.write(&self.options.path(COMMITLINT_CONFIG_FILE), &content)?;
        info!(types = config.types.len(), "commitlint configured");
        Ok(())
    }

    /// `.prettierrc.json`, the ESLint config, and the `package.json` patch.
    ///
    /// Every plugin the selected bundles need is looked up before the ESLint
    /// config is written; the first missing one aborts with
    /// `ApplicationError::MissingPlugin`.
    pub fn emit_lint(
        &self,
        answers: &SetupAnswers,
        resolver: &dyn PluginResolver,
        manager: PackageManager,
    ) -> NodekitResult<()> {
        let templates = build_lint_templates(answers, &self.options.eslint_preset);

        let prettier = to_json_pretty(&templates.prettier, PRETTIER_CONFIG_FILE)?;
        self.write(&self.options.path(PRETTIER_CONFIG_FILE), &prettier)?;

        for plugin in templates.required_plugins() {
            if resolver.resolve(plugin) == PluginLookup::Missing {
                let install_command = manager.install_command(&[plugin], true).to_string();
                warn!(plugin, "ESLint plugin is not installed");
                return Err(ApplicationError::MissingPlugin {
                    plugin: plugin.to_string(),
                    install_command,
                }
                .into());
            }
            debug!(plugin, "plugin resolved");
        }

        self.write(&self.options.eslint_config_path(), &templates.eslint_source())?;

        let manifest_path = self.options.path(PACKAGE_JSON_FILE);
        let patched = self.read_json(&manifest_path).and_then(|manifest| {
            let Some(mut manifest) = manifest else {
                return Ok(false);
            };
            templates.package_json_patch.apply(&mut manifest)?;
            self.update(
                &manifest_path,
                &to_json_pretty(&manifest, PACKAGE_JSON_FILE)?,
                "added scripts and lint-staged config",
            )?;
            Ok(true)
        });
        match patched {
            Ok(true) => {}
            Ok(false) => self.skip(&manifest_path, "file not found"),
            Err(e) => self.skip(&manifest_path, e.to_string()),
        }

        Ok(())
    }

    /// `.gitignore` from the fixed template. Non-critical.
    pub fn emit_gitignore(&self) {
        let path = self.options.path(GITIGNORE_FILE);
        let result = self.write(&path, &gitignore_content());
        self.non_critical(&path, result);
    }

    /// The husky hooks, each marked executable.
    pub fn emit_hooks(&self) -> NodekitResult<()> {
        let dir = self.options.hooks_path();
        if !self.filesystem.exists(&dir) {
            self.filesystem.create_dir_all(&dir)?;
        }

        for hook in GIT_HOOKS {
            let path = dir.join(hook.name);
            let overwritten = self.filesystem.exists(&path);
            if overwritten {
                debug!(path = %path.display(), "replacing existing hook");
            }
            self.filesystem.write_file(&path, hook.content)?;
            self.filesystem.set_executable(&path)?;
            self.reporter.report(ProgressEvent::HookWritten {
                name: hook.name.to_string(),
                description: hook.description.to_string(),
                overwritten,
            });
        }

        info!(count = GIT_HOOKS.len(), dir = %dir.display(), "git hooks written");
        Ok(())
    }

    /// Add the `@/*` alias to `tsconfig.json`. Non-critical; a missing file
    /// is skipped with a warning.
    pub fn apply_alias(&self) {
        let path = self.options.path(TSCONFIG_FILE);
        let result = self.read_json(&path).and_then(|tsconfig| {
            let Some(mut tsconfig) = tsconfig else {
                return Ok(false);
            };
            apply_typescript_alias(&mut tsconfig)?;
            self.update(
                &path,
                &to_json_pretty(&tsconfig, TSCONFIG_FILE)?,
                "alias imports: baseUrl \"src\", paths { \"@/*\": [\"./*\"] }",
            )?;
            Ok(true)
        });

        match result {
            Ok(true) => {}
            Ok(false) => self.skip(&path, "tsconfig.json not found, skipping alias setup"),
            Err(e) => self.skip(&path, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockPluginResolver};
    use crate::domain::Framework;
    use crate::error::NodekitError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Events(Mutex<Vec<ProgressEvent>>);

    impl ProgressReporter for Events {
        fn report(&self, event: ProgressEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    impl Events {
        fn take(&self) -> Vec<ProgressEvent> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    fn options() -> SetupOptions {
        SetupOptions::new("/p")
    }

    #[test]
    fn write_reports_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let events = Events::default();
        let opts = options();

        ConfigEmitter::new(&fs, &events, &opts)
            .write(Path::new("/p/.gitignore"), "x")
            .unwrap();

        assert_eq!(
            events.take(),
            [ProgressEvent::FileWritten {
                path: PathBuf::from(".gitignore"),
                overwritten: true
            }]
        );
    }

    #[test]
    fn missing_plugin_stops_before_eslint_config() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|path, _| path.ends_with(".prettierrc.json"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut resolver = MockPluginResolver::new();
        resolver
            .expect_resolve()
            .returning(|p| match p {
                "eslint-plugin-storybook" => PluginLookup::Missing,
                _ => PluginLookup::Found,
            });

        let answers = SetupAnswers::builder()
            .framework(Framework::React)
            .storybook(true)
            .build();
        let events = Events::default();
        let opts = options();

        let err = ConfigEmitter::new(&fs, &events, &opts)
            .emit_lint(&answers, &resolver, PackageManager::Pnpm)
            .unwrap_err();

        assert_eq!(
            err,
            NodekitError::from(ApplicationError::MissingPlugin {
                plugin: "eslint-plugin-storybook".into(),
                install_command: "pnpm add -D eslint-plugin-storybook".into(),
            })
        );
    }

    #[test]
    fn lookups_stop_at_first_missing_plugin() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut resolver = MockPluginResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| PluginLookup::Missing);

        let answers = SetupAnswers::builder().framework(Framework::Next).build();
        let events = Events::default();
        let opts = options();

        let result = ConfigEmitter::new(&fs, &events, &opts).emit_lint(
            &answers,
            &resolver,
            PackageManager::Npm,
        );
        assert!(result.is_err());
    }

    #[test]
    fn malformed_tsconfig_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("{ not json".into()));
        fs.expect_write_file().never();
        let events = Events::default();
        let opts = options();

        ConfigEmitter::new(&fs, &events, &opts).apply_alias();

        let events = events.take();
        assert!(matches!(
            events.as_slice(),
            [ProgressEvent::Skipped { path, .. }] if path == Path::new("tsconfig.json")
        ));
    }

    #[test]
    fn gitignore_write_failure_is_not_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        let events = Events::default();
        let opts = options();

        ConfigEmitter::new(&fs, &events, &opts).emit_gitignore();

        assert!(matches!(events.take().as_slice(), [ProgressEvent::Skipped { .. }]));
    }

    #[test]
    fn existing_hook_is_reported_as_replaced() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with(".husky") || p.ends_with("pre-commit"));
        fs.expect_write_file().times(3).returning(|_, _| Ok(()));
        fs.expect_set_executable().times(3).returning(|_| Ok(()));
        let events = Events::default();
        let opts = options();

        ConfigEmitter::new(&fs, &events, &opts).emit_hooks().unwrap();

        let replaced: Vec<_> = events
            .take()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::HookWritten {
                    name,
                    overwritten: true,
                    ..
                } => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(replaced, ["pre-commit"]);
    }

    #[test]
    fn alias_merge_is_reported_as_update() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{ "compilerOptions": { "strict": true } }"#.into()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));
        let events = Events::default();
        let opts = options();

        ConfigEmitter::new(&fs, &events, &opts).apply_alias();

        assert!(matches!(
            events.take().as_slice(),
            [ProgressEvent::FileUpdated { path, .. }] if path == Path::new("tsconfig.json")
        ));
    }

    #[test]
    fn hook_write_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "denied".into(),
            }
            .into())
        });
        fs.expect_set_executable().never();
        let events = Events::default();
        let opts = options();

        assert!(ConfigEmitter::new(&fs, &events, &opts).emit_hooks().is_err());
    }
}
