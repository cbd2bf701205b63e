//! Node.js preset: TypeScript scaffolding for a plain Node.js project.

use tracing::{info, instrument};

use crate::application::ports::{
    CommandRunner, Filesystem, ProgressEvent, ProgressReporter, Prompter,
};
use crate::application::services::emitter::ConfigEmitter;
use crate::application::{ApplicationError, SetupOptions};
use crate::domain::{
    NODE_PRESET_PACKAGES, NodeManifestPatch, PACKAGE_JSON_FILE, PackageManager, TSCONFIG_FILE,
    default_tsconfig, to_json_pretty,
};
use crate::error::NodekitResult;

const TOTAL_STEPS: usize = 4;

/// What to do after the preset finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOutcome {
    /// The user wants the interactive setup next.
    ContinueSetup,
    Finished,
}

pub struct NodePresetService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    prompter: Box<dyn Prompter>,
    reporter: Box<dyn ProgressReporter>,
    options: SetupOptions,
}

impl NodePresetService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
        reporter: Box<dyn ProgressReporter>,
        options: SetupOptions,
    ) -> Self {
        Self {
            filesystem,
            runner,
            prompter,
            reporter,
            options,
        }
    }

    #[instrument(skip_all, fields(root = %self.options.root.display()))]
    pub fn run(&self) -> NodekitResult<PresetOutcome> {
        let manager = PackageManager::detect(|lockfile| {
            self.filesystem.exists(&self.options.path(lockfile))
        });
        info!(%manager, "package manager detected");
        self.reporter
            .report(ProgressEvent::Info(format!("Detected package manager: {manager}")));

        let emitter = ConfigEmitter::new(
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
            &self.options,
        );

        self.step(1, "Creating tsconfig.json");
        let tsconfig_path = self.options.path(TSCONFIG_FILE);
        if self.filesystem.exists(&tsconfig_path) {
            self.reporter.report(ProgressEvent::Warning(
                "tsconfig.json already exists, skipping creation".into(),
            ));
        } else {
            emitter.write(
                &tsconfig_path,
                &to_json_pretty(&default_tsconfig(), TSCONFIG_FILE)?,
            )?;
        }

        self.step(2, "Updating package.json");
        let manifest_path = self.options.path(PACKAGE_JSON_FILE);
        let mut manifest = emitter
            .read_json(&manifest_path)?
            .ok_or_else(|| ApplicationError::ManifestNotFound {
                path: manifest_path.clone(),
            })?;
        let changes = NodeManifestPatch::default().apply(&mut manifest)?;
        if changes.is_empty() {
            self.reporter.report(ProgressEvent::Warning(
                "main entry and scripts already exist, skipping".into(),
            ));
        } else {
            emitter.update(
                &manifest_path,
                &to_json_pretty(&manifest, PACKAGE_JSON_FILE)?,
                changes.to_string(),
            )?;
        }

        self.step(3, "Installing dependencies");
        let install = manager.install_command(NODE_PRESET_PACKAGES, true);
        self.reporter.report(ProgressEvent::Installing {
            command: install.to_string(),
        });
        self.runner.run(&install)?;
        self.reporter.report(ProgressEvent::Installed {
            count: NODE_PRESET_PACKAGES.len(),
        });

        self.step(4, "Interactive setup");
        let proceed = match self.prompter.confirm(
            "Continue with interactive setup (ESLint, Prettier, Commitlint, Husky)?",
            true,
        ) {
            Err(e) if e.is_cancelled() => false,
            other => other?,
        };

        if proceed {
            Ok(PresetOutcome::ContinueSetup)
        } else {
            info!("preset finished without interactive setup");
            self.reporter.report(ProgressEvent::Completed);
            Ok(PresetOutcome::Finished)
        }
    }

    fn step(&self, index: usize, title: &str) {
        self.reporter.report(ProgressEvent::Step {
            index,
            total: TOTAL_STEPS,
            title: title.to_string(),
        });
    }
}
