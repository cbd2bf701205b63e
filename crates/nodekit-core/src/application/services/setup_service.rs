//! Setup Service - the interactive setup orchestrator.
//!
//! ```text
//! collect answers ─▶ summarize ─▶ resolve packages ─▶ confirm
//!        │                                              │ no / cancel
//!        │ cancel                                       ▼
//!        ▼                                           Declined
//!    Cancelled          install ─▶ commitlint ─▶ lint ─▶ [gitignore]
//!                          ─▶ husky init ─▶ hooks ─▶ [alias] ─▶ Completed
//! ```
//!
//! An install failure is fatal and nothing is rolled back. Files written
//! before a later failure stay on disk.

use tracing::{info, instrument, warn};

use crate::application::SetupOptions;
use crate::application::ports::{
    CommandRunner, Filesystem, PluginResolver, ProgressEvent, ProgressReporter, Prompter,
};
use crate::application::services::emitter::ConfigEmitter;
use crate::application::services::questionnaire::collect_answers;
use crate::domain::{PackageManager, SetupAnswers, ShellCommand, group_packages, resolve_packages};
use crate::error::NodekitResult;

/// How a setup run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Completed,
    /// The user said no to the install.
    Declined,
    /// The user dismissed a question.
    Cancelled,
}

/// Interactive setup service.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    resolver: Box<dyn PluginResolver>,
    prompter: Box<dyn Prompter>,
    reporter: Box<dyn ProgressReporter>,
    options: SetupOptions,
}

impl SetupService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        resolver: Box<dyn PluginResolver>,
        prompter: Box<dyn Prompter>,
        reporter: Box<dyn ProgressReporter>,
        options: SetupOptions,
    ) -> Self {
        Self {
            filesystem,
            runner,
            resolver,
            prompter,
            reporter,
            options,
        }
    }

    /// Ask the questions, then run the setup for the answers.
    #[instrument(skip_all, fields(root = %self.options.root.display()))]
    pub fn run(&self) -> NodekitResult<SetupOutcome> {
        let answers = match collect_answers(self.prompter.as_ref()) {
            Err(e) if e.is_cancelled() => {
                info!("setup cancelled during questionnaire");
                self.reporter.report(ProgressEvent::Cancelled);
                return Ok(SetupOutcome::Cancelled);
            }
            other => other?,
        };

        self.run_with(answers)
    }

    /// Run the setup for already-known answers.
    #[instrument(skip_all, fields(answers = %answers))]
    pub fn run_with(&self, answers: SetupAnswers) -> NodekitResult<SetupOutcome> {
        self.reporter.report(ProgressEvent::Summary(answers));

        let packages = resolve_packages(&answers);
        let manager = self.detect_package_manager();
        info!(%manager, count = packages.len(), "packages resolved");

        self.reporter.report(ProgressEvent::PackagePlan {
            manager,
            groups: group_packages(&packages),
        });

        let confirmed = match self
            .prompter
            .confirm("Install these packages and configure the project?", true)
        {
            Err(e) if e.is_cancelled() => false,
            other => other?,
        };
        if !confirmed {
            info!("install declined");
            self.reporter.report(ProgressEvent::Declined);
            return Ok(SetupOutcome::Declined);
        }

        let install = manager.install_command(&packages, true);
        self.reporter.report(ProgressEvent::Installing {
            command: install.to_string(),
        });
        self.runner.run(&install)?;
        self.reporter.report(ProgressEvent::Installed {
            count: packages.len(),
        });

        let emitter = ConfigEmitter::new(
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
            &self.options,
        );

        emitter.emit_commitlint()?;
        emitter.emit_lint(&answers, self.resolver.as_ref(), manager)?;
        if answers.use_gitignore() {
            emitter.emit_gitignore();
        }

        self.husky_init();
        emitter.emit_hooks()?;

        if answers.use_typescript_alias() {
            emitter.apply_alias();
        }

        info!("setup completed");
        self.reporter.report(ProgressEvent::Completed);
        Ok(SetupOutcome::Completed)
    }

    pub fn detect_package_manager(&self) -> PackageManager {
        PackageManager::detect(|lockfile| self.filesystem.exists(&self.options.path(lockfile)))
    }

    /// `npx husky init`; a failure only warns, the hooks directory is then
    /// created by the hook emitter.
    fn husky_init(&self) {
        if !self.options.run_husky_init {
            return;
        }

        if let Err(e) = self.runner.run(&ShellCommand::husky_init()) {
            warn!(error = %e, "husky init failed");
            self.reporter.report(ProgressEvent::Warning(format!(
                "Husky init command failed, creating {} manually",
                self.options.hooks_dir.display()
            )));
        }
    }
}
