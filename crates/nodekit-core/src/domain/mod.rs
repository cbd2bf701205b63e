// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for nodekit.
//!
//! Pure decision logic: which packages to install, and what every generated
//! file contains. Nothing here touches the filesystem or spawns processes;
//! those concerns go through the ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: generators return values, services write them
//! - **Static catalogs**: packages, commit types, and hooks are `static` tables
//! - **Pure functions**: the same answers always yield the same output
//!
pub mod answers;
pub mod catalog;
pub mod commitlint;
pub mod documents;
pub mod error;
pub mod hooks;
pub mod lint;
pub mod value_objects;

pub use answers::{SetupAnswers, SetupAnswersBuilder};
pub use catalog::{
    GroupedPackages, NODE_PRESET_PACKAGES, PackageEntry, PackageGroup, PackageTier,
    group_packages, resolve_packages,
};
pub use commitlint::{
    CommitEmoji, CommitlintConfig, build_commitlint_config, define_commitlint_config,
    recommended_commit_types, recommended_commitlint_config,
};
pub use documents::{
    COMMITLINT_CONFIG_FILE, DEFAULT_ESLINT_EXTENSION, GITIGNORE_FILE, ManifestChanges,
    NODE_MODULES_DIR, NodeManifestPatch, PACKAGE_JSON_FILE, PRETTIER_CONFIG_FILE,
    TSCONFIG_FILE, apply_typescript_alias, default_tsconfig, eslint_config_file,
    manifest_declares, to_json_pretty,
};
pub use error::DomainError;
pub use hooks::{DEFAULT_HOOKS_DIR, GIT_HOOKS, GitHook, gitignore_content};
pub use lint::{
    DEFAULT_ESLINT_PRESET, EslintBundle, EslintFragment, EslintModule, LintTemplates,
    PackageJsonPatch, PrettierConfig, build_lint_templates,
};
pub use value_objects::{Framework, PackageManager, ShellCommand};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end decision tests
    // ========================================================================

    #[test]
    fn lint_plugins_are_always_in_the_install_plan() {
        for framework in Framework::ALL {
            for storybook in [false, true] {
                let answers = SetupAnswers::builder()
                    .framework(framework)
                    .storybook(storybook)
                    .build();
                let plan = resolve_packages(&answers);
                let templates = build_lint_templates(&answers, DEFAULT_ESLINT_PRESET);

                for plugin in templates.required_plugins() {
                    assert!(
                        plan.iter().any(|p| p == plugin),
                        "{answers}: {plugin} required by eslint config but not installed"
                    );
                }
            }
        }
    }

    #[test]
    fn tailwind_prettier_plugin_matches_install_plan() {
        let answers = SetupAnswers::builder()
            .framework(Framework::React)
            .tailwind(true)
            .build();
        let plan = resolve_packages(&answers);
        let templates = build_lint_templates(&answers, DEFAULT_ESLINT_PRESET);

        for plugin in &templates.prettier.plugins {
            assert!(plan.contains(plugin));
        }
    }

    #[test]
    fn node_preset_packages_are_separate_from_setup_plan() {
        let plan = resolve_packages(&SetupAnswers::builder().build());
        for pkg in NODE_PRESET_PACKAGES {
            assert!(!plan.iter().any(|p| p == pkg));
        }
    }
}
