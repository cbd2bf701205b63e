//! Plugin lookup against the project's installed packages.

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use nodekit_core::{
    application::ports::{PluginLookup, PluginResolver},
    domain::{NODE_MODULES_DIR, PACKAGE_JSON_FILE, manifest_declares},
};

/// Treats a plugin as available when `node_modules/<name>/package.json`
/// exists or the project manifest declares it.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

impl NodeModulesResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn installed(&self, plugin: &str) -> bool {
        self.root
            .join(NODE_MODULES_DIR)
            .join(plugin)
            .join(PACKAGE_JSON_FILE)
            .is_file()
    }

    fn declared(&self, plugin: &str) -> bool {
        std::fs::read_to_string(self.root.join(PACKAGE_JSON_FILE))
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .is_some_and(|manifest| manifest_declares(&manifest, plugin))
    }
}

impl PluginResolver for NodeModulesResolver {
    fn resolve(&self, plugin: &str) -> PluginLookup {
        let lookup = if self.installed(plugin) || self.declared(plugin) {
            PluginLookup::Found
        } else {
            PluginLookup::Missing
        };
        debug!(plugin, ?lookup, "plugin lookup");
        lookup
    }
}

/// Resolver with a fixed answer: everything is found except `missing`.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    missing: Vec<String>,
}

impl FixedResolver {
    pub fn all_found() -> Self {
        Self::default()
    }

    pub fn missing<I, S>(plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            missing: plugins.into_iter().map(Into::into).collect(),
        }
    }
}

impl PluginResolver for FixedResolver {
    fn resolve(&self, plugin: &str) -> PluginLookup {
        if self.missing.iter().any(|m| m == plugin) {
            PluginLookup::Missing
        } else {
            PluginLookup::Found
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_installed_scoped_package() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("node_modules/@next/eslint-plugin-next");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join("package.json"), "{}").unwrap();

        let resolver = NodeModulesResolver::new(dir.path());
        assert_eq!(
            resolver.resolve("@next/eslint-plugin-next"),
            PluginLookup::Found
        );
        assert_eq!(
            resolver.resolve("eslint-plugin-storybook"),
            PluginLookup::Missing
        );
    }

    #[test]
    fn falls_back_to_manifest_declarations() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies":{"eslint-plugin-react":"^7.37.0"}}"#,
        )
        .unwrap();

        let resolver = NodeModulesResolver::new(dir.path());
        assert_eq!(resolver.resolve("eslint-plugin-react"), PluginLookup::Found);
        assert_eq!(
            resolver.resolve("eslint-plugin-react-hooks"),
            PluginLookup::Missing
        );
    }

    #[test]
    fn malformed_manifest_counts_as_not_declared() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{").unwrap();
        assert_eq!(
            NodeModulesResolver::new(dir.path()).resolve("eslint-plugin-react"),
            PluginLookup::Missing
        );
    }
}
