//! Project documents: artifact names, JSON encoding, and the patches applied
//! to `tsconfig.json` and `package.json`.

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

use crate::domain::error::DomainError;
use crate::domain::lint::{child_object, is_falsy, object_mut};

pub const PRETTIER_CONFIG_FILE: &str = ".prettierrc.json";
pub const COMMITLINT_CONFIG_FILE: &str = ".commitlintrc.json";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const TSCONFIG_FILE: &str = "tsconfig.json";
pub const PACKAGE_JSON_FILE: &str = "package.json";
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Default extension of the generated ESLint flat config.
pub const DEFAULT_ESLINT_EXTENSION: &str = "mjs";

pub fn eslint_config_file(extension: &str) -> String {
    format!("eslint.config.{}", extension.trim_start_matches('.'))
}

/// Encode `value` the way the generated files are laid out: tab-indented,
/// with a trailing newline.
pub fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    document: &'static str,
) -> Result<String, DomainError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut ser)
        .map_err(|e| DomainError::Encoding {
            document,
            reason: e.to_string(),
        })?;

    let mut out = String::from_utf8(buf).map_err(|e| DomainError::Encoding {
        document,
        reason: e.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}

// ── tsconfig.json ────────────────────────────────────────────────────────────

/// The `tsconfig.json` created by the Node.js preset.
pub fn default_tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "module": "NodeNext",
            "target": "ESNext",
            "moduleResolution": "NodeNext",
            "outDir": "dist",
            "esModuleInterop": true,
            "strictNullChecks": true
        },
        "include": ["src/**/*"]
    })
}

/// Point `@/*` at `src/*`.
///
/// Sets `compilerOptions.baseUrl` and `compilerOptions.paths`, creating
/// `compilerOptions` when absent. Every other field is left as is.
pub fn apply_typescript_alias(tsconfig: &mut Value) -> Result<(), DomainError> {
    let root = object_mut(tsconfig, TSCONFIG_FILE)?;
    let options = child_object(root, "compilerOptions", TSCONFIG_FILE)?;

    options.insert("baseUrl".into(), Value::String("src".into()));
    options.insert("paths".into(), json!({ "@/*": ["./*"] }));
    Ok(())
}

// ── package.json (Node.js preset) ────────────────────────────────────────────

/// Entry point and scripts the Node.js preset adds to `package.json`.
///
/// Unlike the lint patch this one never overwrites: a key that already has
/// a non-empty value is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeManifestPatch {
    pub main: &'static str,
    pub scripts: &'static [(&'static str, &'static str)],
}

impl Default for NodeManifestPatch {
    fn default() -> Self {
        Self {
            main: "./dist/main.js",
            scripts: &[
                ("build", "tsc && tsc-alias"),
                (
                    "dev",
                    "tsnd --respawn --cls --rs -r tsconfig-paths/register ./src/main.ts",
                ),
                ("start", "node ."),
            ],
        }
    }
}

/// What [`NodeManifestPatch::apply`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestChanges {
    pub main_added: bool,
    pub scripts_added: Vec<String>,
}

impl ManifestChanges {
    pub fn is_empty(&self) -> bool {
        !self.main_added && self.scripts_added.is_empty()
    }
}

impl fmt::Display for ManifestChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.main_added, self.scripts_added.is_empty()) {
            (true, true) => f.write_str("added main entry"),
            (false, false) => write!(f, "added scripts: {}", self.scripts_added.join(", ")),
            (true, false) => write!(
                f,
                "added main entry and scripts: {}",
                self.scripts_added.join(", ")
            ),
            (false, true) => f.write_str("no changes"),
        }
    }
}

impl NodeManifestPatch {
    pub fn apply(&self, manifest: &mut Value) -> Result<ManifestChanges, DomainError> {
        let root = object_mut(manifest, PACKAGE_JSON_FILE)?;
        let mut changes = ManifestChanges::default();

        if is_unset(root, "main") {
            root.insert("main".into(), Value::String(self.main.into()));
            changes.main_added = true;
        }

        let scripts = child_object(root, "scripts", PACKAGE_JSON_FILE)?;
        for (name, command) in self.scripts {
            if is_unset(scripts, name) {
                scripts.insert((*name).into(), Value::String((*command).into()));
                changes.scripts_added.push((*name).into());
            }
        }

        Ok(changes)
    }
}

fn is_unset(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_none_or(is_falsy)
}

/// Whether `manifest` lists `package` under any dependency section.
pub fn manifest_declares(manifest: &Value, package: &str) -> bool {
    ["dependencies", "devDependencies", "peerDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section).and_then(Value::as_object))
        .any(|deps| deps.contains_key(package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_tab_indented_with_trailing_newline() {
        let out = to_json_pretty(&json!({ "a": { "b": 1 } }), "x.json").unwrap();
        assert_eq!(out, "{\n\t\"a\": {\n\t\t\"b\": 1\n\t}\n}\n");
    }

    #[test]
    fn eslint_file_name_accepts_dotted_extension() {
        assert_eq!(eslint_config_file("mjs"), "eslint.config.mjs");
        assert_eq!(eslint_config_file(".js"), "eslint.config.js");
    }

    #[test]
    fn alias_keeps_other_compiler_options() {
        let mut tsconfig = json!({
            "compilerOptions": { "strict": true, "baseUrl": "." },
            "include": ["src"]
        });
        apply_typescript_alias(&mut tsconfig).unwrap();

        assert_eq!(tsconfig["compilerOptions"]["strict"], true);
        assert_eq!(tsconfig["compilerOptions"]["baseUrl"], "src");
        assert_eq!(tsconfig["compilerOptions"]["paths"], json!({ "@/*": ["./*"] }));
        assert_eq!(tsconfig["include"], json!(["src"]));
    }

    #[test]
    fn alias_creates_compiler_options() {
        let mut tsconfig = json!({});
        apply_typescript_alias(&mut tsconfig).unwrap();
        assert_eq!(tsconfig["compilerOptions"]["baseUrl"], "src");
    }

    #[test]
    fn alias_rejects_non_object_compiler_options() {
        let mut tsconfig = json!({ "compilerOptions": [] });
        let err = apply_typescript_alias(&mut tsconfig).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MalformedDocument { document: TSCONFIG_FILE, .. }
        ));
    }

    #[test]
    fn node_patch_fills_only_missing_keys() {
        let mut manifest = json!({
            "name": "svc",
            "main": "index.js",
            "scripts": { "start": "node server.js", "dev": "" }
        });
        let changes = NodeManifestPatch::default().apply(&mut manifest).unwrap();

        assert!(!changes.main_added);
        assert_eq!(changes.scripts_added, ["build", "dev"]);
        assert_eq!(manifest["main"], "index.js");
        assert_eq!(manifest["scripts"]["start"], "node server.js");
        assert_eq!(manifest["scripts"]["build"], "tsc && tsc-alias");
    }

    #[test]
    fn node_patch_on_complete_manifest_is_empty() {
        let mut manifest = json!({ "name": "svc" });
        let patch = NodeManifestPatch::default();
        assert!(!patch.apply(&mut manifest).unwrap().is_empty());
        assert!(patch.apply(&mut manifest).unwrap().is_empty());
        assert_eq!(manifest["main"], "./dist/main.js");
    }

    #[test]
    fn node_patch_treats_falsy_values_as_missing() {
        let mut manifest = json!({ "main": false, "scripts": null });
        let changes = NodeManifestPatch::default().apply(&mut manifest).unwrap();

        assert!(changes.main_added);
        assert_eq!(changes.scripts_added, ["build", "dev", "start"]);
        assert_eq!(manifest["main"], "./dist/main.js");
        assert_eq!(manifest["scripts"]["start"], "node .");
    }

    #[test]
    fn manifest_changes_describe_what_was_added() {
        let changes = ManifestChanges {
            main_added: true,
            scripts_added: vec!["build".into(), "dev".into()],
        };
        assert_eq!(
            changes.to_string(),
            "added main entry and scripts: build, dev"
        );
        assert_eq!(ManifestChanges::default().to_string(), "no changes");
    }

    #[test]
    fn manifest_declares_checks_every_dependency_section() {
        let manifest = json!({
            "dependencies": { "react": "^19" },
            "devDependencies": { "eslint-plugin-react": "^7" },
            "peerDependencies": { "eslint-plugin-storybook": "*" }
        });
        assert!(manifest_declares(&manifest, "eslint-plugin-react"));
        assert!(manifest_declares(&manifest, "eslint-plugin-storybook"));
        assert!(!manifest_declares(&manifest, "@next/eslint-plugin-next"));
    }
}
