//! ESLint / Prettier template generator.
//!
//! The ESLint config is assembled from immutable [`EslintFragment`]s: a base
//! fragment, then the framework bundle, then the Storybook bundle. Each
//! fragment carries the import names and the call expressions it adds, so the
//! two lists in the rendered module can never disagree.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::answers::SetupAnswers;
use crate::domain::error::DomainError;
use crate::domain::value_objects::Framework;

/// Module the generated ESLint config imports its helpers from.
pub const DEFAULT_ESLINT_PRESET: &str = "@jjuidev/node-devtools";

/// Source globs the format script and lint-staged operate on.
const SOURCE_GLOB: &str = "*.{js,ts,jsx,tsx}";

// ── Prettier ─────────────────────────────────────────────────────────────────

/// The `.prettierrc.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub use_tabs: bool,
    pub tab_width: u32,
    pub print_width: u32,
    pub semi: bool,
    pub single_quote: bool,
    pub jsx_single_quote: bool,
    pub arrow_parens: &'static str,
    pub trailing_comma: &'static str,
    pub end_of_line: &'static str,
    pub plugins: Vec<String>,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            use_tabs: true,
            tab_width: 2,
            print_width: 120,
            semi: true,
            single_quote: true,
            jsx_single_quote: false,
            arrow_parens: "always",
            trailing_comma: "all",
            end_of_line: "auto",
            plugins: Vec::new(),
        }
    }
}

impl PrettierConfig {
    pub fn for_answers(answers: &SetupAnswers) -> Self {
        let mut config = Self::default();
        if answers.use_tailwind() {
            config.plugins.push("prettier-plugin-tailwindcss".into());
        }
        config
    }
}

// ── ESLint bundles ───────────────────────────────────────────────────────────

/// A named group of ESLint rules exported by the preset module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EslintBundle {
    React,
    Next,
    Storybook,
}

impl EslintBundle {
    /// Export name in the preset module.
    pub const fn import_name(&self) -> &'static str {
        match self {
            Self::React => "pluginReact",
            Self::Next => "pluginNext",
            Self::Storybook => "pluginStorybook",
        }
    }

    /// Call expression passed to `defineEslintConfig`.
    pub fn invocation(&self) -> String {
        format!("{}()", self.import_name())
    }

    /// Bundle this one is built on top of.
    pub const fn composes(&self) -> Option<EslintBundle> {
        match self {
            Self::Next => Some(Self::React),
            Self::React | Self::Storybook => None,
        }
    }

    const fn own_plugins(&self) -> &'static [&'static str] {
        match self {
            Self::React => &[
                "eslint-plugin-react",
                "eslint-plugin-react-hooks",
                "eslint-plugin-react-native",
            ],
            Self::Next => &["@next/eslint-plugin-next"],
            Self::Storybook => &["eslint-plugin-storybook"],
        }
    }

    /// Every plugin package this bundle needs at load time, including the
    /// plugins of the bundles it composes.
    pub fn required_plugins(&self) -> Vec<&'static str> {
        let mut plugins = self.own_plugins().to_vec();
        let mut parent = self.composes();
        while let Some(bundle) = parent {
            plugins.extend_from_slice(bundle.own_plugins());
            parent = bundle.composes();
        }
        plugins
    }

    /// Bundles selected by `answers`, in composition order.
    pub fn for_answers(answers: &SetupAnswers) -> Vec<EslintBundle> {
        let framework = match answers.framework() {
            Framework::React => Some(Self::React),
            Framework::Next => Some(Self::Next),
            Framework::Node | Framework::ReactNative => None,
        };
        let storybook = answers.use_storybook().then_some(Self::Storybook);

        framework.into_iter().chain(storybook).collect()
    }
}

/// Imports and call expressions contributed to the config module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EslintFragment {
    pub imports: Vec<String>,
    pub invocations: Vec<String>,
}

impl EslintFragment {
    /// `defineEslintConfig` plus the `eslintConfigNode` base config.
    pub fn base() -> Self {
        Self {
            imports: vec!["defineEslintConfig".into(), "eslintConfigNode".into()],
            invocations: vec!["eslintConfigNode".into()],
        }
    }
}

impl From<EslintBundle> for EslintFragment {
    fn from(bundle: EslintBundle) -> Self {
        Self {
            imports: vec![bundle.import_name().to_string()],
            invocations: vec![bundle.invocation()],
        }
    }
}

/// The composed `eslint.config.*` module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EslintModule {
    preset: String,
    imports: Vec<String>,
    invocations: Vec<String>,
}

impl EslintModule {
    pub fn compose(
        preset: impl Into<String>,
        fragments: impl IntoIterator<Item = EslintFragment>,
    ) -> Self {
        let (imports, invocations) = fragments.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut imports, mut invocations), fragment| {
                imports.extend(fragment.imports);
                invocations.extend(fragment.invocations);
                (imports, invocations)
            },
        );

        Self {
            preset: preset.into(),
            imports,
            invocations,
        }
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn invocations(&self) -> &[String] {
        &self.invocations
    }

    pub fn render(&self) -> String {
        format!(
            "import {{ {} }} from '{}';\n\nconst eslintConfig = defineEslintConfig({});\n\nexport default eslintConfig;\n",
            self.imports.join(", "),
            self.preset,
            self.invocations.join(", "),
        )
    }
}

// ── package.json patch ───────────────────────────────────────────────────────

/// Keys the lint setup sets in `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageJsonPatch {
    pub scripts: Vec<(String, String)>,
    pub lint_staged: Vec<(String, Vec<String>)>,
}

impl PackageJsonPatch {
    pub fn lint_defaults() -> Self {
        let src = format!("\"src/**/{SOURCE_GLOB}\"");
        Self {
            scripts: vec![(
                "format".into(),
                format!("eslint --fix {src} && prettier --write {src}"),
            )],
            lint_staged: vec![
                (
                    SOURCE_GLOB.into(),
                    vec!["eslint --fix".into(), "prettier --write".into()],
                ),
                (
                    "package.json".into(),
                    vec!["npx prettier-package-json --write".into()],
                ),
            ],
        }
    }

    /// Merge into a parsed `package.json`.
    ///
    /// Keys named by the patch are overwritten; every other key is kept.
    /// Missing or `null` `scripts` / `lint-staged` objects are created.
    pub fn apply(&self, manifest: &mut Value) -> Result<(), DomainError> {
        let root = object_mut(manifest, "package.json")?;

        let scripts = child_object(root, "scripts", "package.json")?;
        for (name, command) in &self.scripts {
            scripts.insert(name.clone(), Value::String(command.clone()));
        }

        let staged = child_object(root, "lint-staged", "package.json")?;
        for (glob, commands) in &self.lint_staged {
            let list = commands.iter().cloned().map(Value::String).collect();
            staged.insert(glob.clone(), Value::Array(list));
        }

        Ok(())
    }
}

pub(crate) fn object_mut<'a>(
    value: &'a mut Value,
    document: &'static str,
) -> Result<&'a mut Map<String, Value>, DomainError> {
    value
        .as_object_mut()
        .ok_or_else(|| DomainError::MalformedDocument {
            document,
            reason: "top-level value is not an object".into(),
        })
}

/// `null`, `false`, `0` and `""`: values a manifest uses to mean "not set".
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Get `parent[key]` as an object, inserting `{}` when absent or falsy.
pub(crate) fn child_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    document: &'static str,
) -> Result<&'a mut Map<String, Value>, DomainError> {
    let slot = parent.entry(key).or_insert(Value::Null);
    if is_falsy(slot) {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
        .ok_or_else(|| DomainError::MalformedDocument {
            document,
            reason: format!("'{key}' is not an object"),
        })
}

// ── Templates ────────────────────────────────────────────────────────────────

/// Everything the lint step writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintTemplates {
    pub prettier: PrettierConfig,
    pub eslint: EslintModule,
    pub bundles: Vec<EslintBundle>,
    pub package_json_patch: PackageJsonPatch,
}

impl LintTemplates {
    pub fn eslint_source(&self) -> String {
        self.eslint.render()
    }

    /// Plugin packages that must resolve before the ESLint config is written,
    /// in bundle order.
    pub fn required_plugins(&self) -> Vec<&'static str> {
        let mut plugins: Vec<&'static str> = Vec::new();
        for plugin in self.bundles.iter().flat_map(EslintBundle::required_plugins) {
            if !plugins.contains(&plugin) {
                plugins.push(plugin);
            }
        }
        plugins
    }
}

pub fn build_lint_templates(answers: &SetupAnswers, preset: &str) -> LintTemplates {
    let bundles = EslintBundle::for_answers(answers);
    let fragments =
        std::iter::once(EslintFragment::base()).chain(bundles.iter().copied().map(Into::into));

    LintTemplates {
        prettier: PrettierConfig::for_answers(answers),
        eslint: EslintModule::compose(preset, fragments),
        bundles,
        package_json_patch: PackageJsonPatch::lint_defaults(),
    }
}
