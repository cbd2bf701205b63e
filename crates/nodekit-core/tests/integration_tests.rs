//! Integration tests for nodekit-core's public generators.

use nodekit_core::domain::{
    COMMITLINT_CONFIG_FILE, DEFAULT_ESLINT_PRESET, Framework, PRETTIER_CONFIG_FILE, SetupAnswers,
    build_lint_templates, define_commitlint_config, recommended_commitlint_config,
    to_json_pretty,
};
use nodekit_core::error::{ErrorCategory, NodekitError};
use serde_json::{Value, json};

#[test]
fn commitlint_document_has_expected_shape() {
    let config = recommended_commitlint_config().unwrap();
    let text = to_json_pretty(&config, COMMITLINT_CONFIG_FILE).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["extends", "rules", "types", "devmoji"]);

    let rules: Vec<&str> = value["rules"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        rules,
        [
            "type-enum",
            "type-case",
            "type-empty",
            "subject-case",
            "subject-empty",
            "subject-min-length",
            "subject-max-length"
        ]
    );
    assert_eq!(value["rules"]["type-enum"][2], value["types"]);
    assert_eq!(value["types"][0], "init");
    assert_eq!(
        value["devmoji"][0],
        json!({ "code": ":init:", "emoji": ":tada:", "description": "Initialize project" })
    );
}

#[test]
fn commitlint_errors_are_validation_errors() {
    let err: NodekitError = define_commitlint_config(|_| Vec::new()).unwrap_err().into();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!err.suggestions().is_empty());
}

#[test]
fn next_tailwind_storybook_templates() {
    let answers = SetupAnswers::builder()
        .framework(Framework::Next)
        .tailwind(true)
        .storybook(true)
        .build();
    let templates = build_lint_templates(&answers, DEFAULT_ESLINT_PRESET);

    assert_eq!(
        templates.eslint_source(),
        "import { defineEslintConfig, eslintConfigNode, pluginNext, pluginStorybook } from '@jjuidev/node-devtools';\n\
         \n\
         const eslintConfig = defineEslintConfig(eslintConfigNode, pluginNext(), pluginStorybook());\n\
         \n\
         export default eslintConfig;\n"
    );

    let prettier: Value =
        serde_json::from_str(&to_json_pretty(&templates.prettier, PRETTIER_CONFIG_FILE).unwrap())
            .unwrap();
    assert_eq!(
        prettier,
        json!({
            "useTabs": true,
            "tabWidth": 2,
            "printWidth": 120,
            "semi": true,
            "singleQuote": true,
            "jsxSingleQuote": false,
            "arrowParens": "always",
            "trailingComma": "all",
            "endOfLine": "auto",
            "plugins": ["prettier-plugin-tailwindcss"]
        })
    );
}

#[test]
fn custom_preset_module_is_imported() {
    let templates = build_lint_templates(&SetupAnswers::builder().build(), "@acme/eslint");
    assert!(
        templates
            .eslint_source()
            .starts_with("import { defineEslintConfig, eslintConfigNode } from '@acme/eslint';")
    );
}
