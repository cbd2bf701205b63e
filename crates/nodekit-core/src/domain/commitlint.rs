//! Commit-type catalog and commitlint config generator.
//!
//! The catalog is the single source for three derived views: the
//! `type-enum` rule checked by commitlint, the raw `types` list, and the
//! `devmoji` code-to-emoji mapping used by the `prepare-commit-msg` hook.
//! All three are computed together in [`build_commitlint_config`] so they
//! cannot drift apart.

use std::collections::HashSet;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

/// Base configuration every generated document extends.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

/// Minimum and maximum subject length enforced on commit messages.
pub const SUBJECT_MIN_LENGTH: u32 = 10;
pub const SUBJECT_MAX_LENGTH: u32 = 120;

/// One commit classification tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEmoji {
    pub commit_type: String,
    pub code: String,
    pub emoji: String,
    pub description: String,
}

impl CommitEmoji {
    pub fn new(
        commit_type: impl Into<String>,
        code: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            commit_type: commit_type.into(),
            code: code.into(),
            emoji: emoji.into(),
            description: description.into(),
        }
    }
}

/// `(type, emoji, description)`; the devmoji code is `:<type>:`.
static RECOMMENDED: &[(&str, &str, &str)] = &[
    ("init", ":tada:", "Initialize project"),
    ("feat", ":sparkles:", "Add new feature"),
    ("fix", ":bug:", "Fix a bug"),
    ("chore", ":wrench:", "Minor tasks or maintenance"),
    ("docs", ":memo:", "Update documentation"),
    ("style", ":lipstick:", "Improve UI or code style"),
    (
        "improve",
        ":rocket:",
        "Improve code quality or performance or readability or maintainability or etc",
    ),
    ("refactor", ":recycle:", "Refactor code without changing logic"),
    ("perf", ":zap:", "Enhance performance"),
    ("test", ":white_check_mark:", "Add or update tests"),
    (
        "build",
        ":building_construction:",
        "Changes related to the build system",
    ),
    ("ci", ":repeat:", "Configure CI/CD"),
    ("revert", ":rewind:", "Revert a previous commit"),
    ("merge", ":twisted_rightwards_arrows:", "Merge branches"),
    ("wip", ":construction:", "Work in progress"),
    ("release", ":rocket:", "Release a new version"),
    ("upgrade", ":arrow_up:", "Upgrade dependencies or software"),
    ("downgrade", ":arrow_down:", "Downgrade dependencies or software"),
    ("bump", ":package:", "Bump package version"),
    ("security", ":lock:", "Improve security"),
    ("hotfix", ":fire:", "Urgent bug fix"),
    (
        "maintainer",
        ":crown:",
        "Maintainer commit and excellent handle for system",
    ),
];

/// The recommended commit-type catalog.
pub fn recommended_commit_types() -> Vec<CommitEmoji> {
    RECOMMENDED
        .iter()
        .map(|(commit_type, emoji, description)| {
            CommitEmoji::new(*commit_type, format!(":{commit_type}:"), *emoji, *description)
        })
        .collect()
}

// ── Rules ────────────────────────────────────────────────────────────────────

/// commitlint severity of every generated rule (`2`, error).
pub const RULE_LEVEL_ERROR: u8 = 2;

/// Whether a rule must (`always`) or must not (`never`) hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

/// Rule argument, when the rule takes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    Types(Vec<String>),
    Case(String),
    Length(u32),
}

/// A single commitlint rule, serialized as `[2, applicability, value?]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl Rule {
    fn error(applicability: Applicability, value: Option<RuleValue>) -> Self {
        Self {
            applicability,
            value,
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&RULE_LEVEL_ERROR)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(value) = &self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// The rule set of the generated document, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitlintRules {
    #[serde(rename = "type-enum")]
    pub type_enum: Rule,
    #[serde(rename = "type-case")]
    pub type_case: Rule,
    #[serde(rename = "type-empty")]
    pub type_empty: Rule,
    #[serde(rename = "subject-case")]
    pub subject_case: Rule,
    #[serde(rename = "subject-empty")]
    pub subject_empty: Rule,
    #[serde(rename = "subject-min-length")]
    pub subject_min_length: Rule,
    #[serde(rename = "subject-max-length")]
    pub subject_max_length: Rule,
}

/// devmoji mapping entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevmojiEntry {
    pub code: String,
    pub emoji: String,
    pub description: String,
}

/// The `.commitlintrc.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitlintConfig {
    pub extends: Vec<String>,
    pub rules: CommitlintRules,
    pub types: Vec<String>,
    pub devmoji: Vec<DevmojiEntry>,
}

// ── Generator ────────────────────────────────────────────────────────────────

/// Build the commitlint document for `catalog`.
///
/// # Errors
///
/// Rejects an empty catalog, a duplicated `type`, or a `type` that is not
/// lower-case (it would fail the generated `type-case` rule).
pub fn build_commitlint_config(catalog: &[CommitEmoji]) -> Result<CommitlintConfig, DomainError> {
    validate_catalog(catalog)?;

    let types: Vec<String> = catalog.iter().map(|e| e.commit_type.clone()).collect();

    let rules = CommitlintRules {
        type_enum: Rule::error(Applicability::Always, Some(RuleValue::Types(types.clone()))),
        type_case: Rule::error(
            Applicability::Always,
            Some(RuleValue::Case("lower-case".into())),
        ),
        type_empty: Rule::error(Applicability::Never, None),
        subject_case: Rule::error(Applicability::Never, None),
        subject_empty: Rule::error(Applicability::Never, None),
        subject_min_length: Rule::error(
            Applicability::Always,
            Some(RuleValue::Length(SUBJECT_MIN_LENGTH)),
        ),
        subject_max_length: Rule::error(
            Applicability::Always,
            Some(RuleValue::Length(SUBJECT_MAX_LENGTH)),
        ),
    };

    let devmoji = catalog
        .iter()
        .map(|e| DevmojiEntry {
            code: e.code.clone(),
            emoji: e.emoji.clone(),
            description: e.description.clone(),
        })
        .collect();

    Ok(CommitlintConfig {
        extends: vec![CONVENTIONAL_PRESET.to_string()],
        rules,
        types,
        devmoji,
    })
}

/// The document built from [`recommended_commit_types`].
pub fn recommended_commitlint_config() -> Result<CommitlintConfig, DomainError> {
    build_commitlint_config(&recommended_commit_types())
}

/// Build a document from a caller-adjusted catalog.
///
/// `transform` receives the recommended catalog and returns the catalog to
/// use, e.g. filtered or reordered.
pub fn define_commitlint_config<F>(transform: F) -> Result<CommitlintConfig, DomainError>
where
    F: FnOnce(Vec<CommitEmoji>) -> Vec<CommitEmoji>,
{
    build_commitlint_config(&transform(recommended_commit_types()))
}

fn validate_catalog(catalog: &[CommitEmoji]) -> Result<(), DomainError> {
    if catalog.is_empty() {
        return Err(DomainError::EmptyCommitCatalog);
    }

    let mut seen = HashSet::new();
    for entry in catalog {
        if entry.commit_type != entry.commit_type.to_lowercase() {
            return Err(DomainError::InvalidCommitType {
                commit_type: entry.commit_type.clone(),
            });
        }
        if !seen.insert(entry.commit_type.as_str()) {
            return Err(DomainError::DuplicateCommitType {
                commit_type: entry.commit_type.clone(),
            });
        }
    }

    Ok(())
}
