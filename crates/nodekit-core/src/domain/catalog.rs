//! Package catalog and selector.
//!
//! # Design
//!
//! Every package the installer may request is described once, in one of
//! four static tiers. An entry is either unconditional or gated by a plain
//! `fn` predicate over [`SetupAnswers`]; [`resolve_packages`] walks the
//! tiers in a fixed order and keeps the entries whose predicate holds.
//!
//! # Adding a Package
//!
//! 1. Add a [`PackageEntry`] to the tier it belongs to
//! 2. If it is gated, give it a predicate
//! 3. The selector and the summary grouping derive from the tiers

use crate::domain::answers::SetupAnswers;
use crate::domain::value_objects::Framework;

/// Predicate deciding whether a conditional entry applies.
pub type Condition = fn(&SetupAnswers) -> bool;

/// One catalog record: one or more package names installed together.
#[derive(Debug, Clone, Copy)]
pub struct PackageEntry {
    /// Package identifiers, in install order.
    pub names: &'static [&'static str],

    /// Whether the packages are development dependencies.
    pub dev: bool,

    /// `None` means the entry is always included.
    pub condition: Option<Condition>,
}

impl PackageEntry {
    const fn always(names: &'static [&'static str]) -> Self {
        Self {
            names,
            dev: true,
            condition: None,
        }
    }

    const fn when(names: &'static [&'static str], condition: Condition) -> Self {
        Self {
            names,
            dev: true,
            condition: Some(condition),
        }
    }

    /// Whether this entry is part of the install for `answers`.
    pub fn applies(&self, answers: &SetupAnswers) -> bool {
        self.condition.is_none_or(|condition| condition(answers))
    }
}

// ── Tiers ────────────────────────────────────────────────────────────────────

/// Git hooks, commit linting, and the shared lint/format toolchain.
pub static BASE_PACKAGES: &[PackageEntry] = &[
    // husky + lint-staged
    PackageEntry::always(&["husky"]),
    PackageEntry::always(&["lint-staged"]),
    // commitlint
    PackageEntry::always(&["@commitlint/cli"]),
    PackageEntry::always(&["@commitlint/config-conventional"]),
    // eslint + prettier
    PackageEntry::always(&["prettier"]),
    PackageEntry::always(&["eslint"]),
    PackageEntry::always(&["@eslint/js"]),
    PackageEntry::always(&["globals"]),
    PackageEntry::always(&["typescript-eslint"]),
];

/// Plugins used by the base ESLint configuration.
pub static ESLINT_BASE_PACKAGES: &[PackageEntry] = &[
    PackageEntry::always(&["eslint-config-prettier"]),
    PackageEntry::always(&["eslint-plugin-autofix"]),
    PackageEntry::always(&["eslint-plugin-import"]),
    PackageEntry::always(&["eslint-plugin-prefer-arrow-functions"]),
];

/// Prettier plugins needed regardless of answers. Currently none.
pub static PRETTIER_BASE_PACKAGES: &[PackageEntry] = &[];

/// Entries gated by the answers.
pub static CONDITIONAL_PACKAGES: &[PackageEntry] = &[
    PackageEntry::when(
        &[
            "eslint-plugin-react",
            "eslint-plugin-react-hooks",
            "eslint-plugin-react-native",
        ],
        |a| a.framework().is_react_family(),
    ),
    PackageEntry::when(&["@next/eslint-plugin-next"], |a| {
        a.framework() == Framework::Next
    }),
    PackageEntry::when(
        &["eslint-plugin-tailwindcss", "prettier-plugin-tailwindcss"],
        |a| a.use_tailwind(),
    ),
    PackageEntry::when(&["eslint-plugin-storybook"], |a| a.use_storybook()),
];

/// TypeScript toolchain installed by the Node.js preset.
pub static NODE_PRESET_PACKAGES: &[&str] =
    &["typescript", "ts-node-dev", "tsconfig-paths", "tsc-alias"];

/// The catalog tiers, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageTier {
    Base,
    EslintBase,
    PrettierBase,
    Conditional,
}

impl PackageTier {
    pub const ALL: [PackageTier; 4] = [
        Self::Base,
        Self::EslintBase,
        Self::PrettierBase,
        Self::Conditional,
    ];

    pub fn entries(&self) -> &'static [PackageEntry] {
        match self {
            Self::Base => BASE_PACKAGES,
            Self::EslintBase => ESLINT_BASE_PACKAGES,
            Self::PrettierBase => PRETTIER_BASE_PACKAGES,
            Self::Conditional => CONDITIONAL_PACKAGES,
        }
    }
}

// ── Selector ─────────────────────────────────────────────────────────────────

/// Resolve the answers into the flat, ordered list of packages to install.
///
/// Order is declaration order across tiers (base → eslint-base →
/// prettier-base → conditional). Names are not deduplicated.
pub fn resolve_packages(answers: &SetupAnswers) -> Vec<String> {
    PackageTier::ALL
        .iter()
        .flat_map(|tier| tier.entries())
        .filter(|entry| entry.applies(answers))
        .flat_map(|entry| entry.names.iter().map(|name| (*name).to_string()))
        .collect()
}

// ── Display grouping ─────────────────────────────────────────────────────────

/// Headings used when presenting the package plan to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageGroup {
    GitHooks,
    Commitlint,
    EslintPrettier,
}

impl PackageGroup {
    pub const ALL: [PackageGroup; 3] = [Self::GitHooks, Self::Commitlint, Self::EslintPrettier];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::GitHooks => "Git Hook Packages",
            Self::Commitlint => "Commitlint Packages",
            Self::EslintPrettier => "ESLint & Prettier Packages",
        }
    }

    fn contains(&self, package: &str) -> bool {
        match self {
            Self::GitHooks => matches!(package, "husky" | "lint-staged"),
            Self::Commitlint => package.starts_with("@commitlint/"),
            Self::EslintPrettier => {
                package.contains("eslint") || package.contains("prettier") || package == "globals"
            }
        }
    }
}

/// One non-empty group of the package plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPackages {
    pub group: PackageGroup,
    pub packages: Vec<String>,
}

/// Split a resolved list into display groups, skipping empty ones.
///
/// Packages keep their resolved order inside each group.
pub fn group_packages(packages: &[String]) -> Vec<GroupedPackages> {
    PackageGroup::ALL
        .iter()
        .map(|group| GroupedPackages {
            group: *group,
            packages: packages
                .iter()
                .filter(|p| group.contains(p))
                .cloned()
                .collect(),
        })
        .filter(|g| !g.packages.is_empty())
        .collect()
}
