//! Domain value objects: Framework, PackageManager, ShellCommand.
//!
//! These are pure value types with equality-by-value and no identity.
//! Catalog membership and generator behaviour live in their own modules;
//! this file only defines the types and their string forms.

use serde::Serialize;
use std::fmt;

// ── Framework ────────────────────────────────────────────────────────────────

/// The kind of JavaScript project being configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    #[default]
    Node,
    React,
    ReactNative,
    Next,
}

impl Framework {
    /// Every framework, in the order the questionnaire offers them.
    pub const ALL: [Framework; 4] = [Self::Node, Self::React, Self::ReactNative, Self::Next];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::React => "react",
            Self::ReactNative => "react-native",
            Self::Next => "next",
        }
    }

    /// Human-readable name used in prompts and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::React => "React",
            Self::ReactNative => "React Native",
            Self::Next => "Next.js",
        }
    }

    /// Frameworks for which the Tailwind and Storybook questions are asked.
    pub const fn offers_ui_tooling(&self) -> bool {
        matches!(self, Self::React | Self::Next)
    }

    /// Frameworks that pull in the React lint plugins.
    pub const fn is_react_family(&self) -> bool {
        matches!(self, Self::React | Self::ReactNative | Self::Next)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// A JavaScript package manager the installer can drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Lockfile probe order. The first lockfile found wins; npm is the
    /// fallback when none is present.
    pub const DETECTION_ORDER: [PackageManager; 3] = [Self::Bun, Self::Pnpm, Self::Yarn];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// The lockfile whose presence selects this manager.
    pub const fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
            Self::Bun => "bun.lockb",
        }
    }

    /// Flag marking an install as a development dependency.
    pub const fn dev_flag(&self) -> &'static str {
        match self {
            Self::Npm => "--save-dev",
            Self::Yarn => "--dev",
            Self::Pnpm | Self::Bun => "-D",
        }
    }

    const fn install_verb(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Yarn | Self::Pnpm | Self::Bun => "add",
        }
    }

    /// Pick a manager from the lockfiles present in the project root.
    ///
    /// `has_lockfile` answers whether a file with the given name exists.
    pub fn detect(has_lockfile: impl Fn(&str) -> bool) -> Self {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|pm| has_lockfile(pm.lockfile()))
            .unwrap_or(Self::Npm)
    }

    /// Build the install invocation for `packages`.
    pub fn install_command<S: AsRef<str>>(&self, packages: &[S], dev: bool) -> ShellCommand {
        let mut args = vec![self.install_verb().to_string()];
        if dev {
            args.push(self.dev_flag().to_string());
        }
        args.extend(packages.iter().map(|p| p.as_ref().to_string()));
        ShellCommand::new(self.as_str(), args)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ShellCommand ─────────────────────────────────────────────────────────────

/// A program plus its arguments, executed as a single subprocess.
///
/// Arguments are kept separate so no shell quoting is involved; `Display`
/// renders the space-joined form for logs and remedy messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `npx husky init`: installs husky's `prepare` script and hooks dir.
    pub fn husky_init() -> Self {
        Self::new("npx", vec!["husky".into(), "init".into()])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
