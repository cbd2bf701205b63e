//! The answer model: the user's setup choices.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::Framework;

/// Immutable record of the user's setup choices.
///
/// Created once per run (by the questionnaire, or by [`SetupAnswersBuilder`]
/// in tests and presets) and only read afterwards. Every package and config
/// decision is a pure function of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupAnswers {
    framework: Framework,
    use_tailwind: bool,
    use_storybook: bool,
    use_typescript_alias: bool,
    use_gitignore: bool,
}

impl SetupAnswers {
    pub fn builder() -> SetupAnswersBuilder {
        SetupAnswersBuilder::default()
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn use_tailwind(&self) -> bool {
        self.use_tailwind
    }

    pub fn use_storybook(&self) -> bool {
        self.use_storybook
    }

    pub fn use_typescript_alias(&self) -> bool {
        self.use_typescript_alias
    }

    pub fn use_gitignore(&self) -> bool {
        self.use_gitignore
    }
}

impl fmt::Display for SetupAnswers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (tailwind: {}, storybook: {}, alias: {}, gitignore: {})",
            self.framework,
            self.use_tailwind,
            self.use_storybook,
            self.use_typescript_alias,
            self.use_gitignore
        )
    }
}

/// Builder for [`SetupAnswers`]. Unset choices default to `false` and the
/// framework to [`Framework::Node`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupAnswersBuilder {
    framework: Framework,
    use_tailwind: bool,
    use_storybook: bool,
    use_typescript_alias: bool,
    use_gitignore: bool,
}

impl SetupAnswersBuilder {
    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    pub fn tailwind(mut self, enabled: bool) -> Self {
        self.use_tailwind = enabled;
        self
    }

    pub fn storybook(mut self, enabled: bool) -> Self {
        self.use_storybook = enabled;
        self
    }

    pub fn typescript_alias(mut self, enabled: bool) -> Self {
        self.use_typescript_alias = enabled;
        self
    }

    pub fn gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = enabled;
        self
    }

    pub fn build(self) -> SetupAnswers {
        SetupAnswers {
            framework: self.framework,
            use_tailwind: self.use_tailwind,
            use_storybook: self.use_storybook,
            use_typescript_alias: self.use_typescript_alias,
            use_gitignore: self.use_gitignore,
        }
    }
}
