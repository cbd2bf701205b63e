//! The setup questionnaire.

use tracing::debug;

use crate::application::ports::Prompter;
use crate::domain::{Framework, SetupAnswers};
use crate::error::NodekitResult;

/// Ask the setup questions and build the answers.
///
/// Tailwind and Storybook are only asked for React and Next.js; other
/// frameworks get `false` for both. Any cancelled prompt aborts with
/// `ApplicationError::Cancelled`.
pub fn collect_answers(prompter: &dyn Prompter) -> NodekitResult<SetupAnswers> {
    let labels: Vec<String> = Framework::ALL.iter().map(|f| f.label().to_string()).collect();
    let index = prompter.select("Which framework are you using?", &labels, 0)?;
    let framework = Framework::ALL.get(index).copied().unwrap_or_default();
    debug!(%framework, "framework selected");

    let (tailwind, storybook) = if framework.offers_ui_tooling() {
        (
            prompter.confirm("Are you using Tailwind CSS?", false)?,
            prompter.confirm("Are you using Storybook?", false)?,
        )
    } else {
        (false, false)
    };

    let typescript_alias = prompter.confirm(
        "Set up TypeScript alias imports (@/* -> src/*)?",
        false,
    )?;
    let gitignore = prompter.confirm("Create a .gitignore file?", false)?;

    Ok(SetupAnswers::builder()
        .framework(framework)
        .tailwind(tailwind)
        .storybook(storybook)
        .typescript_alias(typescript_alias)
        .gitignore(gitignore)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockPrompter;
    use mockall::Sequence;

    #[test]
    fn node_skips_ui_questions() {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().times(1).returning(|_, _, _| Ok(0));
        prompter
            .expect_confirm()
            .withf(|p, _| !p.contains("Tailwind") && !p.contains("Storybook"))
            .times(2)
            .returning(|_, _| Ok(true));

        let answers = collect_answers(&prompter).unwrap();
        assert_eq!(answers.framework(), Framework::Node);
        assert!(!answers.use_tailwind());
        assert!(!answers.use_storybook());
        assert!(answers.use_typescript_alias());
        assert!(answers.use_gitignore());
    }

    #[test]
    fn next_asks_every_question_in_order() {
        let mut seq = Sequence::new();
        let mut prompter = MockPrompter::new();

        prompter
            .expect_select()
            .withf(|_, items, default| items.len() == 4 && *default == 0)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(3));
        for (needle, answer) in [
            ("Tailwind", true),
            ("Storybook", false),
            ("alias", true),
            (".gitignore", false),
        ] {
            prompter
                .expect_confirm()
                .withf(move |p, default| p.contains(needle) && !*default)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok(answer));
        }

        let answers = collect_answers(&prompter).unwrap();
        assert_eq!(answers.framework(), Framework::Next);
        assert!(answers.use_tailwind());
        assert!(!answers.use_storybook());
        assert!(answers.use_typescript_alias());
        assert!(!answers.use_gitignore());
    }

    #[test]
    fn cancellation_propagates() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .returning(|_, _, _| Err(ApplicationError::Cancelled.into()));

        let err = collect_answers(&prompter).unwrap_err();
        assert!(err.is_cancelled());
    }
}
