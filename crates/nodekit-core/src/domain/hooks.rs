//! Static git hook and `.gitignore` templates.

/// Directory the hooks are written to unless configured otherwise.
pub const DEFAULT_HOOKS_DIR: &str = ".husky";

/// A husky hook script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitHook {
    pub name: &'static str,
    pub content: &'static str,
    pub description: &'static str,
}

/// Hooks written by the setup, in write order.
pub static GIT_HOOKS: &[GitHook] = &[
    GitHook {
        name: "prepare-commit-msg",
        content: "#!/bin/sh\nnpx devmoji --edit --lint --config ./.commitlintrc.json\n",
        description: "Add emoji to commit messages",
    },
    GitHook {
        name: "commit-msg",
        content: "#!/bin/sh\nnpx --no -- commitlint --edit $1\n",
        description: "Validate commit messages",
    },
    GitHook {
        name: "pre-commit",
        content: "#!/bin/sh\nnpx lint-staged\n",
        description: "Run linters on staged files",
    },
];

const GITIGNORE_TEMPLATE: &str = r#"
# dependencies

node_modules

# package manager lockfiles
# package-lock.json
# yarn.lock
# pnpm-lock.yaml
# bun.lockb

# production
build
dist

# misc
*.pem

# windows
Thumbs.db
Thumbs.db:encryptable
ehthumbs.db
Desktop.ini

# macOS
.DS_Store
.AppleDouble
.LSOverride
._*

# linux
*~
.directory
.Trash-*

# env files
.env*
!.env.example

# typescript
*.tsbuildinfo
"#;

/// The `.gitignore` content written when the user opts in.
pub fn gitignore_content() -> String {
    format!("{}\n", GITIGNORE_TEMPLATE.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_are_shell_scripts() {
        assert_eq!(GIT_HOOKS.len(), 3);
        for hook in GIT_HOOKS {
            assert!(hook.content.starts_with("#!/bin/sh\n"), "{}", hook.name);
            assert!(hook.content.ends_with('\n'));
        }
    }

    #[test]
    fn devmoji_hook_reads_generated_commitlint_file() {
        assert!(GIT_HOOKS[0].content.contains(crate::domain::COMMITLINT_CONFIG_FILE));
    }

    #[test]
    fn gitignore_is_trimmed_with_single_trailing_newline() {
        let content = gitignore_content();
        assert!(content.starts_with("# dependencies"));
        assert!(content.ends_with("*.tsbuildinfo\n"));
        assert!(content.contains("!.env.example"));
    }
}
