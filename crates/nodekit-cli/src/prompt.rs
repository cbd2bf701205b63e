//! Terminal prompts backed by `dialoguer`.

use std::io;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use tracing::debug;

use nodekit_core::application::{ApplicationError, Prompter};
use nodekit_core::error::NodekitResult;

/// Set while a question owns the terminal.
static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);
static INTERRUPT_HANDLER: Once = Once::new();

/// Interactive [`Prompter`] for a terminal.
///
/// Escape, `q` and Ctrl-C dismiss a question and surface as
/// [`ApplicationError::Cancelled`].  Without a terminal every question fails
/// with [`ApplicationError::PromptFailed`].
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        install_interrupt_handler();
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> NodekitResult<usize> {
        ask(|| {
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact_opt()
        })
    }

    fn confirm(&self, prompt: &str, default: bool) -> NodekitResult<bool> {
        ask(|| {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact_opt()
        })
    }
}

/// Install the process-wide Ctrl-C handler.
///
/// In raw mode `console` turns the Ctrl-C key into SIGINT and the pending
/// read into `Interrupted`. While a question is active the handler leaves
/// the signal to the prompt; anywhere else it restores the cursor and exits
/// with 130.
fn install_interrupt_handler() {
    INTERRUPT_HANDLER.call_once(|| {
        let installed = ctrlc::set_handler(|| {
            if PROMPT_ACTIVE.load(Ordering::SeqCst) {
                return;
            }
            let _ = Term::stderr().show_cursor();
            std::process::exit(130);
        });
        if let Err(e) = installed {
            debug!(error = %e, "Ctrl-C handler not installed");
        }
    });
}

fn ask<T>(read: impl FnOnce() -> Result<Option<T>, dialoguer::Error>) -> NodekitResult<T> {
    PROMPT_ACTIVE.store(true, Ordering::SeqCst);
    let result = read();

    let err = match result {
        Ok(Some(answer)) => {
            PROMPT_ACTIVE.store(false, Ordering::SeqCst);
            return Ok(answer);
        }
        Ok(None) => ApplicationError::Cancelled,
        Err(e) => prompt_error(e),
    };

    if matches!(err, ApplicationError::Cancelled) {
        // The signal for an interrupted read may still be in flight, so the
        // flag stays set and the flow winds down through `Cancelled`.
        let _ = Term::stderr().show_cursor();
        debug!("prompt dismissed");
    } else {
        PROMPT_ACTIVE.store(false, Ordering::SeqCst);
    }
    Err(err.into())
}

fn prompt_error(err: dialoguer::Error) -> ApplicationError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            ApplicationError::Cancelled
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        },
    }
}
