//! Recording doubles for the interactive ports.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use nodekit_core::{
    application::{
        ApplicationError,
        ports::{ProgressEvent, ProgressReporter, Prompter},
    },
    error::NodekitResult,
};

/// Collects progress events for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        lock(&self.events).clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, event: ProgressEvent) {
        lock(&self.events).push(event);
    }
}

/// A scripted reply to one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Select(usize),
    Confirm(bool),
    /// The user dismisses the prompt.
    Cancel,
}

/// Prompter that answers from a fixed script, in order.
///
/// Running out of replies, or a reply of the wrong kind, is reported as
/// `PromptFailed` so a test sees exactly which question was unexpected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            asked: Arc::default(),
        }
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> Vec<String> {
        lock(&self.asked).clone()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.replies).len()
    }

    fn next(&self, prompt: &str) -> NodekitResult<Reply> {
        lock(&self.asked).push(prompt.to_string());
        match lock(&self.replies).pop_front() {
            Some(Reply::Cancel) => Err(ApplicationError::Cancelled.into()),
            Some(reply) => Ok(reply),
            None => Err(ApplicationError::PromptFailed {
                reason: format!("no scripted reply for '{prompt}'"),
            }
            .into()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[String], _default: usize) -> NodekitResult<usize> {
        match self.next(prompt)? {
            Reply::Select(index) => Ok(index),
            other => Err(unexpected(prompt, other)),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> NodekitResult<bool> {
        match self.next(prompt)? {
            Reply::Confirm(answer) => Ok(answer),
            other => Err(unexpected(prompt, other)),
        }
    }
}

fn unexpected(prompt: &str, reply: Reply) -> nodekit_core::error::NodekitError {
    ApplicationError::PromptFailed {
        reason: format!("reply {reply:?} does not fit '{prompt}'"),
    }
    .into()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_in_order_then_fails() {
        let prompter = ScriptedPrompter::new([Reply::Select(2), Reply::Confirm(true)]);
        assert_eq!(prompter.select("fw", &[], 0).unwrap(), 2);
        assert!(prompter.confirm("tw", false).unwrap());
        assert!(prompter.confirm("extra", false).is_err());
        assert_eq!(prompter.asked(), ["fw", "tw", "extra"]);
    }

    #[test]
    fn cancel_reply_is_cancellation() {
        let prompter = ScriptedPrompter::new([Reply::Cancel]);
        assert!(prompter.confirm("q", true).unwrap_err().is_cancelled());
    }
}
