//! Non-interactive prompt adapters.
//!
//! `PresetPrompter` answers from values known up front (command-line flags,
//! config defaults) and defers everything else to another prompter.
//! `UnattendedPrompter` is the end of that chain when no terminal is
//! available.

mod preset;

pub use preset::{PresetAnswers, PresetPrompter};

use arcgen_core::{
    application::{
        ApplicationError,
        ports::{Choice, ConfirmLabels, Confirmer, Prompter, TextPrompt},
    },
    error::ArcgenResult,
};

/// Fails every prompt. Use behind a [`PresetPrompter`] in scripts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnattendedPrompter;

impl UnattendedPrompter {
    fn refuse<T>(title: &str) -> ArcgenResult<T> {
        Err(ApplicationError::PromptFailed {
            reason: format!("no answer given for '{title}' and prompts are unavailable"),
        }
        .into())
    }
}

impl Prompter for UnattendedPrompter {
    fn input(&self, prompt: &TextPrompt) -> ArcgenResult<Option<String>> {
        Self::refuse(&prompt.title)
    }

    fn select(&self, title: &str, _: &[Choice]) -> ArcgenResult<Option<usize>> {
        Self::refuse(title)
    }

    fn multi_select(&self, title: &str, _: &[Choice]) -> ArcgenResult<Option<Vec<usize>>> {
        Self::refuse(title)
    }
}

/// Gives the same answer to every confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConfirmer(pub bool);

impl FixedConfirmer {
    /// Replace every existing file.
    pub const fn always() -> Self {
        Self(true)
    }

    /// Keep every existing file.
    pub const fn never() -> Self {
        Self(false)
    }
}

impl Confirmer for FixedConfirmer {
    fn confirm(&self, message: &str, _: ConfirmLabels) -> ArcgenResult<bool> {
        tracing::debug!(prompt = message, answer = self.0, "Confirmation answered from policy");
        Ok(self.0)
    }
}
