//! Terminal-backed port implementations.
//!
//! Prompts use `dialoguer` (behind the `interactive` feature); progress uses
//! an `indicatif` bar on stderr.  Prompts suspend the bar while they are on
//! screen so the two never interleave.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressFinish, ProgressStyle};

use arcgen_core::application::ProgressSink;

/// Progress bar fed by the scaffold service.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// A bar drawn on stderr. Nothing is drawn until the first report.
    pub fn new() -> Self {
        let style = ProgressStyle::with_template("[{bar:30.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stderr())
            .with_style(style)
            .with_finish(ProgressFinish::AndClear);
        Self { bar }
    }

    /// A bar that never draws. Used for quiet and machine-readable output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Handle for suspending the bar around prompts.
    pub fn handle(&self) -> ProgressBar {
        self.bar.clone()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn report(&self, percent: u8, status: Option<&str>) {
        self.bar.set_position(u64::from(percent.min(100)));
        if let Some(status) = status {
            self.bar.set_message(status.to_owned());
        }
        if percent >= 100 {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(feature = "interactive")]
pub use self::interactive::{DialoguerConfirmer, DialoguerPrompter};

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
    use indicatif::ProgressBar;
    use tracing::debug;

    use arcgen_core::application::{
        ApplicationError, Choice, ConfirmLabels, Confirmer, Prompter, TextPrompt,
    };
    use arcgen_core::error::ArcgenResult;

    fn prompt_failed(err: dialoguer::Error) -> arcgen_core::error::ArcgenError {
        ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
        .into()
    }

    fn label(choice: &Choice) -> String {
        match &choice.hint {
            Some(hint) => format!("{}  ({hint})", choice.label),
            None => choice.label.clone(),
        }
    }

    /// Asks questions on the terminal.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
        bar: ProgressBar,
    }

    impl DialoguerPrompter {
        pub fn new(bar: ProgressBar) -> Self {
            Self {
                theme: ColorfulTheme::default(),
                bar,
            }
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(&self, prompt: &TextPrompt) -> ArcgenResult<Option<String>> {
            let title = match &prompt.hint {
                Some(hint) => format!("{} ({hint})", prompt.title),
                None => prompt.title.clone(),
            };

            let answer = self.bar.suspend(|| {
                Input::<String>::with_theme(&self.theme)
                    .with_prompt(title)
                    .allow_empty(true)
                    .interact_text()
            });

            let answer = answer.map_err(prompt_failed)?;
            debug!(title = %prompt.title, "Text answered");
            Ok(Some(answer))
        }

        fn select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<usize>> {
            let items: Vec<String> = choices.iter().map(label).collect();
            let initial = choices.iter().position(|c| c.selected).unwrap_or(0);

            self.bar
                .suspend(|| {
                    Select::with_theme(&self.theme)
                        .with_prompt(title)
                        .items(&items)
                        .default(initial)
                        .interact_opt()
                })
                .map_err(prompt_failed)
        }

        fn multi_select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<Vec<usize>>> {
            let items: Vec<String> = choices.iter().map(label).collect();
            let defaults: Vec<bool> = choices.iter().map(|c| c.selected).collect();

            self.bar
                .suspend(|| {
                    MultiSelect::with_theme(&self.theme)
                        .with_prompt(title)
                        .items(&items)
                        .defaults(&defaults)
                        .interact_opt()
                })
                .map_err(prompt_failed)
        }
    }

    /// Asks before replacing existing files.
    pub struct DialoguerConfirmer {
        theme: ColorfulTheme,
        bar: ProgressBar,
    }

    impl DialoguerConfirmer {
        pub fn new(bar: ProgressBar) -> Self {
            Self {
                theme: ColorfulTheme::default(),
                bar,
            }
        }
    }

    impl Confirmer for DialoguerConfirmer {
        fn confirm(&self, message: &str, labels: ConfirmLabels) -> ArcgenResult<bool> {
            let choice = self
                .bar
                .suspend(|| {
                    Select::with_theme(&self.theme)
                        .with_prompt(message)
                        .items(&[labels.yes, labels.no])
                        .default(1)
                        .interact_opt()
                })
                .map_err(prompt_failed)?;

            Ok(choice == Some(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_tracks_position() {
        let progress = BarProgress::hidden();
        progress.report(25, Some("Resolving templates"));
        assert_eq!(progress.handle().position(), 25);
        assert_eq!(progress.handle().message(), "Resolving templates");
    }

    #[test]
    fn bar_finishes_at_one_hundred() {
        let progress = BarProgress::hidden();
        progress.report(100, None);
        assert!(progress.handle().is_finished());
    }

    #[test]
    fn percent_is_capped() {
        let progress = BarProgress::hidden();
        progress.report(250, None);
        assert_eq!(progress.handle().position(), 100);
    }
}
