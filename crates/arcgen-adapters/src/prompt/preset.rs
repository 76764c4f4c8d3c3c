use tracing::{debug, warn};

use arcgen_core::{
    application::ports::{Choice, Prompter, TextPrompt, titles},
    domain::{Feature, StyleTier},
    error::ArcgenResult,
};

/// Answers known before generation starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetAnswers {
    pub name: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub route: Option<String>,
    pub style: Option<StyleTier>,
}

impl PresetAnswers {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.features.is_none() && self.route.is_none() && self.style.is_none()
    }
}

/// Answers from [`PresetAnswers`] where it can, and asks `fallback`
/// otherwise.
pub struct PresetPrompter {
    answers: PresetAnswers,
    fallback: Box<dyn Prompter>,
}

impl PresetPrompter {
    pub fn new(answers: PresetAnswers, fallback: Box<dyn Prompter>) -> Self {
        Self { answers, fallback }
    }
}

/// Position of `key` among `choices`.
fn index_of(choices: &[Choice], key: &str) -> Option<usize> {
    choices.iter().position(|choice| choice.key == key)
}

impl Prompter for PresetPrompter {
    fn input(&self, prompt: &TextPrompt) -> ArcgenResult<Option<String>> {
        let preset = match prompt.title.as_str() {
            titles::NAME => self.answers.name.as_ref(),
            titles::ROUTE => self.answers.route.as_ref(),
            _ => None,
        };

        match preset {
            Some(answer) => {
                debug!(title = %prompt.title, "Answered from preset");
                Ok(Some(answer.clone()))
            }
            None => self.fallback.input(prompt),
        }
    }

    fn select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<usize>> {
        if title == titles::STYLE {
            if let Some(tier) = self.answers.style {
                debug!(title, %tier, "Answered from preset");
                return Ok(index_of(choices, tier.as_str()));
            }
        }
        self.fallback.select(title, choices)
    }

    fn multi_select(&self, title: &str, choices: &[Choice]) -> ArcgenResult<Option<Vec<usize>>> {
        let Some(features) = self.answers.features.as_ref().filter(|_| title == titles::FEATURES)
        else {
            return self.fallback.multi_select(title, choices);
        };

        let mut picked = Vec::with_capacity(features.len());
        for feature in features {
            match index_of(choices, feature.as_str()) {
                Some(index) => picked.push(index),
                None => warn!(%feature, "Feature not offered for this project; ignored"),
            }
        }
        picked.sort_unstable();
        picked.dedup();

        debug!(title, ?picked, "Answered from preset");
        Ok(Some(picked))
    }
}
