//! Uniform choice over a fixed label set

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("decision needs at least one option")]
    NoOptions,
}

/// Picks one of its options with probability 1/K
#[derive(Debug, Clone)]
pub struct ChoiceSelector {
    options: Vec<String>,
}

impl ChoiceSelector {
    pub fn new<I, S>(options: I) -> Result<Self, DecisionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(DecisionError::NoOptions);
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn choose(&self) -> &str {
        self.choose_with(&mut rand::rng())
    }

    pub fn choose_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction
        self.options.choose(rng).map(String::as_str).unwrap_or_default()
    }
}
