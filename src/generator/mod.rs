//! Keyword generation strategies.
//!
//! Both strategies implement [`KeywordGenerator`] and accept the same
//! [`GenerationRequest`]:
//! - [`LocalGenerator`] combines the base phrase with vocabulary terms offline.
//! - [`RemoteGenerator`] asks an external completion command for ideas.
//!
//! Validation is shared, so both reject an empty base phrase with
//! `InvalidInput` and an unknown language tag with `UnsupportedLanguage`
//! before doing any work.

pub mod local;
pub mod remote;

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;
use crate::scoring::ScoredIdea;
use crate::vocabulary::{Complexity, Language};

pub use local::{GeneratorSettings, LocalGenerator};
pub use remote::{CommandCompletion, CompletionClient, KeywordIdea, RemoteGenerator};

/// One user request for keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Root product/category phrase every keyword is anchored to.
    pub base_phrase: String,
    /// Free-form language tag ("es", "english", "português", ...).
    pub language: String,
    pub desired_count: usize,
    pub max_words_per_keyword: usize,
    pub complexity: Complexity,
}

impl GenerationRequest {
    pub fn new(
        base_phrase: impl Into<String>,
        language: impl Into<String>,
        desired_count: usize,
        max_words_per_keyword: usize,
        complexity: Complexity,
    ) -> Self {
        Self {
            base_phrase: base_phrase.into(),
            language: language.into(),
            desired_count,
            max_words_per_keyword,
            complexity,
        }
    }

    /// Check the request and normalize it.
    ///
    /// The base phrase is checked before the language, so an empty phrase is
    /// always reported as `InvalidInput` whatever the other fields hold.
    pub fn validate(&self) -> Result<ValidatedRequest, GenerateError> {
        let base_phrase = normalize_base_phrase(&self.base_phrase);
        if base_phrase.is_empty() {
            return Err(GenerateError::InvalidInput(
                "base phrase must not be empty".to_string(),
            ));
        }

        let language: Language = self.language.parse()?;

        if self.desired_count == 0 {
            return Err(GenerateError::InvalidInput(
                "desired count must be at least 1".to_string(),
            ));
        }
        if self.max_words_per_keyword == 0 {
            return Err(GenerateError::InvalidInput(
                "max words per keyword must be at least 1".to_string(),
            ));
        }

        let base_words = word_count(&base_phrase);
        if base_words > self.max_words_per_keyword {
            return Err(GenerateError::InvalidInput(format!(
                "base phrase has {} words but max words per keyword is {}",
                base_words, self.max_words_per_keyword
            )));
        }

        Ok(ValidatedRequest {
            base_phrase,
            language,
            desired_count: self.desired_count,
            max_words_per_keyword: self.max_words_per_keyword,
            complexity: self.complexity,
        })
    }
}

/// A request that passed validation, with its base phrase normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub base_phrase: String,
    pub language: Language,
    pub desired_count: usize,
    pub max_words_per_keyword: usize,
    pub complexity: Complexity,
}

/// Trim, lower-case and collapse internal whitespace to single spaces.
pub fn normalize_base_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keywords plus any per-keyword detail the strategy could provide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedBatch {
    pub keywords: Vec<String>,
    /// Scored ideas, in the same order as `keywords`; empty for the local strategy.
    pub ideas: Vec<ScoredIdea>,
}

/// A source of keyword strings.
pub trait KeywordGenerator {
    /// Short name used in logs and exports.
    fn name(&self) -> &'static str;

    /// Produce at most `request.desired_count` distinct keywords.
    ///
    /// Callers must not assume exact cardinality: a small vocabulary may
    /// yield fewer results than requested.
    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<String>, GenerateError>;

    /// Like [`KeywordGenerator::generate`], keeping strategy-specific detail.
    fn generate_batch(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<GeneratedBatch, GenerateError> {
        Ok(GeneratedBatch {
            keywords: self.generate(request)?,
            ideas: Vec::new(),
        })
    }
}

/// Which generator the host should build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Local,
    Remote,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Local => write!(f, "local"),
            Strategy::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Strategy::Local),
            "remote" => Ok(Strategy::Remote),
            _ => anyhow::bail!("Invalid strategy '{}'. Valid values: local, remote", s),
        }
    }
}
