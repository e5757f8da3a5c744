//! Offline keyword-combination generator.
//!
//! The generator over-generates candidates by appending random vocabulary
//! terms to the base phrase, collapses duplicates, shuffles and truncates.
//! Both loops are bounded, so generation terminates even when the vocabulary
//! cannot fill `desired_count`.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::{GenerationRequest, KeywordGenerator, ValidatedRequest, word_count};
use crate::errors::GenerateError;
use crate::vocabulary::{VocabularyTable, Vocabularies};

/// Candidates built per requested keyword.
pub const DEFAULT_OVERGENERATION_FACTOR: usize = 3;

/// Pool draws allowed while filling a single candidate.
pub const DEFAULT_MAX_DRAW_ATTEMPTS: usize = 16;

/// Hard cap on candidates built per request, whatever the requested count.
pub const MAX_TOTAL_ITERATIONS: usize = 100_000;

/// Consecutive candidates that add nothing new before the loop gives up.
pub const MAX_STALE_CANDIDATES: usize = 256;

/// Loop bounds for the local generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_overgeneration_factor")]
    pub overgeneration_factor: usize,
    #[serde(default = "default_max_draw_attempts")]
    pub max_draw_attempts: usize,
}

fn default_overgeneration_factor() -> usize {
    DEFAULT_OVERGENERATION_FACTOR
}

fn default_max_draw_attempts() -> usize {
    DEFAULT_MAX_DRAW_ATTEMPTS
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            overgeneration_factor: default_overgeneration_factor(),
            max_draw_attempts: default_max_draw_attempts(),
        }
    }
}

/// Generate keywords for an already validated request.
///
/// Distinct candidates are kept in first-seen order before the final shuffle,
/// so a seeded `rng` reproduces the same output.
pub fn combine<R: Rng + ?Sized>(
    request: &ValidatedRequest,
    table: &VocabularyTable,
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Vec<String> {
    let pool = table.candidate_pool(request.complexity);
    let base_words = word_count(&request.base_phrase);
    let iterations = request
        .desired_count
        .saturating_mul(settings.overgeneration_factor.max(1))
        .min(MAX_TOTAL_ITERATIONS);

    debug!(
        language = %request.language,
        complexity = %request.complexity,
        pool = pool.len(),
        iterations,
        "Combining keywords"
    );

    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<String> = Vec::new();
    let mut stale = 0;

    for _ in 0..iterations {
        let keyword = build_candidate(
            &request.base_phrase,
            base_words,
            &pool,
            request.max_words_per_keyword,
            settings.max_draw_attempts,
            rng,
        );
        if seen.insert(keyword.clone()) {
            unique.push(keyword);
            stale = 0;
        } else {
            stale += 1;
            if stale >= MAX_STALE_CANDIDATES {
                debug!(distinct = unique.len(), "No new candidates, stopping early");
                break;
            }
        }
    }

    unique.shuffle(rng);
    unique.truncate(request.desired_count);

    if unique.len() < request.desired_count {
        debug!(
            produced = unique.len(),
            requested = request.desired_count,
            "Vocabulary exhausted before reaching the requested count"
        );
    }

    unique
}

/// Build one candidate: the base phrase followed by random pool terms.
///
/// A drawn term is skipped when it would exceed the word budget or shares a
/// word with the candidate so far, base phrase included.
fn build_candidate<R: Rng + ?Sized>(
    base_phrase: &str,
    base_words: usize,
    pool: &[&'static str],
    max_words: usize,
    max_attempts: usize,
    rng: &mut R,
) -> String {
    let mut tokens: Vec<&str> = vec![base_phrase];
    let mut used: HashSet<&str> = base_phrase.split_whitespace().collect();
    let mut words = base_words;
    let mut attempts = 0;

    while words < max_words && attempts < max_attempts {
        attempts += 1;
        let Some(&term) = pool.choose(rng) else {
            break;
        };
        let term_words = word_count(term);
        if words + term_words > max_words || term.split_whitespace().any(|w| used.contains(w)) {
            continue;
        }
        used.extend(term.split_whitespace());
        tokens.push(term);
        words += term_words;
    }

    tokens.join(" ")
}

/// Local strategy: owns its random source and shares the vocabularies.
pub struct LocalGenerator {
    vocabularies: Arc<Vocabularies>,
    settings: GeneratorSettings,
    rng: StdRng,
}

impl LocalGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new(vocabularies: Arc<Vocabularies>, settings: GeneratorSettings) -> Self {
        Self {
            vocabularies,
            settings,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible output.
    pub fn with_seed(
        vocabularies: Arc<Vocabularies>,
        settings: GeneratorSettings,
        seed: u64,
    ) -> Self {
        Self {
            vocabularies,
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl KeywordGenerator for LocalGenerator {
    fn name(&self) -> &'static str {
        "local"
    }

    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<String>, GenerateError> {
        let valid = request.validate()?;
        let table = self
            .vocabularies
            .get(valid.language)
            .ok_or_else(|| GenerateError::UnsupportedLanguage(request.language.clone()))?;

        Ok(combine(&valid, table, &self.settings, &mut self.rng))
    }
}
