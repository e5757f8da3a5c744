//! Language vocabularies and complexity tiers.
//!
//! A [`Vocabularies`] value is built once at startup and handed to whichever
//! generator needs it; nothing in this module is mutable after construction.
//!
//! | Tier           | Eligible extras                               |
//! |----------------|-----------------------------------------------|
//! | `Basic`        | basic                                         |
//! | `Intermediate` | basic + intermediate                          |
//! | `Advanced`     | basic + intermediate + advanced               |

mod tables;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::GenerateError;
use tables::LanguageWords;

/// Languages with a built-in vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Spanish, Language::English, Language::Portuguese];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Name of the language in the language itself, used in prompts.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Spanish => "español",
            Language::English => "English",
            Language::Portuguese => "português",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = GenerateError;

    /// Accepts ISO codes, English names and native names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" | "português" | "portugues" => Ok(Language::Portuguese),
            _ => Err(GenerateError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// How specific the generated keywords are allowed to get.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Basic,
        Complexity::Intermediate,
        Complexity::Advanced,
    ];
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Basic => write!(f, "basic"),
            Complexity::Intermediate => write!(f, "intermediate"),
            Complexity::Advanced => write!(f, "advanced"),
        }
    }
}

/// Word lists for one language.
#[derive(Debug, Clone)]
pub struct VocabularyTable {
    pub language: Language,
    pub modifiers: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    /// Per-tier deltas, indexed Basic, Intermediate, Advanced.
    tier_extras: [Vec<&'static str>; 3],
}

impl VocabularyTable {
    fn from_words(language: Language, words: &LanguageWords) -> Self {
        Self {
            language,
            modifiers: words.modifiers.to_vec(),
            categories: words.categories.to_vec(),
            tier_extras: [
                words.basic.to_vec(),
                words.intermediate.to_vec(),
                words.advanced.to_vec(),
            ],
        }
    }

    /// Extras eligible at `complexity`: the union of that tier and every tier below it.
    pub fn extras_for(&self, complexity: Complexity) -> Vec<&'static str> {
        Complexity::ALL
            .iter()
            .zip(self.tier_extras.iter())
            .filter(|(tier, _)| **tier <= complexity)
            .flat_map(|(_, extras)| extras.iter().copied())
            .collect()
    }

    /// Modifiers, categories and tier extras, de-duplicated in that order.
    pub fn candidate_pool(&self, complexity: Complexity) -> Vec<&'static str> {
        let mut pool: Vec<&'static str> = Vec::new();
        let all = self
            .modifiers
            .iter()
            .copied()
            .chain(self.categories.iter().copied())
            .chain(self.extras_for(complexity));
        for term in all {
            if !pool.contains(&term) {
                pool.push(term);
            }
        }
        pool
    }
}

/// The fixed set of vocabulary tables.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    tables: BTreeMap<Language, VocabularyTable>,
}

impl Vocabularies {
    /// The built-in Spanish, English and Portuguese tables.
    pub fn builtin() -> Self {
        let entries = [
            (Language::Spanish, &tables::SPANISH),
            (Language::English, &tables::ENGLISH),
            (Language::Portuguese, &tables::PORTUGUESE),
        ]
        .into_iter()
        .map(|(language, words)| (language, VocabularyTable::from_words(language, words)))
        .collect();

        Self { tables: entries }
    }

    pub fn get(&self, language: Language) -> Option<&VocabularyTable> {
        self.tables.get(&language)
    }

    /// Resolve a free-form language tag to its table.
    pub fn resolve(&self, tag: &str) -> Result<&VocabularyTable, GenerateError> {
        let language: Language = tag.parse()?;
        self.get(language)
            .ok_or_else(|| GenerateError::UnsupportedLanguage(tag.to_string()))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.tables.keys().copied()
    }
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self::builtin()
    }
}
