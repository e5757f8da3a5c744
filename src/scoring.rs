//! Heuristic priority scoring for keyword ideas.
//!
//! Higher buying intent and lower competition rank first:
//!
//! ```text
//! priority = intent_score * 100 * (100 - competition) / 100
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::generator::KeywordIdea;

/// Competition assumed when an idea has no estimate.
pub const DEFAULT_COMPETITION: f64 = 50.0;

/// Intent score when the model gave no intent; treated as medium.
pub const MISSING_INTENT_SCORE: f64 = 0.6;

/// Intent score when the model gave an intent that is not recognized.
pub const UNKNOWN_INTENT_SCORE: f64 = 0.5;

/// Estimated commercial intent of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[serde(alias = "alta", alias = "alto")]
    High,
    #[serde(alias = "media", alias = "medio", alias = "média")]
    Medium,
    #[serde(alias = "baja", alias = "bajo", alias = "baixa")]
    Low,
    /// Present in the reply but not one of the known levels
    Unknown,
}

impl Intent {
    pub fn score(self) -> f64 {
        match self {
            Intent::High => 1.0,
            Intent::Medium => 0.6,
            Intent::Low => 0.3,
            Intent::Unknown => UNKNOWN_INTENT_SCORE,
        }
    }
}

/// Deserialize an intent. `null` stays `None`; unrecognized values become
/// [`Intent::Unknown`].
pub(crate) fn lenient_intent<'de, D>(deserializer: D) -> Result<Option<Intent>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let intent = value
        .as_str()
        .map(|s| serde_json::Value::String(s.trim().to_lowercase()))
        .and_then(|s| serde_json::from_value(s).ok())
        .unwrap_or(Intent::Unknown);
    Ok(Some(intent))
}

/// Deserialize a number that may arrive as a JSON number or a numeric string.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().trim_end_matches('%').parse().ok(),
        _ => None,
    })
}

/// A keyword idea with its computed scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredIdea {
    #[serde(flatten)]
    pub idea: KeywordIdea,
    pub intent_score: f64,
    pub priority_score: f64,
}

/// Score one idea.
pub fn score_idea(idea: KeywordIdea) -> ScoredIdea {
    let intent_score = idea.intent.map_or(MISSING_INTENT_SCORE, Intent::score);
    let competition = idea
        .competition_estimate
        .unwrap_or(DEFAULT_COMPETITION)
        .clamp(0.0, 100.0);
    let priority_score = intent_score * 100.0 * (100.0 - competition) / 100.0;

    ScoredIdea {
        idea,
        intent_score,
        priority_score,
    }
}

/// Score all ideas and sort them by priority, best first.
///
/// The sort is stable, so ties keep the order the model returned them in.
pub fn score_ideas(ideas: Vec<KeywordIdea>) -> Vec<ScoredIdea> {
    let mut scored: Vec<ScoredIdea> = ideas.into_iter().map(score_idea).collect();
    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(keyword: &str, intent: Option<Intent>, competition: Option<f64>) -> KeywordIdea {
        KeywordIdea {
            keyword: keyword.to_string(),
            intent,
            competition_estimate: competition,
            ..KeywordIdea::default()
        }
    }

    #[test]
    fn test_score_idea_high_intent_low_competition() {
        let scored = score_idea(idea("mate imperial", Some(Intent::High), Some(20.0)));
        assert_eq!(scored.intent_score, 1.0);
        assert!((scored.priority_score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_idea_defaults_when_missing() {
        let scored = score_idea(idea("mate", None, None));
        assert_eq!(scored.intent_score, MISSING_INTENT_SCORE);
        assert!((scored.priority_score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_idea_unrecognized_intent_scores_below_missing() {
        let unknown = score_idea(idea("mate", Some(Intent::Unknown), None));
        assert_eq!(unknown.intent_score, UNKNOWN_INTENT_SCORE);
        assert!((unknown.priority_score - 25.0).abs() < 1e-9);

        let missing = score_idea(idea("mate", None, None));
        assert!(missing.priority_score > unknown.priority_score);
    }

    #[test]
    fn test_score_idea_clamps_competition() {
        let scored = score_idea(idea("mate", Some(Intent::High), Some(150.0)));
        assert_eq!(scored.priority_score, 0.0);
        let scored = score_idea(idea("mate", Some(Intent::Low), Some(-10.0)));
        assert!((scored.priority_score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_ideas_sorts_by_priority() {
        let scored = score_ideas(vec![
            idea("low", Some(Intent::Low), Some(50.0)),
            idea("high", Some(Intent::High), Some(10.0)),
            idea("medium", Some(Intent::Medium), Some(50.0)),
        ]);
        let order: Vec<&str> = scored.iter().map(|s| s.idea.keyword.as_str()).collect();
        assert_eq!(order, vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_score_ideas_ties_keep_input_order() {
        let scored = score_ideas(vec![idea("first", None, None), idea("second", None, None)]);
        assert_eq!(scored[0].idea.keyword, "first");
        assert_eq!(scored[1].idea.keyword, "second");
    }

    #[test]
    fn test_intent_accepts_spanish_aliases() {
        let intent: Intent = serde_json::from_str("\"alta\"").unwrap();
        assert_eq!(intent, Intent::High);
        let intent: Intent = serde_json::from_str("\"media\"").unwrap();
        assert_eq!(intent, Intent::Medium);
        let intent: Intent = serde_json::from_str("\"baja\"").unwrap();
        assert_eq!(intent, Intent::Low);
    }
}
