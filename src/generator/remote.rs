//! Remote strategy: delegate keyword ideation to an external completion command.
//!
//! The strategy is split in two:
//! - a [`CompletionClient`] turns a prompt into free text (or an error);
//! - [`RemoteGenerator`] builds the prompt, then parses and scores the reply.
//!
//! [`CommandCompletion`] is the bundled client. It runs a user-configured
//! command (for example an `llm`-style CLI) and reads its stdout, much like
//! shelling out to any other tool.

use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use super::{
    GeneratedBatch, GenerationRequest, KeywordGenerator, ValidatedRequest, normalize_base_phrase,
};
use crate::errors::{CompletionError, GenerateError};
use crate::scoring::{Intent, ScoredIdea, lenient_intent, lenient_number, score_ideas};
use crate::util::{extract_json_objects, strip_list_marker};
use crate::vocabulary::Complexity;

/// Placeholder replaced by the prompt in command arguments.
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// Turns a free-text prompt into a free-text completion.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Completion client backed by a local command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandCompletion {
    pub command: String,
    pub args: Vec<String>,
    /// Environment variable holding the credential; `None` disables the check.
    pub api_key_env: Option<String>,
}

impl CommandCompletion {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            api_key_env: None,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_api_key_env(mut self, env_var: impl Into<String>) -> Self {
        self.api_key_env = Some(env_var.into());
        self
    }

    /// Arguments with the prompt substituted, or appended if no placeholder is present.
    pub fn render_args(&self, prompt: &str) -> Vec<String> {
        if self.args.iter().any(|a| a.contains(PROMPT_PLACEHOLDER)) {
            self.args
                .iter()
                .map(|a| a.replace(PROMPT_PLACEHOLDER, prompt))
                .collect()
        } else {
            let mut args = self.args.clone();
            args.push(prompt.to_string());
            args
        }
    }

    fn credential(&self) -> Result<Option<(String, String)>, CompletionError> {
        let Some(env_var) = &self.api_key_env else {
            return Ok(None);
        };
        std::env::var(env_var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|value| Some((env_var.clone(), value)))
            .ok_or_else(|| CompletionError::MissingCredential {
                env_var: env_var.clone(),
            })
    }
}

impl CompletionClient for CommandCompletion {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let credential = self.credential()?;

        let mut cmd = Command::new(&self.command);
        cmd.args(self.render_args(prompt));
        if let Some((env_var, value)) = credential {
            cmd.env(env_var, value);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(command = %self.command, "Running completion command");
        let output = cmd.output().map_err(|source| CompletionError::SpawnFailed {
            command: self.command.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(output.status.code(), stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }
        Ok(stdout)
    }
}

/// Map a failed run to `Unauthorized` when stderr looks like a credential problem.
fn classify_failure(code: Option<i32>, stderr: String) -> CompletionError {
    let lower = stderr.to_lowercase();
    let auth_markers = ["401", "unauthorized", "invalid api key", "authentication"];
    if auth_markers.iter().any(|m| lower.contains(m)) {
        CompletionError::Unauthorized(stderr)
    } else {
        CompletionError::Failed { code, stderr }
    }
}

/// One keyword proposed by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordIdea {
    pub keyword: String,
    #[serde(default, deserialize_with = "lenient_intent", skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub competition_estimate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_ad_hook: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub longtail_variations: Vec<String>,
}

impl KeywordIdea {
    pub fn from_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }
}

fn specificity(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Basic => "broad, high-volume search terms",
        Complexity::Intermediate => "broad terms mixed with buyer-intent qualifiers",
        Complexity::Advanced => "specific long-tail terms with niche qualifiers",
    }
}

/// Build the ideation prompt for a validated request.
pub fn build_prompt(request: &ValidatedRequest, country: Option<&str>) -> String {
    let mut prompt = format!(
        "Generate {count} unique e-commerce search keywords for the product category \"{base}\".\n\
         Write every keyword in {language_name} ({language_code}).\n",
        count = request.desired_count,
        base = request.base_phrase,
        language_name = request.language.native_name(),
        language_code = request.language.code(),
    );
    if let Some(country) = country.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("Target market: {}.\n", country.trim()));
    }
    prompt.push_str(&format!(
        "Prefer {}. Use at most {} words per keyword.\n",
        specificity(request.complexity),
        request.max_words_per_keyword
    ));
    prompt.push_str(
        "Return one JSON object per keyword with these fields:\n\
         {\n  \"keyword\": string,\n  \"intent\": \"high\" | \"medium\" | \"low\",\n  \
         \"competition_estimate\": number from 0 to 100 (higher means more competition),\n  \
         \"suggested_ad_hook\": short string,\n  \"longtail_variations\": [strings]\n}\n\
         Order the objects by commercial priority, best first.",
    );
    prompt
}

/// Parse a completion into keyword ideas.
///
/// Each JSON object is tried as-is and then with single quotes swapped for
/// double quotes. When no object parses, every non-empty line (list markers
/// stripped) up to `limit` becomes a bare keyword.
pub fn parse_ideas(raw: &str, limit: usize) -> Vec<KeywordIdea> {
    let mut ideas = Vec::new();
    for object in extract_json_objects(raw) {
        let parsed = serde_json::from_str::<KeywordIdea>(object)
            .or_else(|_| serde_json::from_str::<KeywordIdea>(&object.replace('\'', "\"")));
        match parsed {
            Ok(idea) => ideas.push(idea),
            Err(e) => warn!("Skipping unparseable keyword object: {}", e),
        }
    }

    if ideas.is_empty() {
        ideas = raw
            .lines()
            .map(strip_list_marker)
            .filter(|line| !line.is_empty())
            .take(limit)
            .map(KeywordIdea::from_keyword)
            .collect();
    }

    ideas
}

/// Remote strategy over any [`CompletionClient`].
pub struct RemoteGenerator<C> {
    client: C,
    country: Option<String>,
}

impl<C: CompletionClient> RemoteGenerator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            country: None,
        }
    }

    /// Add market/country context to the prompt.
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    /// Ask the client for ideas, then normalize, de-duplicate, score and cap them.
    pub fn generate_ideas(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ScoredIdea>, GenerateError> {
        let valid = request.validate()?;
        let prompt = build_prompt(&valid, self.country.as_deref());
        let raw = self.client.complete(&prompt)?;

        let mut seen = std::collections::HashSet::new();
        let ideas: Vec<KeywordIdea> = parse_ideas(&raw, valid.desired_count)
            .into_iter()
            .filter_map(|mut idea| {
                idea.keyword = normalize_base_phrase(&idea.keyword);
                (!idea.keyword.is_empty() && seen.insert(idea.keyword.clone())).then_some(idea)
            })
            .collect();

        let mut scored = score_ideas(ideas);
        scored.truncate(valid.desired_count);
        info!(ideas = scored.len(), "Parsed keyword ideas from completion");
        Ok(scored)
    }
}

impl<C: CompletionClient> KeywordGenerator for RemoteGenerator<C> {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<String>, GenerateError> {
        Ok(self
            .generate_ideas(request)?
            .into_iter()
            .map(|scored| scored.idea.keyword)
            .collect())
    }

    fn generate_batch(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<GeneratedBatch, GenerateError> {
        let ideas = self.generate_ideas(request)?;
        let keywords = ideas.iter().map(|scored| scored.idea.keyword.clone()).collect();
        Ok(GeneratedBatch { keywords, ideas })
    }
}
