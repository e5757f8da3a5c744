//! Configuration system for keysmith.
//!
//! Settings are read from `keysmith.toml` in the project directory (or an
//! explicit `--config` path) and layered:
//! 1. `keysmith.toml`
//! 2. Environment variables (`KEYSMITH_LANGUAGE`, `KEYSMITH_STRATEGY`,
//!    `KEYSMITH_REMOTE_CMD`)
//! 3. CLI flags, applied by the command handlers
//!
//! # Configuration File Format
//!
//! ```toml
//! [defaults]
//! language = "es"
//! count = 20
//! max_words = 3
//! complexity = "basic"
//! format = "text"
//! strategy = "local"
//!
//! [generator]
//! overgeneration_factor = 3
//! max_draw_attempts = 16
//!
//! [remote]
//! command = "llm"
//! args = ["-m", "gpt-4o", "{prompt}"]
//! api_key_env = "OPENAI_API_KEY"
//! country = "Argentina"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::generator::{CommandCompletion, GeneratorSettings, Strategy};
use crate::vocabulary::{Complexity, Language};

/// Default config file name, looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "keysmith.toml";

pub const ENV_LANGUAGE: &str = "KEYSMITH_LANGUAGE";
pub const ENV_STRATEGY: &str = "KEYSMITH_STRATEGY";
pub const ENV_REMOTE_CMD: &str = "KEYSMITH_REMOTE_CMD";

/// Default request settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Language tag for generated keywords
    #[serde(default = "default_language")]
    pub language: String,
    /// Number of keywords to generate
    #[serde(default = "default_count")]
    pub count: usize,
    /// Maximum words per keyword, base phrase included
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub format: ExportFormat,
    #[serde(default)]
    pub strategy: Strategy,
}

fn default_language() -> String {
    "es".to_string()
}

fn default_count() -> usize {
    20
}

fn default_max_words() -> usize {
    3
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            count: default_count(),
            max_words: default_max_words(),
            complexity: Complexity::default(),
            format: ExportFormat::default(),
            strategy: Strategy::default(),
        }
    }
}

/// Completion command used by the remote strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Command to execute (default: "llm")
    #[serde(default = "default_remote_command")]
    pub command: String,
    /// Arguments; `{prompt}` is replaced by the prompt, otherwise it is appended
    #[serde(default)]
    pub args: Vec<String>,
    /// Environment variable that must hold the credential
    #[serde(default = "default_api_key_env", skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Market/country context added to the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

fn default_remote_command() -> String {
    "llm".to_string()
}

fn default_api_key_env() -> Option<String> {
    Some("OPENAI_API_KEY".to_string())
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            command: default_remote_command(),
            args: Vec::new(),
            api_key_env: default_api_key_env(),
            country: None,
        }
    }
}

impl RemoteConfig {
    pub fn to_completion(&self) -> CommandCompletion {
        CommandCompletion {
            command: self.command.clone(),
            args: self.args.clone(),
            api_key_env: self.api_key_env.clone().filter(|v| !v.trim().is_empty()),
        }
    }
}

/// The complete keysmith.toml structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KeysmithToml {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl KeysmithToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse keysmith.toml")
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize keysmith.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Apply environment overrides. `lookup` is usually `std::env::var(..).ok()`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(language) = lookup(ENV_LANGUAGE).filter(|v| !v.trim().is_empty()) {
            self.defaults.language = language;
        }
        if let Some(strategy) = lookup(ENV_STRATEGY).filter(|v| !v.trim().is_empty()) {
            self.defaults.strategy = strategy
                .parse()
                .with_context(|| format!("Invalid {} value", ENV_STRATEGY))?;
        }
        if let Some(command) = lookup(ENV_REMOTE_CMD).filter(|v| !v.trim().is_empty()) {
            self.remote.command = command;
        }
        Ok(())
    }

    /// Validate the configuration and return any warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.defaults.language.parse::<Language>().is_err() {
            warnings.push(format!(
                "Unsupported language '{}': should be one of es, en, pt",
                self.defaults.language
            ));
        }
        if self.defaults.count == 0 {
            warnings.push("defaults.count is 0: at least 1 keyword is required".to_string());
        }
        if self.defaults.max_words == 0 {
            warnings.push("defaults.max_words is 0: keywords need at least 1 word".to_string());
        }
        if !(1..=10).contains(&self.generator.overgeneration_factor) {
            warnings.push(format!(
                "generator.overgeneration_factor {} is outside 1..=10 (recommended: 2-3)",
                self.generator.overgeneration_factor
            ));
        }
        if self.generator.max_draw_attempts == 0 {
            warnings.push(
                "generator.max_draw_attempts is 0: keywords will never get modifiers".to_string(),
            );
        }
        if self.remote.command.trim().is_empty() {
            warnings.push("remote.command is empty: the remote strategy cannot run".to_string());
        }

        warnings
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Resolved configuration: file contents plus environment overrides.
#[derive(Debug, Clone)]
pub struct KeysmithConfig {
    pub source: ConfigSource,
    pub toml: KeysmithToml,
}

impl KeysmithConfig {
    /// Path of the default config file for a project directory.
    pub fn default_path(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Load configuration for a project.
    ///
    /// An explicit path must exist; the default path falls back to built-in
    /// defaults when absent.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let (source, mut toml) = match explicit {
            Some(path) => (ConfigSource::File(path.to_path_buf()), KeysmithToml::load(path)?),
            None => {
                let path = Self::default_path(project_dir);
                if path.exists() {
                    let toml = KeysmithToml::load(&path)?;
                    (ConfigSource::File(path), toml)
                } else {
                    (ConfigSource::Defaults, KeysmithToml::default())
                }
            }
        };

        toml.apply_env(|name| std::env::var(name).ok())?;

        Ok(Self { source, toml })
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.toml.defaults
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        self.toml.generator
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.toml.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let toml = KeysmithToml::parse("").unwrap();
        assert_eq!(toml, KeysmithToml::default());
        assert_eq!(toml.defaults.language, "es");
        assert_eq!(toml.defaults.count, 20);
        assert_eq!(toml.defaults.max_words, 3);
        assert_eq!(toml.generator.overgeneration_factor, 3);
        assert_eq!(toml.remote.api_key_env.as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = KeysmithToml::parse(
            r#"
[defaults]
language = "pt"
count = 40
max_words = 4
complexity = "advanced"
format = "csv"
strategy = "remote"

[generator]
overgeneration_factor = 2
max_draw_attempts = 8

[remote]
command = "my-llm"
args = ["--json", "{prompt}"]
country = "Brasil"
"#,
        )
        .unwrap();

        assert_eq!(toml.defaults.language, "pt");
        assert_eq!(toml.defaults.count, 40);
        assert_eq!(toml.defaults.complexity, Complexity::Advanced);
        assert_eq!(toml.defaults.format, ExportFormat::Csv);
        assert_eq!(toml.defaults.strategy, Strategy::Remote);
        assert_eq!(toml.generator.overgeneration_factor, 2);
        assert_eq!(toml.generator.max_draw_attempts, 8);
        assert_eq!(toml.remote.command, "my-llm");
        assert_eq!(toml.remote.args, vec!["--json", "{prompt}"]);
        assert_eq!(toml.remote.country.as_deref(), Some("Brasil"));
    }

    #[test]
    fn test_parse_invalid_complexity_fails() {
        assert!(KeysmithToml::parse("[defaults]\ncomplexity = \"expert\"\n").is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut toml = KeysmithToml::default();
        toml.defaults.count = 7;
        toml.remote.country = Some("Chile".to_string());
        toml.save(&path).unwrap();

        assert_eq!(KeysmithToml::load(&path).unwrap(), toml);
    }

    #[test]
    fn test_apply_env_overrides_file_values() {
        let mut toml = KeysmithToml::default();
        toml.apply_env(|name| match name {
            ENV_LANGUAGE => Some("en".to_string()),
            ENV_STRATEGY => Some("remote".to_string()),
            ENV_REMOTE_CMD => Some("ollama-wrapper".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(toml.defaults.language, "en");
        assert_eq!(toml.defaults.strategy, Strategy::Remote);
        assert_eq!(toml.remote.command, "ollama-wrapper");
    }

    #[test]
    fn test_apply_env_ignores_blank_values() {
        let mut toml = KeysmithToml::default();
        toml.apply_env(|_| Some("  ".to_string())).unwrap();
        assert_eq!(toml, KeysmithToml::default());
    }

    #[test]
    fn test_apply_env_rejects_bad_strategy() {
        let mut toml = KeysmithToml::default();
        let result = toml.apply_env(|name| (name == ENV_STRATEGY).then(|| "cloud".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(KeysmithToml::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut toml = KeysmithToml::default();
        toml.defaults.language = "Klingon".to_string();
        toml.defaults.count = 0;
        toml.defaults.max_words = 0;
        toml.generator.overgeneration_factor = 0;
        toml.generator.max_draw_attempts = 0;
        toml.remote.command = " ".to_string();

        let warnings = toml.validate();
        assert_eq!(warnings.len(), 6);
        assert!(warnings[0].contains("Klingon"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = KeysmithConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.source, ConfigSource::Defaults);
    }

    #[test]
    fn test_load_finds_project_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[defaults]\ncount = 9\n",
        )
        .unwrap();
        let config = KeysmithConfig::load(dir.path(), None).unwrap();
        assert_eq!(
            config.source,
            ConfigSource::File(dir.path().join(CONFIG_FILE_NAME))
        );
        assert_eq!(config.defaults().count, 9);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(KeysmithConfig::load(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_remote_config_to_completion_drops_blank_env() {
        let remote = RemoteConfig {
            api_key_env: Some(String::new()),
            ..RemoteConfig::default()
        };
        assert_eq!(remote.to_completion().api_key_env, None);
    }
}
