//! Typed error hierarchy for keysmith.
//!
//! Two enums cover the two failure surfaces:
//! - `GenerateError`: request validation and generation failures
//! - `CompletionError`: failures of the external completion command used by
//!   the remote strategy

use thiserror::Error;

/// Errors returned by any `KeywordGenerator`.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported language '{0}'. Valid values: es, en, pt")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Remote(#[from] CompletionError),
}

/// Errors from a single call to a completion client.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Credential not found: set the {env_var} environment variable")]
    MissingCredential { env_var: String },

    #[error("Failed to spawn completion command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Completion command rejected the credential: {0}")]
    Unauthorized(String),

    #[error("Completion command exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Completion command returned no output")]
    EmptyCompletion,
}
