use thiserror::Error;

/// Failures at the career API boundary.
///
/// These never reach UI code: sources log them and degrade to an empty
/// suggestion list or a silent detail result.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection, DNS, TLS or body read failure
    #[error("Network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("API error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The body was not the JSON shape we expect
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Malformed(err.to_string())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
