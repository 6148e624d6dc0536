//! Unified error handling for f1bot.
//!
//! Every error that can occur while answering a command is caught before it
//! reaches Discord: fetch failures degrade to static data or to a user-facing
//! error embed, and each variant carries a static code for metric labeling.

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// Fetch Errors (OpenF1 API)
// ============================================================================

/// Failure of a single upstream request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

impl FetchError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Timeout => "timeout",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

// ============================================================================
// Result Errors (user-facing)
// ============================================================================

/// Reasons the last-results command cannot produce a classification.
///
/// The `Display` text is shown to users as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultsError {
    #[error("Aucune course terminée pour le moment")]
    NoRaces,

    #[error("Impossible de récupérer les résultats")]
    NoPositions,
}

impl ResultsError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoRaces => "no_races",
            Self::NoPositions => "no_positions",
        }
    }
}

// ============================================================================
// Discord Errors (REST API)
// ============================================================================

/// Discord REST API errors.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("discord request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("discord returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid application verify key: {0}")]
    InvalidKey(String),
}

impl DiscordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Status { .. } => "status",
            Self::InvalidKey(_) => "invalid_key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_codes_are_distinct() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let codes = [
            FetchError::Timeout.error_code(),
            FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).error_code(),
            FetchError::Decode(decode).error_code(),
        ];
        assert_eq!(codes, ["timeout", "status", "decode"]);
    }

    #[test]
    fn results_errors_read_as_user_messages() {
        assert_eq!(
            ResultsError::NoRaces.to_string(),
            "Aucune course terminée pour le moment"
        );
        assert_eq!(
            ResultsError::NoPositions.to_string(),
            "Impossible de récupérer les résultats"
        );
        assert_eq!(ResultsError::NoPositions.error_code(), "no_positions");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = FetchError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("503"));
    }
}
