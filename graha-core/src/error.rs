//! Error types for GRAHA operations

use thiserror::Error;

/// Error when parsing a categorical value from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} value: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Derived-metric computation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MetricsError {
    #[error("Lifespan must be positive, got {years} years")]
    NonPositiveLifespan { years: f64 },

    #[error("Amount {value} cannot be represented as whole Rupiah")]
    AmountOutOfRange { value: f64 },
}

/// Data provider errors. Terminal at the module boundary: the dashboard
/// logs them and keeps its previous records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Fetch failed for {domain}: {reason}")]
    FetchFailed { domain: &'static str, reason: String },

    #[error("Provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Malformed payload for {domain}: {reason}")]
    MalformedPayload { domain: &'static str, reason: String },
}

/// Master error type for GRAHA operations.
#[derive(Debug, Error)]
pub enum GrahaError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type alias for GRAHA operations.
pub type GrahaResult<T> = Result<T, GrahaError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("AssetStatus", "haunted");
        let msg = format!("{}", err);
        assert!(msg.contains("AssetStatus"));
        assert!(msg.contains("haunted"));
    }

    #[test]
    fn test_metrics_error_display_lifespan() {
        let err = MetricsError::NonPositiveLifespan { years: -2.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("positive"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn test_provider_error_display_fetch_failed() {
        let err = ProviderError::FetchFailed {
            domain: "assets",
            reason: "connection refused".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("assets"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_graha_error_from_variants() {
        let parse = GrahaError::from(ParseError::new("Priority", "sometime"));
        assert!(matches!(parse, GrahaError::Parse(_)));

        let metrics = GrahaError::from(MetricsError::NonPositiveLifespan { years: 0.0 });
        assert!(matches!(metrics, GrahaError::Metrics(_)));

        let provider = GrahaError::from(ProviderError::Unavailable {
            reason: "offline".to_string(),
        });
        assert!(matches!(provider, GrahaError::Provider(_)));
    }
}
