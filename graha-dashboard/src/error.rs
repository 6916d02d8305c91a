//! Dashboard error type.

use graha_core::{ConfigError, ParseError, ProviderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
