//! Method codec error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MethodError {
    #[error("missing or invalid `paymentMethod` discriminator")]
    MissingDiscriminator,
    #[error("invalid catalog: {0}")]
    Catalog(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
