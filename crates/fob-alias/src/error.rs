//! Error types for reading alias options.
//!
//! Resolution itself never fails: an unmatched specifier is `None`, not an
//! error. These errors only surface while turning user configuration into
//! [`AliasOptions`](crate::AliasOptions).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AliasError>;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("alias options must be an object, found {found}")]
    InvalidConfig { found: &'static str },

    #[error("invalid TOML alias options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to convert alias options: {0}")]
    Json(#[from] serde_json::Error),
}
