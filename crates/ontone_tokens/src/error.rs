//! Token generation error types

use ontone_core::ColorParseError;
use thiserror::Error;

/// Errors raised while expanding color specs into tokens
#[derive(Error, Debug)]
pub enum TokenError {
    /// A declared color (base or explicit on-color) failed to parse
    #[error("token `{token}` has an invalid color: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },

    /// A spec was declared without a name
    #[error("color spec #{index} has an empty name")]
    EmptyName { index: usize },

    /// Two tokens resolved to the same final name
    #[error("duplicate token name `{0}`")]
    DuplicateName(String),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;

/// An option value outside its enumerated set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
