//! Color parsing error types

use thiserror::Error;

/// Errors produced while parsing a CSS color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty or whitespace only
    #[error("empty color value")]
    Empty,

    /// Input is not a color the parser understands
    #[error("invalid color value `{input}`")]
    Invalid { input: String },

    /// A functional notation component is outside its legal range
    #[error("color component `{component}` out of range in `{input}`")]
    OutOfRange { input: String, component: String },
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorParseError>;
