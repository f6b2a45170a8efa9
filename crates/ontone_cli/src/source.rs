//! Color-tokens file loading
//!
//! TOML files hold an array of tables under `colors`:
//!
//! ```toml
//! [[colors]]
//! name = "surface"
//! color = "#f9f9f9"
//! onColor = "#494848"
//! ```
//!
//! JSON files hold either a top-level array of specs or an object with a
//! `colors` array.

use ontone_tokens::ColorSpec;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TokensDocument {
    colors: Vec<ColorSpec>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTokens {
    List(Vec<ColorSpec>),
    Document(TokensDocument),
}

/// Supported color-tokens file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokensFormat {
    Toml,
    Json,
}

impl TokensFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(TokensFormat::Toml),
            "json" => Some(TokensFormat::Json),
            _ => None,
        }
    }
}

/// Read and parse the color specs at `path`, in declaration order
pub fn load_color_specs(path: &Path) -> Result<Vec<ColorSpec>, ConfigError> {
    let format = TokensFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedTokensFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let specs = parse_color_specs(&content, format).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::info!(path = %path.display(), count = specs.len(), "loaded color specs");
    Ok(specs)
}

/// Parse color specs from text
pub fn parse_color_specs(content: &str, format: TokensFormat) -> Result<Vec<ColorSpec>, String> {
    match format {
        TokensFormat::Toml => toml::from_str::<TokensDocument>(content)
            .map(|doc| doc.colors)
            .map_err(|e| e.to_string()),
        TokensFormat::Json => serde_json::from_str::<JsonTokens>(content)
            .map(|tokens| match tokens {
                JsonTokens::List(specs) => specs,
                JsonTokens::Document(doc) => doc.colors,
            })
            .map_err(|e| e.to_string()),
    }
}
