//! Stylesheet rendering
//!
//! Two targets:
//!
//! - [`TokenOutputFormat::Sass`]: `!default` variables, a Sass map of every
//!   token, and optionally a custom-property block (`:root` or a mixin)
//!   whose values interpolate the variables
//! - [`TokenOutputFormat::Css`]: a single `:root` custom-property block
//!
//! Tokens with a contrast warning are preceded by a comment in every block
//! they appear in. All text is built in memory; nothing here touches disk.

mod css;
mod sass;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builder::{TokenList, TokenRecord};
use crate::error::ParseOptionError;

/// Filename used for the CSS target regardless of configuration
pub const CSS_OUTPUT_FILENAME: &str = "color-tokens.css";

/// Stylesheet target
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenOutputFormat {
    #[default]
    Sass,
    Css,
}

impl TokenOutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenOutputFormat::Sass => "sass",
            TokenOutputFormat::Css => "css",
        }
    }
}

impl fmt::Display for TokenOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenOutputFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sass" => Ok(TokenOutputFormat::Sass),
            "css" => Ok(TokenOutputFormat::Css),
            _ => Err(ParseOptionError {
                kind: "token output format",
                value: s.to_string(),
                expected: "sass, css",
            }),
        }
    }
}

/// Shape of the custom-property block in Sass output
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomPropertiesFormat {
    /// `@mixin <map-name>() { ... }`
    #[default]
    Mixin,
    /// `:root { ... }`
    Root,
}

impl CustomPropertiesFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            CustomPropertiesFormat::Mixin => "mixin",
            CustomPropertiesFormat::Root => "root",
        }
    }
}

impl fmt::Display for CustomPropertiesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomPropertiesFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mixin" => Ok(CustomPropertiesFormat::Mixin),
            "root" => Ok(CustomPropertiesFormat::Root),
            _ => Err(ParseOptionError {
                kind: "custom properties format",
                value: s.to_string(),
                expected: "mixin, root",
            }),
        }
    }
}

/// Rendering options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub format: TokenOutputFormat,
    /// Sass map name, also used as the mixin name
    pub map_name: String,
    /// Custom-property block for Sass output; `None` emits no block.
    /// CSS output always emits `:root`.
    pub custom_properties: Option<CustomPropertiesFormat>,
    /// Color-tokens path quoted in the header comment
    pub source_path: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: TokenOutputFormat::Sass,
            map_name: "color-tokens".to_string(),
            custom_properties: Some(CustomPropertiesFormat::Mixin),
            source_path: "color-tokens.toml".to_string(),
        }
    }
}

/// Render `tokens` into stylesheet text ending with a newline
pub fn render(tokens: &TokenList, options: &FormatOptions) -> String {
    let mut out = header(&options.source_path);
    out.push_str("\n\n");

    match options.format {
        TokenOutputFormat::Sass => sass::render(&mut out, tokens, options),
        TokenOutputFormat::Css => css::render(&mut out, tokens),
    }

    out.push('\n');
    out
}

fn header(source_path: &str) -> String {
    format!(
        "/* 🛑 STOP!\n  Do not change this file directly.\n  Modify colors in {source_path}\n */"
    )
}

/// Comment placed before a token whose explicit on-color fails contrast
pub fn warning_comment(token: &TokenRecord) -> Option<String> {
    if !token.warn {
        return None;
    }
    let base = token.pair_of.as_deref().unwrap_or(&token.name);
    Some(format!("/* 🚫 Contrast fails against {base} */"))
}

/// Join one rendered entry per token.
///
/// `indent` is the indentation of the enclosing block and `terminator` is
/// appended between entries (`,` for map entries). Warning comments take
/// their own line at the same indentation.
fn entries<F>(tokens: &TokenList, indent: &str, terminator: &str, entry: F) -> String
where
    F: Fn(&TokenRecord) -> String,
{
    tokens
        .iter()
        .map(|token| match warning_comment(token) {
            Some(warning) => format!("{warning}\n{indent}{}", entry(token)),
            None => entry(token),
        })
        .collect::<Vec<_>>()
        .join(&format!("{terminator}\n{indent}"))
}

/// `<selector> {\n  <entries>\n}`
fn property_block<F>(out: &mut String, selector: &str, tokens: &TokenList, value: F)
where
    F: Fn(&TokenRecord) -> String,
{
    out.push_str(selector);
    out.push_str(" {\n  ");
    out.push_str(&entries(tokens, "  ", "", |token| {
        format!("--{}: {};", token.name, value(token))
    }));
    out.push_str("\n}");
}
