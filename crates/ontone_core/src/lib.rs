//! Ontone Core
//!
//! Color primitives shared by the token generator:
//!
//! - [`Color`]: an opaque 24-bit sRGB value, compared by its RGB triple
//! - [`parse_color`]: CSS color parsing (hex, `rgb()`, `hsl()`, named colors)
//! - [`contrast`]: WCAG relative luminance, contrast ratio, tone adjustment,
//!   and the accessible-color search used to derive on-colors
//!
//! # Example
//!
//! ```rust
//! use ontone_core::{contrast, Color};
//!
//! let purple: Color = "rebeccapurple".parse().unwrap();
//! assert_eq!(purple.to_string(), "#663399");
//!
//! let ratio = contrast::contrast_ratio(purple, Color::WHITE);
//! assert!(ratio > 4.5);
//! ```

pub mod color;
pub mod contrast;
pub mod error;
mod named;
pub mod parse;

pub use color::{Color, Hsl};
pub use contrast::{adjust_tone, contrast_ratio, ensure_contrast, relative_luminance};
pub use error::{ColorParseError, Result};
pub use parse::parse_color;
