//! Ontone Tokens
//!
//! Turns a list of named theme colors into stylesheet tokens.
//!
//! # Overview
//!
//! - [`ColorSpec`]: one user-declared color, with an optional explicit
//!   on-color and a [`RatioKey`] naming the contrast class it must meet
//! - [`derive_on_color`]: derives an accessible foreground for a background
//! - [`TokenListBuilder`]: expands specs into an ordered [`TokenList`], each
//!   base token followed by its `on-` token
//! - [`format::render`]: renders a token list as Sass or CSS
//! - [`report::compatibility_report`]: Markdown list of contrast-safe pairs
//!
//! # Quick Start
//!
//! ```rust
//! use ontone_tokens::format::{self, FormatOptions};
//! use ontone_tokens::{ColorSpec, TokenListBuilder};
//!
//! let specs = vec![ColorSpec::new("primary", "rebeccapurple")];
//! let tokens = TokenListBuilder::new().build(&specs).unwrap();
//!
//! let scss = format::render(&tokens, &FormatOptions::default());
//! assert!(scss.contains("$color-primary: #663399 !default;"));
//! ```

pub mod builder;
pub mod derive;
pub mod error;
pub mod format;
pub mod report;
pub mod spec;

pub use builder::{TokenList, TokenListBuilder, TokenRecord, DEFAULT_PREFIX, ON_MARKER};
pub use derive::derive_on_color;
pub use error::{ParseOptionError, Result, TokenError};
pub use spec::{ColorSpec, OnColor, RatioKey};
