//! Ontone CLI internals
//!
//! The `ontone` binary is a thin wrapper around these modules:
//!
//! - [`config`]: layered generator configuration and path resolution
//! - [`source`]: color-tokens file loading (TOML or JSON)
//! - [`generate`]: the build → render → write pipeline
//! - [`init`]: sample color-tokens scaffolding

pub mod config;
pub mod generate;
pub mod init;
pub mod source;

pub use config::{ConfigError, ConfigOverrides, GeneratorConfig, ResolvedPaths};
pub use generate::{generate, GenerateOutcome};
