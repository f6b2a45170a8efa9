//! Generator configuration
//!
//! Built once at startup, in three layers: built-in defaults, an optional
//! `ontone.toml`, then command-line overrides. Keys use the same camelCase
//! names in the file and in `--set key=value`.

use anyhow::{Context, Result};
use clap::Args;
use ontone_tokens::format::{CustomPropertiesFormat, FormatOptions, TokenOutputFormat, CSS_OUTPUT_FILENAME};
use ontone_tokens::report::{REPORT_FILENAME, REPORT_FILENAME_IN_DOCS_DIR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "ontone.toml";

/// `compatibilityDocsPath` value meaning "next to the stylesheet"
pub const OUTPUT_DIR_DOCS_PATH: &str = "outputDirPath";

/// Configuration and path errors. All are fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid colorTokensPath provided: {} does not exist", .0.display())]
    ColorTokensPath(PathBuf),

    #[error("Invalid outputDirPath provided: {} is not an existing directory", .0.display())]
    OutputDir(PathBuf),

    #[error("Invalid compatibilityDocsPath provided: {} is not an existing directory", .0.display())]
    DocsDir(PathBuf),

    #[error("unsupported color tokens file {} (expected .toml or .json)", .0.display())]
    UnsupportedTokensFormat(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid option `{key}`: {message}")]
    InvalidOption { key: String, message: String },
}

/// Top-level generator configuration (ontone.toml)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Existing directory the stylesheet is written to
    #[serde(default = "default_output_dir_path")]
    pub output_dir_path: PathBuf,
    /// Stylesheet filename in Sass mode
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    /// Color-tokens file (.toml or .json)
    #[serde(default = "default_color_tokens_path")]
    pub color_tokens_path: PathBuf,
    #[serde(default)]
    pub token_output_format: TokenOutputFormat,
    /// Sass map name, also the mixin name
    #[serde(default = "default_sass_output_name")]
    pub sass_output_name: String,
    #[serde(default = "default_token_prefix")]
    pub token_prefix: String,
    /// Write the contrast compatibility report
    #[serde(default = "default_true")]
    pub compatibility_docs: bool,
    /// Report directory, or `outputDirPath` for the output directory
    #[serde(default = "default_compatibility_docs_path")]
    pub compatibility_docs_path: PathBuf,
    /// Append a custom-property block to Sass output
    #[serde(default = "default_true")]
    pub include_custom_properties: bool,
    #[serde(default)]
    pub custom_properties_format: CustomPropertiesFormat,
}

fn default_output_dir_path() -> PathBuf {
    PathBuf::from("sass")
}

fn default_output_filename() -> String {
    "_color-tokens.scss".to_string()
}

fn default_color_tokens_path() -> PathBuf {
    PathBuf::from("color-tokens.toml")
}

fn default_sass_output_name() -> String {
    "color-tokens".to_string()
}

fn default_token_prefix() -> String {
    ontone_tokens::DEFAULT_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

fn default_compatibility_docs_path() -> PathBuf {
    PathBuf::from(OUTPUT_DIR_DOCS_PATH)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir_path: default_output_dir_path(),
            output_filename: default_output_filename(),
            color_tokens_path: default_color_tokens_path(),
            token_output_format: TokenOutputFormat::default(),
            sass_output_name: default_sass_output_name(),
            token_prefix: default_token_prefix(),
            compatibility_docs: true,
            compatibility_docs_path: default_compatibility_docs_path(),
            include_custom_properties: true,
            custom_properties_format: CustomPropertiesFormat::default(),
        }
    }
}

/// Command-line overrides, applied on top of the config file
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Config file [default: ./ontone.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Existing directory to write the stylesheet into
    #[arg(long, alias = "outputDirPath", value_name = "DIR")]
    pub output_dir_path: Option<PathBuf>,

    /// Stylesheet filename in Sass mode
    #[arg(long, alias = "outputFilename", value_name = "NAME")]
    pub output_filename: Option<String>,

    /// Color-tokens file (.toml or .json)
    #[arg(long, alias = "colorTokensPath", value_name = "PATH")]
    pub color_tokens_path: Option<PathBuf>,

    /// Stylesheet target: sass or css
    #[arg(long, alias = "tokenOutputFormat", value_name = "FORMAT")]
    pub token_output_format: Option<TokenOutputFormat>,

    /// Sass map and mixin name
    #[arg(long, alias = "sassOutputName", value_name = "NAME")]
    pub sass_output_name: Option<String>,

    /// Prefix for every token name (may be empty)
    #[arg(long, alias = "tokenPrefix", value_name = "PREFIX", allow_hyphen_values = true)]
    pub token_prefix: Option<String>,

    /// Write the contrast compatibility report
    #[arg(long, alias = "compatibilityDocs", value_name = "BOOL")]
    pub compatibility_docs: Option<bool>,

    /// Directory for the compatibility report
    #[arg(long, alias = "compatibilityDocsPath", value_name = "DIR")]
    pub compatibility_docs_path: Option<PathBuf>,

    /// Append custom properties to Sass output
    #[arg(long, alias = "includeCustomProperties", value_name = "BOOL")]
    pub include_custom_properties: Option<bool>,

    /// Custom-property block in Sass output: mixin or root
    #[arg(long, alias = "customPropertiesFormat", value_name = "FORMAT")]
    pub custom_properties_format: Option<CustomPropertiesFormat>,

    /// Override any config key, e.g. `--set tokenPrefix=brand-`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl GeneratorConfig {
    /// Build the effective configuration from `overrides`, reading the
    /// config file relative to `base_dir`.
    pub fn load(base_dir: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match &overrides.config {
            Some(path) => Self::from_file(&base_dir.join(path))?,
            None => {
                let implicit = base_dir.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(&implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply(overrides)?;
        Ok(config)
    }

    /// Load a config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply command-line overrides: typed flags first, then `--set` pairs
    pub fn apply(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(v) = &overrides.output_dir_path {
            self.output_dir_path = v.clone();
        }
        if let Some(v) = &overrides.output_filename {
            self.output_filename = v.clone();
        }
        if let Some(v) = &overrides.color_tokens_path {
            self.color_tokens_path = v.clone();
        }
        if let Some(v) = overrides.token_output_format {
            self.token_output_format = v;
        }
        if let Some(v) = &overrides.sass_output_name {
            self.sass_output_name = v.clone();
        }
        if let Some(v) = &overrides.token_prefix {
            self.token_prefix = v.clone();
        }
        if let Some(v) = overrides.compatibility_docs {
            self.compatibility_docs = v;
        }
        if let Some(v) = &overrides.compatibility_docs_path {
            self.compatibility_docs_path = v.clone();
        }
        if let Some(v) = overrides.include_custom_properties {
            self.include_custom_properties = v;
        }
        if let Some(v) = overrides.custom_properties_format {
            self.custom_properties_format = v;
        }

        for pair in &overrides.set {
            let (key, value) = pair.split_once('=').ok_or_else(|| ConfigError::InvalidOption {
                key: pair.clone(),
                message: "expected KEY=VALUE".to_string(),
            })?;
            self.set(key.trim(), value)?;
        }

        Ok(())
    }

    /// Set one option by its camelCase key
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidOption {
            key: key.to_string(),
            message,
        };
        let parse_bool = |value: &str| {
            value
                .parse::<bool>()
                .map_err(|_| invalid(format!("expected true or false, got `{value}`")))
        };

        match key {
            "outputDirPath" => self.output_dir_path = PathBuf::from(value),
            "outputFilename" => self.output_filename = value.to_string(),
            "colorTokensPath" => self.color_tokens_path = PathBuf::from(value),
            "tokenOutputFormat" => {
                self.token_output_format = value.parse().map_err(|e| invalid(format!("{e}")))?
            }
            "sassOutputName" => self.sass_output_name = value.to_string(),
            "tokenPrefix" => self.token_prefix = value.to_string(),
            "compatibilityDocs" => self.compatibility_docs = parse_bool(value)?,
            "compatibilityDocsPath" => self.compatibility_docs_path = PathBuf::from(value),
            "includeCustomProperties" => self.include_custom_properties = parse_bool(value)?,
            "customPropertiesFormat" => {
                self.custom_properties_format =
                    value.parse().map_err(|e| invalid(format!("{e}")))?
            }
            _ => return Err(invalid("unknown configuration key".to_string())),
        }
        Ok(())
    }

    /// Filename of the stylesheet for the selected target
    pub fn stylesheet_filename(&self) -> &str {
        match self.token_output_format {
            TokenOutputFormat::Sass => &self.output_filename,
            TokenOutputFormat::Css => CSS_OUTPUT_FILENAME,
        }
    }

    /// Configured report directory, or `None` for the output directory
    pub fn docs_dir(&self) -> Option<&Path> {
        if self.compatibility_docs_path.as_os_str() == OUTPUT_DIR_DOCS_PATH {
            None
        } else {
            Some(self.compatibility_docs_path.as_path())
        }
    }

    /// Rendering options for the formatter
    pub fn format_options(&self) -> FormatOptions {
        let custom_properties = match self.token_output_format {
            TokenOutputFormat::Sass => self
                .include_custom_properties
                .then_some(self.custom_properties_format),
            TokenOutputFormat::Css => None,
        };

        FormatOptions {
            format: self.token_output_format,
            map_name: self.sass_output_name.clone(),
            custom_properties,
            source_path: self.color_tokens_path.display().to_string(),
        }
    }

    /// Resolve and check every path against `base_dir`
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedPaths, ConfigError> {
        let color_tokens = fs::canonicalize(base_dir.join(&self.color_tokens_path))
            .ok()
            .filter(|path| path.is_file())
            .ok_or_else(|| ConfigError::ColorTokensPath(self.color_tokens_path.clone()))?;

        let output_dir = existing_dir(base_dir, &self.output_dir_path)
            .ok_or_else(|| ConfigError::OutputDir(self.output_dir_path.clone()))?;

        let report = if self.compatibility_docs {
            Some(match self.docs_dir() {
                None => output_dir.join(REPORT_FILENAME),
                Some(dir) => existing_dir(base_dir, dir)
                    .ok_or_else(|| ConfigError::DocsDir(dir.to_path_buf()))?
                    .join(REPORT_FILENAME_IN_DOCS_DIR),
            })
        } else {
            None
        };

        Ok(ResolvedPaths {
            color_tokens,
            stylesheet: output_dir.join(self.stylesheet_filename()),
            output_dir,
            report,
        })
    }
}

fn existing_dir(base_dir: &Path, path: &Path) -> Option<PathBuf> {
    fs::canonicalize(base_dir.join(path))
        .ok()
        .filter(|path| path.is_dir())
}

/// Absolute, checked locations for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub color_tokens: PathBuf,
    pub output_dir: PathBuf,
    pub stylesheet: PathBuf,
    /// `None` when the report is disabled
    pub report: Option<PathBuf>,
}
