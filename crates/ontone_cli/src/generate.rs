//! Token generation pipeline
//!
//! resolve paths → load specs → build tokens → render → write.
//! Every output is rendered in memory before the first write, so a failure
//! anywhere leaves previously generated files untouched.

use anyhow::{Context, Result};
use ontone_tokens::format;
use ontone_tokens::report::compatibility_report;
use ontone_tokens::{TokenList, TokenListBuilder};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::source::load_color_specs;

/// Result of one generator run
#[derive(Debug)]
pub struct GenerateOutcome {
    pub tokens: TokenList,
    /// Files written, stylesheet first. Empty in check mode.
    pub written: Vec<PathBuf>,
}

impl GenerateOutcome {
    pub fn warning_count(&self) -> usize {
        self.tokens.warnings().count()
    }
}

/// Run the generator with paths resolved against `base_dir`.
///
/// With `dry_run` set, everything is computed and validated but nothing is
/// written.
pub fn generate(config: &GeneratorConfig, base_dir: &Path, dry_run: bool) -> Result<GenerateOutcome> {
    let paths = config.resolve(base_dir)?;
    let specs = load_color_specs(&paths.color_tokens)?;

    let tokens = TokenListBuilder::new()
        .with_prefix(config.token_prefix.as_str())
        .build(&specs)
        .with_context(|| format!("Failed to build tokens from {}", paths.color_tokens.display()))?;

    let mut outputs = vec![(
        paths.stylesheet.clone(),
        format::render(&tokens, &config.format_options()),
    )];
    if let Some(report_path) = &paths.report {
        outputs.push((report_path.clone(), compatibility_report(&tokens)));
    }

    let mut written = Vec::new();
    if dry_run {
        tracing::info!(tokens = tokens.len(), "check only, no files written");
    } else {
        for (path, text) in outputs {
            fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote");
            written.push(path);
        }
    }

    Ok(GenerateOutcome { tokens, written })
}
