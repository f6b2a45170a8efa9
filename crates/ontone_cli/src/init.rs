//! Sample color-tokens scaffolding

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::source::TokensFormat;

/// Write a sample color-tokens file at `path`.
///
/// The format follows the extension. An existing file is only replaced
/// when `force` is set.
pub fn create_sample_tokens(path: &Path, force: bool) -> Result<()> {
    let Some(format) = TokensFormat::from_path(path) else {
        bail!(
            "Cannot create {}: color tokens files must end in .toml or .json",
            path.display()
        );
    };

    if path.exists() && !force {
        bail!("{} already exists. Pass --force to overwrite it.", path.display());
    }

    let content = match format {
        TokensFormat::Toml => template_toml(),
        TokensFormat::Json => template_json(),
    };

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "created sample color tokens");
    Ok(())
}

fn template_toml() -> &'static str {
    r##"# Theme colors for ontone.
#
# Each [[colors]] entry becomes a token. Keys:
#
#   name      required  token name, prefixed with `tokenPrefix` on output
#   color     required  any CSS color: named, hex, rgb(), hsl()
#   onColor   optional  unset: derive an accessible foreground color
#                       a CSS color: use it, with a warning comment if it
#                         fails contrast
#                       false: emit no on-color token
#   ratioKey  optional  "small" (default, 4.5:1 for normal text) or
#                       "large" (3:1 for large text and UI components)

[[colors]]
name = "primary"
color = "rebeccapurple"

[[colors]]
name = "secondary"
color = "rgb(95, 165, 26)"

[[colors]]
name = "tertiary"
color = "hsl(245, 70%, 30%)"

[[colors]]
name = "surface"
color = "#f9f9f9"
onColor = "#494848"
"##
}

fn template_json() -> &'static str {
    r##"[
  { "name": "primary", "color": "rebeccapurple" },
  { "name": "secondary", "color": "rgb(95, 165, 26)" },
  { "name": "tertiary", "color": "hsl(245, 70%, 30%)" },
  { "name": "surface", "color": "#f9f9f9", "onColor": "#494848" }
]
"##
}
