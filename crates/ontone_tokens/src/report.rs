//! Contrast compatibility report
//!
//! Lists, for every token, the other tokens it can be paired with at the
//! normal-text threshold. The threshold is fixed at 4.5 for every token,
//! whatever each spec's own ratio key says.

use ontone_core::contrast_ratio;

use crate::builder::{TokenList, TokenRecord};

/// Ratio a pairing must exceed to be listed
pub const SAFE_RATIO: f64 = 4.5;

/// Filename used when the report is written next to the stylesheet
pub const REPORT_FILENAME: &str = "_color-token-contrast.md";

/// Filename used when the report goes to its own directory
pub const REPORT_FILENAME_IN_DOCS_DIR: &str = "color-token-contrast.md";

/// Safe partners of a single token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePairings<'a> {
    pub token: &'a TokenRecord,
    /// In token-list order
    pub safe: Vec<&'a TokenRecord>,
}

/// Compute safe partners for every token.
///
/// Tokens sharing a color with `token` are skipped outright; the rest must
/// have a contrast ratio strictly above [`SAFE_RATIO`].
pub fn safe_pairings(tokens: &TokenList) -> Vec<SafePairings<'_>> {
    tokens
        .iter()
        .map(|token| SafePairings {
            token,
            safe: tokens
                .iter()
                .filter(|other| other.color != token.color)
                .filter(|other| contrast_ratio(token.color, other.color) > SAFE_RATIO)
                .collect(),
        })
        .collect()
}

/// Render the Markdown compatibility report
pub fn compatibility_report(tokens: &TokenList) -> String {
    let mut out = String::from("# Contrast Safe Combinations\n\n");
    out.push_str(
        "> The following are contrast safe combinations as calculated for _normal_ text based on WCAG AA 4.5\n",
    );

    for pairing in safe_pairings(tokens) {
        out.push_str("\n## ");
        out.push_str(&pairing.token.name);
        out.push_str("\n  - ");
        if pairing.safe.is_empty() {
            out.push_str("No safe options");
        } else {
            let names: Vec<String> = pairing
                .safe
                .iter()
                .map(|other| format!("`{}`", other.name))
                .collect();
            out.push_str(&names.join("\n  - "));
        }
        out.push('\n');
    }

    out
}
