//! Token list expansion
//!
//! Each [`ColorSpec`] becomes a base token, immediately followed by its
//! `on-` token unless the spec opts out with `onColor = false`.

use ontone_core::{contrast_ratio, parse_color, Color};
use rustc_hash::FxHashSet;

use crate::derive::derive_on_color;
use crate::error::{Result, TokenError};
use crate::spec::{ColorSpec, OnColor};

/// Default prefix prepended to every token name
pub const DEFAULT_PREFIX: &str = "color-";

/// Marker between the prefix and the base name of an on-color token
pub const ON_MARKER: &str = "on-";

/// One emitted token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRecord {
    /// Final name, prefix included
    pub name: String,
    pub color: Color,
    /// Set only for explicit on-colors that fail their contrast threshold
    pub warn: bool,
    /// For on-color tokens, the unprefixed name of the spec they belong to
    pub pair_of: Option<String>,
}

impl TokenRecord {
    pub fn is_on_color(&self) -> bool {
        self.pair_of.is_some()
    }
}

/// Ordered tokens in declaration order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<TokenRecord>,
}

impl TokenList {
    pub fn iter(&self) -> std::slice::Iter<'_, TokenRecord> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by its final name
    pub fn get(&self, name: &str) -> Option<&TokenRecord> {
        self.tokens.iter().find(|token| token.name == name)
    }

    /// Tokens flagged with a contrast warning
    pub fn warnings(&self) -> impl Iterator<Item = &TokenRecord> {
        self.tokens.iter().filter(|token| token.warn)
    }

    pub fn has_warnings(&self) -> bool {
        self.tokens.iter().any(|token| token.warn)
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a TokenRecord;
    type IntoIter = std::slice::Iter<'a, TokenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Expands color specs into a [`TokenList`]
#[derive(Clone, Debug)]
pub struct TokenListBuilder {
    prefix: String,
}

impl Default for TokenListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenListBuilder {
    /// Builder using [`DEFAULT_PREFIX`]
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Replace the token prefix. An empty prefix is allowed.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Expand `specs` in order.
    ///
    /// Fails on an empty name, an unparseable color, or two tokens that end
    /// up with the same final name.
    pub fn build(&self, specs: &[ColorSpec]) -> Result<TokenList> {
        let mut tokens = Vec::with_capacity(specs.len() * 2);
        let mut seen = FxHashSet::default();

        for (index, spec) in specs.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(TokenError::EmptyName { index });
            }

            let base_name = format!("{}{}", self.prefix, spec.name);
            let color = parse_token_color(&base_name, &spec.color)?;
            push_unique(&mut tokens, &mut seen, TokenRecord {
                name: base_name,
                color,
                warn: false,
                pair_of: None,
            })?;

            let on_name = format!("{}{}{}", self.prefix, ON_MARKER, spec.name);
            let threshold = spec.ratio_key.threshold();

            let (on_color, warn) = match &spec.on_color {
                OnColor::Omit => continue,
                OnColor::Derive => {
                    let derived = derive_on_color(color, spec.ratio_key);
                    tracing::debug!(
                        token = %on_name,
                        background = %color,
                        on_color = %derived,
                        ratio = contrast_ratio(derived, color),
                        "derived on-color"
                    );
                    (derived, false)
                }
                OnColor::Explicit(value) => {
                    let explicit = parse_token_color(&on_name, value)?;
                    let ratio = contrast_ratio(explicit, color);
                    let warn = ratio < threshold;
                    if warn {
                        tracing::warn!(
                            token = %on_name,
                            ratio,
                            required = threshold,
                            "on-color fails contrast against {}",
                            spec.name
                        );
                    }
                    (explicit, warn)
                }
            };

            push_unique(&mut tokens, &mut seen, TokenRecord {
                name: on_name,
                color: on_color,
                warn,
                pair_of: Some(spec.name.clone()),
            })?;
        }

        tracing::debug!(specs = specs.len(), tokens = tokens.len(), "built token list");
        Ok(TokenList { tokens })
    }
}

fn parse_token_color(token: &str, value: &str) -> Result<Color> {
    parse_color(value).map_err(|source| TokenError::InvalidColor {
        token: token.to_string(),
        source,
    })
}

fn push_unique(
    tokens: &mut Vec<TokenRecord>,
    seen: &mut FxHashSet<String>,
    token: TokenRecord,
) -> Result<()> {
    if !seen.insert(token.name.clone()) {
        return Err(TokenError::DuplicateName(token.name));
    }
    tokens.push(token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RatioKey;

    fn names(list: &TokenList) -> Vec<&str> {
        list.iter().map(|token| token.name.as_str()).collect()
    }

    #[test]
    fn base_followed_by_on_color() {
        let specs = vec![
            ColorSpec::new("primary", "rebeccapurple"),
            ColorSpec::new("secondary", "rgb(95, 165, 26)"),
        ];
        let list = TokenListBuilder::new().build(&specs).unwrap();
        assert_eq!(
            names(&list),
            vec![
                "color-primary",
                "color-on-primary",
                "color-secondary",
                "color-on-secondary"
            ]
        );
        assert_eq!(list.get("color-primary").unwrap().color, Color::from_hex(0x663399));
        assert_eq!(
            list.get("color-on-primary").unwrap().pair_of.as_deref(),
            Some("primary")
        );
    }

    #[test]
    fn derived_on_color_passes_and_is_not_flagged() {
        let specs = vec![ColorSpec::new("primary", "#000000")];
        let list = TokenListBuilder::new().build(&specs).unwrap();
        let on = list.get("color-on-primary").unwrap();
        assert!(!on.warn);
        assert!(contrast_ratio(on.color, Color::BLACK) >= 4.5);
    }

    #[test]
    fn explicit_on_color_is_checked() {
        let specs = vec![ColorSpec::new("surface", "#f9f9f9").with_on_color("#494848")];
        let list = TokenListBuilder::new().build(&specs).unwrap();
        let on = list.get("color-on-surface").unwrap();

        let ratio = contrast_ratio(Color::from_hex(0x494848), Color::from_hex(0xF9F9F9));
        assert_eq!(on.warn, ratio < 4.5);
        assert_eq!(on.color, Color::from_hex(0x494848));
    }

    #[test]
    fn failing_explicit_on_color_warns() {
        let specs = vec![ColorSpec::new("surface", "#f9f9f9").with_on_color("#cccccc")];
        let list = TokenListBuilder::new().build(&specs).unwrap();
        assert!(list.get("color-on-surface").unwrap().warn);
        assert!(list.has_warnings());
        assert_eq!(list.warnings().count(), 1);
    }

    #[test]
    fn ratio_key_changes_the_threshold() {
        // #949494 on white is about 3.03:1, so only passes for large text
        let spec = ColorSpec::new("surface", "#ffffff").with_on_color("#949494");
        let small = TokenListBuilder::new().build(&[spec.clone()]).unwrap();
        let large = TokenListBuilder::new()
            .build(&[spec.with_ratio_key(RatioKey::Large)])
            .unwrap();
        assert!(small.get("color-on-surface").unwrap().warn);
        assert!(!large.get("color-on-surface").unwrap().warn);
    }

    #[test]
    fn omitted_on_color_is_skipped() {
        let specs = vec![ColorSpec::new("x", "#123456").without_on_color()];
        let list = TokenListBuilder::new().build(&specs).unwrap();
        assert_eq!(names(&list), vec!["color-x"]);
        assert!(list.get("color-on-x").is_none());
    }

    #[test]
    fn custom_and_empty_prefix() {
        let specs = vec![ColorSpec::new("brand", "red")];
        let custom = TokenListBuilder::new().with_prefix("theme-").build(&specs).unwrap();
        assert_eq!(names(&custom), vec!["theme-brand", "theme-on-brand"]);

        let bare = TokenListBuilder::new().with_prefix("").build(&specs).unwrap();
        assert_eq!(names(&bare), vec!["brand", "on-brand"]);
    }

    #[test]
    fn invalid_color_names_the_token() {
        let specs = vec![ColorSpec::new("broken", "not-a-color")];
        let err = TokenListBuilder::new().build(&specs).unwrap_err();
        match err {
            TokenError::InvalidColor { token, .. } => assert_eq!(token, "color-broken"),
            other => panic!("unexpected error: {other}"),
        }

        let specs = vec![ColorSpec::new("surface", "#fff").with_on_color("#12")];
        let err = TokenListBuilder::new().build(&specs).unwrap_err();
        assert!(err.to_string().contains("color-on-surface"), "{err}");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let specs = vec![
            ColorSpec::new("x", "red"),
            ColorSpec::new("on-x", "blue"),
        ];
        let err = TokenListBuilder::new().build(&specs).unwrap_err();
        assert!(matches!(err, TokenError::DuplicateName(ref name) if name == "color-on-x"));

        let specs = vec![ColorSpec::new("x", "red"), ColorSpec::new("x", "blue")];
        assert!(TokenListBuilder::new().build(&specs).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let specs = vec![ColorSpec::new("ok", "red"), ColorSpec::new(" ", "blue")];
        let err = TokenListBuilder::new().build(&specs).unwrap_err();
        assert!(matches!(err, TokenError::EmptyName { index: 1 }));
    }

    #[test]
    fn input_is_not_mutated() {
        let specs = vec![ColorSpec::new("primary", "rebeccapurple")];
        let before = specs.clone();
        let _ = TokenListBuilder::new().build(&specs).unwrap();
        assert_eq!(specs, before);
    }
}
