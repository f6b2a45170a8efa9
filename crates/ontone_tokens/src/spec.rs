//! User-declared color specs

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::ParseOptionError;

/// Contrast class an on-color must satisfy against its base color
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioKey {
    /// Normal-size text, WCAG AA 4.5:1
    #[default]
    Small,
    /// Large text and UI components, WCAG AA 3:1
    Large,
}

impl RatioKey {
    /// Minimum contrast ratio for this class
    pub const fn threshold(self) -> f64 {
        match self {
            RatioKey::Small => 4.5,
            RatioKey::Large => 3.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RatioKey::Small => "small",
            RatioKey::Large => "large",
        }
    }
}

impl fmt::Display for RatioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatioKey {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(RatioKey::Small),
            "large" => Ok(RatioKey::Large),
            _ => Err(ParseOptionError {
                kind: "ratio key",
                value: s.to_string(),
                expected: "small, large",
            }),
        }
    }
}

/// What to do about the foreground token paired with a base color
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OnColor {
    /// Derive an accessible on-color (key absent)
    #[default]
    Derive,
    /// Emit no on-color token (`onColor = false`)
    Omit,
    /// Use this color as given, warning if it fails contrast
    Explicit(String),
}

impl<'de> Deserialize<'de> for OnColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Value(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(OnColor::Derive),
            Some(Raw::Flag(false)) => Ok(OnColor::Omit),
            Some(Raw::Flag(true)) => Err(de::Error::custom(
                "`onColor = true` is not supported; leave it out to derive an on-color",
            )),
            Some(Raw::Value(value)) => Ok(OnColor::Explicit(value)),
        }
    }
}

/// One named theme color as written in the color-tokens file
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpec {
    /// Token name, without prefix
    pub name: String,
    /// Any CSS color the parser understands
    pub color: String,
    #[serde(default)]
    pub on_color: OnColor,
    #[serde(default)]
    pub ratio_key: RatioKey,
}

impl ColorSpec {
    /// Spec with a derived on-color and the default ratio key
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            on_color: OnColor::Derive,
            ratio_key: RatioKey::default(),
        }
    }

    /// Use an explicit on-color
    pub fn with_on_color(mut self, on_color: impl Into<String>) -> Self {
        self.on_color = OnColor::Explicit(on_color.into());
        self
    }

    /// Suppress the on-color token
    pub fn without_on_color(mut self) -> Self {
        self.on_color = OnColor::Omit;
        self
    }

    pub fn with_ratio_key(mut self, ratio_key: RatioKey) -> Self {
        self.ratio_key = ratio_key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(RatioKey::Small.threshold(), 4.5);
        assert_eq!(RatioKey::Large.threshold(), 3.0);
        assert_eq!(RatioKey::default(), RatioKey::Small);
    }

    #[test]
    fn ratio_key_from_str() {
        assert_eq!("large".parse::<RatioKey>(), Ok(RatioKey::Large));
        assert!("medium".parse::<RatioKey>().is_err());
    }

    #[test]
    fn deserialize_json_specs() {
        let specs: Vec<ColorSpec> = serde_json::from_str(
            r##"[
                {"name": "primary", "color": "rebeccapurple"},
                {"name": "surface", "color": "#f9f9f9", "onColor": "#494848"},
                {"name": "x", "color": "#123456", "onColor": false, "ratioKey": "large"},
                {"name": "y", "color": "#123456", "onColor": null}
            ]"##,
        )
        .unwrap();

        assert_eq!(specs[0], ColorSpec::new("primary", "rebeccapurple"));
        assert_eq!(specs[1].on_color, OnColor::Explicit("#494848".into()));
        assert_eq!(specs[2].on_color, OnColor::Omit);
        assert_eq!(specs[2].ratio_key, RatioKey::Large);
        assert_eq!(specs[3].on_color, OnColor::Derive);
    }

    #[test]
    fn deserialize_toml_specs() {
        #[derive(Deserialize)]
        struct Doc {
            colors: Vec<ColorSpec>,
        }

        let doc: Doc = toml::from_str(
            r##"
            [[colors]]
            name = "surface"
            color = "#f9f9f9"
            onColor = "#494848"

            [[colors]]
            name = "x"
            color = "#123456"
            onColor = false
            "##,
        )
        .unwrap();

        assert_eq!(
            doc.colors,
            vec![
                ColorSpec::new("surface", "#f9f9f9").with_on_color("#494848"),
                ColorSpec::new("x", "#123456").without_on_color(),
            ]
        );
    }

    #[test]
    fn on_color_true_is_rejected() {
        let err = serde_json::from_str::<ColorSpec>(
            r#"{"name": "x", "color": "red", "onColor": true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("onColor = true"), "{err}");
    }

    #[test]
    fn unknown_ratio_key_is_rejected() {
        assert!(serde_json::from_str::<ColorSpec>(
            r#"{"name": "x", "color": "red", "ratioKey": "huge"}"#,
        )
        .is_err());
    }
}
