//! End-to-end rendering tests: specs in, stylesheet and report text out.

use ontone_core::{contrast_ratio, Color};
use ontone_tokens::format::{self, CustomPropertiesFormat, FormatOptions, TokenOutputFormat};
use ontone_tokens::report::compatibility_report;
use ontone_tokens::{ColorSpec, TokenList, TokenListBuilder};

const HEADER: &str =
    "/* 🛑 STOP!\n  Do not change this file directly.\n  Modify colors in color-tokens.toml\n */\n\n";

fn build(specs: &[ColorSpec]) -> TokenList {
    TokenListBuilder::new().build(specs).expect("specs should build")
}

fn sample_specs() -> Vec<ColorSpec> {
    vec![
        ColorSpec::new("primary", "rebeccapurple"),
        ColorSpec::new("secondary", "rgb(95, 165, 26)"),
        ColorSpec::new("tertiary", "hsl(245, 70%, 30%)"),
        ColorSpec::new("surface", "#f9f9f9").with_on_color("#494848"),
    ]
}

#[test]
fn single_token_sass_output() {
    let tokens = build(&[ColorSpec::new("primary", "#663399").without_on_color()]);
    let out = format::render(&tokens, &FormatOptions::default());

    assert!(out.contains("$color-primary: #663399 !default;"));
    assert!(out.contains("\"color-primary\": $color-primary"));
    assert_eq!(
        out,
        format!(
            "{HEADER}$color-primary: #663399 !default;\n\
             \n\
             $color-tokens: (\n  \"color-primary\": $color-primary\n) !default;\n\
             \n\
             @mixin color-tokens() {{\n  --color-primary: #{{$color-primary}};\n}}\n"
        )
    );
}

#[test]
fn sass_root_block_and_custom_map_name() {
    let tokens = build(&[ColorSpec::new("primary", "#663399").without_on_color()]);
    let out = format::render(&tokens, &FormatOptions {
        map_name: "theme".into(),
        custom_properties: Some(CustomPropertiesFormat::Root),
        ..FormatOptions::default()
    });

    assert!(out.contains("$theme: (\n"));
    assert!(out.ends_with(":root {\n  --color-primary: #{$color-primary};\n}\n"));
    assert!(!out.contains("@mixin"));
}

#[test]
fn sass_without_custom_properties_ends_at_map() {
    let tokens = build(&[ColorSpec::new("primary", "#663399").without_on_color()]);
    let out = format::render(&tokens, &FormatOptions {
        custom_properties: None,
        ..FormatOptions::default()
    });

    assert!(out.ends_with(") !default;\n"));
    assert!(!out.contains("--color-primary"));
}

#[test]
fn css_output_is_root_only_with_hex_values() {
    let tokens = build(&[ColorSpec::new("surface", "#f9f9f9").with_on_color("#cccccc")]);
    let out = format::render(&tokens, &FormatOptions {
        format: TokenOutputFormat::Css,
        custom_properties: None,
        ..FormatOptions::default()
    });

    assert_eq!(
        out,
        format!(
            "{HEADER}:root {{\n  --color-surface: #f9f9f9;\n  \
             /* 🚫 Contrast fails against surface */\n  \
             --color-on-surface: #cccccc;\n}}\n"
        )
    );
    assert!(!out.contains('$'));
}

#[test]
fn warnings_annotate_every_block() {
    let tokens = build(&[ColorSpec::new("surface", "#f9f9f9").with_on_color("#cccccc")]);
    let out = format::render(&tokens, &FormatOptions::default());

    let warning = "/* 🚫 Contrast fails against surface */";
    assert_eq!(out.matches(warning).count(), 3, "{out}");
    assert!(out.contains(&format!("{warning}\n$color-on-surface: #cccccc !default;")));
    assert!(out.contains(&format!("  {warning}\n  \"color-on-surface\": $color-on-surface")));
    assert!(out.contains(&format!("  {warning}\n  --color-on-surface: #{{$color-on-surface}};")));
}

#[test]
fn sample_palette_renders_in_declaration_order() {
    let tokens = build(&sample_specs());
    let out = format::render(&tokens, &FormatOptions::default());

    let order = [
        "$color-primary:",
        "$color-on-primary:",
        "$color-secondary:",
        "$color-on-secondary:",
        "$color-tertiary:",
        "$color-on-tertiary:",
        "$color-surface:",
        "$color-on-surface:",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(out.contains("$color-primary: #663399 !default;"));
    assert!(out.contains("$color-secondary: #5fa51a !default;"));
    assert!(out.contains("$color-surface: #f9f9f9 !default;"));
    assert!(out.contains("$color-on-surface: #494848 !default;"));
    assert!(!tokens.has_warnings());
}

#[test]
fn derived_on_colors_meet_their_threshold() {
    let tokens = build(&sample_specs());
    for token in tokens.iter().filter(|token| token.is_on_color()) {
        let base_name = format!("color-{}", token.pair_of.as_deref().unwrap());
        let base = tokens.get(&base_name).unwrap();
        assert!(
            contrast_ratio(token.color, base.color) >= 4.5,
            "{} on {}",
            token.name,
            base.name
        );
    }
}

#[test]
fn report_lists_every_mutually_safe_partner() {
    // #757575 clears 4.5:1 against both black and white
    let tokens = build(&[
        ColorSpec::new("black", "#000000").without_on_color(),
        ColorSpec::new("white", "#ffffff").without_on_color(),
        ColorSpec::new("gray", "#757575").without_on_color(),
    ]);
    let report = compatibility_report(&tokens);

    assert!(report.contains("## color-black\n  - `color-white`\n  - `color-gray`\n"));
    assert!(report.contains("## color-white\n  - `color-black`\n  - `color-gray`\n"));
    assert!(report.contains("## color-gray\n  - `color-black`\n  - `color-white`\n"));
    assert!(!report.contains("No safe options"));
}

#[test]
fn report_identical_colors_have_no_safe_options() {
    let tokens = build(&[
        ColorSpec::new("a", "#336699").without_on_color(),
        ColorSpec::new("b", "rgb(51, 102, 153)").without_on_color(),
        ColorSpec::new("c", "#369").without_on_color(),
    ]);
    let report = compatibility_report(&tokens);

    assert_eq!(report.matches("  - No safe options\n").count(), 3);
    for name in ["color-a", "color-b", "color-c"] {
        assert!(report.contains(&format!("## {name}\n  - No safe options\n")));
    }
}

#[test]
fn report_ignores_large_ratio_key() {
    // Passes 3:1 for large text, but the report always uses 4.5
    let tokens = build(&[
        ColorSpec::new("white", "#ffffff").without_on_color(),
        ColorSpec::new("gray", "#949494").without_on_color(),
    ]);
    assert!(contrast_ratio(Color::from_hex(0x949494), Color::WHITE) > 3.0);
    assert_eq!(compatibility_report(&tokens).matches("No safe options").count(), 2);
}
