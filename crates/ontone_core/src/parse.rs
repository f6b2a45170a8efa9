//! CSS color parsing
//!
//! Accepted notations:
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()` with comma or space separated channels, integer or
//!   percentage values, and an optional alpha after `,` or `/`
//! - `hsl()` / `hsla()` with a hue in `deg`, `grad`, `rad`, `turn` or bare
//!   degrees, followed by saturation and lightness
//! - CSS named colors, plus `transparent`
//!
//! Colors are 24-bit, so alpha is parsed, validated and then discarded.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, opt},
    number::complete::double,
    sequence::{delimited, preceded, tuple},
    IResult,
};

use crate::color::{Color, Hsl};
use crate::error::{ColorParseError, Result};
use crate::named;

/// Parse any supported CSS color string into a [`Color`]
pub fn parse_color(input: &str) -> Result<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if trimmed.starts_with('#') {
        return parse_hex(trimmed);
    }

    if let Ok((_, args)) = all_consuming(rgb_function)(trimmed) {
        return rgb_from_args(trimmed, args);
    }

    if let Ok((_, args)) = all_consuming(hsl_function)(trimmed) {
        return hsl_from_args(trimmed, args);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered == "transparent" {
        discard_alpha(trimmed, 0.0);
        return Ok(Color::BLACK);
    }

    named::lookup(&lowered).ok_or_else(|| invalid(trimmed))
}

// ============================================================================
// Hex
// ============================================================================

fn hex_digits(input: &str) -> IResult<&str, &str> {
    preceded(
        char('#'),
        take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit()),
    )(input)
}

fn parse_hex(input: &str) -> Result<Color> {
    let (_, hex) = all_consuming(hex_digits)(input).map_err(|_| invalid(input))?;

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid(input));
    let short = |i: usize| channel(&hex[i..i + 1].repeat(2));

    let (color, alpha) = match hex.len() {
        3 => (Color::rgb(short(0)?, short(1)?, short(2)?), None),
        4 => (Color::rgb(short(0)?, short(1)?, short(2)?), Some(short(3)?)),
        6 => (
            Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            None,
        ),
        8 => (
            Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
            Some(channel(&hex[6..8])?),
        ),
        _ => return Err(invalid(input)),
    };

    if let Some(alpha) = alpha {
        discard_alpha(input, f64::from(alpha) / 255.0);
    }
    Ok(color)
}

// ============================================================================
// Functional notations
// ============================================================================

/// A numeric argument, optionally suffixed with `%`
#[derive(Clone, Copy, Debug, PartialEq)]
struct Component {
    value: f64,
    percent: bool,
}

/// Arguments of `rgb()`/`hsl()`: three channels and an optional alpha
type Args<T> = (T, Component, Component, Option<Component>);

fn component(input: &str) -> IResult<&str, Component> {
    let (input, value) = double(input)?;
    let (input, percent) = opt(char('%'))(input)?;
    Ok((
        input,
        Component {
            value,
            percent: percent.is_some(),
        },
    ))
}

/// Hue in degrees
fn hue(input: &str) -> IResult<&str, f64> {
    let (input, value) = double(input)?;
    let (input, unit) = opt(alt((
        tag_no_case("deg"),
        tag_no_case("grad"),
        tag_no_case("rad"),
        tag_no_case("turn"),
    )))(input)?;

    let degrees = match unit.map(str::to_ascii_lowercase).as_deref() {
        Some("grad") => value * 0.9,
        Some("rad") => value.to_degrees(),
        Some("turn") => value * 360.0,
        _ => value,
    };
    Ok((input, degrees))
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn slash(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char('/'), multispace0)(input)
}

/// `, b, c[, alpha]`
fn legacy_rest(input: &str) -> IResult<&str, (Component, Component, Option<Component>)> {
    tuple((
        preceded(comma, component),
        preceded(comma, component),
        opt(preceded(comma, component)),
    ))(input)
}

/// ` b c[ / alpha]`
fn modern_rest(input: &str) -> IResult<&str, (Component, Component, Option<Component>)> {
    tuple((
        preceded(multispace1, component),
        preceded(multispace1, component),
        opt(preceded(slash, component)),
    ))(input)
}

fn rgb_function(input: &str) -> IResult<&str, Args<Component>> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, first) = component(input)?;
    let (input, (second, third, alpha)) = alt((legacy_rest, modern_rest))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (first, second, third, alpha)))
}

fn hsl_function(input: &str) -> IResult<&str, Args<f64>> {
    let (input, _) = alt((tag_no_case("hsla"), tag_no_case("hsl")))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, h) = hue(input)?;
    let (input, (s, l, alpha)) = alt((legacy_rest, modern_rest))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, (h, s, l, alpha)))
}

fn rgb_from_args(input: &str, (r, g, b, alpha): Args<Component>) -> Result<Color> {
    let channel = |c: Component, name: &str| -> Result<u8> {
        let value = if c.percent {
            c.value / 100.0 * 255.0
        } else {
            c.value
        };
        if !(0.0..=255.0).contains(&value) {
            return Err(out_of_range(input, name));
        }
        Ok(value.round() as u8)
    };

    let color = Color::rgb(channel(r, "r")?, channel(g, "g")?, channel(b, "b")?);
    if let Some(alpha) = alpha {
        discard_alpha(input, alpha_value(input, alpha)?);
    }
    Ok(color)
}

fn hsl_from_args(input: &str, (h, s, l, alpha): Args<f64>) -> Result<Color> {
    if !h.is_finite() {
        return Err(out_of_range(input, "h"));
    }

    let fraction = |c: Component, name: &str| -> Result<f64> {
        // Bare numbers are read as percentages, like `hsl(120 50 50)`
        if !(0.0..=100.0).contains(&c.value) {
            return Err(out_of_range(input, name));
        }
        Ok(c.value / 100.0)
    };

    let color = Color::from_hsl(Hsl::new(h, fraction(s, "s")?, fraction(l, "l")?));
    if let Some(alpha) = alpha {
        discard_alpha(input, alpha_value(input, alpha)?);
    }
    Ok(color)
}

fn alpha_value(input: &str, alpha: Component) -> Result<f64> {
    let value = if alpha.percent {
        alpha.value / 100.0
    } else {
        alpha.value
    };
    if !(0.0..=1.0).contains(&value) {
        return Err(out_of_range(input, "alpha"));
    }
    Ok(value)
}

fn discard_alpha(input: &str, alpha: f64) {
    if alpha < 1.0 {
        tracing::warn!(color = input, alpha, "alpha channel ignored; colors are opaque");
    }
}

fn invalid(input: &str) -> ColorParseError {
    ColorParseError::Invalid {
        input: input.to_string(),
    }
}

fn out_of_range(input: &str, component: &str) -> ColorParseError {
    ColorParseError::OutOfRange {
        input: input.to_string(),
        component: component.to_string(),
    }
}
