//! Conversion helpers between catalog text literals and numbers.

use crate::core::{CostRange, PathwayError};

/// Parse `"$min-max/tCO2e"` into a [`CostRange`].
pub(crate) fn parse_cost_range(text: &str) -> Option<CostRange> {
    if !(text.contains('$') && text.contains('-')) {
        return None;
    }
    let cleaned = text.replace('$', "").replace("/tCO2e", "");
    let mut parts = cleaned.split('-');
    let min = parts.next()?.trim().parse::<f64>().ok()?;
    let max = parts.next()?.trim().parse::<f64>().ok()?;
    Some(CostRange { min, max })
}

/// Leading numeric token of a potential figure such as `"11.4 GtCO2-eq by 2030"`.
///
/// # Errors
///
/// Returns [`PathwayError::Parse`] if the text is empty or does not start with a number.
pub fn potential_amount(text: &str) -> Result<f64, PathwayError> {
    let head = text
        .split_whitespace()
        .next()
        .ok_or_else(|| PathwayError::Parse(format!("empty potential figure: {text:?}")))?;
    head.parse::<f64>()
        .map_err(|_| PathwayError::Parse(format!("potential figure not numeric: {text:?}")))
}

/// The year following `by` in a potential figure, if any.
#[must_use]
pub fn potential_year(text: &str) -> Option<u16> {
    let mut tokens = text.split_whitespace();
    while let Some(tok) = tokens.next() {
        if tok.eq_ignore_ascii_case("by") {
            return tokens.next()?.parse().ok();
        }
    }
    None
}

/// Convert a `#RRGGBB` (or `#RGB`) colour to its red, green and blue channels.
///
/// # Errors
///
/// Returns [`PathwayError::Parse`] if the text is not a hex colour.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), PathwayError> {
    let digits = hex.trim().trim_start_matches('#');
    let bad = || PathwayError::Parse(format!("not a hex colour: {hex:?}"));
    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(bad()),
    };
    let channel = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(bad)
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Render a hex colour as a CSS `rgba(r, g, b, a)` string.
///
/// # Errors
///
/// Returns [`PathwayError::Parse`] if the text is not a hex colour.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, PathwayError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// Format a percentage the way tables show it (`40%`, `99.98%`).
#[must_use]
pub fn percent_label(value: f64) -> String {
    format!("{value}%")
}
