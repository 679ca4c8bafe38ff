//! Scaling arithmetic, kept free of any visual-tree access.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::ScaleConfig;

lazy_static! {
    // Longest leading float prefix, parseFloat-style: optional sign,
    // "Infinity", or a decimal with optional exponent.
    static ref RE_FLOAT_PREFIX: Regex = Regex::new(
        r"^\s*([+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?))"
    ).unwrap();
}

/// Raw (pre-clamp) font size for a target of `target_width` whose probe
/// measured `probe_width` at `reference_size`.
pub fn candidate_font_size(
    scale: f64,
    reference_size: f64,
    target_width: f64,
    probe_width: f64,
) -> f64 {
    scale * reference_size * target_width / probe_width
}

/// Clamp a candidate size against the configured bounds.
///
/// The max bound is applied first, then the min bound, so inverted bounds
/// (min > max) resolve to the min bound. `f64::min`/`f64::max` ignore NaN
/// operands, so a NaN bound leaves that side unclamped.
pub fn clamp_font_size(candidate: f64, config: &ScaleConfig) -> f64 {
    candidate.min(config.max_font_size).max(config.min_font_size)
}

/// Parse the longest numeric prefix of a string as a float, NaN otherwise.
pub fn parse_bound(input: &str) -> f64 {
    match RE_FLOAT_PREFIX.captures(input) {
        Some(caps) => caps[1].parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Format a pixel quantity the way it is written into style properties:
/// two decimal places with trailing zeros (and a bare dot) trimmed.
pub fn fmt_px(n: f64) -> String {
    let mut s = format!("{:.2}", n);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
