//! Configuration types and sizing constants.

use serde::Deserialize;

use crate::scale::parse_bound;

/// Font size (in px) the probe is forced to while its width is measured.
pub const REFERENCE_FONT_SIZE: f64 = 96.0;

/// Intermediate font size written to the target before reading its width.
/// Some legacy engines report inconsistent widths mid-resize at certain
/// font sizes; pinning the target to 12pt first avoids that artifact.
pub const PRE_MEASURE_FONT_SIZE: &str = "12pt";

/// Default quiet interval for the resize debounce, in milliseconds.
pub const DEBOUNCE_INTERVAL_MS: u64 = 100;

/// A min/max font-size bound as supplied by the caller.
///
/// Accepts a plain number or a string; strings are parsed with
/// `parseFloat` semantics (longest numeric prefix, otherwise NaN).
/// A NaN bound disables clamping on that side.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Number(f64),
    Text(String),
}

impl Bound {
    /// Resolve the bound to a float for comparison.
    pub fn resolve(&self) -> f64 {
        match self {
            Bound::Number(n) => *n,
            Bound::Text(s) => parse_bound(s),
        }
    }
}

/// Caller-supplied configuration overrides. Unset keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    /// Scaling factor applied to the computed font size. Default: 1
    #[serde(default)]
    pub scale: Option<f64>,
    /// Lower clamp on the computed font size, in px. Default: -inf
    #[serde(default)]
    pub min_font_size: Option<Bound>,
    /// Upper clamp on the computed font size, in px. Default: +inf
    #[serde(default)]
    pub max_font_size: Option<Bound>,
}

/// Fully resolved configuration, immutable once an attachment exists.
#[derive(Debug, Clone, Copy)]
pub struct ScaleConfig {
    pub scale: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            min_font_size: f64::NEG_INFINITY,
            max_font_size: f64::INFINITY,
        }
    }
}

impl ScaleConfig {
    /// Merge caller overrides over the defaults, per key.
    pub fn resolve(options: Option<&ScaleOptions>) -> Self {
        let mut config = Self::default();
        if let Some(opts) = options {
            if let Some(scale) = opts.scale {
                config.scale = scale;
            }
            if let Some(min) = &opts.min_font_size {
                config.min_font_size = min.resolve();
            }
            if let Some(max) = &opts.max_font_size {
                config.max_font_size = max.resolve();
            }
        }
        config
    }
}
