//! Heuristic text metrics for the simulated tree.

/// Average glyph width as a fraction of font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Estimated rendered width of `text` at `font_size`, in px.
///
/// A real host would ask its renderer; the simulation assumes an average
/// glyph width of ~0.6em, which is close enough for UI fonts.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
}
