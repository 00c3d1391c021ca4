//! Text footprint estimation
//!
//! Layout only needs one number per signature: the padded radius of a disc
//! guaranteed to contain the rotated ink. A circumscribing disc trades some
//! packing density for a rotation-invariant overlap test.

use ab_glyph::{Font, PxScale, ScaleFont};

use crate::constants::{GLYPH_HEIGHT_FACTOR, INK_PADDING};

/// Width measurement for a run of text at a pixel size.
///
/// The seam between the layout engine and whatever text stack is available:
/// the renderer measures with the real font, tools and tests can run with
/// the font-free heuristic.
pub trait TextMeasure {
    fn text_width(&self, text: &str, px: f32) -> f32;
}

/// Measures with real glyph metrics from a loaded font.
pub struct FontMeasure<'a, F: Font> {
    font: &'a F,
}

impl<'a, F: Font> FontMeasure<'a, F> {
    pub fn new(font: &'a F) -> Self {
        Self { font }
    }
}

impl<F: Font> TextMeasure for FontMeasure<'_, F> {
    fn text_width(&self, text: &str, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let glyph = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, glyph);
            }
            width += scaled.h_advance(glyph);
            prev = Some(glyph);
        }
        width
    }
}

/// Font-free approximation of cursive advance widths.
pub struct ScriptMeasure;

impl TextMeasure for ScriptMeasure {
    fn text_width(&self, text: &str, px: f32) -> f32 {
        let units: f32 = text
            .chars()
            .map(|ch| match ch {
                ' ' => 0.30,
                '.' | ',' | '\'' | 'i' | 'j' | 'l' | 't' | 'f' => 0.28,
                'm' | 'w' | 'M' | 'W' => 0.72,
                ch if ch.is_uppercase() => 0.60,
                _ => 0.46,
            })
            .sum();
        units * px
    }
}

/// Padded bounding-disc radius for a signature at a font size.
///
/// Height is estimated as a fixed fraction of the font size; the radius is
/// half the larger of width/height plus the ink-bleed padding.
pub fn disc_radius(measure: &impl TextMeasure, text: &str, px: f32) -> f32 {
    let width = measure.text_width(text, px);
    let height = px * GLYPH_HEIGHT_FACTOR;
    width.max(height) * 0.5 + INK_PADDING
}
