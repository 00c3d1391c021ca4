//! Procedural autographed-leather texture generation
//!
//! The pipeline is a pure function of `(dimensions, signatures, seed)`:
//! measure each signature's bounding disc, lay the discs out with the
//! toroidal blue-noise placer, then rasterize the leather recipe plus the
//! accepted ink.

pub mod draw;
pub mod fonts;
pub mod layout;
pub mod measure;
pub mod rng;

use ab_glyph::FontVec;
use image::RgbaImage;

use crate::signatures::Signature;
pub use draw::render_texture;
pub use fonts::load_font;
pub use layout::{AttemptState, Layout, LayoutError, Placement, layout_signatures, overlaps, wrapped_dx};
pub use measure::{FontMeasure, ScriptMeasure, TextMeasure, disc_radius};
pub use rng::{SeededRng, hash_to_unit};

/// Lay out and rasterize in one step, measuring with the real font when one
/// is available and the script heuristic otherwise.
pub fn generate(
    width: u32,
    height: u32,
    signatures: &[Signature],
    seed: &str,
    font: Option<&FontVec>,
) -> Result<(Layout, RgbaImage), LayoutError> {
    let layout = match font {
        Some(f) => layout_signatures(width, height, signatures, seed, &FontMeasure::new(f))?,
        None => layout_signatures(width, height, signatures, seed, &ScriptMeasure)?,
    };
    let image = render_texture(width, height, &layout, seed, font);
    Ok((layout, image))
}
