//! Tunable constants for sigball
//!
//! Layout and rasterization values are defined here for easy tweaking.

use std::f32::consts::PI;

// =============================================================================
// CANVAS
// =============================================================================

/// Default texture width in pixels (2:1 equirectangular for sphere mapping)
pub const CANVAS_WIDTH: u32 = 2048;
/// Default texture height in pixels
pub const CANVAS_HEIGHT: u32 = 1024;

// =============================================================================
// SIGNATURE LAYOUT
// =============================================================================

/// Lowest allowed vertical fraction; keeps ink off the distorted pole band
pub const V_MIN: f32 = 0.14;
/// Highest allowed vertical fraction
pub const V_MAX: f32 = 0.86;
/// Extra pixels around measured text so adjacent ink never touches
pub const INK_PADDING: f32 = 6.0;
/// Cap-height + descender of script fonts, as a fraction of font size
pub const GLYPH_HEIGHT_FACTOR: f32 = 0.72;
/// Placement attempts per signature before it is dropped
pub const MAX_ATTEMPTS: u32 = 120;
/// Redraw the tilt angle after this many consecutive misses
pub const ANGLE_REDRAW_EVERY: u32 = 15;
/// Shrink the font after this many consecutive misses
pub const SHRINK_EVERY: u32 = 30;
/// Font shrink factor when crowded
pub const SHRINK_STEP: f32 = 0.9;
/// Font size floor in pixels; below this a signature is dropped instead
pub const MIN_FONT_PX: f32 = 18.0;
/// Smallest initial font size in pixels
pub const BASE_FONT_PX: f32 = 32.0;
/// Initial font size spread above the base (32-67px)
pub const FONT_SPREAD_PX: f32 = 36.0;
/// Maximum tilt either way (30 degrees)
pub const MAX_TILT: f32 = PI / 6.0;

// =============================================================================
// LEATHER RECIPE
// =============================================================================

/// Gradient at the top of the canvas (white leather)
pub const GRADIENT_TOP: [u8; 4] = [255, 255, 255, 255];
/// Gradient at the bottom (#f2f2f2)
pub const GRADIENT_BOTTOM: [u8; 4] = [242, 242, 242, 255];
/// Number of grain speckles scattered over the leather
pub const GRAIN_SPECKLES: u32 = 2500;
/// Speckle opacity (0-255), roughly 6%
pub const GRAIN_ALPHA: u8 = 15;
/// Speckle radius upper bound in pixels
pub const GRAIN_MAX_RADIUS: f32 = 0.9;
/// Speckle gray lightness floor in percent
pub const GRAIN_LIGHTNESS_MIN: u32 = 90;
/// Speckle gray lightness spread in percent
pub const GRAIN_LIGHTNESS_SPREAD: u32 = 10;

// =============================================================================
// SEAMS & STITCHES
// =============================================================================

/// Seam stroke color (#c0392b)
pub const SEAM_COLOR: [u8; 4] = [192, 57, 43, 255];
/// Stitch tick color (#e74c3c)
pub const STITCH_COLOR: [u8; 4] = [231, 76, 60, 255];
/// Seam stroke width in pixels
pub const SEAM_WIDTH: f32 = 6.0;
/// Stitch tick width in pixels
pub const STITCH_WIDTH: f32 = 3.0;
/// Seam wave amplitude as a fraction of canvas height
pub const SEAM_AMPLITUDE_FRAC: f32 = 0.08;
/// Vertical centers of the two seam curves, as height fractions
pub const SEAM_BASE_FRACS: [f32; 2] = [0.32, 0.68];
/// Seam wave period as a fraction of canvas width
pub const SEAM_PERIOD_FRAC: f32 = 0.65;
/// Secondary wobble period in pixels
pub const SEAM_WOBBLE_PERIOD: f32 = 140.0;
/// Horizontal distance between stitch ticks in pixels
pub const STITCH_SPACING: u32 = 28;
/// Stitch tick length in pixels
pub const STITCH_LENGTH: f32 = 16.0;
/// Seam curve sampling step in pixels
pub const SEAM_SAMPLE_STEP: u32 = 3;

// =============================================================================
// SIGNATURE INK
// =============================================================================

/// Near-black ink, slightly translucent (rgba(10,10,10,0.92))
pub const INK_COLOR: [u8; 4] = [10, 10, 10, 235];
/// Faint offset highlight under the ink, standing in for a canvas shadow
pub const INK_HIGHLIGHT: [u8; 4] = [255, 255, 255, 90];
