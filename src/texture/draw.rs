//! Leather texture rasterization
//!
//! Paints the fixed visual recipe in order: vertical gradient, seeded grain
//! speckles, two sinusoidal seam curves with perpendicular stitch ticks,
//! then each accepted signature rotated about its center. The recipe's
//! numeric constants are a visual contract; see constants.rs.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use log::debug;

use crate::constants::*;
use crate::texture::layout::{Layout, Placement};
use crate::texture::measure::{FontMeasure, TextMeasure};
use crate::texture::rng::SeededRng;

/// Rasterize a laid-out texture. Output is RGBA8 at exactly the requested
/// dimensions. Without a font the signature ink is skipped; everything else
/// still paints, and the result stays deterministic for identical inputs.
pub fn render_texture(
    width: u32,
    height: u32,
    layout: &Layout,
    seed: &str,
    font: Option<&FontVec>,
) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);

    paint_gradient(&mut img);
    paint_grain(&mut img, seed);
    paint_seams(&mut img);

    if let Some(font) = font {
        paint_signatures(&mut img, &layout.placements, font);
    } else {
        debug!("No font loaded; skipping ink for {} placements", layout.placements.len());
    }

    img
}

/// Vertical white-to-offwhite gradient.
fn paint_gradient(img: &mut RgbaImage) {
    let h = img.height();
    for y in 0..h {
        let t = if h > 1 { y as f32 / (h - 1) as f32 } else { 0.0 };
        let color = Rgba([
            lerp8(GRADIENT_TOP[0], GRADIENT_BOTTOM[0], t),
            lerp8(GRADIENT_TOP[1], GRADIENT_BOTTOM[1], t),
            lerp8(GRADIENT_TOP[2], GRADIENT_BOTTOM[2], t),
            255,
        ]);
        for x in 0..img.width() {
            img.put_pixel(x, y, color);
        }
    }
}

/// Low-alpha gray speckles from the "leather"-namespaced stream.
fn paint_grain(img: &mut RgbaImage, seed: &str) {
    let w = img.width() as f32;
    let h = img.height() as f32;
    let mut rng = SeededRng::new(&format!("leather{}", seed));

    for _ in 0..GRAIN_SPECKLES {
        let lightness =
            GRAIN_LIGHTNESS_MIN + (rng.next_unit() * GRAIN_LIGHTNESS_SPREAD as f32) as u32;
        let gray = (lightness as f32 / 100.0 * 255.0).min(255.0) as u8;
        let x = rng.next_unit() * w;
        let y = rng.next_unit() * h;
        let radius = rng.next_unit() * GRAIN_MAX_RADIUS;
        stamp_disc(img, x, y, radius, [gray, gray, gray, GRAIN_ALPHA]);
    }
}

/// Seam center line at horizontal position `x`.
fn seam_y(x: f32, base_y: f32, amp: f32, period: f32, phase: f32) -> f32 {
    base_y + ((x / period) * TAU + phase).sin() * amp * (0.9 + 0.2 * (x / SEAM_WOBBLE_PERIOD).sin())
}

/// Two sinusoidal seams with perpendicular stitch ticks.
fn paint_seams(img: &mut RgbaImage) {
    let w = img.width();
    let h = img.height() as f32;
    let amp = h * SEAM_AMPLITUDE_FRAC;
    let period = w as f32 * SEAM_PERIOD_FRAC;

    for (idx, base_frac) in SEAM_BASE_FRACS.iter().enumerate() {
        let base_y = h * base_frac;
        let phase = if idx == 0 { 0.0 } else { PI };

        let mut x = 0;
        while x <= w {
            let fx = x as f32;
            stamp_disc(
                img,
                fx,
                seam_y(fx, base_y, amp, period, phase),
                SEAM_WIDTH / 2.0,
                SEAM_COLOR,
            );
            x += SEAM_SAMPLE_STEP;
        }

        let mut x = 0;
        while x <= w {
            let fx = x as f32;
            let y0 = seam_y(fx, base_y, amp, period, phase);
            let y1 = seam_y(fx + 1.0, base_y, amp, period, phase);
            // Tick runs perpendicular to the local seam tangent.
            let angle = (y1 - y0).atan2(1.0) + FRAC_PI_2;
            let dx = angle.cos() * STITCH_LENGTH / 2.0;
            let dy = angle.sin() * STITCH_LENGTH / 2.0;
            stamp_line(img, fx - dx, y0 - dy, fx + dx, y0 + dy, STITCH_WIDTH, STITCH_COLOR);
            x += STITCH_SPACING;
        }
    }
}

/// Rotated ink for every accepted placement.
fn paint_signatures(img: &mut RgbaImage, placements: &[Placement], font: &FontVec) {
    for p in placements {
        let sprite = render_signature_sprite(p, font);
        let rotated = rotate_about_center(&sprite, p.angle, Interpolation::Bilinear, Rgba([0, 0, 0, 0]));

        // Centered blit; only the overlap metric wraps, ink clips at the
        // canvas edges.
        let ox = p.x as i64 - (rotated.width() / 2) as i64;
        let oy = p.y as i64 - (rotated.height() / 2) as i64;
        for (sx, sy, px) in rotated.enumerate_pixels() {
            if px[3] > 0 {
                blend_pixel(img, ox + sx as i64, oy + sy as i64, px.0);
            }
        }
    }
}

/// Draw one signature, unrotated, centered in a square sprite big enough to
/// survive rotation without corner clipping.
fn render_signature_sprite(p: &Placement, font: &FontVec) -> RgbaImage {
    let measure = FontMeasure::new(font);
    let text_w = measure.text_width(&p.name, p.font_px).ceil().max(1.0);
    let text_h = (p.font_px * 1.3).ceil();
    let side = (text_w * text_w + text_h * text_h).sqrt().ceil() as u32 + 4;

    let mut sprite = RgbaImage::new(side, side);
    let tx = ((side as f32 - text_w) / 2.0) as i32;
    let ty = ((side as f32 - p.font_px) / 2.0) as i32;
    let scale = PxScale::from(p.font_px);

    draw_text_mut(&mut sprite, Rgba(INK_HIGHLIGHT), tx + 1, ty + 1, scale, font, &p.name);
    draw_text_mut(&mut sprite, Rgba(INK_COLOR), tx, ty, scale, font, &p.name);
    sprite
}

fn lerp8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Alpha-blend one pixel onto the canvas, ignoring out-of-bounds targets.
fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    let alpha = color[3] as f32 / 255.0;
    let inv = 1.0 - alpha;
    for c in 0..3 {
        dst[c] = (color[c] as f32 * alpha + dst[c] as f32 * inv) as u8;
    }
    dst[3] = 255;
}

/// Stamp a filled disc. Sub-pixel radii still mark the center pixel.
fn stamp_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
    let r = radius.max(0.5);
    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).ceil() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Stroke a segment by stamping discs along its length.
fn stamp_line(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: [u8; 4]) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = (dx.abs().max(dy.abs()).ceil() as u32).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp_disc(img, x0 + dx * t, y0 + dy * t, width / 2.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_layout() -> Layout {
        Layout {
            placements: Vec::new(),
            dropped: Vec::new(),
        }
    }

    #[test]
    fn test_output_matches_requested_dimensions() {
        let img = render_texture(512, 256, &empty_layout(), "abc", None);
        assert_eq!(img.dimensions(), (512, 256));
    }

    #[test]
    fn test_render_is_deterministic_without_font() {
        let a = render_texture(256, 128, &empty_layout(), "abc", None);
        let b = render_texture(256, 128, &empty_layout(), "abc", None);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_grain_seed_changes_pixels() {
        let a = render_texture(256, 128, &empty_layout(), "abc", None);
        let b = render_texture(256, 128, &empty_layout(), "xyz", None);
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_gradient_runs_top_to_bottom() {
        // Corner columns sit away from the seams at these dimensions.
        let img = render_texture(1024, 512, &empty_layout(), "abc", None);
        let top = img.get_pixel(0, 0);
        let bottom = img.get_pixel(0, 511);
        assert!(top[0] >= bottom[0]);
        assert!(bottom[0] >= GRADIENT_BOTTOM[0].saturating_sub(10));
    }

    #[test]
    fn test_seams_are_painted() {
        let img = render_texture(1024, 512, &empty_layout(), "abc", None);
        let seam_pixels = img
            .pixels()
            .filter(|p| p.0[0] == SEAM_COLOR[0] && p.0[1] == SEAM_COLOR[1] && p.0[2] == SEAM_COLOR[2])
            .count();
        assert!(seam_pixels > 1000, "only {} seam pixels", seam_pixels);
    }

    #[test]
    fn test_stamp_disc_clips_at_edges() {
        let mut img = RgbaImage::new(32, 32);
        stamp_disc(&mut img, 0.0, 0.0, 5.0, [255, 0, 0, 255]);
        stamp_disc(&mut img, 31.5, 31.5, 5.0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert_eq!(img.get_pixel(31, 31).0[0], 255);
    }
}
