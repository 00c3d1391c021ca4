//! Signature placement on the sphere-mapped canvas
//!
//! Poisson-like blue-noise layout with variable disc radii. Placement order
//! is a deterministic shuffle of the input; each signature draws position,
//! tilt, and font size from its own seeded stream, and overlap against the
//! occupancy set is tested with a toroidal X metric because the canvas
//! wraps around the sphere. A signature that cannot be placed within the
//! attempt budget is dropped rather than overlapped.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANGLE_REDRAW_EVERY, BASE_FONT_PX, FONT_SPREAD_PX, MAX_ATTEMPTS, MAX_TILT, MIN_FONT_PX,
    SHRINK_EVERY, SHRINK_STEP, V_MAX, V_MIN,
};
use crate::signatures::Signature;
use crate::texture::measure::{TextMeasure, disc_radius};
use crate::texture::rng::{SeededRng, hash_to_unit};

/// One accepted signature placement, in canvas pixel space.
///
/// `x`/`y` are floored to whole pixels and are bit-reproducible for a given
/// input; `radius` is the padded bounding-disc radius used for overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Tilt in radians, within ±30 degrees
    pub angle: f32,
    pub font_px: f32,
    pub id: String,
    pub name: String,
}

/// Result of a layout pass: accepted placements in processing order, plus
/// the names that could not be placed. Crowding is not an error; the caller
/// decides whether to surface the dropped set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub dropped: Vec<String>,
}

/// Caller contract violation (zero-sized canvas).
#[derive(Debug)]
pub struct LayoutError {
    pub message: String,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Horizontal distance on a canvas whose left and right edges are adjacent.
pub fn wrapped_dx(x1: f32, x2: f32, width: f32) -> f32 {
    let dx = (x1 - x2).abs();
    dx.min(width - dx)
}

/// Disc overlap with toroidal X. Y does not wrap; the pole band keeps
/// placements away from the top and bottom edges.
pub fn overlaps(a: &Placement, b: &Placement, width: f32) -> bool {
    let dx = wrapped_dx(a.x, b.x, width);
    let dy = (a.y - b.y).abs();
    let rr = a.radius + b.radius;
    dx * dx + dy * dy < rr * rr
}

/// Bounded retry state for one signature.
///
/// Misses accumulate; every [`ANGLE_REDRAW_EVERY`] misses the tilt is drawn
/// fresh, every [`SHRINK_EVERY`] misses the font shrinks by [`SHRINK_STEP`]
/// (floored, clamped at [`MIN_FONT_PX`]). At [`MAX_ATTEMPTS`] misses the
/// signature is given up on.
#[derive(Debug, Clone)]
pub struct AttemptState {
    pub attempts: u32,
    pub font_px: f32,
    pub angle: f32,
}

impl AttemptState {
    /// Draw the initial tilt and font size from the signature's stream.
    pub fn initial(rng: &mut SeededRng) -> Self {
        let angle = (rng.next_unit() - 0.5) * (2.0 * MAX_TILT);
        let font_px = BASE_FONT_PX + (rng.next_unit() * FONT_SPREAD_PX).floor();
        Self {
            attempts: 0,
            font_px,
            angle,
        }
    }

    /// Record a collision and apply the redraw/shrink policy.
    pub fn note_miss(&mut self, rng: &mut SeededRng) {
        self.attempts += 1;
        if self.attempts % ANGLE_REDRAW_EVERY == 0 {
            self.angle = (rng.next_unit() - 0.5) * (2.0 * MAX_TILT);
        }
        if self.attempts % SHRINK_EVERY == 0 {
            self.font_px = (self.font_px * SHRINK_STEP).floor().max(MIN_FONT_PX);
        }
    }

    pub fn exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }
}

/// Lay out signatures on a `width` x `height` canvas.
///
/// Deterministic for a given `(signatures, seed)` pair. The shuffle key
/// depends only on each signature's own identity, so reordering the input
/// does not change the result; the seed is folded into every signature's
/// stream, so changing it alone moves placements.
pub fn layout_signatures(
    width: u32,
    height: u32,
    signatures: &[Signature],
    seed: &str,
    measure: &impl TextMeasure,
) -> Result<Layout, LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError {
            message: format!("texture dimensions must be nonzero (got {}x{})", width, height),
        });
    }
    let w = width as f32;
    let h = height as f32;

    // Deterministic shuffle: stable pseudo-random key per signature so the
    // caller's ordering never biases who wins contested space.
    let mut order: Vec<(f64, &Signature)> = signatures
        .iter()
        .map(|sig| (hash_to_unit(&format!("{}{}", sig.id, sig.name)) - 0.5, sig))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut placements: Vec<Placement> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();

    for (_, sig) in order {
        let mut rng = SeededRng::new(&format!("{}{}{}", seed, sig.id, sig.name));
        let mut state = AttemptState::initial(&mut rng);
        let mut accepted = None;

        loop {
            let radius = disc_radius(measure, &sig.name, state.font_px);
            let u = rng.next_unit();
            let v = V_MIN + rng.next_unit() * (V_MAX - V_MIN);
            let candidate = Placement {
                x: (u * w).floor(),
                y: (v * h).floor(),
                radius,
                angle: state.angle,
                font_px: state.font_px,
                id: sig.id.clone(),
                name: sig.name.clone(),
            };

            if placements.iter().all(|p| !overlaps(&candidate, p, w)) {
                accepted = Some(candidate);
                break;
            }

            state.note_miss(&mut rng);
            if state.exhausted() {
                break;
            }
        }

        match accepted {
            Some(p) => placements.push(p),
            None => dropped.push(sig.name.clone()),
        }
    }

    Ok(Layout { placements, dropped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use crate::texture::measure::ScriptMeasure;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sig(id: &str, name: &str) -> Signature {
        Signature {
            id: id.to_string(),
            name: name.to_string(),
            enabled: true,
        }
    }

    fn random_sigs(count: usize, rng: &mut StdRng) -> Vec<Signature> {
        (0..count)
            .map(|i| {
                let len = rng.gen_range(4..15);
                let name: String = (0..len)
                    .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
                    .collect();
                sig(&format!("sig_{:03}", i), &name)
            })
            .collect()
    }

    fn disc(x: f32, y: f32, radius: f32) -> Placement {
        Placement {
            x,
            y,
            radius,
            angle: 0.0,
            font_px: 32.0,
            id: String::new(),
            name: String::new(),
        }
    }

    #[test]
    fn test_wrapped_dx_wraps() {
        assert_eq!(wrapped_dx(0.0, 2047.0, 2048.0), 1.0);
        assert_eq!(wrapped_dx(5.0, 2043.0, 2048.0), 10.0);
        assert_eq!(wrapped_dx(100.0, 300.0, 2048.0), 200.0);
    }

    #[test]
    fn test_overlap_across_the_seam() {
        // Naive dx would be 2038; the wrap gap is 10, well under r1+r2.
        let a = disc(5.0, 500.0, 12.0);
        let b = disc(2043.0, 500.0, 12.0);
        assert!(overlaps(&a, &b, 2048.0));

        let a = disc(0.0, 500.0, 8.0);
        let b = disc(2047.0, 500.0, 8.0);
        assert!(overlaps(&a, &b, 2048.0));
    }

    #[test]
    fn test_no_overlap_when_discs_clear() {
        let a = disc(100.0, 500.0, 40.0);
        let b = disc(300.0, 500.0, 40.0);
        assert!(!overlaps(&a, &b, 2048.0));
    }

    #[test]
    fn test_y_distance_does_not_wrap() {
        // Same x, far apart vertically: no overlap even though a vertical
        // wrap would bring them within range.
        let a = disc(100.0, 10.0, 30.0);
        let b = disc(100.0, 1014.0, 30.0);
        assert!(!overlaps(&a, &b, 2048.0));
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        let layout =
            layout_signatures(CANVAS_WIDTH, CANVAS_HEIGHT, &[], "abc", &ScriptMeasure).unwrap();
        assert!(layout.placements.is_empty());
        assert!(layout.dropped.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(layout_signatures(0, 1024, &[], "abc", &ScriptMeasure).is_err());
        assert!(layout_signatures(2048, 0, &[], "abc", &ScriptMeasure).is_err());
    }

    #[test]
    fn test_single_signature_is_placed() {
        let sigs = vec![sig("1", "Babe Ruth")];
        let layout =
            layout_signatures(2048, 1024, &sigs, "abc", &ScriptMeasure).unwrap();
        assert_eq!(layout.placements.len(), 1);
        assert!(layout.dropped.is_empty());

        let p = &layout.placements[0];
        assert!((18.0..=68.0).contains(&p.font_px));
        // Centers are floored to whole pixels, so allow one pixel of slack
        // at the bottom of the band.
        let v = p.y / 1024.0;
        assert!(v >= V_MIN - 1.0 / 1024.0 && v <= V_MAX);
        assert!(p.angle.abs() <= MAX_TILT);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let sigs = random_sigs(40, &mut rng);
        let a = layout_signatures(2048, 1024, &sigs, "seed", &ScriptMeasure).unwrap();
        let b = layout_signatures(2048, 1024, &sigs, "seed", &ScriptMeasure).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_placements() {
        let sigs: Vec<Signature> = (0..10)
            .map(|i| sig(&format!("{}", i), &format!("Player Number{}", i)))
            .collect();
        let a = layout_signatures(2048, 1024, &sigs, "abc", &ScriptMeasure).unwrap();
        let b = layout_signatures(2048, 1024, &sigs, "xyz", &ScriptMeasure).unwrap();
        let moved = a
            .placements
            .iter()
            .zip(b.placements.iter())
            .any(|(pa, pb)| pa.x != pb.x || pa.y != pb.y);
        assert!(moved, "changing the seed alone must move placements");
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut rng = StdRng::seed_from_u64(3);
        let sigs = random_sigs(30, &mut rng);
        let mut reversed = sigs.clone();
        reversed.reverse();
        let a = layout_signatures(2048, 1024, &sigs, "seed", &ScriptMeasure).unwrap();
        let b = layout_signatures(2048, 1024, &reversed, "seed", &ScriptMeasure).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_pair_overlaps() {
        for count in [0usize, 1, 10, 80, 300] {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let sigs = random_sigs(count, &mut rng);
            let layout =
                layout_signatures(2048, 1024, &sigs, "packed", &ScriptMeasure).unwrap();
            for (i, a) in layout.placements.iter().enumerate() {
                for b in layout.placements.iter().skip(i + 1) {
                    let dx = wrapped_dx(a.x, b.x, 2048.0);
                    let dy = (a.y - b.y).abs();
                    let dist = (dx * dx + dy * dy).sqrt();
                    assert!(
                        dist >= a.radius + b.radius,
                        "{} and {} overlap at {} signatures",
                        a.name,
                        b.name,
                        count
                    );
                }
            }
        }
    }

    #[test]
    fn test_placements_avoid_poles() {
        let mut rng = StdRng::seed_from_u64(9);
        let sigs = random_sigs(80, &mut rng);
        let layout = layout_signatures(2048, 1024, &sigs, "poles", &ScriptMeasure).unwrap();
        for p in &layout.placements {
            // One pixel of slack for the floor to whole pixels.
            let v = p.y / 1024.0;
            assert!(
                v >= V_MIN - 1.0 / 1024.0 && v <= V_MAX,
                "{} at v={}",
                p.name,
                v
            );
        }
    }

    #[test]
    fn test_crowding_degrades_gracefully() {
        // 500 long names on a small canvas: must terminate, must not
        // overlap, and placed + dropped must account for every input.
        let sigs: Vec<Signature> = (0..500)
            .map(|i| sig(&format!("{}", i), &format!("A Very Long Signature Name {}", i)))
            .collect();
        let layout = layout_signatures(256, 128, &sigs, "crowded", &ScriptMeasure).unwrap();
        assert!(layout.placements.len() <= 500);
        assert_eq!(layout.placements.len() + layout.dropped.len(), 500);
        assert!(!layout.dropped.is_empty());
        for p in &layout.placements {
            assert!(p.font_px >= MIN_FONT_PX);
        }
    }

    #[test]
    fn test_duplicate_names_are_independent() {
        let sigs = vec![sig("1", "Babe Ruth"), sig("2", "Babe Ruth")];
        let layout = layout_signatures(2048, 1024, &sigs, "dup", &ScriptMeasure).unwrap();
        assert_eq!(layout.placements.len(), 2);
        assert_ne!(
            (layout.placements[0].x, layout.placements[0].y),
            (layout.placements[1].x, layout.placements[1].y)
        );
    }

    #[test]
    fn test_attempt_state_redraws_angle_every_15() {
        let mut rng = SeededRng::new("state");
        let mut state = AttemptState::initial(&mut rng);
        let mut last_angle = state.angle;
        for miss in 1..=60u32 {
            state.note_miss(&mut rng);
            if miss % ANGLE_REDRAW_EVERY == 0 {
                assert_ne!(state.angle, last_angle, "miss {}", miss);
                last_angle = state.angle;
            } else {
                assert_eq!(state.angle, last_angle, "miss {}", miss);
            }
        }
    }

    #[test]
    fn test_attempt_state_shrinks_every_30() {
        let mut rng = SeededRng::new("shrink");
        let mut state = AttemptState::initial(&mut rng);
        let start = state.font_px;
        for _ in 0..29 {
            state.note_miss(&mut rng);
        }
        assert_eq!(state.font_px, start);
        state.note_miss(&mut rng);
        assert_eq!(state.font_px, (start * SHRINK_STEP).floor().max(MIN_FONT_PX));
    }

    #[test]
    fn test_attempt_state_never_shrinks_below_min() {
        let mut rng = SeededRng::new("floor");
        let mut state = AttemptState::initial(&mut rng);
        state.font_px = 19.0;
        for _ in 0..120 {
            state.note_miss(&mut rng);
            assert!(state.font_px >= MIN_FONT_PX);
        }
        assert_eq!(state.font_px, MIN_FONT_PX);
    }

    #[test]
    fn test_attempt_state_exhausts_at_budget() {
        let mut rng = SeededRng::new("budget");
        let mut state = AttemptState::initial(&mut rng);
        for _ in 0..(MAX_ATTEMPTS - 1) {
            state.note_miss(&mut rng);
            assert!(!state.exhausted());
        }
        state.note_miss(&mut rng);
        assert!(state.exhausted());
    }
}
