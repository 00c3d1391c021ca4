//! Runtime font discovery
//!
//! No font binary ships with the repo, so the renderer looks for a script
//! font at the configured path first and then at a few common system
//! locations. Rendering without any font is allowed: the leather and seams
//! still paint, only the signature ink is skipped.

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use log::{info, warn};

/// Candidate font locations, tried in order after the configured path.
const FALLBACK_FONT_PATHS: &[&str] = &[
    "assets/fonts/signature.ttf",
    "assets/fonts/signature.otf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Apple Chancery.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Load the first usable font from the configured path or the fallbacks.
pub fn load_font(configured: Option<&str>) -> Option<FontVec> {
    let candidates = configured
        .into_iter()
        .chain(FALLBACK_FONT_PATHS.iter().copied());

    for path in candidates {
        if !Path::new(path).exists() {
            continue;
        }
        match fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec_and_index(bytes, 0) {
                Ok(font) => {
                    info!("Loaded signature font from {}", path);
                    return Some(font);
                }
                Err(e) => warn!("Failed to parse font {}: {}", path, e),
            },
            Err(e) => warn!("Failed to read font {}: {}", path, e),
        }
    }

    warn!("No usable font found; textures will render without signature ink");
    None
}
