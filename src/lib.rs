//! Sigball - procedural autographed-baseball texture studio
//!
//! Generates equirectangular leather textures from a curated signature
//! roster: deterministic layout (toroidal blue-noise placement with
//! shrink-on-crowding), a fixed leather/seam recipe, and local persistence
//! of rosters and named projects.

// Core modules
pub mod constants;
pub mod gallery;
pub mod projects;
pub mod settings;
pub mod signatures;
pub mod texture;

// Re-export commonly used types for convenience
pub use constants::*;
pub use gallery::{GALLERY_FILE, Scenario, default_scenarios, load_scenarios, parse_scenarios};
pub use projects::{PROJECTS_DB_FILE, Project, ProjectStore};
pub use settings::{SETTINGS_FILE, StudioSettings};
pub use signatures::{DEFAULT_NAMES, SIGNATURES_FILE, Signature, SignatureRoster};
pub use texture::{
    AttemptState, FontMeasure, Layout, LayoutError, Placement, ScriptMeasure, SeededRng,
    TextMeasure, disc_radius, generate, hash_to_unit, layout_signatures, load_font, overlaps,
    render_texture, wrapped_dx,
};
