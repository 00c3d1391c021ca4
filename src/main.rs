//! Sigball texture renderer
//!
//! Lays the enabled roster out on the leather canvas and writes the PNG
//! plus a placement manifest next to it.
//!
//! Usage:
//!   cargo run                                  # roster + settings defaults
//!   cargo run -- --seed dugout
//!   cargo run -- --width 1024 --height 512
//!   cargo run -- --project <id>                # render a saved project
//!   cargo run -- --out renders
//!
//! Outputs land in the output directory as:
//!   baseball_<seed>.png
//!   baseball_<seed>.json   (placements + dropped names)

use std::fs;
use std::path::Path;

use log::warn;
use rand::Rng;
use serde::Serialize;

use sigball::{
    PROJECTS_DB_FILE, Placement, ProjectStore, SIGNATURES_FILE, SignatureRoster, StudioSettings,
    generate, load_font,
};

struct RenderArgs {
    seed: Option<String>,
    out: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    project: Option<String>,
}

fn parse_args() -> RenderArgs {
    let mut parsed = RenderArgs {
        seed: None,
        out: None,
        width: None,
        height: None,
        project: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => parsed.seed = args.next(),
            "--out" => parsed.out = args.next(),
            "--width" => parsed.width = args.next().and_then(|v| v.parse().ok()),
            "--height" => parsed.height = args.next().and_then(|v| v.parse().ok()),
            "--project" => parsed.project = args.next(),
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Usage: sigball [--seed S] [--out DIR] [--width W] [--height H] [--project ID]");
                std::process::exit(1);
            }
        }
    }
    parsed
}

/// Fresh 10-char seed, minted outside the engine (the CLI's shuffle button).
fn random_seed() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}

/// Render record written next to the PNG
#[derive(Serialize)]
struct Manifest<'a> {
    seed: &'a str,
    width: u32,
    height: u32,
    rendered_at: String,
    placements: &'a [Placement],
    dropped: &'a [String],
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let settings = StudioSettings::load();
    let width = args.width.unwrap_or(settings.canvas_width);
    let height = args.height.unwrap_or(settings.canvas_height);

    let roster = match &args.project {
        Some(id) => {
            let store = ProjectStore::open(Path::new(PROJECTS_DB_FILE))
                .expect("Failed to open project store");
            match store.get(id).expect("Failed to query project store") {
                Some(project) => {
                    println!("Rendering project '{}' ({} names)", project.name, project.signature_names.len());
                    SignatureRoster::from_names(&project.signature_names)
                }
                None => {
                    eprintln!("No project with id {}", id);
                    std::process::exit(1);
                }
            }
        }
        None => SignatureRoster::load_or_create(SIGNATURES_FILE),
    };

    let enabled = roster.enabled();
    let seed = args
        .seed
        .or_else(|| settings.seed.clone())
        .unwrap_or_else(random_seed);

    println!("Rendering {}x{} texture, seed '{}'", width, height, seed);
    println!("  Signatures: {} enabled of {}", enabled.len(), roster.len());

    let font = load_font(settings.font_path.as_deref());

    let (layout, image) = match generate(width, height, &enabled, &seed, font.as_ref()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if !layout.dropped.is_empty() {
        warn!(
            "{} signatures could not be placed: {}",
            layout.dropped.len(),
            layout.dropped.join(", ")
        );
    }

    let out_dir = args.out.unwrap_or(settings.output_dir);
    fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    let png_path = format!("{}/baseball_{}.png", out_dir, seed);
    image.save(&png_path).expect("Failed to save texture");

    let manifest = Manifest {
        seed: &seed,
        width,
        height,
        rendered_at: chrono::Utc::now().to_rfc3339(),
        placements: &layout.placements,
        dropped: &layout.dropped,
    };
    let manifest_path = format!("{}/baseball_{}.json", out_dir, seed);
    let json = serde_json::to_string_pretty(&manifest).expect("Failed to serialize manifest");
    fs::write(&manifest_path, json).expect("Failed to write manifest");

    println!(
        "  Placed {} signatures ({} dropped)",
        layout.placements.len(),
        layout.dropped.len()
    );
    println!("  Created: {}", png_path);
    println!("  Created: {}", manifest_path);
}
