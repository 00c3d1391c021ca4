//! Gallery sheet generator
//!
//! Renders every gallery scenario (config/gallery.toml, or the built-in
//! set) in parallel and composes a labeled grid for side-by-side seed
//! comparison.
//!
//! Run with: `cargo run --bin gallery`
//!
//! Output lands at showcase/signature_gallery.png.

use ab_glyph::PxScale;
use image::{Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_text_mut;
use rayon::prelude::*;

use sigball::{
    GALLERY_FILE, SIGNATURES_FILE, SignatureRoster, StudioSettings, generate, load_font,
    load_scenarios,
};

const THUMB_WIDTH: u32 = 512;
const THUMB_HEIGHT: u32 = 256;
const PADDING: u32 = 16;
const LABEL_HEIGHT: u32 = 26;
const COLS: u32 = 2;

const OUTPUT_PATH: &str = "showcase/signature_gallery.png";

fn main() {
    env_logger::init();

    let settings = StudioSettings::load();
    let roster = SignatureRoster::load_or_create(SIGNATURES_FILE);
    let scenarios = load_scenarios(GALLERY_FILE);
    let font = load_font(settings.font_path.as_deref());

    println!("Rendering {} gallery scenarios...", scenarios.len());

    // Each scenario is an independent render; the engine itself stays
    // single-threaded, so the fan-out is per whole texture.
    let cells: Vec<(String, RgbaImage)> = scenarios
        .par_iter()
        .map(|scenario| {
            let signatures = if scenario.names.is_empty() {
                roster.enabled()
            } else {
                SignatureRoster::from_names(&scenario.names).enabled()
            };
            let (layout, image) = generate(
                settings.canvas_width,
                settings.canvas_height,
                &signatures,
                &scenario.seed,
                font.as_ref(),
            )
            .expect("Invalid canvas dimensions in settings");

            println!(
                "  {}: placed {} of {} ({} dropped)",
                scenario.name,
                layout.placements.len(),
                signatures.len(),
                layout.dropped.len()
            );

            let thumb = imageops::thumbnail(&image, THUMB_WIDTH, THUMB_HEIGHT);
            (scenario.name.clone(), thumb)
        })
        .collect();

    let cols = COLS.min(cells.len().max(1) as u32);
    let rows = (cells.len() as u32).div_ceil(cols);
    let sheet_width = PADDING + cols * (THUMB_WIDTH + PADDING);
    let sheet_height = PADDING + rows * (THUMB_HEIGHT + LABEL_HEIGHT + PADDING);

    let mut sheet = RgbaImage::new(sheet_width, sheet_height);
    for pixel in sheet.pixels_mut() {
        *pixel = Rgba([30, 30, 35, 255]);
    }

    let label_color = Rgba([220u8, 220u8, 220u8, 255u8]);
    let label_scale = PxScale::from(18.0);

    for (idx, (name, thumb)) in cells.iter().enumerate() {
        let col = idx as u32 % cols;
        let row = idx as u32 / cols;
        let x = PADDING + col * (THUMB_WIDTH + PADDING);
        let y = PADDING + row * (THUMB_HEIGHT + LABEL_HEIGHT + PADDING);

        imageops::overlay(&mut sheet, thumb, x as i64, y as i64);

        if let Some(font) = &font {
            draw_text_mut(
                &mut sheet,
                label_color,
                x as i32 + 4,
                (y + THUMB_HEIGHT + 4) as i32,
                label_scale,
                font,
                name,
            );
        }
    }

    std::fs::create_dir_all("showcase").expect("Failed to create showcase directory");
    sheet.save(OUTPUT_PATH).expect("Failed to save gallery sheet");

    println!("\nGallery saved to: {}", OUTPUT_PATH);
}
