//! Renders the demo scene as a PPM image on stdout.
//!
//! Progress goes to the log on stderr; set `RUST_LOG=debug` for per-scanline
//! output.

mod scene;

use anyhow::{Context, Result};
use lumen_renderer::render;
use std::io::{self, BufWriter};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let world = scene::build_scene();
    log::info!("Scene built in {:?} ({} objects)", start.elapsed(), world.len());

    let config = scene::render_config();
    let camera = scene::camera().context("Failed to set up camera")?;
    let mut rng = config.rng();

    let image = render(&camera, &world, &config, &mut rng).context("Render failed")?;

    let stdout = io::stdout();
    image
        .write_ppm(BufWriter::new(stdout.lock()))
        .context("Failed to write image")?;

    log::info!("Done.");
    Ok(())
}
