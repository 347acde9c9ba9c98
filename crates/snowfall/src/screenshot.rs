//! Headless capture: run the simulation without a window and save a PNG

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use snowfall_core::{PixelCanvas, SnowSettings, Snowfall};

/// Headless capture settings
#[derive(Debug, Clone)]
pub struct ScreenshotConfig {
    /// Number of frames to simulate before capturing
    pub frames: u32,
    /// Simulated time between frames in milliseconds
    pub frame_ms: f64,
    /// Click released halfway through the run (on the first frame for runs
    /// shorter than two frames), in render coordinates
    pub click: Option<Vec2>,
    /// Seed for the flake random source
    pub seed: u64,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            frames: 600, // 10 seconds at 60fps
            frame_ms: 1000.0 / 60.0,
            click: None,
            seed: 0,
        }
    }
}

/// Simulate `config.frames` frames and return the final canvas
pub fn render_headless(settings: &SnowSettings, config: &ScreenshotConfig) -> Result<PixelCanvas> {
    let mut snow = Snowfall::new(settings.clone()).context("Invalid snow settings")?;
    let mut canvas = PixelCanvas::new(
        settings.viewport_width.round() as usize,
        settings.viewport_height.round() as usize,
    );
    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);

    // Frame numbers start at 1, so short runs click on the first frame
    let click_frame = (config.frames / 2).max(1);
    let mut visible = 0;
    for frame in 1..=config.frames {
        if frame == click_frame {
            if let Some(click) = config.click {
                snow.on_primary_click_release(click.x, click.y);
            }
        }
        let time = f64::from(frame) * config.frame_ms;
        let stats = snow.advance_and_render(time, &mut canvas, &mut rng);
        visible = stats.visible;
    }

    log::info!(
        "Simulated {} frames, {} flakes visible",
        config.frames,
        visible
    );
    Ok(canvas)
}

/// Run headless and write the result to `output_path` as PNG
pub fn capture_screenshot(
    settings: &SnowSettings,
    config: &ScreenshotConfig,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    log::info!("Capturing headless snowfall screenshot");
    log::info!(
        "  Viewport: {}x{}",
        settings.viewport_width,
        settings.viewport_height
    );
    log::info!("  Frames: {}, seed: {}", config.frames, config.seed);

    let canvas = render_headless(settings, config)?;

    log::info!("Saving to {:?}...", output_path.as_ref());
    save_canvas_as_png(&canvas, output_path)?;

    log::info!("Screenshot saved successfully!");
    Ok(())
}

/// Save an RGBA canvas as PNG
fn save_canvas_as_png(canvas: &PixelCanvas, path: impl AsRef<Path>) -> Result<()> {
    use image::{ImageBuffer, Rgba};

    let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(
        canvas.width() as u32,
        canvas.height() as u32,
        canvas.as_bytes().to_vec(),
    )
    .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))?;

    img.save(path.as_ref())
        .with_context(|| format!("Failed to write {:?}", path.as_ref()))?;
    Ok(())
}
