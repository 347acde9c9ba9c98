//! Snowfall - falling snow demo

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use snowfall::config::AppConfig;
use snowfall::screenshot::{capture_screenshot, ScreenshotConfig};
use snowfall::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of flakes (overrides the config file)
    #[arg(long)]
    particles: Option<usize>,

    /// Seed for the flake random source (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Render headless and save a PNG to this path instead of opening a window
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Number of frames to simulate for --screenshot
    #[arg(long, default_value = "600")]
    frames: u32,

    /// Click released halfway through a --screenshot run, as X,Y in render coordinates
    #[arg(long, value_parser = parse_point)]
    click: Option<Vec2>,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad X {:?}: {}", x, e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad Y {:?}: {}", y, e))?;
    Ok(Vec2::new(x, y))
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(config: &mut AppConfig, args: &Args) -> anyhow::Result<()> {
    if let Some(particles) = args.particles {
        config.snow.particle_count = particles;
        config.snow.validate()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, &args)?;

    let seed = args.seed.unwrap_or_else(rand::random);

    if let Some(output_path) = args.screenshot {
        let screenshot = ScreenshotConfig {
            frames: args.frames,
            click: args.click,
            seed,
            ..Default::default()
        };
        return capture_screenshot(&config.snow, &screenshot, output_path);
    }

    log::info!("Starting Snowfall");

    pollster::block_on(run(config, seed))
}

async fn run(config: AppConfig, seed: u64) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config, seed).await?;
    App::run(event_loop, app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("512,384"), Ok(Vec2::new(512.0, 384.0)));
        assert_eq!(parse_point(" 1.5 , -2 "), Ok(Vec2::new(1.5, -2.0)));
        assert!(parse_point("512").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "snowfall",
            "--particles",
            "1000",
            "--screenshot",
            "out.png",
            "--click",
            "10,20",
        ])
        .unwrap();
        assert_eq!(args.particles, Some(1000));
        assert_eq!(args.frames, 600);
        assert_eq!(args.click, Some(Vec2::new(10.0, 20.0)));
        assert_eq!(args.screenshot, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_particles_override() {
        let mut config = AppConfig::default();
        let args = Args::try_parse_from(["snowfall", "--particles", "1000"]).unwrap();
        apply_overrides(&mut config, &args).unwrap();
        assert_eq!(config.snow.particle_count, 1000);

        let mut config = AppConfig::default();
        let args = Args::try_parse_from(["snowfall"]).unwrap();
        apply_overrides(&mut config, &args).unwrap();
        assert_eq!(config.snow.particle_count, 50_000);
    }

    #[test]
    fn test_zero_particles_override_is_rejected() {
        let mut config = AppConfig::default();
        let args = Args::try_parse_from(["snowfall", "--particles", "0"]).unwrap();
        assert!(apply_overrides(&mut config, &args).is_err());
    }
}
