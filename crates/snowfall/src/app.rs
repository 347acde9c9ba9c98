//! Application state and event loop for the snowfall demo

use anyhow::Result;
use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Arc;
use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use snowfall_core::{PixelCanvas, Snowfall};

use crate::config::AppConfig;
use crate::input::PointerState;
use crate::render::Renderer;

/// Main application state
pub struct App {
    // Window and rendering
    window: Arc<Window>,
    renderer: Renderer,
    canvas: PixelCanvas,

    // Simulation
    snow: Snowfall,
    rng: Xoshiro256StarStar,

    // Input state
    pointer: PointerState,

    // Timing
    clock: Instant,
    frame_count: u64,
    respawn_count: usize,
    fps_update_time: Instant,
}

impl App {
    /// Create a new app
    pub async fn new(config: AppConfig, seed: u64) -> Result<(Self, EventLoop<()>)> {
        let snow = Snowfall::new(config.snow.clone())?;
        let settings = snow.settings();
        let canvas = PixelCanvas::new(
            settings.viewport_width.round() as usize,
            settings.viewport_height.round() as usize,
        );

        log::info!(
            "{} flakes, viewport {}x{}, snowiness {}, seed {}",
            settings.particle_count,
            canvas.width(),
            canvas.height(),
            settings.snowiness,
            seed
        );

        // Create event loop
        let event_loop = EventLoop::new()?;

        // Create window
        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));

        #[allow(deprecated)]
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        // Create renderer
        let renderer =
            Renderer::new(window.clone(), canvas.width() as u32, canvas.height() as u32).await?;

        let pointer = PointerState::new(
            renderer.size(),
            Vec2::new(canvas.width() as f32, canvas.height() as f32),
        );

        let now = Instant::now();
        Ok((
            Self {
                window,
                renderer,
                canvas,
                snow,
                rng: Xoshiro256StarStar::seed_from_u64(seed),
                pointer,
                clock: now,
                frame_count: 0,
                respawn_count: 0,
                fps_update_time: now,
            },
            event_loop,
        ))
    }

    /// Run the event loop
    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Advance the simulation to now and present the frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now_ms = self.clock.elapsed().as_secs_f64() * 1000.0;
        let stats = self
            .snow
            .advance_and_render(now_ms, &mut self.canvas, &mut self.rng);

        self.renderer.upload(&self.canvas);
        match self.renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => {
                log::error!("Render error: {}", e);
            }
        }

        // Once-per-second frame summary
        self.frame_count += 1;
        self.respawn_count += stats.respawned;
        let since = self.fps_update_time.elapsed().as_secs_f32();
        if since >= 1.0 {
            log::debug!(
                "{:.1} fps, {} flakes visible, {} respawned",
                self.frame_count as f32 / since,
                stats.visible,
                self.respawn_count
            );
            self.frame_count = 0;
            self.respawn_count = 0;
            self.fps_update_time = Instant::now();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                self.pointer.resized(size);
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                self.window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.moved(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(click) = self.pointer.primary_release(state, button) {
                    self.snow.on_primary_click_release(click.x, click.y);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
