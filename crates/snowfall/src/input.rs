//! Pointer tracking and conversion into render coordinates
//!
//! winit reports cursor positions in physical pixels with the origin at the
//! top-left of the window. The simulation works in viewport units with the
//! origin at the bottom-left, and the viewport is stretched over the whole
//! window, so both axes are rescaled and y is flipped.

use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton};

/// Map a window-space cursor position into viewport render coordinates
pub fn window_to_render(cursor: Vec2, window: Vec2, viewport: Vec2) -> Vec2 {
    let window = window.max(Vec2::ONE);
    let scaled = cursor / window * viewport;
    Vec2::new(scaled.x, viewport.y - scaled.y)
}

/// Last known cursor position and the mapping into the viewport
#[derive(Debug, Clone)]
pub struct PointerState {
    cursor: Option<Vec2>,
    window_size: Vec2,
    viewport: Vec2,
}

impl PointerState {
    pub fn new(window_size: PhysicalSize<u32>, viewport: Vec2) -> Self {
        Self {
            cursor: None,
            window_size: Vec2::new(window_size.width as f32, window_size.height as f32),
            viewport,
        }
    }

    pub fn resized(&mut self, size: PhysicalSize<u32>) {
        self.window_size = Vec2::new(size.width as f32, size.height as f32);
    }

    pub fn moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    pub fn left(&mut self) {
        self.cursor = None;
    }

    /// Render-space click position if this event releases the primary button
    /// while the cursor is over the window
    pub fn primary_release(&self, state: ElementState, button: MouseButton) -> Option<Vec2> {
        if button != MouseButton::Left || state != ElementState::Released {
            return None;
        }
        self.cursor
            .map(|cursor| window_to_render(cursor, self.window_size, self.viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_to_render_flips_y() {
        let viewport = Vec2::new(1024.0, 512.0);
        let window = viewport;

        assert_eq!(
            window_to_render(Vec2::new(0.0, 0.0), window, viewport),
            Vec2::new(0.0, 512.0)
        );
        assert_eq!(
            window_to_render(Vec2::new(100.0, 448.0), window, viewport),
            Vec2::new(100.0, 64.0)
        );
    }

    #[test]
    fn test_window_to_render_rescales() {
        let viewport = Vec2::new(1024.0, 768.0);
        let window = Vec2::new(2048.0, 1536.0);

        assert_eq!(
            window_to_render(Vec2::new(1024.0, 768.0), window, viewport),
            Vec2::new(512.0, 384.0)
        );
    }

    #[test]
    fn test_window_to_render_survives_minimized_window() {
        let point = window_to_render(Vec2::ZERO, Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!(point.is_finite());
    }

    #[test]
    fn test_primary_release_only() {
        let mut pointer = PointerState::new(PhysicalSize::new(100, 100), Vec2::new(100.0, 100.0));

        // No cursor yet
        assert_eq!(
            pointer.primary_release(ElementState::Released, MouseButton::Left),
            None
        );

        pointer.moved(PhysicalPosition::new(25.0, 10.0));
        assert_eq!(
            pointer.primary_release(ElementState::Pressed, MouseButton::Left),
            None
        );
        assert_eq!(
            pointer.primary_release(ElementState::Released, MouseButton::Right),
            None
        );
        assert_eq!(
            pointer.primary_release(ElementState::Released, MouseButton::Left),
            Some(Vec2::new(25.0, 90.0))
        );

        pointer.left();
        assert_eq!(
            pointer.primary_release(ElementState::Released, MouseButton::Left),
            None
        );
    }

    #[test]
    fn test_resize_changes_mapping() {
        let mut pointer = PointerState::new(PhysicalSize::new(100, 100), Vec2::new(100.0, 100.0));
        pointer.resized(PhysicalSize::new(200, 200));
        pointer.moved(PhysicalPosition::new(100.0, 100.0));

        assert_eq!(
            pointer.primary_release(ElementState::Released, MouseButton::Left),
            Some(Vec2::new(50.0, 50.0))
        );
    }
}
