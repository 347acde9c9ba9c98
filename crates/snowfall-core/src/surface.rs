//! Drawing capability the frame step renders through
//!
//! Coordinates are render units with the origin at the bottom-left and y
//! increasing upward.

use glam::Vec2;

/// Linear colour with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey of the given brightness
    pub const fn grey(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Quantize to 8 bits per channel
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Target the frame step clears and draws flakes into
pub trait RenderSurface {
    /// Fill the whole surface with one colour
    fn clear_screen(&mut self, color: Rgba);

    /// Fill the axis-aligned rectangle spanning `min`..`max`
    fn fill_solid_rectangle(&mut self, min: Vec2, max: Vec2, color: Rgba);
}

/// CPU-side RGBA8 framebuffer
///
/// Rows are stored top row first so the buffer can be uploaded to a texture
/// or written to an image without flipping.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl PixelCanvas {
    /// Create a canvas of the given size, cleared to transparent black
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, top row first
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Colour at render coordinates (bottom-left origin)
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = self.height - 1 - y;
        let idx = (row * self.width + x) * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(out)
    }

    /// Pixel span covered by `start..end` along an axis of `len` pixels
    ///
    /// A pixel is covered when its centre lies inside the interval.
    fn span(start: f32, end: f32, len: usize) -> std::ops::Range<usize> {
        let lo = start.round().clamp(0.0, len as f32) as usize;
        let hi = end.round().clamp(0.0, len as f32) as usize;
        lo..hi.max(lo)
    }
}

impl RenderSurface for PixelCanvas {
    fn clear_screen(&mut self, color: Rgba) {
        let rgba = color.to_rgba8();
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn fill_solid_rectangle(&mut self, min: Vec2, max: Vec2, color: Rgba) {
        // NaN positions (e.g. after a click exactly on a flake) draw nothing
        if !(min.is_finite() && max.is_finite()) {
            return;
        }

        let alpha = color.a.clamp(0.0, 1.0);
        let src = color.to_rgba8();

        for y in Self::span(min.y, max.y, self.height) {
            let row = self.height - 1 - y;
            for x in Self::span(min.x, max.x, self.width) {
                let idx = (row * self.width + x) * 4;
                let dst = &mut self.buffer[idx..idx + 4];
                if alpha >= 1.0 {
                    dst.copy_from_slice(&src);
                } else {
                    for c in 0..3 {
                        let blended = src[c] as f32 * alpha + dst[c] as f32 * (1.0 - alpha);
                        dst[c] = blended.round() as u8;
                    }
                    dst[3] = dst[3].max(src[3]);
                }
            }
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
/// Draw call captured by [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Rect { min: Vec2, max: Vec2, color: Rgba },
}

#[cfg(any(test, feature = "test-utils"))]
/// Test support: surface that only records what was drawn
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles drawn since the last clear
    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        let last_clear = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        self.calls[last_clear..].iter().filter_map(|c| match *c {
            DrawCall::Rect { min, max, color } => Some((min, max, color)),
            DrawCall::Clear(_) => None,
        })
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl RenderSurface for RecordingSurface {
    fn clear_screen(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_solid_rectangle(&mut self, min: Vec2, max: Vec2, color: Rgba) {
        self.calls.push(DrawCall::Rect { min, max, color });
    }
}
