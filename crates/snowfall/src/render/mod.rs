//! Presentation of the snow canvas on the window surface

mod renderer;

pub use renderer::Renderer;
