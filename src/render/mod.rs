//! Rendering: frame buffer, rasterizers, and the per-frame driver.

pub mod framebuffer;
pub mod rasterizer;
mod renderer;

pub use framebuffer::{FrameBuffer, DEPTH_FAR};
pub use rasterizer::{BarycentricRasterizer, RasterMethod, ScanlineRasterizer};
pub use renderer::{RenderConfig, Renderer};
