//! Triangle rasterization algorithms.
//!
//! Two strategies from the pipeline's lineage, selectable at runtime:
//! - [`BarycentricRasterizer`]: half-space test over a bounding box with
//!   homogeneous perspective correction, driven by a pluggable shader. The
//!   primary path.
//! - [`ScanlineRasterizer`]: classic edge-walk with affine UV interpolation
//!   and fixed-function texturing. Retained as the fast path.

mod barycentric;
mod scanline;

pub use barycentric::{barycentric, BarycentricRasterizer};
pub use scanline::ScanlineRasterizer;

/// Which fill algorithm the renderer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMethod {
    /// Affine scanline edge-walk; no perspective correction.
    Scanline,
    /// Shader-driven barycentric fill with perspective-correct interpolation.
    #[default]
    Barycentric,
}

impl std::fmt::Display for RasterMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterMethod::Scanline => write!(f, "Scanline"),
            RasterMethod::Barycentric => write!(f, "Barycentric"),
        }
    }
}
