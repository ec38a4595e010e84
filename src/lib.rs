//! A CPU-only triangle rasterization pipeline.
//!
//! Takes 3-D triangles with per-vertex positions and UVs plus a texture and
//! produces a packed RGB24 pixel buffer, with no hardware acceleration
//! anywhere: its own fixed-dimension matrix algebra, a look-at/projection/
//! viewport camera pipeline, a programmable vertex/fragment shader seam, a
//! z-buffered rasterizer in two flavors (affine scanline and
//! perspective-correct barycentric), and a bounds-checked frame buffer over
//! host-owned memory.
//!
//! # Quick Start
//!
//! ```
//! use rastry::prelude::*;
//!
//! let config = RenderConfig::default();
//! let (w, h) = (config.width, config.height);
//! let renderer = Renderer::new(config);
//! let model = Model::checker_cube();
//!
//! let mut pixels = vec![0u8; w * h * 3];
//! let mut fb = FrameBuffer::new(&mut pixels, w, h);
//! renderer.render(&model, &mut fb);
//! ```

pub mod camera;
pub mod colors;
pub mod math;
pub mod model;
pub mod render;
pub mod shader;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use model::{LoadError, Model};
pub use render::{FrameBuffer, RasterMethod, RenderConfig, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rastry::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{look_at, projection, viewport, Camera};

    // Colors
    pub use crate::colors::Rgb;

    // Math
    pub use crate::math::{
        vec2, vec3, vec4, Mat4, Matrix, Vec2f, Vec2i, Vec3f, Vec3i, Vec4f, Vector,
    };

    // Model
    pub use crate::model::{Model, Triangle, Vertex};

    // Rendering
    pub use crate::render::{
        BarycentricRasterizer, FrameBuffer, RasterMethod, RenderConfig, Renderer,
        ScanlineRasterizer,
    };

    // Shading
    pub use crate::shader::{DiffuseShader, FlatShader, Shader};

    // Texture
    pub use crate::texture::Texture;
}
