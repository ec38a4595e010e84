//! Programmable shading stages.
//!
//! The rasterizer knows nothing about textures or lighting; it only drives
//! this two-method contract. One shader value is built per triangle, so
//! varyings stashed by `vertex` never leak across draw calls.

use crate::colors::{self, Rgb};
use crate::math::{Mat4, Matrix, Vec3f, Vec4f};
use crate::model::Triangle;
use crate::texture::Texture;

/// The vertex/fragment contract between the pipeline and the rasterizer.
pub trait Shader {
    /// Run the vertex stage for vertex `nth` (0..3) of the current triangle,
    /// returning its clip-space position. Implementations may stash
    /// per-vertex varyings keyed by `nth`.
    fn vertex(&mut self, nth: usize) -> Vec4f;

    /// Compute the color for one covered pixel from perspective-corrected
    /// barycentric weights. `None` discards the pixel: nothing is written and
    /// the depth buffer is left untouched.
    fn fragment(&self, bar: Vec3f) -> Option<Rgb>;
}

/// Textured Lambertian shader: transforms positions by `projection * camera`,
/// interpolates UVs across the face, and scales the diffuse sample by a
/// per-face light intensity.
pub struct DiffuseShader<'a> {
    transform: Mat4,
    triangle: &'a Triangle,
    texture: Texture<'a>,
    intensity: f32,
    // One UV column per vertex, filled by the vertex stage.
    varying_uv: Matrix<f32, 2, 3>,
}

impl<'a> DiffuseShader<'a> {
    pub fn new(
        triangle: &'a Triangle,
        texture: Texture<'a>,
        transform: Mat4,
        intensity: f32,
    ) -> Self {
        Self {
            transform,
            triangle,
            texture,
            intensity,
            varying_uv: Matrix::zero(),
        }
    }
}

impl Shader for DiffuseShader<'_> {
    fn vertex(&mut self, nth: usize) -> Vec4f {
        self.varying_uv.set_col(nth, self.triangle.uvs[nth]);
        self.transform * self.triangle.vertices[nth].position.extended(1.0)
    }

    fn fragment(&self, bar: Vec3f) -> Option<Rgb> {
        let uv = self.varying_uv * bar;
        Some(colors::scale(self.texture.diffuse(uv), self.intensity))
    }
}

/// Constant-color shader over pre-transformed clip positions. The flat-shaded
/// historical pipeline, also useful in tests and benchmarks.
pub struct FlatShader {
    positions: [Vec4f; 3],
    color: Rgb,
}

impl FlatShader {
    pub fn new(positions: [Vec4f; 3], color: Rgb) -> Self {
        Self { positions, color }
    }
}

impl Shader for FlatShader {
    fn vertex(&mut self, nth: usize) -> Vec4f {
        self.positions[nth]
    }

    fn fragment(&self, _bar: Vec3f) -> Option<Rgb> {
        Some(self.color)
    }
}
