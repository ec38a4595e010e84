//! The per-frame render driver.
//!
//! Owns the pipeline configuration and walks a model's triangle list once per
//! frame: face culling, the vertex stage, then rasterization into the
//! caller's frame buffer. Camera, projection, and viewport matrices are
//! rebuilt every frame so the eye can move freely.

use super::framebuffer::FrameBuffer;
use super::rasterizer::{BarycentricRasterizer, RasterMethod, ScanlineRasterizer};
use crate::camera::{viewport, Camera};
use crate::math::{vec3, Vec3f};
use crate::model::{Model, Triangle};
use crate::shader::{DiffuseShader, Shader};

// Depth quantization range for the integer scanline path.
const DEPTH_RANGE: f32 = 255.0;

/// Pipeline configuration, exposed so hosts can override any of it.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Render target width in pixels.
    pub width: usize,
    /// Render target height in pixels.
    pub height: usize,
    pub eye: Vec3f,
    pub center: Vec3f,
    pub up: Vec3f,
    /// Direction the light travels, used for per-face Lambertian intensity.
    pub light_dir: Vec3f,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280 / 4,
            height: 720 / 4,
            eye: vec3(1.0, 1.0, 3.0),
            center: vec3(0.0, 0.0, 0.0),
            up: vec3(0.0, 1.0, 0.0),
            light_dir: vec3(0.0, 0.0, -1.0),
        }
    }
}

/// Drives the full per-frame pipeline over a model.
pub struct Renderer {
    config: RenderConfig,
    method: RasterMethod,
    scanline: ScanlineRasterizer,
    barycentric: BarycentricRasterizer,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            method: RasterMethod::default(),
            scanline: ScanlineRasterizer::new(),
            barycentric: BarycentricRasterizer::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    pub fn set_method(&mut self, method: RasterMethod) {
        self.method = method;
    }

    pub fn method(&self) -> RasterMethod {
        self.method
    }

    /// Lambertian intensity of a face against the configured light, or `None`
    /// when the face should be skipped: degenerate (zero-length normal) or
    /// back-facing (non-positive intensity).
    fn face_intensity(&self, tri: &Triangle) -> Option<f32> {
        let [v0, v1, v2] = tri.vertices.map(|v| v.position);
        let normal = (v2 - v0).cross(&(v1 - v0));
        if normal.norm_squared() <= f32::EPSILON {
            return None;
        }
        let intensity = self.config.light_dir.dot(&normal.normalized());
        (intensity > 0.0).then_some(intensity)
    }

    /// Render one frame. Resets the depth buffer, then draws every visible
    /// triangle with the active rasterization method. Pixel contents are not
    /// cleared here; hosts that want a background call
    /// [`FrameBuffer::clear`] first.
    pub fn render(&self, model: &Model, fb: &mut FrameBuffer) {
        fb.begin_frame();
        match self.method {
            RasterMethod::Barycentric => self.render_shaded(model, fb),
            RasterMethod::Scanline => self.render_affine(model, fb),
        }
    }

    fn render_shaded(&self, model: &Model, fb: &mut FrameBuffer) {
        let camera = Camera::new(self.config.eye, self.config.center, self.config.up);
        let transform = camera.projection() * camera.matrix();
        let screen = viewport(0.0, 0.0, self.config.width as f32, self.config.height as f32);
        let texture = model.texture();

        for tri in model.triangles() {
            let Some(intensity) = self.face_intensity(tri) else {
                continue;
            };
            let mut shader = DiffuseShader::new(tri, texture, transform, intensity);
            let clip = [shader.vertex(0), shader.vertex(1), shader.vertex(2)];
            self.barycentric.draw(fb, screen, clip, &shader);
        }
    }

    // The fixed-function path: NDC positions map straight to screen pixels
    // (no camera), depth is quantized to integers, UVs become texel indices.
    fn render_affine(&self, model: &Model, fb: &mut FrameBuffer) {
        let w = self.config.width as f32;
        let h = self.config.height as f32;
        let texture = model.texture();

        for tri in model.triangles() {
            let Some(intensity) = self.face_intensity(tri) else {
                continue;
            };
            let pts = tri.vertices.map(|v| {
                let p = v.position;
                vec3(
                    ((p.x() + 1.0) * w / 2.0) as i32,
                    // Top-left origin, same Y flip as the perspective path.
                    ((1.0 - p.y()) * h / 2.0) as i32,
                    ((p.z() + 1.0) * DEPTH_RANGE / 2.0) as i32,
                )
            });
            let uvs = tri.uvs.map(|uv| texture.pixel_uv(uv));
            self.scanline.fill_textured(fb, pts, uvs, intensity, texture);
        }
    }
}
