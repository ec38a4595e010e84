//! Scanline edge-walk triangle rasterization.
//!
//! The affine fast path: the triangle is split at its middle vertex into two
//! vertical spans, each scanline's endpoints are interpolated along the
//! boundary edges, and pixels are walked left to right with UV and depth
//! lerped alongside position. No perspective correction; the lighting is a
//! precomputed per-face intensity.

use crate::colors;
use crate::math::{Vec2i, Vec3i};
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

/// Affine textured triangle rasterizer.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Fill a screen-space triangle, sampling `texture` at affinely
    /// interpolated texel coordinates and scaling by `intensity`.
    ///
    /// `pts` carry integer screen X/Y plus an integer depth (greater is
    /// nearer); `uvs` are integer texel coordinates, one per vertex.
    pub fn fill_textured(
        &self,
        fb: &mut FrameBuffer,
        pts: [Vec3i; 3],
        uvs: [Vec2i; 3],
        intensity: f32,
        texture: Texture,
    ) {
        let [mut t0, mut t1, mut t2] = pts;
        let [mut uv0, mut uv1, mut uv2] = uvs;

        // Zero screen-space height, nothing to fill.
        if t0.y() == t1.y() && t0.y() == t2.y() {
            return;
        }

        // Sort (vertex, uv) pairs by ascending Y.
        if t0.y() > t1.y() {
            std::mem::swap(&mut t0, &mut t1);
            std::mem::swap(&mut uv0, &mut uv1);
        }
        if t0.y() > t2.y() {
            std::mem::swap(&mut t0, &mut t2);
            std::mem::swap(&mut uv0, &mut uv2);
        }
        if t1.y() > t2.y() {
            std::mem::swap(&mut t1, &mut t2);
            std::mem::swap(&mut uv1, &mut uv2);
        }

        let total_height = t2.y() - t0.y();
        for i in 0..total_height {
            let second_half = i > t1.y() - t0.y() || t1.y() == t0.y();
            let segment_height = if second_half {
                t2.y() - t1.y()
            } else {
                t1.y() - t0.y()
            };
            let alpha = i as f32 / total_height as f32;
            // The second_half branch keeps segment_height non-zero here.
            let beta = (i - if second_half { t1.y() - t0.y() } else { 0 }) as f32
                / segment_height as f32;

            let mut a = lerp3(t0, t2, alpha);
            let mut b = if second_half {
                lerp3(t1, t2, beta)
            } else {
                lerp3(t0, t1, beta)
            };
            let mut uv_a = lerp2(uv0, uv2, alpha);
            let mut uv_b = if second_half {
                lerp2(uv1, uv2, beta)
            } else {
                lerp2(uv0, uv1, beta)
            };
            if a.x() > b.x() {
                std::mem::swap(&mut a, &mut b);
                std::mem::swap(&mut uv_a, &mut uv_b);
            }

            let y = t0.y() + i;
            for x in a.x()..=b.x() {
                // A zero-width span collapses onto its right endpoint.
                let phi = if b.x() == a.x() {
                    1.0
                } else {
                    (x - a.x()) as f32 / (b.x() - a.x()) as f32
                };
                let p = lerp3(a, b, phi);
                let uv = lerp2(uv_a, uv_b, phi);
                let color = colors::scale(texture.texel(uv.x(), uv.y()), intensity);
                fb.set_pixel_with_depth(x, y, p.z() as f32, color);
            }
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

fn lerp3(a: Vec3i, b: Vec3i, t: f32) -> Vec3i {
    let af = a.map(|c| c as f32);
    let bf = b.map(|c| c as f32);
    (af + (bf - af) * t).map(|c| c as i32)
}

fn lerp2(a: Vec2i, b: Vec2i, t: f32) -> Vec2i {
    let af = a.map(|c| c as f32);
    let bf = b.map(|c| c as f32);
    (af + (bf - af) * t).map(|c| c as i32)
}
