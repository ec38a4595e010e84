//! Barycentric triangle rasterization with perspective correction.
//!
//! The primary pipeline: clip-space vertices from a [`Shader`]'s vertex stage
//! are viewport-transformed and perspective-divided, every pixel in the
//! clipped bounding box is tested against the triangle's barycentric
//! coordinates (the half-space test), and surviving pixels get their weights
//! corrected from screen space back to clip space before the fragment stage
//! runs.
//!
//! Screen-space barycentric weights are wrong for attribute interpolation
//! under perspective; dividing each weight by its vertex W and renormalizing
//! yields the clip-space weights that make textures track depth correctly.

use crate::math::{vec2, vec3, Mat4, Vec2f, Vec3f, Vec4f};
use crate::render::framebuffer::FrameBuffer;
use crate::shader::Shader;

// Triangles whose doubled area falls below this are dropped as degenerate.
const DEGENERACY_LIMIT: f32 = 1e-2;

/// Screen-space barycentric coordinates of `p` within triangle `abc`.
///
/// Solves the 2x2 system via the cross-product construction. Near-degenerate
/// triangles yield a negative component, so every candidate pixel fails the
/// containment test.
pub fn barycentric(a: Vec2f, b: Vec2f, c: Vec2f, p: Vec2f) -> Vec3f {
    let u = vec3(c.x() - a.x(), b.x() - a.x(), a.x() - p.x())
        .cross(&vec3(c.y() - a.y(), b.y() - a.y(), a.y() - p.y()));
    if u.z().abs() < DEGENERACY_LIMIT {
        return vec3(-1.0, 1.0, 1.0);
    }
    vec3(
        1.0 - (u.x() + u.y()) / u.z(),
        u.y() / u.z(),
        u.x() / u.z(),
    )
}

/// Perspective-correct, shader-driven triangle rasterizer.
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterize one triangle from its clip-space vertices.
    ///
    /// Runs the half-space test per pixel, converts the weights to clip
    /// space, interpolates clip Z as the fragment depth (greater is nearer),
    /// and invokes `shader.fragment`. Discarded fragments leave both buffers
    /// untouched.
    pub fn draw<S: Shader>(
        &self,
        fb: &mut FrameBuffer,
        viewport: Mat4,
        clip: [Vec4f; 3],
        shader: &S,
    ) {
        let pts = clip.map(|v| viewport * v);
        let pts2: [Vec2f; 3] =
            [0, 1, 2].map(|i| vec2(pts[i].x() / pts[i].w(), pts[i].y() / pts[i].w()));

        // Bounding box over the screen points, clipped to the buffer.
        let max_x = fb.width() as f32 - 1.0;
        let max_y = fb.height() as f32 - 1.0;
        let mut bb_min = vec2(f32::MAX, f32::MAX);
        let mut bb_max = vec2(-f32::MAX, -f32::MAX);
        for p in &pts2 {
            bb_min = vec2(bb_min.x().min(p.x()).max(0.0), bb_min.y().min(p.y()).max(0.0));
            bb_max = vec2(
                bb_max.x().max(p.x()).min(max_x),
                bb_max.y().max(p.y()).min(max_y),
            );
        }

        for x in bb_min.x() as i32..=bb_max.x() as i32 {
            for y in bb_min.y() as i32..=bb_max.y() as i32 {
                let bc_screen =
                    barycentric(pts2[0], pts2[1], pts2[2], vec2(x as f32, y as f32));
                if bc_screen.x() < 0.0 || bc_screen.y() < 0.0 || bc_screen.z() < 0.0 {
                    continue;
                }

                // Screen weights -> clip weights: divide by W, renormalize.
                let bc_clip = vec3(
                    bc_screen.x() / pts[0].w(),
                    bc_screen.y() / pts[1].w(),
                    bc_screen.z() / pts[2].w(),
                );
                let bc_clip = bc_clip / (bc_clip.x() + bc_clip.y() + bc_clip.z());

                let depth = vec3(clip[0].z(), clip[1].z(), clip[2].z()).dot(&bc_clip);
                if let Some(color) = shader.fragment(bc_clip) {
                    fb.set_pixel_with_depth(x, y, depth, color);
                }
            }
        }
    }
}

impl Default for BarycentricRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
