//! Camera, projection, and viewport matrices.
//!
//! # Coordinate System
//!
//! Right-handed world space with Y up. The camera basis is derived per frame
//! from eye/center/up, and the perspective matrix flips Y so screen
//! coordinates follow the image convention (origin top-left, Y down).
//!
//! The vertex transform is `projection * camera`; the viewport matrix is
//! applied afterwards, around the perspective divide.

use crate::math::{Mat4, Vec3f};

/// View transform placing the world into camera-relative coordinates.
///
/// The rotation rows are the orthonormal basis `(right, up, forward)` with
/// `forward = normalize(eye - center)`, composed with a translation by `-eye`.
///
/// `up` must not be parallel to `eye - center`, or `right` would normalize a
/// zero vector.
pub fn look_at(eye: Vec3f, center: Vec3f, up: Vec3f) -> Mat4 {
    let forward = (eye - center).normalized();
    let right = up.cross(&forward).normalized();
    let true_up = forward.cross(&right);

    // Basis vectors as rows, each carrying -basis.dot(eye) so the matrix
    // equals rotation * translate(-eye).
    Mat4::new([
        [right.x(), right.y(), right.z(), -right.dot(&eye)],
        [true_up.x(), true_up.y(), true_up.z(), -true_up.dot(&eye)],
        [forward.x(), forward.y(), forward.z(), -forward.dot(&eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Perspective matrix for a camera at distance `coeff` from the target.
///
/// Identity except: row 1 is negated (the Y flip into image coordinates), and
/// entry (3,2) is `-1/coeff`, which makes the homogeneous W encode the
/// perspective divide.
pub fn projection(coeff: f32) -> Mat4 {
    let mut m = Mat4::identity();
    m.set(1, 1, -1.0);
    m.set(3, 2, -1.0 / coeff);
    m
}

/// Maps normalized device coordinates into the pixel rectangle `(x, y, w, h)`.
///
/// Scales by `(w/2, h/2, 1)` and translates by `(x + w/2, y + h/2, 0)`.
pub fn viewport(x: f32, y: f32, w: f32, h: f32) -> Mat4 {
    Mat4::new([
        [w / 2.0, 0.0, 0.0, x + w / 2.0],
        [0.0, h / 2.0, 0.0, y + h / 2.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Per-frame camera state. The matrices are cheap to rebuild, so they are
/// derived on demand rather than cached.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3f,
    pub center: Vec3f,
    pub up: Vec3f,
}

impl Camera {
    pub fn new(eye: Vec3f, center: Vec3f, up: Vec3f) -> Self {
        Self { eye, center, up }
    }

    /// Projection coefficient: the eye-to-target distance, so the perspective
    /// matrix ends up with `-1/|eye - center|` in its W row.
    pub fn coeff(&self) -> f32 {
        (self.eye - self.center).norm()
    }

    pub fn matrix(&self) -> Mat4 {
        look_at(self.eye, self.center, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        projection(self.coeff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{vec3, vec4};
    use approx::assert_relative_eq;

    #[test]
    fn look_at_maps_eye_to_origin() {
        let m = look_at(vec3(1.0, 2.0, 3.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        let out = m * vec4(1.0, 2.0, 3.0, 1.0);
        assert_relative_eq!(out.x(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.y(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.z(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.w(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn look_at_puts_center_on_view_axis() {
        let eye = vec3(0.0, 0.0, 5.0);
        let m = look_at(eye, vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        let out = m * vec4(0.0, 0.0, 0.0, 1.0);
        // The target sits straight ahead, 5 units along -forward.
        assert_relative_eq!(out.x(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.y(), 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.z(), -5.0, max_relative = 1e-2);
    }

    #[test]
    fn look_at_rows_are_orthonormal() {
        let m = look_at(vec3(1.0, 1.0, 3.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        let rows: Vec<_> = (0..3)
            .map(|r| vec3(m.get(r, 0), m.get(r, 1), m.get(r, 2)))
            .collect();
        for i in 0..3 {
            assert_relative_eq!(rows[i].norm(), 1.0, max_relative = 1e-2);
            for j in i + 1..3 {
                assert_relative_eq!(rows[i].dot(&rows[j]), 0.0, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn projection_encodes_divide_in_w() {
        let m = projection(5.0);
        let out = m * vec4(1.0, 1.0, -5.0, 1.0);
        assert_relative_eq!(out.w(), 2.0, epsilon = 1e-6);
        // Y flip
        assert_relative_eq!(out.y(), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn viewport_maps_ndc_corners_to_rect() {
        let m = viewport(10.0, 20.0, 100.0, 50.0);
        let low = m * vec4(-1.0, -1.0, 0.0, 1.0);
        let high = m * vec4(1.0, 1.0, 0.0, 1.0);
        assert_relative_eq!(low.x(), 10.0, epsilon = 1e-4);
        assert_relative_eq!(low.y(), 20.0, epsilon = 1e-4);
        assert_relative_eq!(high.x(), 110.0, epsilon = 1e-4);
        assert_relative_eq!(high.y(), 70.0, epsilon = 1e-4);
    }

    #[test]
    fn camera_coeff_is_eye_distance() {
        let camera = Camera::new(vec3(0.0, 3.0, 4.0), vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        assert_relative_eq!(camera.coeff(), 5.0, max_relative = 1e-2);
    }
}
