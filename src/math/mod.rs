//! Linear algebra for the rendering pipeline.

pub mod invsqrt;
pub mod matrix;

pub use invsqrt::{inv_sqrt, inv_sqrt64, inv_sqrt64_refined, inv_sqrt_refined, Float, REFINEMENTS};
pub use matrix::{
    gemm, vec2, vec3, vec4, Mat4, Matrix, Scalar, Vec2f, Vec2i, Vec3f, Vec3i, Vec4f, Vector,
};
