//! Model data: triangle lists plus their texture.
//!
//! The model provider is the boundary that owns asset parsing; the rendering
//! core only ever sees immutable triangle slices and a borrowed [`Texture`]
//! view. Models can be loaded from OBJ files or built from the embedded cube.

use std::fmt;
use std::path::Path;

use crate::math::{vec2, vec3, Matrix, Vec2f, Vec3f};
use crate::texture::{Texture, TextureError};

/// A single 3-component position, immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3f,
}

/// Three vertices plus one UV coordinate per vertex. Read-only to the
/// rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub uvs: [Vec2f; 3],
}

/// Errors from loading a model from disk.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    Image(image::ImageError),
    Texture(TextureError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to parse OBJ: {e}"),
            LoadError::Image(e) => write!(f, "failed to decode texture: {e}"),
            LoadError::Texture(e) => write!(f, "invalid texture data: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Image(e)
    }
}

impl From<TextureError> for LoadError {
    fn from(e: TextureError) -> Self {
        LoadError::Texture(e)
    }
}

/// A triangle list with its packed RGB texture, immutable for the duration of
/// a frame.
pub struct Model {
    triangles: Vec<Triangle>,
    texels: Vec<u8>,
    texture_width: usize,
    texture_height: usize,
}

// Unit cube corners: front face (+Z) first, then back face (-Z).
const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
];

// Quads wound counter-clockwise as seen from outside the cube.
const CUBE_QUADS: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // front
    [4, 5, 6, 7], // back
    [1, 4, 7, 2], // right
    [5, 0, 3, 6], // left
    [3, 2, 7, 6], // top
    [5, 4, 1, 0], // bottom
];

const CHECKER_SIZE: usize = 64;
const CHECKER_CELL: usize = 8;

fn checker_texels() -> Vec<u8> {
    let mut texels = Vec::with_capacity(CHECKER_SIZE * CHECKER_SIZE * 3);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let even = (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0;
            let color: [u8; 3] = if even { [230, 120, 40] } else { [40, 60, 90] };
            texels.extend_from_slice(&color);
        }
    }
    texels
}

impl Model {
    /// Build a model from already-assembled parts, validating the texture
    /// invariants up front.
    pub fn new(
        triangles: Vec<Triangle>,
        texels: Vec<u8>,
        texture_width: usize,
        texture_height: usize,
    ) -> Result<Self, TextureError> {
        Texture::new(&texels, texture_width, texture_height)?;
        Ok(Self {
            triangles,
            texels,
            texture_width,
            texture_height,
        })
    }

    /// Load an OBJ mesh and its texture image.
    ///
    /// Faces are triangulated by the loader; meshes without texture
    /// coordinates fall back to UV `(0, 0)` everywhere.
    pub fn from_obj(
        obj_path: impl AsRef<Path>,
        texture_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let (meshes, _materials) = tobj::load_obj(obj_path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;
        let img = image::open(texture_path.as_ref())?.to_rgb8();
        let (tw, th) = img.dimensions();
        let texels = img.into_raw();

        let mut triangles = Vec::new();
        for mesh in meshes.iter().map(|m| &m.mesh) {
            for face in mesh.indices.chunks_exact(3) {
                let mut vertices = [Vertex {
                    position: Matrix::zero(),
                }; 3];
                let mut uvs = [Matrix::zero(); 3];
                for (slot, &raw) in face.iter().enumerate() {
                    let i = raw as usize;
                    vertices[slot] = Vertex {
                        position: vec3(
                            mesh.positions[i * 3],
                            mesh.positions[i * 3 + 1],
                            mesh.positions[i * 3 + 2],
                        ),
                    };
                    if !mesh.texcoords.is_empty() {
                        uvs[slot] = vec2(mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]);
                    }
                }
                triangles.push(Triangle { vertices, uvs });
            }
        }

        Ok(Self::new(triangles, texels, tw as usize, th as usize)?)
    }

    /// The embedded demo asset: a unit cube with per-face UVs and a
    /// procedural checkerboard texture.
    pub fn checker_cube() -> Self {
        let corner_uvs = [
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 1.0),
        ];

        let mut triangles = Vec::with_capacity(CUBE_QUADS.len() * 2);
        for quad in CUBE_QUADS {
            let corners = quad.map(|i| {
                let [x, y, z] = CUBE_VERTICES[i];
                Vertex {
                    position: vec3(x, y, z),
                }
            });
            for tri in [[0, 1, 2], [0, 2, 3]] {
                triangles.push(Triangle {
                    vertices: tri.map(|c| corners[c]),
                    uvs: tri.map(|c| corner_uvs[c]),
                });
            }
        }

        Self {
            triangles,
            texels: checker_texels(),
            texture_width: CHECKER_SIZE,
            texture_height: CHECKER_SIZE,
        }
    }

    /// A single-triangle model over a solid white texture, handy for tests.
    pub fn single_triangle(positions: [Vec3f; 3]) -> Self {
        let uv = vec2(0.5, 0.5);
        Self {
            triangles: vec![Triangle {
                vertices: positions.map(|position| Vertex { position }),
                uvs: [uv; 3],
            }],
            texels: vec![255; 4 * 3],
            texture_width: 2,
            texture_height: 2,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Borrowed sampler view over the model's texture.
    pub fn texture(&self) -> Texture<'_> {
        Texture::from_raw_parts(&self.texels, self.texture_width, self.texture_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_cube_has_twelve_faces() {
        let model = Model::checker_cube();
        assert_eq!(model.triangles().len(), 12);
        assert_eq!(model.texture().width(), CHECKER_SIZE);
    }

    #[test]
    fn cube_winding_is_counter_clockwise_from_outside() {
        let model = Model::checker_cube();
        for tri in model.triangles() {
            let [v0, v1, v2] = tri.vertices.map(|v| v.position);
            let outward = (v1 - v0).cross(&(v2 - v0));
            let centroid = (v0 + v1 + v2) / 3.0;
            // Outward normal points away from the cube center.
            assert!(outward.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn new_rejects_bad_texture_lengths() {
        assert!(Model::new(Vec::new(), vec![0; 11], 2, 2).is_err());
        assert!(Model::new(Vec::new(), vec![0; 12], 2, 2).is_ok());
    }
}
