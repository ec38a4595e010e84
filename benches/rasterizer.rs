use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastry::camera::viewport;
use rastry::math::{vec2, vec3, vec4, Vec2i, Vec3i, Vec4f};
use rastry::render::{BarycentricRasterizer, FrameBuffer, ScanlineRasterizer};
use rastry::shader::FlatShader;
use rastry::texture::Texture;

const BUFFER_WIDTH: usize = 800;
const BUFFER_HEIGHT: usize = 600;

fn create_buffer() -> Vec<u8> {
    vec![0u8; BUFFER_WIDTH * BUFFER_HEIGHT * 3]
}

fn checker_texels() -> Vec<u8> {
    let mut texels = Vec::with_capacity(64 * 64 * 3);
    for y in 0..64usize {
        for x in 0..64usize {
            let even = (x / 8 + y / 8) % 2 == 0;
            texels.extend_from_slice(if even { &[220, 220, 220] } else { &[40, 40, 40] });
        }
    }
    texels
}

// Screen-space triangles for the scanline path.
fn screen_triangles() -> [(&'static str, [Vec3i; 3]); 3] {
    [
        (
            "small",
            [vec3(100, 100, 0), vec3(120, 100, 0), vec3(110, 120, 0)],
        ),
        (
            "medium",
            [vec3(100, 100, 0), vec3(300, 100, 0), vec3(200, 300, 0)],
        ),
        (
            "large",
            [vec3(50, 50, 0), vec3(750, 100, 0), vec3(400, 550, 0)],
        ),
    ]
}

// The same triangles as clip-space positions for the barycentric path.
fn to_clip(pts: [Vec3i; 3]) -> [Vec4f; 3] {
    pts.map(|p| {
        vec4(
            2.0 * p.x() as f32 / BUFFER_WIDTH as f32 - 1.0,
            2.0 * p.y() as f32 / BUFFER_HEIGHT as f32 - 1.0,
            0.0,
            1.0,
        )
    })
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let barycentric = BarycentricRasterizer::new();
    let texels = checker_texels();
    let uvs: [Vec2i; 3] = [vec2(0, 0), vec2(63, 0), vec2(31, 63)];
    let screen = viewport(0.0, 0.0, BUFFER_WIDTH as f32, BUFFER_HEIGHT as f32);

    for (name, tri) in screen_triangles() {
        group.bench_with_input(BenchmarkId::new("scanline", name), &tri, |b, tri| {
            let mut buffer = create_buffer();
            let texture = Texture::new(&texels, 64, 64).unwrap();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_textured(&mut fb, black_box(*tri), uvs, 1.0, texture);
            });
        });

        let clip = to_clip(tri);
        group.bench_with_input(BenchmarkId::new("barycentric", name), &clip, |b, clip| {
            let mut buffer = create_buffer();
            let shader = FlatShader::new(*clip, [255, 0, 0]);
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                barycentric.draw(&mut fb, screen, black_box(*clip), &shader);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let barycentric = BarycentricRasterizer::new();
    let texels = checker_texels();
    let uvs: [Vec2i; 3] = [vec2(0, 0), vec2(63, 0), vec2(31, 63)];
    let screen = viewport(0.0, 0.0, BUFFER_WIDTH as f32, BUFFER_HEIGHT as f32);

    // A grid of small triangles
    let triangles: Vec<[Vec3i; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                [
                    vec3(x, y, 0),
                    vec3(x + 35, y, 0),
                    vec3(x + 17, y + 25, 0),
                ]
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let mut buffer = create_buffer();
        let texture = Texture::new(&texels, 64, 64).unwrap();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                scanline.fill_textured(&mut fb, black_box(*tri), uvs, 1.0, texture);
            }
        });
    });

    group.bench_function("barycentric_400_triangles", |b| {
        let mut buffer = create_buffer();
        let shaded: Vec<([Vec4f; 3], FlatShader)> = triangles
            .iter()
            .map(|tri| {
                let clip = to_clip(*tri);
                (clip, FlatShader::new(clip, [255, 0, 0]))
            })
            .collect();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            for (clip, shader) in &shaded {
                barycentric.draw(&mut fb, screen, black_box(*clip), shader);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
