//! Demo host driver.
//!
//! Owns everything the rendering core does not: the pixel buffer allocation,
//! an SDL2 window, and the per-frame loop. Rendering happens at a reduced
//! resolution and the small target is upscaled to the window with
//! nearest-neighbor filtering.

use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use rastry::math::vec3;
use rastry::{FrameBuffer, Model, RenderConfig, Renderer};

const UPSCALE: u32 = 4;
const BACKGROUND: [u8; 3] = [12, 12, 16];

fn main() -> Result<(), String> {
    let config = RenderConfig::default();
    let (w, h) = (config.width, config.height);
    let mut renderer = Renderer::new(config);
    let model = Model::checker_cube();
    let mut pixels = vec![0u8; w * h * 3];

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    // Replicate rendered pixels into k x k blocks rather than smoothing them.
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "nearest");

    let window = video_subsystem
        .window("rastry", w as u32 * UPSCALE, h as u32 * UPSCALE)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB24, w as u32, h as u32)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let start = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        // Orbit the eye around the model; the camera matrices are rebuilt
        // from these vectors every frame.
        let angle = start.elapsed().as_secs_f32() * 0.6;
        renderer.config_mut().eye = vec3(3.0 * angle.sin(), 1.5, 3.0 * angle.cos());

        let mut fb = FrameBuffer::new(&mut pixels, w, h);
        fb.clear(BACKGROUND);
        renderer.render(&model, &mut fb);

        texture
            .update(None, &pixels, w * 3)
            .map_err(|e| e.to_string())?;
        canvas.clear();
        canvas.copy(&texture, None, None)?;
        canvas.present();
    }

    Ok(())
}
