//! One repaint of the background, independent of WebGL.
//!
//! [`RenderLoop::frame`] performs the per-frame contract against a
//! [`FrameTarget`]; the browser binding implements the target on a WebGL2
//! context and the scheduler on `requestAnimationFrame`.

use crate::clock::FrameClock;
use crate::shader::QUAD_VERTEX_COUNT;
use crate::viewport::{resize_needed, SurfaceSize};

/// Values uploaded to the program for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
}

/// A drawing surface with a compiled, linked program.
pub trait FrameTarget {
    /// Size the element currently occupies in the layout.
    fn display_size(&self) -> SurfaceSize;
    /// Size of the backing pixel buffer.
    fn surface_size(&self) -> SurfaceSize;
    /// Resize the backing buffer and the GL viewport.
    fn resize_surface(&mut self, size: SurfaceSize);
    fn bind_program(&mut self);
    fn upload_uniforms(&mut self, uniforms: &FrameUniforms);
    fn draw_quad(&mut self, vertex_count: i32);
}

/// Requests the next display-refresh callback.
pub trait FrameScheduler {
    fn schedule_next(&mut self);
}

pub struct RenderLoop<T> {
    target: T,
    clock: FrameClock,
    frames: u64,
}

impl<T: FrameTarget> RenderLoop<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            clock: FrameClock::new(),
            frames: 0,
        }
    }

    /// Repaint once for the display refresh at `timestamp_ms`, then ask for
    /// the next one.
    pub fn frame<S: FrameScheduler>(&mut self, timestamp_ms: f64, scheduler: &mut S) -> FrameUniforms {
        if let Some(size) = resize_needed(self.target.surface_size(), self.target.display_size()) {
            log::debug!("resizing surface to {}x{}", size.width, size.height);
            self.target.resize_surface(size);
        }

        let uniforms = FrameUniforms {
            resolution: self.target.surface_size().as_resolution(),
            time: self.clock.tick(timestamp_ms) as f32,
        };

        self.target.bind_program();
        self.target.upload_uniforms(&uniforms);
        self.target.draw_quad(QUAD_VERTEX_COUNT);
        self.frames += 1;

        scheduler.schedule_next();
        uniforms
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}
