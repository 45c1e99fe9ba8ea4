/// Pixel dimensions of a drawing surface or of its laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The `iResolution` uniform value.
    pub fn as_resolution(self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

/// Returns the size the backing surface must take to match `display`, or
/// `None` when it already does.
pub fn resize_needed(surface: SurfaceSize, display: SurfaceSize) -> Option<SurfaceSize> {
    (surface != display).then_some(display)
}
