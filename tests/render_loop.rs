use crt_homepage::clock::FrameClock;
use crt_homepage::frame::{FrameScheduler, FrameTarget, FrameUniforms, RenderLoop};
use crt_homepage::shader::QUAD_VERTEX_COUNT;
use crt_homepage::viewport::{resize_needed, SurfaceSize};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Resize(SurfaceSize),
    Bind,
    Upload(FrameUniforms),
    Draw(i32),
}

struct RecordingTarget {
    display: SurfaceSize,
    surface: SurfaceSize,
    calls: Vec<Call>,
}

impl RecordingTarget {
    fn new(display: SurfaceSize) -> Self {
        // A fresh canvas is 300x150 until told otherwise.
        Self {
            display,
            surface: SurfaceSize::new(300, 150),
            calls: Vec::new(),
        }
    }
}

impl FrameTarget for RecordingTarget {
    fn display_size(&self) -> SurfaceSize {
        self.display
    }

    fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    fn resize_surface(&mut self, size: SurfaceSize) {
        self.surface = size;
        self.calls.push(Call::Resize(size));
    }

    fn bind_program(&mut self) {
        self.calls.push(Call::Bind);
    }

    fn upload_uniforms(&mut self, uniforms: &FrameUniforms) {
        self.calls.push(Call::Upload(*uniforms));
    }

    fn draw_quad(&mut self, vertex_count: i32) {
        self.calls.push(Call::Draw(vertex_count));
    }
}

#[derive(Default)]
struct CountingScheduler(u32);

impl FrameScheduler for CountingScheduler {
    fn schedule_next(&mut self) {
        self.0 += 1;
    }
}

#[test]
fn first_frame_resizes_then_draws_and_reschedules() {
    let mut lp = RenderLoop::new(RecordingTarget::new(SurfaceSize::new(1920, 1080)));
    let mut sched = CountingScheduler::default();

    let uniforms = lp.frame(5000.0, &mut sched);

    assert_eq!(uniforms.resolution, [1920.0, 1080.0]);
    assert_eq!(uniforms.time, 0.0);
    assert_eq!(
        lp.target().calls,
        vec![
            Call::Resize(SurfaceSize::new(1920, 1080)),
            Call::Bind,
            Call::Upload(uniforms),
            Call::Draw(6),
        ]
    );
    assert_eq!(sched.0, 1);
    assert_eq!(lp.frames(), 1);
}

#[test]
fn surface_tracks_display_across_resizes() {
    let mut lp = RenderLoop::new(RecordingTarget::new(SurfaceSize::new(800, 600)));
    let mut sched = CountingScheduler::default();

    let sizes = [
        SurfaceSize::new(800, 600),
        SurfaceSize::new(1, 1),
        SurfaceSize::new(3840, 2160),
        SurfaceSize::new(390, 844),
        SurfaceSize::new(0, 0),
    ];
    for (i, size) in sizes.iter().enumerate() {
        lp.target_mut().display = *size;
        let uniforms = lp.frame(i as f64 * 16.0, &mut sched);
        assert_eq!(lp.target().surface, *size);
        assert_eq!(uniforms.resolution, size.as_resolution());
    }
}

#[test]
fn unchanged_layout_does_not_resize() {
    let mut lp = RenderLoop::new(RecordingTarget::new(SurfaceSize::new(640, 480)));
    let mut sched = CountingScheduler::default();
    lp.frame(0.0, &mut sched);
    lp.target_mut().calls.clear();

    lp.frame(16.7, &mut sched);

    assert!(!lp
        .target()
        .calls
        .iter()
        .any(|c| matches!(c, Call::Resize(_))));
    assert_eq!(lp.target().calls.last(), Some(&Call::Draw(QUAD_VERTEX_COUNT)));
    assert_eq!(sched.0, 2);
}

#[test]
fn elapsed_time_never_decreases() {
    let mut lp = RenderLoop::new(RecordingTarget::new(SurfaceSize::new(10, 10)));
    let mut sched = CountingScheduler::default();

    // Includes a timestamp that jumps backwards and a NaN.
    let stamps = [1000.0, 1016.0, 1033.0, 1020.0, f64::NAN, 2000.0, 2000.0];
    let mut last = f32::MIN;
    for ts in stamps {
        let t = lp.frame(ts, &mut sched).time;
        assert!(t >= last, "time went backwards: {} after {}", t, last);
        last = t;
    }
    assert!((last - 1.0).abs() < 1e-6);
}

#[test]
fn clock_measures_seconds_from_first_tick() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(250.0), 0.0);
    assert!((clock.tick(1750.0) - 1.5).abs() < 1e-12);
    assert!((clock.elapsed() - 1.5).abs() < 1e-12);
}

#[test]
fn resize_needed_only_on_mismatch() {
    let a = SurfaceSize::new(100, 50);
    assert_eq!(resize_needed(a, a), None);
    assert_eq!(resize_needed(a, SurfaceSize::new(100, 51)), Some(SurfaceSize::new(100, 51)));
}
