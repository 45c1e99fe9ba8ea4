/// Seconds elapsed since the first rendered frame.
///
/// Fed with the browser's frame timestamps (milliseconds). The reported value
/// never goes backwards, even if a timestamp does.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms` and return elapsed seconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let secs = (timestamp_ms - origin) / 1000.0;
        // NaN compares false, so a bogus timestamp leaves the clock where it was.
        if secs > self.elapsed {
            self.elapsed = secs;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
