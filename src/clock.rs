//! Time sources for the animation loop

// WASM compat: web_time::Instant, not std::time::Instant
use web_time::Instant;

/// Supplies seconds elapsed since the animation loop began
pub trait Clock {
    fn elapsed_seconds(&mut self) -> f64;
}

/// Wall clock started at construction
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for InstantClock {
    fn elapsed_seconds(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock fed by the host, e.g. with the `requestAnimationFrame` timestamp
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
    /// First host timestamp seen by `sync_millis`
    origin_millis: Option<f64>,
}

impl ManualClock {
    pub fn set(&mut self, seconds: f64) {
        self.now = seconds;
    }

    /// Set from a timestamp in milliseconds
    pub fn set_millis(&mut self, millis: f64) {
        self.now = millis / 1000.0;
    }

    /// Follow a host timestamp that does not start at zero, such as the
    /// `requestAnimationFrame` time since page load. The first call is time zero.
    pub fn sync_millis(&mut self, timestamp_millis: f64) {
        let origin = *self.origin_millis.get_or_insert(timestamp_millis);
        self.set_millis(timestamp_millis - origin);
    }

    pub fn advance(&mut self, dt: f64) {
        self.now += dt;
    }
}

impl Clock for ManualClock {
    fn elapsed_seconds(&mut self) -> f64 {
        self.now
    }
}
