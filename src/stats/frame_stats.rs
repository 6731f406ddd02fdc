/// Frame-rate counter over fixed time windows
#[derive(Debug, Clone)]
pub struct FrameStats {
    /// Window length in seconds
    window: f64,
    window_start: Option<f64>,
    last_sample: Option<f64>,
    frames_in_window: u32,
    total_frames: u64,
    fps: f32,
    frame_ms: f32,
    min_fps: Option<f32>,
    max_fps: Option<f32>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FrameStats {
    pub fn new(window_seconds: f64) -> Self {
        Self {
            window: window_seconds,
            window_start: None,
            last_sample: None,
            frames_in_window: 0,
            total_frames: 0,
            fps: 0.0,
            frame_ms: 0.0,
            min_fps: None,
            max_fps: None,
        }
    }

    /// Record a frame presented at `now` seconds.
    ///
    /// The first sample only sets the origin and samples going back in time
    /// are dropped. Returns true when a window closed and `fps` changed.
    pub fn record(&mut self, now: f64) -> bool {
        let (Some(start), Some(last)) = (self.window_start, self.last_sample) else {
            self.window_start = Some(now);
            self.last_sample = Some(now);
            return false;
        };
        if now < last {
            return false;
        }

        self.frame_ms = ((now - last) * 1000.0) as f32;
        self.last_sample = Some(now);
        self.frames_in_window += 1;
        self.total_frames += 1;

        let span = now - start;
        if span < self.window {
            return false;
        }

        let fps = (f64::from(self.frames_in_window) / span) as f32;
        self.fps = fps;
        self.min_fps = Some(self.min_fps.map_or(fps, |m| m.min(fps)));
        self.max_fps = Some(self.max_fps.map_or(fps, |m| m.max(fps)));
        self.window_start = Some(now);
        self.frames_in_window = 0;
        true
    }

    /// Frames per second over the last closed window
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Duration of the most recent frame in milliseconds
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    pub fn min_fps(&self) -> Option<f32> {
        self.min_fps
    }

    pub fn max_fps(&self) -> Option<f32> {
        self.max_fps
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// One-line text for the overlay
    pub fn summary(&self) -> String {
        match (self.min_fps, self.max_fps) {
            (Some(min), Some(max)) => format!(
                "{:.0} FPS ({:.0}-{:.0}) {:.1} ms",
                self.fps, min, max, self.frame_ms
            ),
            _ => format!("-- FPS {:.1} ms", self.frame_ms),
        }
    }
}
