//! Running frame-rate statistics and total simulated runtime.
//!
//! Samples FPS over a fixed reporting interval, keeps the interval extrema,
//! and optionally stops the run once total runtime passes a cap (used for
//! fixed-duration benchmark runs).

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Metrics {
    pub total_frames: u64,
    pub total_runtime: f64, // seconds of accumulated dt
    pub min_fps: f64,
    pub max_fps: f64,
    fps_timer: f64, // elapsed time since the last FPS sample
    counted_frames: u64, // frames since the last FPS sample
    report_interval: f64, // seconds between FPS samples
    runtime_cap: Option<f64>, // stop the run once total_runtime passes this
}

impl Metrics {
    pub fn new(report_interval: f64, runtime_cap: Option<f64>) -> Result<Self, SimError> {
        if report_interval <= 0.0 {
            return Err(SimError::InvalidInterval(report_interval));
        }
        Ok(Self {
            total_frames: 0,
            total_runtime: 0.0,
            min_fps: f64::INFINITY,
            max_fps: 0.0,
            fps_timer: 0.0,
            counted_frames: 0,
            report_interval,
            runtime_cap: runtime_cap.filter(|c| *c > 0.0),
        })
    }

    /// Account one tick of `dt` seconds.
    ///
    /// Returns `Some(fps)` when this tick closed a reporting interval, `None`
    /// otherwise. The FPS sample is only computed when the interval actually
    /// accumulated time, so a burst of zero-dt ticks cannot divide by zero.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        self.total_frames += 1;
        self.counted_frames += 1;
        self.total_runtime += dt;
        self.fps_timer += dt;

        if self.fps_timer >= self.report_interval && self.fps_timer > 0.0 {
            let fps = self.counted_frames as f64 / self.fps_timer;
            self.min_fps = self.min_fps.min(fps);
            self.max_fps = self.max_fps.max(fps);
            self.fps_timer = 0.0;
            self.counted_frames = 0;
            Some(fps)
        } else {
            None
        }
    }

    /// Whether a runtime cap was configured for this run.
    pub fn has_cap(&self) -> bool {
        self.runtime_cap.is_some()
    }

    /// Whether the configured runtime cap (if any) has been exceeded.
    pub fn cap_exceeded(&self) -> bool {
        match self.runtime_cap {
            Some(cap) => self.total_runtime > cap,
            None => false,
        }
    }

    /// End-of-run summary with the derived figures.
    pub fn report(&self) -> MetricsReport {
        // Zero ticks means there is no meaningful average; report NaN rather
        // than crashing.
        let average_fps = if self.total_runtime > 0.0 {
            self.total_frames as f64 / self.total_runtime
        } else {
            f64::NAN
        };
        // No interval ever closed: extrema were never sampled.
        let (min_fps, max_fps) = if self.max_fps > 0.0 {
            (self.min_fps, self.max_fps)
        } else {
            (f64::NAN, f64::NAN)
        };
        MetricsReport {
            total_frames: self.total_frames,
            total_runtime: self.total_runtime,
            min_fps,
            max_fps,
            average_fps,
            fps_variability: max_fps - min_fps,
        }
    }
}

/// Derived metrics read at teardown.
#[derive(Debug, Clone, Copy)]
pub struct MetricsReport {
    pub total_frames: u64,
    pub total_runtime: f64,
    pub min_fps: f64,
    pub max_fps: f64,
    pub average_fps: f64,
    pub fps_variability: f64,
}

impl std::fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "frames:     {}", self.total_frames)?;
        writeln!(f, "runtime:    {:.3} s", self.total_runtime)?;
        writeln!(f, "avg fps:    {:.1}", self.average_fps)?;
        writeln!(f, "min fps:    {:.1}", self.min_fps)?;
        writeln!(f, "max fps:    {:.1}", self.max_fps)?;
        write!(f, "fps spread: {:.1}", self.fps_variability)
    }
}
