//! Frame pacing for host render loops
//!
//! The host calls `tick` once per delivered animation frame. Only frames that
//! push the accumulator past the interval advance the world, which keeps the
//! simulation at a fixed visual cadence regardless of frame jitter.

/// Fixed-cadence gate in front of `World::step`
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Milliseconds between simulated frames
    interval: f64,
    accumulator: f64,
    previous: Option<f64>,
    /// Raw delta of the last frame that passed the gate
    last_delta: f64,
}

impl FrameClock {
    pub fn new(frames_per_second: f64) -> Self {
        let interval = 1000.0 / frames_per_second;
        Self {
            interval,
            // Primed so the first measured frame runs
            accumulator: interval,
            previous: None,
            last_delta: 0.0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }

    /// Feed a frame timestamp (ms). Returns the elapsed time since the
    /// previous frame when a simulation step is due.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let delta = now_ms - self.previous.unwrap_or(now_ms);
        self.previous = Some(now_ms);
        self.accumulator += delta;

        if self.accumulator > self.interval {
            self.accumulator = 0.0;
            self.last_delta = delta;
            Some(delta)
        } else {
            None
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(crate::consts::FRAMES_PER_SECOND)
    }
}
