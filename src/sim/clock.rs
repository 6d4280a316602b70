//! Fixed timestep accumulator
//!
//! Converts variable frame deltas into a whole number of simulation ticks.

#[derive(Debug, Clone, PartialEq)]
pub struct FixedStep {
    interval: f32,
    max_substeps: u32,
    /// Longest single frame delta credited to the accumulator
    max_frame_dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(interval: f32, max_substeps: u32, max_frame_dt: f32) -> Self {
        Self {
            interval,
            max_substeps,
            max_frame_dt,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed seconds; returns how many ticks are now due.
    ///
    /// At most `max_substeps` ticks are released per call. Time owed beyond
    /// that is dropped so a long stall cannot snowball.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(self.max_frame_dt);

        let mut steps = 0;
        while self.accumulator >= self.interval && steps < self.max_substeps {
            self.accumulator -= self.interval;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.interval);
        }
        steps
    }

    /// Unconsumed time (seconds)
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
