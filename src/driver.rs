//! Fixed-cadence frame driver
//!
//! Converts wall-clock deltas into whole `Scene::advance` calls with a
//! constant sample interval and consecutive frame numbers starting at 0.

use crate::consts::MAX_SUBSTEPS;
use crate::sim::Scene;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    sample_time: f32,
    accumulator: f32,
    next_frame: u64,
    max_substeps: u32,
}

impl FixedStepDriver {
    pub fn new(sample_time: f32) -> Self {
        Self {
            sample_time,
            accumulator: 0.0,
            next_frame: 0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    /// Feed `elapsed` seconds of wall time and run as many frames as fit.
    ///
    /// Returns the number of frames advanced. Time beyond `max_substeps`
    /// frames is dropped rather than carried over.
    pub fn pump<S: Surface>(&mut self, scene: &mut Scene<S>, elapsed: f32) -> u32 {
        self.pump_until(scene, elapsed, u64::MAX, |_| {})
    }

    /// Like [`pump`](Self::pump), but never advances to `end_frame` or beyond
    /// and calls `on_frame` after every single frame.
    pub fn pump_until<S: Surface>(
        &mut self,
        scene: &mut Scene<S>,
        elapsed: f32,
        end_frame: u64,
        mut on_frame: impl FnMut(&Scene<S>),
    ) -> u32 {
        self.accumulator += elapsed.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= self.sample_time
            && substeps < self.max_substeps
            && self.next_frame < end_frame
        {
            self.step(scene);
            on_frame(scene);
            self.accumulator -= self.sample_time;
            substeps += 1;
        }

        if self.next_frame < end_frame && self.accumulator >= self.sample_time {
            log::warn!(
                "Driver fell behind, dropping {:.3}s of wall time",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Advance exactly one frame regardless of accumulated time
    pub fn step<S: Surface>(&mut self, scene: &mut Scene<S>) {
        scene.advance(self.next_frame, self.sample_time);
        self.next_frame += 1;
    }

    pub fn sample_time(&self) -> f32 {
        self.sample_time
    }

    /// Frame number the next advance will receive
    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }
}
