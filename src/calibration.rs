//! Personalized baseline calibration.
//!
//! Collects raw signal vectors over an initial window of frames and averages
//! them into the session's neutral-face baseline. The baseline converts
//! absolute thresholds into "how far from this individual's own neutral"
//! deltas in the classifier.

use crate::signals::Signals;
use crate::{Error, Result};
use log::debug;

/// Accumulates raw signal vectors until a target frame count is reached
#[derive(Debug, Clone)]
pub struct BaselineCalibrator {
    num_frames: usize,
    frames: Vec<Signals>,
}

impl BaselineCalibrator {
    /// Create a calibrator targeting `num_frames` collected frames
    #[must_use]
    pub fn new(num_frames: usize) -> Self {
        assert!(num_frames > 0, "Calibration frame count must be greater than 0");
        Self {
            num_frames,
            frames: Vec::with_capacity(num_frames),
        }
    }

    /// Append one raw signal vector; no-op once the target count is reached
    pub fn add_frame(&mut self, raw: &Signals) {
        if self.is_complete() {
            debug!("calibration already complete, ignoring frame");
            return;
        }
        self.frames.push(*raw);
    }

    /// Whether the target frame count has been collected
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames.len() >= self.num_frames
    }

    /// Collection progress as an integer percentage 0-100
    #[must_use]
    pub fn get_progress(&self) -> u32 {
        let percent = self.frames.len() * 100 / self.num_frames;
        percent.min(100) as u32
    }

    /// Number of frames collected so far
    #[must_use]
    pub fn frames_collected(&self) -> usize {
        self.frames.len()
    }

    /// Per-key arithmetic mean over the collected frames
    ///
    /// # Errors
    ///
    /// Returns `Error::Calibration` if no frames were collected or the target
    /// count has not been reached; callers treat this as "baseline
    /// unavailable" and continue in absolute-threshold mode.
    pub fn compute_baseline(&self) -> Result<Signals> {
        if self.frames.is_empty() {
            return Err(Error::Calibration(
                "no frames collected, baseline unavailable".to_string(),
            ));
        }
        if !self.is_complete() {
            return Err(Error::Calibration(format!(
                "calibration incomplete: {} of {} frames collected",
                self.frames.len(),
                self.num_frames
            )));
        }

        let sum = self
            .frames
            .iter()
            .fold(Signals::default(), |acc, frame| acc.zip_with(frame, |a, b| a + b));
        let n = self.frames.len() as f64;
        Ok(sum.map(|value| value / n))
    }
}
