//! Temporal smoothing of per-frame signal vectors.
//!
//! One exponential moving average per signal key, sharing a single alpha.
//! Smaller alpha means heavier smoothing and more lag.

use crate::signals::Signals;

/// Exponential smoother over the full signal vector
#[derive(Debug, Clone)]
pub struct SignalSmoother {
    alpha: f64,
    state: Option<Signals>,
}

impl SignalSmoother {
    /// Create a smoother with the given blend factor
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, state: None }
    }

    /// Blend one raw signal vector into the running state and return the
    /// post-update state by value.
    ///
    /// The first update initializes the state to the raw input unchanged;
    /// afterwards every key follows `alpha * raw + (1 - alpha) * state`.
    pub fn update(&mut self, raw: &Signals) -> Signals {
        let alpha = self.alpha;
        let smoothed = match &self.state {
            Some(state) => raw.zip_with(state, |r, s| alpha * r + (1.0 - alpha) * s),
            None => *raw,
        };
        self.state = Some(smoothed);
        smoothed
    }

    /// Clear the running state; the next update passes through unchanged
    pub fn reset(&mut self) {
        self.state = None;
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current state, if at least one update has been applied
    #[must_use]
    pub fn state(&self) -> Option<Signals> {
        self.state
    }
}
