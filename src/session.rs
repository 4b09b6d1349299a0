//! Per-frame pipeline orchestration.
//!
//! An `EmotionSession` owns exactly one smoother, at most one calibrator and
//! at most one completed baseline, used strictly sequentially in capture
//! order. The capture collaborator feeds it one optional landmark set per
//! frame; the persistence collaborator consumes the records it emits.

use crate::calibration::BaselineCalibrator;
use crate::classifier::{Emotion, EmotionClassifier};
use crate::config::Config;
use crate::constants::DEBUG_LOG_INTERVAL;
use crate::extraction::extract_signals;
use crate::landmarks::FaceLandmarks;
use crate::signals::Signals;
use crate::smoothing::SignalSmoother;
use crate::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting neutral-face frames for the baseline
    Calibrating,
    /// Steady-state classification
    Running,
}

/// Which threshold table the classifier consults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierMode {
    /// Fixed absolute thresholds (no baseline)
    Absolute,
    /// Baseline-relative delta thresholds
    Calibrated,
}

/// One processed frame's output, with both raw and smoothed signal values
/// so thresholds can be re-tuned from persisted sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub emotion: Emotion,
    pub raw: Signals,
    pub smoothed: Signals,
}

/// One classification session over a stream of landmark frames
pub struct EmotionSession {
    smoother: SignalSmoother,
    calibrator: Option<BaselineCalibrator>,
    baseline: Option<Signals>,
    classifier: EmotionClassifier,
    frames_processed: u64,
}

impl EmotionSession {
    /// Create a session from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let calibrator = if config.calibration.enabled {
            info!(
                "starting calibration phase: {} neutral-face frames",
                config.calibration.num_frames
            );
            Some(BaselineCalibrator::new(config.calibration.num_frames))
        } else {
            info!("calibration disabled, running in absolute mode");
            None
        };

        Ok(Self {
            smoother: SignalSmoother::new(config.smoothing.alpha),
            calibrator,
            baseline: None,
            classifier: EmotionClassifier::new(
                config.classifier.absolute,
                config.classifier.delta,
            ),
            frames_processed: 0,
        })
    }

    /// Process one frame. `None` landmarks means no face was detected: the
    /// whole pipeline is skipped for the frame, nothing is fed zeroes.
    ///
    /// During calibration, frames feed the calibrator and no record is
    /// emitted; the session transitions to the running phase on completion.
    ///
    /// # Errors
    ///
    /// Returns `Error::Landmark` if a consumed landmark index is missing
    /// from a provided set.
    pub fn process_frame(
        &mut self,
        landmarks: Option<&FaceLandmarks>,
    ) -> Result<Option<FrameRecord>> {
        let Some(landmarks) = landmarks else {
            debug!("no face in frame, skipping");
            return Ok(None);
        };

        let raw = extract_signals(landmarks)?;

        if let Some(calibrator) = &mut self.calibrator {
            calibrator.add_frame(&raw);
            if calibrator.is_complete() {
                let baseline = calibrator.compute_baseline()?;
                info!(
                    "calibration complete: ear_avg={:.5} mar={:.5} smile_coeff={:.5} \
                     mouth_width={:.5} brow_dist={:.5}",
                    baseline.ear_avg,
                    baseline.mar,
                    baseline.smile_coeff,
                    baseline.mouth_width,
                    baseline.brow_dist
                );
                self.baseline = Some(baseline);
                self.calibrator = None;
            }
            return Ok(None);
        }

        let smoothed = self.smoother.update(&raw);
        let emotion = self.classifier.classify(&smoothed, self.baseline.as_ref());

        self.frames_processed += 1;
        if self.frames_processed % DEBUG_LOG_INTERVAL == 0 {
            debug!(
                "[{}] EAR={:.3} MAR={:.3} Smile={:.4} MouthW={:.3} BrowD={:.4}",
                emotion,
                smoothed.ear_avg,
                smoothed.mar,
                smoothed.smile_coeff,
                smoothed.mouth_width,
                smoothed.brow_dist
            );
        }

        Ok(Some(FrameRecord {
            frame: self.frames_processed,
            emotion,
            raw,
            smoothed,
        }))
    }

    /// Force-end the calibration phase, e.g. when the capture collaborator
    /// decides the calibration window has elapsed. If the calibrator never
    /// completed, no baseline is produced and the session continues in
    /// absolute mode.
    pub fn finish_calibration(&mut self) {
        if let Some(calibrator) = self.calibrator.take() {
            match calibrator.compute_baseline() {
                Ok(baseline) => {
                    info!("calibration finished with a usable baseline");
                    self.baseline = Some(baseline);
                }
                Err(e) => {
                    warn!("no baseline produced ({e}), continuing in absolute mode");
                }
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.calibrator.is_some() {
            SessionPhase::Calibrating
        } else {
            SessionPhase::Running
        }
    }

    #[must_use]
    pub fn mode(&self) -> ClassifierMode {
        if self.baseline.is_some() {
            ClassifierMode::Calibrated
        } else {
            ClassifierMode::Absolute
        }
    }

    /// Calibration progress 0-100 while the calibration phase is active
    #[must_use]
    pub fn calibration_progress(&self) -> Option<u32> {
        self.calibrator.as_ref().map(BaselineCalibrator::get_progress)
    }

    /// The session baseline, once calibration has completed
    #[must_use]
    pub fn baseline(&self) -> Option<&Signals> {
        self.baseline.as_ref()
    }

    /// Number of records emitted so far
    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Smoothing alpha in effect for this session
    #[must_use]
    pub fn smoothing_alpha(&self) -> f64 {
        self.smoother.alpha()
    }
}
