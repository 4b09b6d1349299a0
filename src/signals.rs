//! Signal vector types produced by feature extraction.
//!
//! The signal key set is fixed and known at compile time, so the vector is a
//! plain named-field struct rather than a map: an unknown or missing key is
//! unrepresentable instead of being a runtime error.

use serde::{Deserialize, Serialize};

/// Relative position of an eye centroid inside its bounding box,
/// `[0, 1]` on each axis. Diagnostic only; not consumed by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EyePosition {
    pub x: f64,
    pub y: f64,
}

/// One frame's signal vector: dimensionless ratios normalized by face
/// width/height so values are stable across face size and camera distance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Signals {
    /// Eye aspect ratio, left eye
    pub ear_left: f64,
    /// Eye aspect ratio, right eye
    pub ear_right: f64,
    /// Mean of left and right eye aspect ratios
    pub ear_avg: f64,
    /// Mouth aspect ratio
    pub mar: f64,
    /// Mouth corner distance over face width
    pub mouth_width: f64,
    /// Mouth corner elevation relative to the upper lip center;
    /// positive = smile, negative = frown
    pub smile_coeff: f64,
    /// Brow-to-eye vertical distance over face height; drops as brows furrow
    pub brow_dist: f64,
    pub eye_pos_left: EyePosition,
    pub eye_pos_right: EyePosition,
}

impl Signals {
    /// Combine two signal vectors field by field
    ///
    /// This is the one place the full field set is enumerated; smoothing,
    /// baseline averaging and delta computation are all built on it.
    #[must_use]
    pub fn zip_with<F>(&self, other: &Signals, mut f: F) -> Signals
    where
        F: FnMut(f64, f64) -> f64,
    {
        Signals {
            ear_left: f(self.ear_left, other.ear_left),
            ear_right: f(self.ear_right, other.ear_right),
            ear_avg: f(self.ear_avg, other.ear_avg),
            mar: f(self.mar, other.mar),
            mouth_width: f(self.mouth_width, other.mouth_width),
            smile_coeff: f(self.smile_coeff, other.smile_coeff),
            brow_dist: f(self.brow_dist, other.brow_dist),
            eye_pos_left: EyePosition {
                x: f(self.eye_pos_left.x, other.eye_pos_left.x),
                y: f(self.eye_pos_left.y, other.eye_pos_left.y),
            },
            eye_pos_right: EyePosition {
                x: f(self.eye_pos_right.x, other.eye_pos_right.x),
                y: f(self.eye_pos_right.y, other.eye_pos_right.y),
            },
        }
    }

    /// Transform every field of the vector
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Signals
    where
        F: FnMut(f64) -> f64,
    {
        self.zip_with(self, |a, _| f(a))
    }

    /// Per-field difference `self - baseline`
    #[must_use]
    pub fn delta_from(&self, baseline: &Signals) -> Signals {
        self.zip_with(baseline, |current, base| current - base)
    }

    /// Read one of the classifier-facing scalar signals
    #[must_use]
    pub fn scalar(&self, key: ScalarKey) -> f64 {
        match key {
            ScalarKey::EarAvg => self.ear_avg,
            ScalarKey::Mar => self.mar,
            ScalarKey::SmileCoeff => self.smile_coeff,
            ScalarKey::MouthWidth => self.mouth_width,
            ScalarKey::BrowDist => self.brow_dist,
        }
    }
}

/// The five scalar signals consumed by classification and persisted
/// per frame in the record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKey {
    EarAvg,
    Mar,
    SmileCoeff,
    MouthWidth,
    BrowDist,
}

impl ScalarKey {
    /// Record-schema order
    pub const ALL: [ScalarKey; 5] = [
        ScalarKey::EarAvg,
        ScalarKey::Mar,
        ScalarKey::SmileCoeff,
        ScalarKey::MouthWidth,
        ScalarKey::BrowDist,
    ];

    /// Column name used in persisted records
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKey::EarAvg => "ear_avg",
            ScalarKey::Mar => "mar",
            ScalarKey::SmileCoeff => "smile_coeff",
            ScalarKey::MouthWidth => "mouth_width",
            ScalarKey::BrowDist => "brow_dist",
        }
    }
}
