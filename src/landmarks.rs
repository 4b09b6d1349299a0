//! Facial landmark set and MediaPipe Face Mesh index constants.
//!
//! The landmark detector collaborator produces one set of 2D points per
//! frame, indexed by the MediaPipe Face Mesh topology (478 points with iris
//! refinement). Only the indices named below are consumed by feature
//! extraction; all of them must be addressable in a valid set.

use crate::constants::MIN_LANDMARK_COUNT;
use crate::{Error, Result};

/// Right eye ring: p1 (outer corner), p2/p3 (upper lid), p4 (inner corner),
/// p5/p6 (lower lid)
pub const RIGHT_EYE: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Left eye ring, same ordering mirrored
pub const LEFT_EYE: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// Upper inner lip center
pub const MOUTH_TOP: usize = 13;

/// Lower inner lip center
pub const MOUTH_BOTTOM: usize = 14;

/// Inner lip pair, left of center
pub const MOUTH_UPPER_INNER_LEFT: usize = 82;
pub const MOUTH_LOWER_INNER_LEFT: usize = 87;

/// Inner lip pair, right of center
pub const MOUTH_UPPER_INNER_RIGHT: usize = 312;
pub const MOUTH_LOWER_INNER_RIGHT: usize = 317;

/// Mouth corners
pub const MOUTH_LEFT_CORNER: usize = 61;
pub const MOUTH_RIGHT_CORNER: usize = 291;

/// Face bounding reference points
pub const FACE_LEFT: usize = 234;
pub const FACE_RIGHT: usize = 454;
pub const FACE_TOP: usize = 10;
pub const FACE_BOTTOM: usize = 152;

/// Mid-brow points and the upper-lid points directly beneath them,
/// used for the brow-to-eye distance signal
pub const RIGHT_BROW: usize = 105;
pub const RIGHT_BROW_LID: usize = 159;
pub const LEFT_BROW: usize = 334;
pub const LEFT_BROW_LID: usize = 386;

/// A 2D point in image coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One frame's facial landmark set, indexed by Face Mesh identity
#[derive(Debug, Clone)]
pub struct FaceLandmarks {
    points: Vec<Point2>,
}

impl FaceLandmarks {
    /// Create a landmark set from points already in pixel coordinates
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Create a landmark set from detector-normalized `[0, 1]` coordinates
    /// and the frame dimensions they refer to
    pub fn from_normalized<I>(coords: I, frame_width: f64, frame_height: f64) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = coords
            .into_iter()
            .map(|(x, y)| Point2::new(x * frame_width, y * frame_height))
            .collect();
        Self { points }
    }

    /// Number of points in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the set covers the full index range feature extraction reads
    #[must_use]
    pub fn has_required_landmarks(&self) -> bool {
        self.points.len() >= MIN_LANDMARK_COUNT
    }

    /// Look up a landmark by Face Mesh index
    ///
    /// # Errors
    ///
    /// Returns `Error::Landmark` if the index is not present in the set.
    /// The consumed index set is fixed, so this indicates a detector
    /// integration problem rather than a per-frame condition.
    pub fn get(&self, index: usize) -> Result<Point2> {
        self.points.get(index).copied().ok_or_else(|| {
            Error::Landmark(format!(
                "landmark index {} out of range (set has {} points)",
                index,
                self.points.len()
            ))
        })
    }
}
