//! Helper functions and utilities for tests
//!
//! Builds synthetic landmark sets with known geometry so expected signal
//! values can be stated exactly. The base face is 640x480 pixel coordinates
//! with a 240x240 face bounding box; the neutral parameters land on
//! EAR 0.28, MAR 0.12, mouth width 0.35, smile 0.0, brow distance 0.06.

use emotion_recognition::constants::FACE_MESH_LANDMARK_COUNT;
use emotion_recognition::landmarks::{
    FaceLandmarks, Point2, FACE_BOTTOM, FACE_LEFT, FACE_RIGHT, FACE_TOP, LEFT_BROW, LEFT_BROW_LID,
    LEFT_EYE, MOUTH_BOTTOM, MOUTH_LEFT_CORNER, MOUTH_LOWER_INNER_LEFT, MOUTH_LOWER_INNER_RIGHT,
    MOUTH_RIGHT_CORNER, MOUTH_TOP, MOUTH_UPPER_INNER_LEFT, MOUTH_UPPER_INNER_RIGHT, RIGHT_BROW,
    RIGHT_BROW_LID, RIGHT_EYE,
};

/// Geometry knobs for the synthetic face, all in pixels
#[derive(Debug, Clone, Copy)]
pub struct FaceParams {
    /// Vertical gap between upper and lower lid points
    pub eye_open: f64,
    /// Vertical gap between the inner-lip point pairs
    pub mouth_open: f64,
    /// How far the mouth corners sit above the upper lip center
    /// (negative = depressed corners)
    pub smile_raise: f64,
    /// Vertical gap between mid-brow and the lid point beneath it
    pub brow_gap: f64,
    /// Half the corner-to-corner mouth width
    pub mouth_half_width: f64,
}

impl Default for FaceParams {
    fn default() -> Self {
        Self {
            eye_open: 11.2,       // EAR = 11.2 / 40 = 0.28
            mouth_open: 10.08,    // MAR = 10.08 / 84 = 0.12
            smile_raise: 0.0,     // smile = 0.0
            brow_gap: 14.4,       // brow distance = 14.4 / 240 = 0.06
            mouth_half_width: 42.0, // mouth width = 84 / 240 = 0.35
        }
    }
}

/// Build a full-size landmark set from the given geometry
pub fn face_with(params: &FaceParams) -> FaceLandmarks {
    let mut points = vec![Point2::default(); FACE_MESH_LANDMARK_COUNT];
    let mut set = |index: usize, x: f64, y: f64| {
        points[index] = Point2::new(x, y);
    };

    // Face bounding box: width 240, height 240
    set(FACE_LEFT, 200.0, 240.0);
    set(FACE_RIGHT, 440.0, 240.0);
    set(FACE_TOP, 320.0, 120.0);
    set(FACE_BOTTOM, 320.0, 360.0);

    // Eyes: horizontal span 40, lids at +/- eye_open/2 around y = 200
    let upper = 200.0 - params.eye_open / 2.0;
    let lower = 200.0 + params.eye_open / 2.0;

    set(RIGHT_EYE[0], 250.0, 200.0);
    set(RIGHT_EYE[1], 260.0, upper);
    set(RIGHT_EYE[2], 280.0, upper);
    set(RIGHT_EYE[3], 290.0, 200.0);
    set(RIGHT_EYE[4], 280.0, lower);
    set(RIGHT_EYE[5], 260.0, lower);

    set(LEFT_EYE[0], 350.0, 200.0);
    set(LEFT_EYE[1], 360.0, upper);
    set(LEFT_EYE[2], 380.0, upper);
    set(LEFT_EYE[3], 390.0, 200.0);
    set(LEFT_EYE[4], 380.0, lower);
    set(LEFT_EYE[5], 360.0, lower);

    // Brows sit brow_gap above the upper lid
    set(RIGHT_BROW, 270.0, upper - params.brow_gap);
    set(RIGHT_BROW_LID, 270.0, upper);
    set(LEFT_BROW, 370.0, upper - params.brow_gap);
    set(LEFT_BROW_LID, 370.0, upper);

    // Mouth: upper lip center at y = 295, corners raised by smile_raise
    let lip_top = 295.0;
    let corner_y = lip_top - params.smile_raise;
    set(MOUTH_LEFT_CORNER, 320.0 - params.mouth_half_width, corner_y);
    set(MOUTH_RIGHT_CORNER, 320.0 + params.mouth_half_width, corner_y);
    set(MOUTH_TOP, 320.0, lip_top);
    set(MOUTH_BOTTOM, 320.0, lip_top + params.mouth_open);
    set(MOUTH_UPPER_INNER_LEFT, 300.0, lip_top + 0.5);
    set(MOUTH_LOWER_INNER_LEFT, 300.0, lip_top + 0.5 + params.mouth_open);
    set(MOUTH_UPPER_INNER_RIGHT, 340.0, lip_top + 0.5);
    set(MOUTH_LOWER_INNER_RIGHT, 340.0, lip_top + 0.5 + params.mouth_open);

    FaceLandmarks::new(points)
}

/// Neutral face: EAR 0.28, MAR 0.12, mouth width 0.35, smile 0.0, brow 0.06
pub fn neutral_face() -> FaceLandmarks {
    face_with(&FaceParams::default())
}

/// Raised corners and a stretched mouth: smile 0.02, mouth width ~0.467
pub fn smiling_face() -> FaceLandmarks {
    face_with(&FaceParams {
        smile_raise: 4.8,
        mouth_half_width: 56.0,
        ..FaceParams::default()
    })
}

/// Wide eyes and a wide-open mouth: EAR 0.35, MAR 0.55
pub fn surprised_face() -> FaceLandmarks {
    face_with(&FaceParams {
        eye_open: 14.0,
        mouth_open: 46.2,
        ..FaceParams::default()
    })
}

/// Depressed corners, brows normal: smile -0.02, brow 0.06
pub fn frowning_face() -> FaceLandmarks {
    face_with(&FaceParams {
        smile_raise: -4.8,
        ..FaceParams::default()
    })
}

/// Depressed corners with furrowed brows: smile -0.02, brow 0.03
pub fn furrowed_face() -> FaceLandmarks {
    face_with(&FaceParams {
        smile_raise: -4.8,
        brow_gap: 7.2,
        ..FaceParams::default()
    })
}
