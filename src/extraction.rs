//! Geometric feature extraction from facial landmarks.
//!
//! Pure arithmetic over one frame's landmark set. Every signal is a
//! dimensionless ratio; degenerate geometry (a zero-length normalization
//! denominator from coincident points) yields 0.0 for the affected signal
//! instead of failing the whole vector.

use crate::constants::{DEGENERATE_EYE_POSITION, EPSILON};
use crate::landmarks::{
    FaceLandmarks, FACE_BOTTOM, FACE_LEFT, FACE_RIGHT, FACE_TOP, LEFT_BROW, LEFT_BROW_LID,
    LEFT_EYE, MOUTH_BOTTOM, MOUTH_LEFT_CORNER, MOUTH_LOWER_INNER_LEFT, MOUTH_LOWER_INNER_RIGHT,
    MOUTH_RIGHT_CORNER, MOUTH_TOP, MOUTH_UPPER_INNER_LEFT, MOUTH_UPPER_INNER_RIGHT, RIGHT_BROW,
    RIGHT_BROW_LID, RIGHT_EYE,
};
use crate::signals::{EyePosition, Signals};
use crate::Result;

/// Compute the full signal vector for one frame
///
/// # Errors
///
/// Returns `Error::Landmark` if the set does not cover a consumed index.
/// Degenerate geometry is not an error; the affected signal becomes 0.0.
pub fn extract_signals(landmarks: &FaceLandmarks) -> Result<Signals> {
    let ear_right = eye_aspect_ratio(landmarks, &RIGHT_EYE)?;
    let ear_left = eye_aspect_ratio(landmarks, &LEFT_EYE)?;

    Ok(Signals {
        ear_left,
        ear_right,
        ear_avg: (ear_left + ear_right) / 2.0,
        mar: mouth_aspect_ratio(landmarks)?,
        mouth_width: mouth_width(landmarks)?,
        smile_coeff: smile_coefficient(landmarks)?,
        brow_dist: brow_distance(landmarks)?,
        eye_pos_left: eye_position(landmarks, &LEFT_EYE)?,
        eye_pos_right: eye_position(landmarks, &RIGHT_EYE)?,
    })
}

/// EAR = (|p2-p6| + |p3-p5|) / (2 * |p1-p4|)
fn eye_aspect_ratio(landmarks: &FaceLandmarks, eye: &[usize; 6]) -> Result<f64> {
    let p1 = landmarks.get(eye[0])?;
    let p2 = landmarks.get(eye[1])?;
    let p3 = landmarks.get(eye[2])?;
    let p4 = landmarks.get(eye[3])?;
    let p5 = landmarks.get(eye[4])?;
    let p6 = landmarks.get(eye[5])?;

    let horizontal = p1.distance(&p4);
    if horizontal < EPSILON {
        return Ok(0.0);
    }
    Ok((p2.distance(&p6) + p3.distance(&p5)) / (2.0 * horizontal))
}

/// Three inner-lip vertical distances over the corner-to-corner width, averaged
fn mouth_aspect_ratio(landmarks: &FaceLandmarks) -> Result<f64> {
    let vertical_a = landmarks
        .get(MOUTH_TOP)?
        .distance(&landmarks.get(MOUTH_BOTTOM)?);
    let vertical_b = landmarks
        .get(MOUTH_UPPER_INNER_LEFT)?
        .distance(&landmarks.get(MOUTH_LOWER_INNER_LEFT)?);
    let vertical_c = landmarks
        .get(MOUTH_UPPER_INNER_RIGHT)?
        .distance(&landmarks.get(MOUTH_LOWER_INNER_RIGHT)?);
    let horizontal = landmarks
        .get(MOUTH_LEFT_CORNER)?
        .distance(&landmarks.get(MOUTH_RIGHT_CORNER)?);

    if horizontal < EPSILON {
        return Ok(0.0);
    }
    Ok((vertical_a + vertical_b + vertical_c) / (3.0 * horizontal))
}

/// Mouth corner distance over face bounding width
fn mouth_width(landmarks: &FaceLandmarks) -> Result<f64> {
    let mouth_w = landmarks
        .get(MOUTH_LEFT_CORNER)?
        .distance(&landmarks.get(MOUTH_RIGHT_CORNER)?);
    let face_w = landmarks.get(FACE_LEFT)?.distance(&landmarks.get(FACE_RIGHT)?);

    if face_w < EPSILON {
        return Ok(0.0);
    }
    Ok(mouth_w / face_w)
}

/// Mouth corner elevation relative to the upper lip center, over face height.
/// Image y grows downward, so corners above the center give a positive value.
fn smile_coefficient(landmarks: &FaceLandmarks) -> Result<f64> {
    let corner_avg_y =
        (landmarks.get(MOUTH_LEFT_CORNER)?.y + landmarks.get(MOUTH_RIGHT_CORNER)?.y) / 2.0;
    let center_y = landmarks.get(MOUTH_TOP)?.y;
    let face_h = landmarks.get(FACE_TOP)?.distance(&landmarks.get(FACE_BOTTOM)?);

    if face_h < EPSILON {
        return Ok(0.0);
    }
    Ok((center_y - corner_avg_y) / face_h)
}

/// Mid-brow to upper-lid vertical distance over face height, averaged over
/// both sides. Structured like EAR: fixed per-side point pairs, then the mean.
fn brow_distance(landmarks: &FaceLandmarks) -> Result<f64> {
    let right = (landmarks.get(RIGHT_BROW_LID)?.y - landmarks.get(RIGHT_BROW)?.y).abs();
    let left = (landmarks.get(LEFT_BROW_LID)?.y - landmarks.get(LEFT_BROW)?.y).abs();
    let face_h = landmarks.get(FACE_TOP)?.distance(&landmarks.get(FACE_BOTTOM)?);

    if face_h < EPSILON {
        return Ok(0.0);
    }
    Ok((right + left) / (2.0 * face_h))
}

/// Eye centroid position relative to the eye bounding box, `[0, 1]` per axis;
/// 0.5 on a degenerate (zero-extent) axis
fn eye_position(landmarks: &FaceLandmarks, eye: &[usize; 6]) -> Result<EyePosition> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;

    for &index in eye {
        let p = landmarks.get(index)?;
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
        sum_x += p.x;
        sum_y += p.y;
    }

    let n = eye.len() as f64;
    let center_x = sum_x / n;
    let center_y = sum_y / n;
    let width = max_x - min_x;
    let height = max_y - min_y;

    Ok(EyePosition {
        x: if width < EPSILON {
            DEGENERATE_EYE_POSITION
        } else {
            (center_x - min_x) / width
        },
        y: if height < EPSILON {
            DEGENERATE_EYE_POSITION
        } else {
            (center_y - min_y) / height
        },
    })
}
