//! Rule-based emotion classification.
//!
//! A pure decision function over one smoothed signal vector, with two
//! structurally parallel modes: absolute thresholds when no baseline exists,
//! and per-individual delta thresholds once calibration has produced one.
//! Rules are evaluated top-down in a fixed priority order; the first match
//! wins and Neutral is the default.

use crate::signals::Signals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete emotional-state label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Surprised,
    Angry,
    Sad,
    Neutral,
}

impl Emotion {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Surprised => "Surprised",
            Emotion::Angry => "Angry",
            Emotion::Sad => "Sad",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold table for absolute mode (no baseline)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsoluteThresholds {
    /// EAR above this reads as widened eyes
    pub ear_high: f64,
    /// EAR below this reads as narrowed eyes
    pub ear_low: f64,
    /// MAR above this reads as a wide-open mouth
    pub mar_high: f64,
    /// MAR below this reads as a mostly closed mouth
    pub mar_moderate: f64,
    /// Minimum MAR for a smile to count as open-mouthed
    pub mar_low: f64,
    /// Smile coefficient above this reads as raised corners
    pub smile_high: f64,
    /// Smile coefficient below this reads as depressed corners
    pub smile_negative: f64,
    /// Mouth width above this reads as a stretched (smiling) mouth
    pub mouth_width_smile: f64,
    /// Brow distance below this reads as furrowed brows
    pub brow_dist_low: f64,
}

impl Default for AbsoluteThresholds {
    fn default() -> Self {
        Self {
            ear_high: 0.30,
            ear_low: 0.20,
            mar_high: 0.50,
            mar_moderate: 0.15,
            mar_low: 0.10,
            smile_high: 0.005,
            smile_negative: -0.005,
            mouth_width_smile: 0.45,
            brow_dist_low: 0.04,
        }
    }
}

/// Threshold table for delta mode (baseline present).
///
/// These are deviations from the individual's own calibrated neutral, not
/// the absolute table reused; each constant is tuned independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaThresholds {
    /// EAR delta above this reads as eye widening
    pub ear_widen: f64,
    /// EAR delta below this reads as eye narrowing
    pub ear_narrow: f64,
    /// MAR delta above this reads as mouth opening
    pub mar_open: f64,
    /// MAR delta below this reads as the mouth actively closing
    pub mar_floor: f64,
    /// MAR delta below this reads as a mouth that has not opened wide
    pub mar_closed: f64,
    /// Smile delta above this reads as corner raising
    pub smile_raise: f64,
    /// Smile delta below this reads as a clear frown
    pub smile_frown: f64,
    /// Smile delta below this reads as a mild corner drop
    pub smile_sad: f64,
    /// Mouth-width delta above this reads as mouth stretching
    pub mouth_width_smile: f64,
    /// Brow delta below this reads as furrowing
    pub brow_furrow: f64,
}

impl Default for DeltaThresholds {
    fn default() -> Self {
        Self {
            ear_widen: 0.04,
            ear_narrow: -0.04,
            mar_open: 0.25,
            mar_floor: -0.03,
            mar_closed: 0.05,
            smile_raise: 0.01,
            smile_frown: -0.008,
            smile_sad: -0.004,
            mouth_width_smile: 0.04,
            brow_furrow: -0.015,
        }
    }
}

/// Deterministic emotion classifier over smoothed signal vectors
#[derive(Debug, Clone, Default)]
pub struct EmotionClassifier {
    absolute: AbsoluteThresholds,
    delta: DeltaThresholds,
}

impl EmotionClassifier {
    #[must_use]
    pub fn new(absolute: AbsoluteThresholds, delta: DeltaThresholds) -> Self {
        Self { absolute, delta }
    }

    /// Classify one signal vector, in delta mode iff a baseline is given.
    /// Same inputs always produce the same label.
    #[must_use]
    pub fn classify(&self, signals: &Signals, baseline: Option<&Signals>) -> Emotion {
        match baseline {
            Some(base) => self.classify_delta(&signals.delta_from(base)),
            None => self.classify_absolute(signals),
        }
    }

    /// Absolute mode, priority order: Surprised, Happy, Angry, Sad.
    ///
    /// Angry accepts either of two evidence paths (brow furrow alone, or
    /// narrowed eyes with a closed mouth); Sad requires normal brows, so
    /// furrowed-brow frowns resolve as Angry.
    fn classify_absolute(&self, s: &Signals) -> Emotion {
        let t = &self.absolute;
        let rules = [
            (
                Emotion::Surprised,
                s.ear_avg > t.ear_high && s.mar > t.mar_high,
            ),
            (
                Emotion::Happy,
                s.smile_coeff > t.smile_high
                    && (s.mar >= t.mar_low || s.mouth_width > t.mouth_width_smile),
            ),
            (
                Emotion::Angry,
                s.smile_coeff < t.smile_high
                    && (s.brow_dist < t.brow_dist_low
                        || (s.ear_avg < t.ear_low && s.mar < t.mar_moderate)),
            ),
            (
                Emotion::Sad,
                s.smile_coeff < t.smile_negative
                    && s.ear_avg >= t.ear_low
                    && s.brow_dist >= t.brow_dist_low,
            ),
        ];
        first_match(&rules)
    }

    /// Delta mode: identical rule structure over `current - baseline`
    fn classify_delta(&self, d: &Signals) -> Emotion {
        let t = &self.delta;
        let rules = [
            (
                Emotion::Surprised,
                d.ear_avg > t.ear_widen && d.mar > t.mar_open,
            ),
            (
                Emotion::Happy,
                d.smile_coeff > t.smile_raise
                    && (d.mar >= t.mar_floor || d.mouth_width > t.mouth_width_smile),
            ),
            (
                Emotion::Angry,
                d.smile_coeff < t.smile_frown
                    && (d.brow_dist < t.brow_furrow
                        || (d.ear_avg < t.ear_narrow && d.mar < t.mar_closed)),
            ),
            (
                Emotion::Sad,
                d.smile_coeff < t.smile_sad
                    && d.ear_avg >= t.ear_narrow
                    && d.brow_dist >= t.brow_furrow,
            ),
        ];
        first_match(&rules)
    }

    #[must_use]
    pub fn absolute_thresholds(&self) -> &AbsoluteThresholds {
        &self.absolute
    }

    #[must_use]
    pub fn delta_thresholds(&self) -> &DeltaThresholds {
        &self.delta
    }
}

/// Top-down evaluation, first match wins, Neutral default
fn first_match(rules: &[(Emotion, bool)]) -> Emotion {
    rules
        .iter()
        .find(|(_, matched)| *matched)
        .map_or(Emotion::Neutral, |(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(ear: f64, mar: f64, smile: f64, mouth_width: f64, brow: f64) -> Signals {
        Signals {
            ear_avg: ear,
            ear_left: ear,
            ear_right: ear,
            mar,
            smile_coeff: smile,
            mouth_width,
            brow_dist: brow,
            ..Signals::default()
        }
    }

    fn classifier() -> EmotionClassifier {
        EmotionClassifier::default()
    }

    #[test]
    fn test_surprised_absolute() {
        // Wide eyes and wide-open mouth both exceed their high bars
        let s = signals(0.35, 0.55, 0.001, 0.3, 0.07);
        assert_eq!(classifier().classify(&s, None), Emotion::Surprised);
    }

    #[test]
    fn test_happy_absolute_via_mouth_width() {
        // Smile above threshold; mouth width carries the second condition
        let s = signals(0.28, 0.2, 0.01, 0.5, 0.07);
        assert_eq!(classifier().classify(&s, None), Emotion::Happy);
    }

    #[test]
    fn test_neutral_absolute_midpoints() {
        let s = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        assert_eq!(classifier().classify(&s, None), Emotion::Neutral);
    }

    #[test]
    fn test_angry_absolute_brow_path() {
        // Furrowed brows alone carry the rule, eyes stay moderate
        let s = signals(0.28, 0.12, 0.0, 0.35, 0.02);
        assert_eq!(classifier().classify(&s, None), Emotion::Angry);
    }

    #[test]
    fn test_angry_absolute_eye_mouth_path() {
        // Narrowed eyes with a closed mouth, brows normal
        let s = signals(0.15, 0.1, 0.0, 0.35, 0.06);
        assert_eq!(classifier().classify(&s, None), Emotion::Angry);
    }

    #[test]
    fn test_sad_absolute_requires_normal_brows() {
        let frown = signals(0.28, 0.12, -0.01, 0.35, 0.06);
        assert_eq!(classifier().classify(&frown, None), Emotion::Sad);

        // Same frown with furrowed brows must resolve as Angry, not Sad
        let furrowed = signals(0.28, 0.12, -0.01, 0.35, 0.02);
        assert_eq!(classifier().classify(&furrowed, None), Emotion::Angry);
    }

    #[test]
    fn test_surprised_shadows_happy() {
        // Satisfies both Surprised and Happy conditions; priority picks Surprised
        let s = signals(0.35, 0.55, 0.03, 0.5, 0.07);
        assert_eq!(classifier().classify(&s, None), Emotion::Surprised);
    }

    #[test]
    fn test_angry_delta_scenario() {
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        let current = signals(0.27, 0.1, -0.01, 0.34, 0.03);
        assert_eq!(
            classifier().classify(&current, Some(&baseline)),
            Emotion::Angry
        );
    }

    #[test]
    fn test_delta_neutral_at_baseline() {
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        assert_eq!(
            classifier().classify(&baseline, Some(&baseline)),
            Emotion::Neutral
        );
    }

    #[test]
    fn test_delta_surprised() {
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        let current = signals(0.34, 0.45, 0.0, 0.36, 0.07);
        assert_eq!(
            classifier().classify(&current, Some(&baseline)),
            Emotion::Surprised
        );
    }

    #[test]
    fn test_delta_happy() {
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        let current = signals(0.28, 0.13, 0.02, 0.40, 0.06);
        assert_eq!(
            classifier().classify(&current, Some(&baseline)),
            Emotion::Happy
        );
    }

    #[test]
    fn test_delta_sad_guarded_by_brows() {
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        // Mild corner drop, eyes and brows near baseline
        let sad = signals(0.27, 0.11, -0.006, 0.35, 0.055);
        assert_eq!(classifier().classify(&sad, Some(&baseline)), Emotion::Sad);
    }

    #[test]
    fn test_determinism() {
        let s = signals(0.31, 0.52, 0.001, 0.4, 0.05);
        let baseline = signals(0.28, 0.12, 0.0, 0.35, 0.06);
        let c = classifier();
        let first = c.classify(&s, Some(&baseline));
        for _ in 0..100 {
            assert_eq!(c.classify(&s, Some(&baseline)), first);
        }
    }

    #[test]
    fn test_custom_thresholds_change_decision() {
        let strict = EmotionClassifier::new(
            AbsoluteThresholds {
                smile_high: 0.05,
                ..AbsoluteThresholds::default()
            },
            DeltaThresholds::default(),
        );
        // Happy under defaults, but below the stricter smile bar it reads
        // as flat-mouthed (and normal brows keep it out of Angry's paths)
        let s = signals(0.28, 0.2, 0.01, 0.5, 0.07);
        assert_eq!(classifier().classify(&s, None), Emotion::Happy);
        assert_eq!(strict.classify(&s, None), Emotion::Neutral);
    }
}
