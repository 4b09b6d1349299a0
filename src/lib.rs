//! Facial emotion recognition library for real-time landmark streams.
//!
//! This library derives a discrete emotional-state label from per-frame
//! facial landmark geometry:
//! 1. Geometric feature extraction into a normalized signal vector
//!    (eye aspect ratio, mouth aspect ratio, smile coefficient, mouth width,
//!    brow distance)
//! 2. Exponential temporal smoothing to suppress landmark jitter
//! 3. Optional per-individual baseline calibration over an initial window
//!    of neutral-face frames
//! 4. Deterministic rule-based classification, against absolute thresholds
//!    or against deviations from the calibrated baseline
//!
//! Camera capture, the landmark detector and record persistence are external
//! collaborators: the capture side supplies an optional [`landmarks::FaceLandmarks`]
//! per frame (absent = no face), and the persistence side consumes the
//! [`session::FrameRecord`]s the pipeline emits.
//!
//! # Examples
//!
//! ## Session pipeline
//!
//! ```no_run
//! use emotion_recognition::config::Config;
//! use emotion_recognition::landmarks::{FaceLandmarks, Point2};
//! use emotion_recognition::session::{EmotionSession, SessionPhase};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut session = EmotionSession::new(&config)?;
//!
//! loop {
//!     // One frame from the detector collaborator, in pixel coordinates
//!     let points: Vec<Point2> = vec![Point2::new(0.0, 0.0); 478];
//!     let landmarks = FaceLandmarks::new(points);
//!
//!     match session.process_frame(Some(&landmarks))? {
//!         Some(record) => {
//!             println!("{}: EAR {:.3}", record.emotion, record.smoothed.ear_avg);
//!         }
//!         None => {
//!             // Calibration frame or no face; progress is available for UI feedback
//!             if let Some(progress) = session.calibration_progress() {
//!                 println!("calibrating: {progress}%");
//!             }
//!         }
//!     }
//!
//!     if session.phase() == SessionPhase::Running {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Classifying directly
//!
//! ```
//! use emotion_recognition::classifier::{Emotion, EmotionClassifier};
//! use emotion_recognition::signals::Signals;
//!
//! let classifier = EmotionClassifier::default();
//! let signals = Signals {
//!     ear_avg: 0.35,
//!     mar: 0.55,
//!     ..Signals::default()
//! };
//!
//! // Absolute mode: no baseline
//! assert_eq!(classifier.classify(&signals, None), Emotion::Surprised);
//! ```

/// Facial landmark set and MediaPipe Face Mesh index constants
pub mod landmarks;

/// Signal vector types produced by feature extraction
pub mod signals;

/// Geometric feature extraction from facial landmarks
pub mod extraction;

/// Exponential temporal smoothing of signal vectors
pub mod smoothing;

/// Personalized baseline calibration
pub mod calibration;

/// Rule-based emotion classification
pub mod classifier;

/// Per-frame pipeline orchestration
pub mod session;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
