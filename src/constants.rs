//! Constants used throughout the application

/// Number of points in the MediaPipe Face Mesh topology (with iris refinement)
pub const FACE_MESH_LANDMARK_COUNT: usize = 478;

/// Minimum number of landmarks required for feature extraction
pub const MIN_LANDMARK_COUNT: usize = 468;

/// Default exponential smoothing alpha
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.3;

/// Default number of frames collected during baseline calibration
/// (roughly three seconds at 30 fps)
pub const DEFAULT_CALIBRATION_FRAMES: usize = 90;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;

/// Interval (in processed frames) between periodic debug log lines
pub const DEBUG_LOG_INTERVAL: u64 = 30;

/// Smoothing alpha bounds
pub const SMOOTHING_ALPHA_MIN: f64 = 0.0;
pub const SMOOTHING_ALPHA_MAX: f64 = 1.0;

/// Relative eye position reported for a degenerate (zero-area) eye box
pub const DEGENERATE_EYE_POSITION: f64 = 0.5;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
