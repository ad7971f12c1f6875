// src/config/constants.rs
//! System-wide configuration constants

/// Anomaly and severity threshold constants
pub mod thresholds {
    /// Default z-score threshold for the static-baseline strategy
    pub const STATIC_ANOMALY_THRESHOLD: f32 = 3.0;
    /// Default z-score threshold for the moving-average strategy
    pub const MOVING_AVERAGE_ANOMALY_THRESHOLD: f32 = 2.0;

    /// Scores above this are at least Mild
    pub const SEVERITY_MILD: f32 = 3.0;
    /// Scores above this are at least Moderate
    pub const SEVERITY_MODERATE: f32 = 4.0;
    /// Scores above this are Severe
    pub const SEVERITY_SEVERE: f32 = 5.0;

    /// Guard added to the moving-average spread estimate
    pub const SPREAD_EPSILON: f32 = 1e-6;
}

/// Windowing constants
pub mod windowing {
    /// Default moving-average baseline window, in samples
    pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 50;
    /// Default feature extraction window length, in samples
    pub const DEFAULT_FEATURE_WINDOW_LEN: usize = 200;
    /// Default feature extraction step size, in samples
    pub const DEFAULT_FEATURE_STEP: usize = 200;
    /// Smallest acceptable window for any windowed operation
    pub const MIN_WINDOW_SIZE: usize = 1;
}

/// Synthetic fixture generation constants
pub mod synthetic {
    /// Seed used for reproducible fixture signals
    pub const DEFAULT_SEED: u64 = 42;
    /// Gain applied to samples inside an injected anomalous window
    pub const ANOMALY_GAIN: f32 = 6.0;
    /// Default synthetic signal length, in samples
    pub const DEFAULT_SIGNAL_LEN: usize = 5000;
    /// Default number of anomalous windows injected into a fixture
    pub const DEFAULT_ANOMALOUS_WINDOW_COUNT: usize = 5;
}

/// Baseline registry path constants
pub mod baseline {
    /// Directory searched for reference signals at process start
    pub const DEFAULT_BASELINE_DIR: &str = "baseline_emg";
    /// Reference file name prefix, completed by the lowercase muscle name
    pub const BASELINE_FILE_PREFIX: &str = "baseline_";
    /// Reference file extension
    pub const BASELINE_FILE_EXTENSION: &str = "csv";
}
