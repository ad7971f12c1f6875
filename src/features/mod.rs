// src/features/mod.rs
//! Windowed feature extraction and synthetic fixture generation

pub mod synthetic;
pub mod windowing;

pub use synthetic::{generate_signal, inject_window_anomalies};
pub use windowing::{extract_features, sliding_window, window_features, WindowFeatureVector};
