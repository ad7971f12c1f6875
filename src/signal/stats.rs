// src/signal/stats.rs
//! Descriptive statistics shared by the baseline and feature modules

/// Arithmetic mean of a sample slice; zero for an empty slice
pub fn mean(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f32>() / data.len() as f32
}

/// Population variance; zero for an empty slice
pub fn variance(data: &[f32]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    let mean = mean(data);
    data.iter().map(|&x| (x - mean).powi(2)).sum::<f32>() / data.len() as f32
}

/// Population standard deviation; zero for an empty slice
pub fn std_dev(data: &[f32]) -> f32 {
    variance(data).sqrt()
}
