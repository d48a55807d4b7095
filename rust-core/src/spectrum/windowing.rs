//! Windowing of time-domain signals before a transform
//!
//! Window functions only return weights; the multiplication happens here.

use crate::error::Result;
use crate::windows::WindowFunction;

/// Apply window to signal
///
/// # Arguments
/// * `signal` - Input signal
/// * `window` - Window function to apply
///
/// # Returns
/// Windowed signal
pub fn apply_window(signal: &[f64], window: WindowFunction) -> Result<Vec<f64>> {
    let weights = window.generate(signal.len())?;

    Ok(signal
        .iter()
        .zip(weights.iter())
        .map(|(&s, &w)| s * w)
        .collect())
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window: WindowFunction) -> Result<()> {
    let weights = window.generate(signal.len())?;

    for (s, w) in signal.iter_mut().zip(weights.iter()) {
        *s *= w;
    }

    Ok(())
}

/// Extract windowed segment from longer signal
///
/// # Arguments
/// * `signal` - Long signal
/// * `center` - Center index of window
/// * `window_length` - Length of window (L)
/// * `window` - Window function
///
/// # Returns
/// Windowed segment centered at `center` with length `window_length`,
/// zero-padded where it runs past either end of `signal`.
/// Range: [center - L/2, center + L/2 - 1]
pub fn extract_windowed_segment(
    signal: &[f64],
    center: usize,
    window_length: usize,
    window: WindowFunction,
) -> Result<Vec<f64>> {
    let half_len = window_length / 2;
    let mut segment = vec![0.0; window_length];

    for (j, slot) in segment.iter_mut().enumerate() {
        if let Some(&sample) = (center + j).checked_sub(half_len).and_then(|idx| signal.get(idx)) {
            *slot = sample;
        }
    }

    apply_window_inplace(&mut segment, window)?;

    Ok(segment)
}

/// Calculate window correction factor
///
/// When applying windows, the signal amplitude is reduced. This factor
/// can be used to correct the spectrum magnitude.
///
/// # Arguments
/// * `window` - Window function
/// * `length` - Window length
///
/// # Returns
/// Correction factor (multiply spectrum magnitude by this)
pub fn window_correction_factor(window: WindowFunction, length: usize) -> Result<f64> {
    let weights = window.generate(length)?;
    let sum: f64 = weights.iter().sum();
    Ok(length as f64 / sum)
}

/// Calculate window power correction factor (for power spectral density)
pub fn window_power_correction_factor(window: WindowFunction, length: usize) -> Result<f64> {
    let weights = window.generate(length)?;
    let sum_sq: f64 = weights.iter().map(|&w| w * w).sum();
    Ok(length as f64 / sum_sq)
}
