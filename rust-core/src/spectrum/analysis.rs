//! High-level windowed spectrum analyzer
//!
//! Combines the fast transform with windowing for frame-by-frame analysis

use super::analyzer::{Transform, TransformConfig};
use super::fft::FastTransform;
use super::windowing::window_correction_factor;
use crate::error::{Result, TransformError};
use crate::windows::WindowFunction;

/// Windowed analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Transform size and sample rate
    pub transform: TransformConfig,

    /// Window applied to each frame before the transform
    pub window: WindowFunction,

    /// Apply amplitude correction for windowing
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            transform: TransformConfig::default(),
            window: WindowFunction::Hann,
            apply_correction: true,
        }
    }
}

/// Frame analyzer: window, fast transform, optional amplitude correction
pub struct WindowedAnalyzer {
    config: AnalyzerConfig,
    fft: FastTransform,

    /// Window weights, computed once per configuration
    weights: Vec<f64>,

    /// Reused windowed frame
    frame: Vec<f64>,

    correction_factor: f64,
}

impl WindowedAnalyzer {
    /// Create new windowed analyzer
    ///
    /// Fails with `DegenerateWindow` for buffer sizes below 2.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let size = config.transform.buffer_size;
        let weights = config.window.generate(size)?;
        let correction_factor = Self::correction_for(&config)?;

        Ok(Self {
            config,
            fft: FastTransform::from_config(config.transform),
            weights,
            frame: vec![0.0; size],
            correction_factor,
        })
    }

    fn correction_for(config: &AnalyzerConfig) -> Result<f64> {
        if config.apply_correction {
            window_correction_factor(config.window, config.transform.buffer_size)
        } else {
            Ok(1.0)
        }
    }

    /// Analyze one frame and return its magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input frame, exactly `buffer_size` samples
    ///
    /// # Returns
    /// Magnitude spectrum for bins 0..buffer_size/2
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        if signal.len() != self.frame.len() {
            return Err(TransformError::SizeMismatch {
                expected: self.frame.len(),
                actual: signal.len(),
            });
        }

        for ((out, &s), &w) in self.frame.iter_mut().zip(signal).zip(&self.weights) {
            *out = s * w;
        }

        let mut spectrum = self.fft.forward(&self.frame)?.to_vec();

        if self.config.apply_correction {
            for s in spectrum.iter_mut() {
                *s *= self.correction_factor;
            }
        }

        Ok(spectrum)
    }

    /// Centre frequency of every bin in Hz
    pub fn band_frequencies(&self) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.fft.band_frequency(bin))
            .collect()
    }

    /// Largest uncorrected magnitude seen so far
    pub fn peak(&self) -> f64 {
        self.fft.peak()
    }

    pub fn peak_band(&self) -> usize {
        self.fft.peak_band()
    }

    pub fn reset_peak(&mut self) {
        self.fft.reset_peak();
    }

    /// Update configuration
    ///
    /// The transform (and its peak) is only rebuilt when size or rate change.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<()> {
        let weights = config.window.generate(config.transform.buffer_size)?;
        let correction_factor = Self::correction_for(&config)?;

        if config.transform != self.config.transform {
            log::debug!(
                "Rebuilding transform: {} -> {} samples",
                self.config.transform.buffer_size,
                config.transform.buffer_size
            );
            self.fft = FastTransform::from_config(config.transform);
            self.frame = vec![0.0; config.transform.buffer_size];
        }

        self.weights = weights;
        self.correction_factor = correction_factor;
        self.config = config;

        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.config.transform.num_bins()
    }
}
