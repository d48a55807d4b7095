//! Shared frequency-domain state
//!
//! Both transform variants write their real/imaginary components into a
//! `SpectrumAnalyzer` and let it derive the magnitude spectrum and peak.

use crate::error::Result;

/// Transform size and sample rate, fixed for the lifetime of a transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    /// Number of samples per buffer (power of 2 for the fast transform)
    pub buffer_size: usize,

    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl TransformConfig {
    pub fn new(buffer_size: usize, sample_rate: f64) -> Self {
        Self {
            buffer_size,
            sample_rate,
        }
    }

    /// Width of one frequency bin in Hz
    pub fn bandwidth(&self) -> f64 {
        self.sample_rate / self.buffer_size as f64
    }

    /// Number of spectrum bins (positive frequencies only)
    pub fn num_bins(&self) -> usize {
        self.buffer_size / 2
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            buffer_size: 2048,
            sample_rate: 48000.0,
        }
    }
}

/// Component storage, magnitude spectrum and running peak
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    config: TransformConfig,
    bandwidth: f64,

    /// Real components, length `buffer_size`
    real: Vec<f64>,

    /// Imaginary components, length `buffer_size`
    imag: Vec<f64>,

    /// Magnitude spectrum, length `buffer_size / 2`
    spectrum: Vec<f64>,

    /// Largest magnitude seen since construction or the last reset
    peak: f64,

    /// Bin index of `peak`
    peak_band: usize,
}

impl SpectrumAnalyzer {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            bandwidth: config.bandwidth(),
            real: vec![0.0; config.buffer_size],
            imag: vec![0.0; config.buffer_size],
            spectrum: vec![0.0; config.num_bins()],
            peak: 0.0,
            peak_band: 0,
        }
    }

    /// Derive the magnitude spectrum from the current components
    ///
    /// bin[i] = 2/N * sqrt(real[i]^2 + imag[i]^2) for i = 0..N/2.
    /// The peak only moves on a strictly greater magnitude, so ties keep
    /// the lower bin.
    pub fn compute_spectrum(&mut self) -> &[f64] {
        let scale = 2.0 / self.config.buffer_size as f64;

        for (i, bin) in self.spectrum.iter_mut().enumerate() {
            let (re, im) = (self.real[i], self.imag[i]);
            let mag = scale * (re * re + im * im).sqrt();

            if mag > self.peak {
                self.peak = mag;
                self.peak_band = i;
            }

            *bin = mag;
        }

        &self.spectrum
    }

    /// Centre frequency of a bin in Hz
    pub fn band_frequency(&self, index: usize) -> f64 {
        self.bandwidth * index as f64 + self.bandwidth / 2.0
    }

    pub fn reset_peak(&mut self) {
        self.peak = 0.0;
        self.peak_band = 0;
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn buffer_size(&self) -> usize {
        self.config.buffer_size
    }

    pub fn sample_rate(&self) -> f64 {
        self.config.sample_rate
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn real(&self) -> &[f64] {
        &self.real
    }

    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn peak_band(&self) -> usize {
        self.peak_band
    }

    /// Mutable access to both component arrays for a transform to fill
    pub(crate) fn components_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.real, &mut self.imag)
    }
}

/// A real-input transform that produces a magnitude spectrum
pub trait Transform {
    /// Transform `buffer` and return the magnitude spectrum
    ///
    /// The returned slice borrows the transform's own storage and is
    /// overwritten by the next call.
    fn forward(&mut self, buffer: &[f64]) -> Result<&[f64]>;

    fn analyzer(&self) -> &SpectrumAnalyzer;

    fn analyzer_mut(&mut self) -> &mut SpectrumAnalyzer;

    fn config(&self) -> &TransformConfig {
        self.analyzer().config()
    }

    fn band_frequency(&self, index: usize) -> f64 {
        self.analyzer().band_frequency(index)
    }

    fn spectrum(&self) -> &[f64] {
        self.analyzer().spectrum()
    }

    fn real(&self) -> &[f64] {
        self.analyzer().real()
    }

    fn imag(&self) -> &[f64] {
        self.analyzer().imag()
    }

    fn peak(&self) -> f64 {
        self.analyzer().peak()
    }

    fn peak_band(&self) -> usize {
        self.analyzer().peak_band()
    }

    fn reset_peak(&mut self) {
        self.analyzer_mut().reset_peak();
    }
}
