//! Radix-2 Cooley-Tukey FFT
//!
//! In-place iterative decimation-in-time transform for power-of-2 sizes.
//! Twiddle factors are advanced by complex multiplication inside each stage
//! instead of calling sin/cos per butterfly.

use num_complex::Complex;
use std::f64::consts::PI;
use std::sync::Arc;

use super::analyzer::{SpectrumAnalyzer, Transform, TransformConfig};
use crate::error::{Result, TransformError};

/// Read-only tables derived from the transform size
///
/// Immutable after construction, so one instance can be shared between
/// transforms of the same size (see `TablePlanner`).
#[derive(Debug)]
pub struct FftTables {
    size: usize,

    /// Bit-reversal permutation
    reverse_table: Vec<usize>,

    /// sin(-π/i); entry 0 is unused
    sin_table: Vec<f64>,

    /// cos(-π/i); entry 0 is unused
    cos_table: Vec<f64>,
}

impl FftTables {
    /// Build tables for a transform of `size` samples
    ///
    /// Never fails; a size that is not a power of 2 yields tables the
    /// transform will refuse to use.
    pub fn new(size: usize) -> Self {
        // Each doubling of `limit` mirrors the filled prefix with the next
        // lower bit set.
        let mut reverse_table = vec![0usize; size];
        let mut limit = 1;
        let mut bit = size >> 1;

        while limit < size {
            for i in 0..limit.min(size - limit) {
                reverse_table[i + limit] = reverse_table[i] + bit;
            }

            limit <<= 1;
            bit >>= 1;
        }

        let mut sin_table = vec![0.0; size];
        let mut cos_table = vec![0.0; size];

        // -π/0 is undefined; leave the identity rotation in slot 0
        if size > 0 {
            cos_table[0] = 1.0;
        }
        for i in 1..size {
            let (sin, cos) = (-PI / i as f64).sin_cos();
            sin_table[i] = sin;
            cos_table[i] = cos;
        }

        log::debug!("FFT tables built: size={size}");

        Self {
            size,
            reverse_table,
            sin_table,
            cos_table,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn reverse_table(&self) -> &[usize] {
        &self.reverse_table
    }

    /// Rotation step e^(-iπ/span) for the stage combining halves of `span`
    #[inline]
    pub fn twiddle_step(&self, span: usize) -> Complex<f64> {
        Complex::new(self.cos_table[span], self.sin_table[span])
    }
}

/// Successive powers of `step`, starting from 1
///
/// This is the incremental rotation used within one butterfly stage.
fn twiddles(step: Complex<f64>, count: usize) -> impl Iterator<Item = Complex<f64>> {
    std::iter::successors(Some(Complex::new(1.0, 0.0)), move |&w| Some(w * step)).take(count)
}

/// Run the butterfly network over bit-reversed components
///
/// `real` and `imag` must both have length `tables.size()`.
fn butterflies(tables: &FftTables, real: &mut [f64], imag: &mut [f64]) {
    let size = tables.size();
    let mut half_size = 1;

    while half_size < size {
        let step = tables.twiddle_step(half_size);

        for (fft_step, rotation) in twiddles(step, half_size).enumerate() {
            for i in (fft_step..size).step_by(half_size << 1) {
                let off = i + half_size;

                let t = rotation * Complex::new(real[off], imag[off]);

                real[off] = real[i] - t.re;
                imag[off] = imag[i] - t.im;
                real[i] += t.re;
                imag[i] += t.im;
            }
        }

        half_size <<= 1;
    }
}

/// Fast transform with forward and inverse operations
pub struct FastTransform {
    analyzer: SpectrumAnalyzer,
    tables: Arc<FftTables>,
}

impl FastTransform {
    /// Create new fast transform
    ///
    /// # Arguments
    /// * `buffer_size` - Transform size N (checked to be a power of 2 on use)
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(buffer_size: usize, sample_rate: f64) -> Self {
        Self::from_config(TransformConfig::new(buffer_size, sample_rate))
    }

    pub fn from_config(config: TransformConfig) -> Self {
        Self::from_parts(config, Arc::new(FftTables::new(config.buffer_size)))
    }

    /// Create a transform that reuses previously built tables
    ///
    /// Fails with `SizeMismatch` if the tables were built for another size.
    pub fn with_tables(config: TransformConfig, tables: Arc<FftTables>) -> Result<Self> {
        if tables.size() != config.buffer_size {
            return Err(TransformError::SizeMismatch {
                expected: config.buffer_size,
                actual: tables.size(),
            });
        }

        Ok(Self::from_parts(config, tables))
    }

    /// Sizes must already agree
    pub(super) fn from_parts(config: TransformConfig, tables: Arc<FftTables>) -> Self {
        Self {
            analyzer: SpectrumAnalyzer::new(config),
            tables,
        }
    }

    pub fn tables(&self) -> &Arc<FftTables> {
        &self.tables
    }

    fn check_power_of_two(&self) -> Result<()> {
        let size = self.tables.size();
        if !size.is_power_of_two() {
            return Err(TransformError::InvalidSize(size));
        }
        Ok(())
    }

    fn check_length(&self, len: usize) -> Result<()> {
        let size = self.tables.size();
        if len != size {
            return Err(TransformError::SizeMismatch {
                expected: size,
                actual: len,
            });
        }
        Ok(())
    }

    /// Reconstruct a time-domain buffer from frequency components
    ///
    /// The inputs are left untouched: conjugation and the bit-reversal
    /// permutation go into scratch arrays, and the forward butterfly network
    /// is reused on them. The imaginary part of the result is discarded.
    ///
    /// # Arguments
    /// * `real` - Real components, length N
    /// * `imag` - Imaginary components, length N
    ///
    /// # Returns
    /// New buffer of N real samples
    pub fn inverse(&self, real: &[f64], imag: &[f64]) -> Result<Vec<f64>> {
        self.check_power_of_two()?;
        self.check_length(real.len())?;
        self.check_length(imag.len())?;

        log::trace!("FFT inverse: {} samples", real.len());

        let size = self.tables.size();
        let mut rev_real = vec![0.0; size];
        let mut rev_imag = vec![0.0; size];

        for (i, &r) in self.tables.reverse_table().iter().enumerate() {
            rev_real[i] = real[r];
            rev_imag[i] = -imag[r];
        }

        butterflies(&self.tables, &mut rev_real, &mut rev_imag);

        let scale = size as f64;
        Ok(rev_real.into_iter().map(|x| x / scale).collect())
    }

    /// Invert the components left by the most recent `forward` call
    ///
    /// Works on a copy; a later `forward` does not affect the returned buffer.
    pub fn inverse_current(&self) -> Result<Vec<f64>> {
        self.inverse(self.analyzer.real(), self.analyzer.imag())
    }
}

impl Transform for FastTransform {
    /// Validates the size, bit-reverses `buffer` into the real components,
    /// runs the butterfly network and derives the spectrum.
    fn forward(&mut self, buffer: &[f64]) -> Result<&[f64]> {
        self.check_power_of_two()?;
        self.check_length(buffer.len())?;

        log::trace!("FFT forward: {} samples", buffer.len());

        let (real, imag) = self.analyzer.components_mut();

        for (re, &r) in real.iter_mut().zip(self.tables.reverse_table()) {
            *re = buffer[r];
        }
        imag.fill(0.0);

        butterflies(&self.tables, real, imag);

        Ok(self.analyzer.compute_spectrum())
    }

    fn analyzer(&self) -> &SpectrumAnalyzer {
        &self.analyzer
    }

    fn analyzer_mut(&mut self) -> &mut SpectrumAnalyzer {
        &mut self.analyzer
    }
}
