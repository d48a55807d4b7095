//! Discrete Fourier transform by direct summation
//!
//! O(N/2 * M) per call for an input of M samples. Slow, but exact enough to
//! serve as a baseline for the fast transform, and it accepts inputs whose
//! length differs from the configured buffer size.

use std::f64::consts::TAU;

use super::analyzer::{SpectrumAnalyzer, Transform, TransformConfig};
use crate::error::{Result, TransformError};

/// Direct-summation transform with precomputed trig tables
pub struct ExactTransform {
    analyzer: SpectrumAnalyzer,

    /// sin(2πi/N) for i = 0..capacity
    sin_table: Vec<f64>,

    /// cos(2πi/N) for i = 0..capacity
    cos_table: Vec<f64>,
}

impl ExactTransform {
    /// Create new exact transform
    ///
    /// # Arguments
    /// * `buffer_size` - Transform size N
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(buffer_size: usize, sample_rate: f64) -> Self {
        Self::from_config(TransformConfig::new(buffer_size, sample_rate))
    }

    pub fn from_config(config: TransformConfig) -> Self {
        let n = config.buffer_size;
        let capacity = config.num_bins() * n;

        // The table is indexed by k*n; reducing the phase modulo N keeps the
        // argument small without changing any value.
        let (sin_table, cos_table): (Vec<f64>, Vec<f64>) = (0..capacity)
            .map(|i| {
                let phase = (i % n) as f64 * TAU / n as f64;
                phase.sin_cos()
            })
            .unzip();

        log::debug!("DFT tables built: size={n}, capacity={capacity}");

        Self {
            analyzer: SpectrumAnalyzer::new(config),
            sin_table,
            cos_table,
        }
    }

    /// Number of entries in each trig table, (N/2) * N
    pub fn table_capacity(&self) -> usize {
        self.sin_table.len()
    }

    /// Largest table index a buffer of `len` samples would read
    fn max_table_index(&self, len: usize) -> Option<usize> {
        let bins = self.analyzer.config().num_bins();
        if bins == 0 || len == 0 {
            return None;
        }
        Some((bins - 1) * (len - 1))
    }
}

impl Transform for ExactTransform {
    /// Accumulate real[k] = Σ cos(2πkn/N)·x[n] and imag[k] = Σ sin(2πkn/N)·x[n]
    ///
    /// Fails with `TableBounds` before touching any state when the input is
    /// long enough to index past the precomputed tables.
    fn forward(&mut self, buffer: &[f64]) -> Result<&[f64]> {
        let capacity = self.table_capacity();
        if let Some(index) = self.max_table_index(buffer.len()) {
            if index >= capacity {
                return Err(TransformError::TableBounds { index, capacity });
            }
        }

        log::trace!("DFT forward: {} samples", buffer.len());

        let bins = self.analyzer.config().num_bins();
        let (real, imag) = self.analyzer.components_mut();
        let (sin_table, cos_table) = (&self.sin_table, &self.cos_table);

        for k in 0..bins {
            let mut rval = 0.0;
            let mut ival = 0.0;

            for (n, &sample) in buffer.iter().enumerate() {
                let idx = k * n;
                rval += cos_table[idx] * sample;
                ival += sin_table[idx] * sample;
            }

            real[k] = rval;
            imag[k] = ival;
        }

        Ok(self.analyzer.compute_spectrum())
    }

    fn analyzer(&self) -> &SpectrumAnalyzer {
        &self.analyzer
    }

    fn analyzer_mut(&mut self) -> &mut SpectrumAnalyzer {
        &mut self.analyzer
    }
}
