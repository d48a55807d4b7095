//! Spectral Transform - time/frequency conversion for audio analysis
//!
//! Exact (direct summation) and fast (radix-2 Cooley-Tukey) Fourier
//! transforms over real sample buffers, with magnitude spectrum and peak
//! tracking, plus the window functions used to taper buffers beforehand.

pub mod error;
pub mod spectrum;
pub mod windows;

pub use error::{Result, TransformError};
pub use spectrum::{ExactTransform, FastTransform, SpectrumAnalyzer, Transform, TransformConfig};
pub use windows::WindowFunction;
