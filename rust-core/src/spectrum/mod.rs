//! Spectral analysis: shared spectrum state, exact and fast transforms

pub mod analyzer;
pub mod dft;
pub mod fft;
pub mod planner;
pub mod windowing;
pub mod analysis;

pub use analyzer::{SpectrumAnalyzer, Transform, TransformConfig};
pub use dft::ExactTransform;
pub use fft::{FastTransform, FftTables};
pub use planner::TablePlanner;
pub use windowing::{apply_window, apply_window_inplace};
pub use analysis::{AnalyzerConfig, WindowedAnalyzer};
