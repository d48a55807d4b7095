//! Table cache for fast transforms
//!
//! Building the bit-reversal and trig tables costs O(N) trig calls. A planner
//! keeps one immutable copy per size and hands out shared references.

use std::collections::HashMap;
use std::sync::Arc;

use super::analyzer::TransformConfig;
use super::fft::{FastTransform, FftTables};

/// Caches `FftTables` by transform size
#[derive(Debug, Default)]
pub struct TablePlanner {
    cache: HashMap<usize, Arc<FftTables>>,
}

impl TablePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get tables for `size`, building them on first request
    pub fn plan(&mut self, size: usize) -> Arc<FftTables> {
        if let Some(tables) = self.cache.get(&size) {
            log::debug!("FFT tables reused: size={size}");
            return Arc::clone(tables);
        }

        let tables = Arc::new(FftTables::new(size));
        self.cache.insert(size, Arc::clone(&tables));
        tables
    }

    /// Create a fast transform backed by cached tables
    pub fn fast_transform(&mut self, config: TransformConfig) -> FastTransform {
        let tables = self.plan(config.buffer_size);
        FastTransform::from_parts(config, tables)
    }

    /// Number of distinct sizes cached
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
