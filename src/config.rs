//! Run parameters for each program. `Default` reproduces the fixed constants
//! the standalone binaries use; the validating constructors back the CLI
//! overrides.

use crate::error::{BenchError, Result};

pub const DEFAULT_SIZES: [usize; 3] = [1_000, 10_000, 100_000];
pub const DEFAULT_ITERATIONS: usize = 1_000;
pub const DEFAULT_RECORDS_PER_ITERATION: usize = 10_000;
pub const DEFAULT_SAMPLE_EVERY: usize = 100;
pub const DEFAULT_STRINGS_PER_ITERATION: usize = 10_000;

/// Sizes for the filter/double/sum pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    sizes: Vec<usize>,
}

impl PipelineConfig {
    /// # Errors
    ///
    /// Returns error if `sizes` is empty or a size does not fit the `i32`
    /// sequence the pipeline generates.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(BenchError::NoSizes);
        }
        if let Some(&size) = sizes.iter().find(|&&s| s > i32::MAX as usize) {
            return Err(BenchError::SizeTooLarge(size));
        }
        Ok(Self { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// Shape of the record-aggregation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressureConfig {
    iterations: usize,
    records_per_iteration: usize,
    sample_every: usize,
}

impl PressureConfig {
    /// # Errors
    ///
    /// Returns error if any count is zero.
    pub fn new(iterations: usize, records_per_iteration: usize, sample_every: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(BenchError::ZeroCount("iterations"));
        }
        if records_per_iteration == 0 {
            return Err(BenchError::ZeroCount("records per iteration"));
        }
        if sample_every == 0 {
            return Err(BenchError::ZeroCount("sampling interval"));
        }
        Ok(Self {
            iterations,
            records_per_iteration,
            sample_every,
        })
    }

    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    pub const fn records_per_iteration(&self) -> usize {
        self.records_per_iteration
    }

    pub const fn sample_every(&self) -> usize {
        self.sample_every
    }

    pub const fn is_sampled(&self, iteration: usize) -> bool {
        iteration % self.sample_every == 0
    }
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            records_per_iteration: DEFAULT_RECORDS_PER_ITERATION,
            sample_every: DEFAULT_SAMPLE_EVERY,
        }
    }
}

/// Shape of the string-churn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnConfig {
    iterations: usize,
    strings_per_iteration: usize,
}

impl ChurnConfig {
    /// # Errors
    ///
    /// Returns error if either count is zero.
    pub fn new(iterations: usize, strings_per_iteration: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(BenchError::ZeroCount("iterations"));
        }
        if strings_per_iteration == 0 {
            return Err(BenchError::ZeroCount("strings per iteration"));
        }
        Ok(Self {
            iterations,
            strings_per_iteration,
        })
    }

    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    pub const fn strings_per_iteration(&self) -> usize {
        self.strings_per_iteration
    }
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            strings_per_iteration: DEFAULT_STRINGS_PER_ITERATION,
        }
    }
}
