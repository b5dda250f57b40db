//! Filter/double/sum over a freshly generated integer sequence, timed per
//! input size.

use std::io::Write;
use std::time::Duration;

use log::debug;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::timing::Stopwatch;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    pub result: i64,
    pub elapsed: Duration,
}

/// The sequence `0..size`. Callers keep `size` within `i32` range
/// (`PipelineConfig` enforces it).
pub fn generate(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

/// Keeps the even values, doubles them, and sums. The sum is widened to
/// `i64`: at 100,000 elements it is already past `i32::MAX`.
pub fn process_data(data: &[i32]) -> i64 {
    data.iter()
        .filter(|&&x| x % 2 == 0)
        .map(|&x| i64::from(x) * 2)
        .sum()
}

/// Closed form of `process_data(&generate(size))`: with `k` even values
/// `0, 2, .., 2(k-1)`, the doubled sum is `2k(k-1)`.
pub fn expected_result(size: usize) -> i64 {
    let k = size.div_ceil(2) as i64;
    2 * k * (k - 1).max(0)
}

/// Runs the pipeline once per configured size. Allocation is part of the
/// timed region, as in the managed-runtime versions.
pub fn run<W: Write>(config: &PipelineConfig, reporter: &mut Reporter<W>) -> Result<Vec<SizeReport>> {
    let mut reports = Vec::with_capacity(config.sizes().len());

    for &size in config.sizes() {
        debug!("pipeline: size {size}");
        let watch = Stopwatch::start();

        let data = generate(size);
        let result = process_data(&data);

        let elapsed = watch.elapsed();
        reporter.size_result(size, result, elapsed)?;
        reports.push(SizeReport {
            size,
            result,
            elapsed,
        });
    }

    Ok(reports)
}
