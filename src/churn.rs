//! Churn of short-lived strings: every iteration builds a batch of
//! `Object <j>` strings and drops the whole batch at the end of the body.

use std::io::Write;
use std::time::Duration;

use log::info;

use crate::config::ChurnConfig;
use crate::error::Result;
use crate::timing::Stopwatch;
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChurnSummary {
    pub strings_created: usize,
    /// Text bytes of one batch; identical for every iteration.
    pub bytes_per_batch: usize,
    pub elapsed: Duration,
}

pub fn build_batch(count: usize) -> Vec<String> {
    let mut batch = Vec::new();
    for j in 0..count {
        batch.push(format!("Object {j}"));
    }
    batch
}

pub fn batch_bytes(batch: &[String]) -> usize {
    batch.iter().map(String::len).sum()
}

pub fn run<W: Write>(config: &ChurnConfig, reporter: &mut Reporter<W>) -> Result<ChurnSummary> {
    info!(
        "string churn: {} iterations x {} strings",
        config.iterations(),
        config.strings_per_iteration()
    );
    reporter.line("Starting churn benchmark...")?;

    let mut strings_created = 0;
    let mut bytes_per_batch = 0;
    let watch = Stopwatch::start();

    for _ in 0..config.iterations() {
        let batch = build_batch(config.strings_per_iteration());
        strings_created += batch.len();
        bytes_per_batch = batch_bytes(&batch);
    }

    let elapsed = watch.elapsed();
    reporter.line(format_args!(
        "Strings per batch: {} ({bytes_per_batch} bytes)",
        config.strings_per_iteration()
    ))?;
    reporter.total_time(elapsed)?;

    Ok(ChurnSummary {
        strings_created,
        bytes_per_batch,
        elapsed,
    })
}
