//! Record aggregation under allocation pressure.
//!
//! Each iteration builds a batch of short-lived `Record`s, sums their values
//! once, and drops the batch at the end of the loop body. Where a collector
//! would reclaim the batch at some later pause, here the release happens at
//! the closing brace.

use std::io::Write;
use std::time::Duration;

use log::{debug, info};

use crate::config::PressureConfig;
use crate::error::Result;
use crate::memory::{self, AllocSnapshot};
use crate::report::{MemoryReading, Reporter};
use crate::timing::{Stopwatch, as_ms};

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: usize,
    pub name: String,
    pub value: f64,
}

impl Record {
    pub fn new(id: usize, name: String, value: f64) -> Self {
        Self { id, name, value }
    }

    /// `Record_<id>` with value `id * 1.5`.
    pub fn numbered(id: usize) -> Self {
        Self::new(id, format!("Record_{id}"), id as f64 * 1.5)
    }
}

pub fn generate_records(count: usize) -> Vec<Record> {
    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        records.push(Record::numbered(i));
    }
    records
}

pub fn total_value(records: &[Record]) -> f64 {
    records.iter().map(|r| r.value).sum()
}

/// One printed sampling point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationSample {
    pub iteration: usize,
    pub total: f64,
    /// Time since the run started.
    pub elapsed: Duration,
    pub memory: Option<MemoryReading>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressureSummary {
    pub samples: Vec<IterationSample>,
    pub records_created: usize,
    pub elapsed: Duration,
}

fn read_memory() -> Option<MemoryReading> {
    if !memory::is_active() {
        return None;
    }
    let snapshot = AllocSnapshot::capture();
    Some(MemoryReading {
        in_use: snapshot.in_use(),
        peak: snapshot.peak(),
    })
}

/// Runs the aggregation loop, printing a sample at every sampled iteration
/// while that iteration's batch is still alive.
pub fn run<W: Write>(config: &PressureConfig, reporter: &mut Reporter<W>) -> Result<PressureSummary> {
    info!(
        "record pressure: {} iterations x {} records, sampling every {}",
        config.iterations(),
        config.records_per_iteration(),
        config.sample_every()
    );
    reporter.line("Starting record pressure benchmark...")?;
    reporter.line("No collector runs here: each batch is freed when it leaves scope.")?;

    let mut samples = Vec::with_capacity(config.iterations().div_ceil(config.sample_every()));
    let mut records_created = 0;
    let watch = Stopwatch::start();

    for iteration in 0..config.iterations() {
        let records = generate_records(config.records_per_iteration());
        records_created += records.len();

        let total = total_value(&records);

        if config.is_sampled(iteration) {
            let sample = IterationSample {
                iteration,
                total,
                elapsed: watch.elapsed(),
                memory: read_memory(),
            };
            debug!("iteration {iteration}: {:.2} ms", as_ms(sample.elapsed));
            reporter.iteration(iteration, total)?;
            reporter.memory(sample.memory)?;
            samples.push(sample);
        }
    }

    let elapsed = watch.elapsed();
    reporter.total_time(elapsed)?;

    Ok(PressureSummary {
        samples,
        records_created,
        elapsed,
    })
}

pub const CLASSIC_NAME_LEN: usize = 50;

/// Record with a fixed-width name, so a whole batch can live on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRecord {
    pub id: i32,
    pub name: [u8; CLASSIC_NAME_LEN],
    pub value: f64,
}

impl FixedRecord {
    pub const EMPTY: FixedRecord = FixedRecord {
        id: 0,
        name: [0; CLASSIC_NAME_LEN],
        value: 0.0,
    };

    pub fn numbered(id: i32) -> Self {
        let mut record = Self::EMPTY;
        record.id = id;
        record.value = f64::from(id) * 1.5;
        let label = format!("Record_{id}");
        let len = label.len().min(CLASSIC_NAME_LEN - 1);
        record.name[..len].copy_from_slice(&label.as_bytes()[..len]);
        record
    }

    pub fn name(&self) -> &str {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(CLASSIC_NAME_LEN);
        std::str::from_utf8(&self.name[..end]).unwrap_or("")
    }
}

/// Fixed-capacity batch sized at compile time, no heap involved in holding
/// the records themselves.
pub fn classic_total<const N: usize>() -> f64 {
    let mut records = [FixedRecord::EMPTY; N];
    for (i, record) in records.iter_mut().enumerate() {
        *record = FixedRecord::numbered(i as i32);
    }
    records.iter().map(|r| r.value).sum()
}

pub const CLASSIC_RECORDS: usize = 1_000;

pub fn run_classic<W: Write>(reporter: &mut Reporter<W>) -> Result<f64> {
    let total = classic_total::<CLASSIC_RECORDS>();
    reporter.line(format_args!("Classic approach total: {total:.2}"))?;
    Ok(total)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroCostReport {
    pub high_level: f64,
    pub high_level_time: Duration,
    pub low_level: f64,
    pub low_level_time: Duration,
}

pub fn even_id_total(records: &[Record]) -> f64 {
    records
        .iter()
        .filter(|r| r.id % 2 == 0)
        .map(|r| r.value)
        .sum()
}

pub fn even_id_total_loop(records: &[Record]) -> f64 {
    let mut total = 0.0;
    for record in records {
        if record.id % 2 == 0 {
            total += record.value;
        }
    }
    total
}

/// Same reduction written as an iterator chain and as a hand-written loop.
/// Only the reductions are timed, not building the input.
pub fn run_zero_cost<W: Write>(count: usize, reporter: &mut Reporter<W>) -> Result<ZeroCostReport> {
    let records = generate_records(count);

    let watch = Stopwatch::start();
    let high_level = even_id_total(&records);
    let high_level_time = watch.elapsed();

    let watch = Stopwatch::start();
    let low_level = even_id_total_loop(&records);
    let low_level_time = watch.elapsed();

    reporter.line(format_args!("High-level result: {high_level:.2}"))?;
    reporter.line(format_args!("High-level time: {high_level_time:.2?}"))?;
    reporter.line(format_args!("Low-level result: {low_level:.2}"))?;
    reporter.line(format_args!("Low-level time: {low_level_time:.2?}"))?;

    Ok(ZeroCostReport {
        high_level,
        high_level_time,
        low_level,
        low_level_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_record() {
        let record = Record::numbered(7);
        assert_eq!(record.name, "Record_7");
        assert_eq!(record.value, 10.5);
    }

    #[test]
    fn test_batch_total_is_exact() {
        assert_eq!(total_value(&generate_records(10_000)), 74_992_500.0);
    }

    #[test]
    fn test_fixed_record_name() {
        let record = FixedRecord::numbered(42);
        assert_eq!(record.name(), "Record_42");
        assert_eq!(record.value, 63.0);
    }

    #[test]
    fn test_classic_total() {
        assert_eq!(classic_total::<1_000>(), 749_250.0);
        assert_eq!(classic_total::<0>(), 0.0);
    }

    #[test]
    fn test_even_id_totals_match() {
        let records = generate_records(1_001);
        assert_eq!(even_id_total(&records), even_id_total_loop(&records));
        assert_eq!(even_id_total(&records), 375_750.0);
    }
}
