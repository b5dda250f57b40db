use std::io::Write;

use crate::error::Result;
use crate::memory::{self, AllocSnapshot, to_mb};
use crate::report::Reporter;

pub const DEFAULT_COUNT: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopedReport {
    pub total_length: usize,
    /// Bytes live inside the scope above the level before it; `None` when
    /// the counting allocator is not installed.
    pub used_in_scope: Option<usize>,
    pub cleaned_up: Option<bool>,
}

/// Builds `count` labels inside an inner scope and checks that leaving the
/// scope returned the live byte count to where it started.
pub fn run<W: Write>(count: usize, reporter: &mut Reporter<W>) -> Result<ScopedReport> {
    reporter.banner("Memory Usage Analysis")?;
    let tracking = memory::is_active();
    let before = AllocSnapshot::capture();

    let (total_length, inside) = {
        let mut data = Vec::with_capacity(count);
        for i in 0..count {
            data.push(format!("Record_{i}"));
        }
        let inside = AllocSnapshot::capture();
        let total_length: usize = data.iter().map(String::len).sum();
        (total_length, inside)
    };

    let after = AllocSnapshot::capture();

    let used_in_scope = tracking.then(|| inside.in_use().saturating_sub(before.in_use()));
    let cleaned_up = tracking.then(|| after.in_use() <= before.in_use());

    match used_in_scope {
        Some(bytes) => reporter.line(format_args!(
            "Peak memory used: {bytes} bytes ({:.2} MB)",
            to_mb(bytes)
        ))?,
        None => reporter.line("Peak memory used: n/a (counting allocator not installed)")?,
    }
    reporter.line(format_args!("Total string length: {total_length}"))?;
    if let Some(cleaned_up) = cleaned_up {
        reporter.line(format_args!(
            "Final memory used: {} bytes",
            after.in_use().saturating_sub(before.in_use())
        ))?;
        reporter.line(format_args!("Memory properly cleaned up: {cleaned_up}"))?;
    }

    Ok(ScopedReport {
        total_length,
        used_in_scope,
        cleaned_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_length() {
        let mut reporter = Reporter::new(Vec::new());
        let report = run(DEFAULT_COUNT, &mut reporter).unwrap();
        assert_eq!(report.total_length, 1_188_890);
    }
}
