use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::report::Reporter;
use crate::timing::Stopwatch;

pub const DEFAULT_VALUES: [u64; 5] = [10, 20, 30, 35, 40];

/// Exponential-time recursion; the point of the comparison.
pub fn recursive(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => recursive(n - 1) + recursive(n - 2),
    }
}

pub fn iterative(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut prev = 0;
    let mut curr = 1;
    for _ in 2..=n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibTiming {
    pub n: u64,
    pub value: u64,
    pub elapsed: Duration,
}

fn time_each(values: &[u64], f: fn(u64) -> u64) -> Vec<FibTiming> {
    values
        .iter()
        .map(|&n| {
            let watch = Stopwatch::start();
            let value = f(n);
            FibTiming {
                n,
                value,
                elapsed: watch.elapsed(),
            }
        })
        .collect()
}

fn print_timings<W: Write>(timings: &[FibTiming], reporter: &mut Reporter<W>) -> Result<()> {
    for t in timings {
        reporter.line(format_args!("  fib({}) = {} | time: {:?}", t.n, t.value, t.elapsed))?;
    }
    Ok(())
}

/// Times both variants over `values`; returns (recursive, iterative).
pub fn run<W: Write>(
    values: &[u64],
    reporter: &mut Reporter<W>,
) -> Result<(Vec<FibTiming>, Vec<FibTiming>)> {
    reporter.line("Recursive fibonacci:")?;
    let slow = time_each(values, recursive);
    print_timings(&slow, reporter)?;

    reporter.line("Iterative fibonacci:")?;
    let fast = time_each(values, iterative);
    print_timings(&fast, reporter)?;

    Ok((slow, fast))
}
