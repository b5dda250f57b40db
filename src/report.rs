use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::memory::to_mb;
use crate::timing::as_ms;

/// Memory levels at a sampling point, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReading {
    pub in_use: usize,
    pub peak: usize,
}

/// Writes the human-readable result lines every program prints.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "=== {title} ===")?;
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn size_result(&mut self, size: usize, result: i64, elapsed: Duration) -> Result<()> {
        writeln!(
            self.out,
            "Size: {size}, Result: {result}, Time: {:.2} ms",
            as_ms(elapsed)
        )?;
        Ok(())
    }

    pub fn iteration(&mut self, iteration: usize, total: f64) -> Result<()> {
        writeln!(self.out, "Iteration {iteration}: {total:.2}")?;
        Ok(())
    }

    /// Without the counting allocator installed there is nothing to read;
    /// say so instead of printing zeros.
    pub fn memory(&mut self, reading: Option<MemoryReading>) -> Result<()> {
        match reading {
            Some(reading) => {
                writeln!(self.out, "Memory used: {:.2} MB", to_mb(reading.in_use))?;
                writeln!(self.out, "Peak memory: {:.2} MB", to_mb(reading.peak))?;
            }
            None => writeln!(self.out, "Memory used: n/a (counting allocator not installed)")?,
        }
        Ok(())
    }

    pub fn total_time(&mut self, elapsed: Duration) -> Result<()> {
        writeln!(self.out, "Total time: {:.2} ms", as_ms(elapsed))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
