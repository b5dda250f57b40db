//! 1,000 iterations of 10,000 short-lived records, sampled every 100th.

use anyhow::Result;
use gc_pressure::memory::CountingAllocator;
use gc_pressure::{PressureConfig, Reporter, records};
use std::io;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn main() -> Result<()> {
    gc_pressure::init_logging(0);

    let mut reporter = Reporter::new(io::stdout().lock());
    records::run(&PressureConfig::default(), &mut reporter)?;
    reporter.flush()?;
    Ok(())
}
