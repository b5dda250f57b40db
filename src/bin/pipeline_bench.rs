//! Filter/double/sum at 1,000 / 10,000 / 100,000 elements.

use anyhow::Result;
use gc_pressure::{PipelineConfig, Reporter, pipeline};
use std::io;

fn main() -> Result<()> {
    gc_pressure::init_logging(0);

    let mut reporter = Reporter::new(io::stdout().lock());
    reporter.banner("Rust Benchmark")?;
    pipeline::run(&PipelineConfig::default(), &mut reporter)?;
    reporter.flush()?;
    Ok(())
}
