//! 1,000 batches of 10,000 `Object <j>` strings, each dropped immediately.

use anyhow::Result;
use gc_pressure::{ChurnConfig, Reporter, churn};
use std::io;

fn main() -> Result<()> {
    gc_pressure::init_logging(0);

    let mut reporter = Reporter::new(io::stdout().lock());
    churn::run(&ChurnConfig::default(), &mut reporter)?;
    reporter.flush()?;
    Ok(())
}
