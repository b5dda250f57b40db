pub mod churn;
pub mod cli;
pub mod config;
pub mod error;
pub mod lessons;
pub mod memory;
pub mod pipeline;
pub mod records;
pub mod report;
pub mod timing;

pub use config::{ChurnConfig, PipelineConfig, PressureConfig};
pub use error::{BenchError, Result};
pub use report::Reporter;

use log::LevelFilter;
use std::io::Write;

/// Sets up `env_logger` on stderr so diagnostics never interleave with the
/// result lines on stdout. `RUST_LOG` wins over `verbose` when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .try_init();
}
