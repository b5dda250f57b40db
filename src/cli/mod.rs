use clap::{Parser, Subcommand};

use crate::config::{
    DEFAULT_ITERATIONS, DEFAULT_RECORDS_PER_ITERATION, DEFAULT_SAMPLE_EVERY, DEFAULT_SIZES,
    DEFAULT_STRINGS_PER_ITERATION,
};
use crate::lessons::{fib, scoped};

#[derive(Parser, Debug)]
#[command(name = "gcbench")]
#[command(version, about = "Allocation-pressure micro-benchmarks without a garbage collector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Filter evens, double, sum, for each input size
    Pipeline {
        /// Comma-separated input sizes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,
    },

    /// Build and sum record batches, sampling memory periodically
    Records {
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,

        #[arg(long, default_value_t = DEFAULT_RECORDS_PER_ITERATION)]
        per_iteration: usize,

        /// Print a sample every N iterations
        #[arg(long, default_value_t = DEFAULT_SAMPLE_EVERY)]
        sample_every: usize,
    },

    /// Build and drop batches of short-lived strings
    Churn {
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,

        #[arg(long, default_value_t = DEFAULT_STRINGS_PER_ITERATION)]
        per_iteration: usize,
    },

    /// Compare boxed chain, grown vector and presized vector
    Patterns {
        #[arg(long, default_value_t = 100_000)]
        size: usize,
    },

    /// Recursive vs iterative fibonacci timings
    Fib {
        #[arg(value_delimiter = ',', default_values_t = fib::DEFAULT_VALUES)]
        values: Vec<u64>,
    },

    /// Move and borrow walkthrough
    Ownership,

    /// Rc strong counts across clone and drop
    Refcount,

    /// Iterator chain vs hand-written loop over the same records
    ZeroCost {
        #[arg(long, default_value_t = 1_000_000)]
        count: usize,
    },

    /// Memory before, inside and after a scope of labels
    Scoped {
        #[arg(long, default_value_t = scoped::DEFAULT_COUNT)]
        count: usize,
    },

    /// Fixed-size stack batch of records
    Classic,

    /// Pipeline, records and churn with their default sizes
    All,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
