use anyhow::{Context, Result};
use gc_pressure::cli::{Cli, Command};
use gc_pressure::lessons::{fib, ownership, refcount, scoped};
use gc_pressure::memory::{self, CountingAllocator};
use gc_pressure::{ChurnConfig, PipelineConfig, PressureConfig, Reporter, churn, pipeline, records};
use std::io::{self, StdoutLock};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    gc_pressure::init_logging(cli.verbose);

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut reporter = Reporter::new(io::stdout().lock());
    run(command, &mut reporter)?;
    reporter.flush()?;
    Ok(())
}

fn run(command: Command, reporter: &mut Reporter<StdoutLock<'static>>) -> Result<()> {
    match command {
        Command::Pipeline { sizes } => {
            let config = PipelineConfig::new(sizes).context("Invalid pipeline sizes")?;
            reporter.banner("Rust Benchmark")?;
            pipeline::run(&config, reporter)?;
        }
        Command::Records {
            iterations,
            per_iteration,
            sample_every,
        } => {
            let config = PressureConfig::new(iterations, per_iteration, sample_every)
                .context("Invalid record pressure settings")?;
            records::run(&config, reporter)?;
        }
        Command::Churn {
            iterations,
            per_iteration,
        } => {
            let config =
                ChurnConfig::new(iterations, per_iteration).context("Invalid churn settings")?;
            churn::run(&config, reporter)?;
        }
        Command::Patterns { size } => run_patterns(size, reporter)?,
        Command::Fib { values } => {
            fib::run(&values, reporter)?;
        }
        Command::Ownership => {
            ownership::run(reporter)?;
        }
        Command::Refcount => {
            refcount::run(reporter)?;
        }
        Command::ZeroCost { count } => {
            reporter.banner("Zero-Cost Abstraction Demo")?;
            records::run_zero_cost(count, reporter)?;
        }
        Command::Scoped { count } => {
            scoped::run(count, reporter)?;
        }
        Command::Classic => {
            records::run_classic(reporter)?;
        }
        Command::All => {
            reporter.banner("Rust Benchmark")?;
            pipeline::run(&PipelineConfig::default(), reporter)?;
            reporter.blank()?;
            records::run(&PressureConfig::default(), reporter)?;
            reporter.blank()?;
            churn::run(&ChurnConfig::default(), reporter)?;
        }
    }
    Ok(())
}

fn run_patterns(size: usize, reporter: &mut Reporter<StdoutLock<'static>>) -> Result<()> {
    reporter.banner("Allocation Patterns")?;
    for run in memory_bench::run_patterns(size, memory::allocation_count) {
        reporter.line(format_args!(
            "{:<13} sum: {}, allocations: {}, time: {:.2?}",
            run.pattern.name(),
            run.sum,
            run.allocations,
            run.elapsed
        ))?;
    }
    Ok(())
}
