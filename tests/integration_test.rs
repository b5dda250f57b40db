use gc_pressure::churn;
use gc_pressure::lessons::{fib, ownership, refcount};
use gc_pressure::pipeline::{self, expected_result};
use gc_pressure::records;
use gc_pressure::{BenchError, ChurnConfig, PipelineConfig, PressureConfig, Reporter};

fn output(reporter: Reporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_pipeline_default_sizes() {
    let mut reporter = Reporter::new(Vec::new());
    let reports = pipeline::run(&PipelineConfig::default(), &mut reporter).unwrap();

    let results: Vec<i64> = reports.iter().map(|r| r.result).collect();
    assert_eq!(results, vec![499_000, 49_990_000, 4_999_900_000]);
    for report in &reports {
        assert_eq!(report.result, expected_result(report.size));
    }

    let text = output(reporter);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Size: 1000, Result: 499000, Time: "));
    assert!(lines[2].starts_with("Size: 100000, Result: 4999900000, Time: "));
    assert!(lines.iter().all(|l| l.ends_with(" ms")));
}

#[test]
fn test_pipeline_is_deterministic() {
    let config = PipelineConfig::new(vec![1_000, 2_001]).unwrap();
    let first = pipeline::run(&config, &mut Reporter::new(Vec::new())).unwrap();
    let second = pipeline::run(&config, &mut Reporter::new(Vec::new())).unwrap();
    let results = |r: &[pipeline::SizeReport]| r.iter().map(|s| s.result).collect::<Vec<_>>();
    assert_eq!(results(&first), results(&second));
}

#[test]
fn test_record_samples() {
    let config = PressureConfig::new(250, 10_000, 100).unwrap();
    let mut reporter = Reporter::new(Vec::new());
    let summary = records::run(&config, &mut reporter).unwrap();

    let iterations: Vec<usize> = summary.samples.iter().map(|s| s.iteration).collect();
    assert_eq!(iterations, vec![0, 100, 200]);
    assert!(summary.samples.iter().all(|s| s.total == 74_992_500.0));
    assert_eq!(summary.records_created, 2_500_000);

    for pair in summary.samples.windows(2) {
        assert!(pair[1].elapsed >= pair[0].elapsed);
    }
    assert!(summary.elapsed >= summary.samples[2].elapsed);

    let text = output(reporter);
    assert_eq!(text.matches("Iteration 100: 74992500.00\n").count(), 1);
    assert_eq!(text.matches("Memory used: ").count(), 3);
    assert!(text.lines().last().unwrap().starts_with("Total time: "));
}

#[test]
fn test_single_iteration_is_sampled() {
    let config = PressureConfig::new(1, 3, 100).unwrap();
    let summary = records::run(&config, &mut Reporter::new(Vec::new())).unwrap();
    assert_eq!(summary.samples.len(), 1);
    assert_eq!(summary.samples[0].total, 4.5);
}

#[test]
fn test_churn_summary() {
    let config = ChurnConfig::new(5, 10_000).unwrap();
    let mut reporter = Reporter::new(Vec::new());
    let summary = churn::run(&config, &mut reporter).unwrap();
    assert_eq!(summary.strings_created, 50_000);
    assert_eq!(summary.bytes_per_batch, 108_890);
    assert!(output(reporter).contains("Strings per batch: 10000 (108890 bytes)"));
}

#[test]
fn test_classic_and_zero_cost() {
    let mut reporter = Reporter::new(Vec::new());
    assert_eq!(records::run_classic(&mut reporter).unwrap(), 749_250.0);

    let report = records::run_zero_cost(1_000_000, &mut reporter).unwrap();
    assert_eq!(report.high_level, 374_999_250_000.0);
    assert_eq!(report.high_level, report.low_level);

    let text = output(reporter);
    assert!(text.contains("Classic approach total: 749250.00"));
    assert!(text.contains("High-level result: 374999250000.00"));
}

#[test]
fn test_lessons() {
    let mut reporter = Reporter::new(Vec::new());
    assert_eq!(refcount::run(&mut reporter).unwrap(), [1, 2, 1]);
    assert_eq!(ownership::run(&mut reporter).unwrap().name, "test");

    let (slow, fast) = fib::run(&[10, 20, 25], &mut reporter).unwrap();
    let values = |t: &[fib::FibTiming]| t.iter().map(|f| f.value).collect::<Vec<_>>();
    assert_eq!(values(&slow), vec![55, 6765, 75_025]);
    assert_eq!(values(&slow), values(&fast));

    let text = output(reporter);
    assert!(text.contains("Reference count after clone: 2"));
    assert!(text.contains("  fib(20) = 6765 | time: "));
}

#[test]
fn test_invalid_config() {
    assert!(matches!(PipelineConfig::new(vec![]), Err(BenchError::NoSizes)));
    assert!(matches!(
        PressureConfig::new(0, 1, 1),
        Err(BenchError::ZeroCount("iterations"))
    ));
}
