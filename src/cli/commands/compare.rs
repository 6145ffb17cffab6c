use crate::benchmarks::PerformanceComparison;
use crate::services::{BenchConfig, ConsoleProgressReporter};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration struct for the compare command
pub struct CompareConfig {
    pub bench: BenchConfig,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Execute compare command: both strategies, same seed, one report
pub fn execute_compare(config: CompareConfig) -> Result<()> {
    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let comparison = PerformanceComparison::with_reporter(config.bench, reporter);
    let report = comparison.run()?;

    report.print_summary();

    if let Some(path) = &config.output {
        report.export_json_report(path)?;
        println!("📄 詳細レポートを出力しました: {}", path.display());
    }

    if !report.results_match {
        anyhow::bail!("strategies produced different unit results");
    }

    Ok(())
}
