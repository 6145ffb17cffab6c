use crate::benchmarks::Experiment;
use crate::cli::args::StrategyArg;
use crate::services::{BenchConfig, ConsoleProgressReporter};
use crate::store::{DispatchStrategy, Polymorphic, Static};
use anyhow::Result;

/// Configuration struct for the run command
pub struct RunConfig {
    pub strategy: StrategyArg,
    pub bench: BenchConfig,
    pub json: bool,
    pub quiet: bool,
}

/// Execute run command, resolving the strategy to a monomorphized entry point once
pub fn execute_run(config: RunConfig) -> Result<()> {
    match config.strategy {
        StrategyArg::Polymorphic => execute_run_with_strategy::<Polymorphic>(config),
        StrategyArg::Static => execute_run_with_strategy::<Static>(config),
    }
}

/// Generic run execution with static dispatch
fn execute_run_with_strategy<S: DispatchStrategy>(config: RunConfig) -> Result<()> {
    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    if !config.quiet {
        eprintln!("🔍 計測開始");
        eprintln!("   - 戦略: {}", S::NAME);
        eprintln!(
            "   - 種別数: {}, ユニット数: {}",
            config.bench.catalog().variant_count(),
            config.bench.max_instances
        );
        eprintln!(
            "   - 計測回数: {} (空回し {}), シード: {}",
            config.bench.repetitions, config.bench.warmup, config.bench.seed
        );
    }

    let experiment = Experiment::<S, _>::with_reporter(config.bench, reporter)?;
    let outcome = experiment.run()?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        for line in outcome.summary.display_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
