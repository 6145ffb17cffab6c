use anyhow::Result;
use clap::Parser;

use dispatch_bench::{
    cli::{execute_compare, execute_run, Cli, Commands, CompareConfig, RunConfig},
    core::BenchError,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(error) = dispatch(cli) {
        let bench_error = error.downcast_ref::<BenchError>();
        match bench_error {
            Some(bench) => eprintln!("❌ Error [{}]: {error:#}", bench.severity().as_str()),
            None => eprintln!("❌ Error: {error:#}"),
        }

        // 中断時は収集済みの統計を失わないよう標準エラーへ出す
        if let Some(partial) = bench_error.and_then(BenchError::partial_summary) {
            eprintln!("⚠️  Partial statistics ({} samples):", partial.samples);
            for line in partial.display_lines() {
                eprintln!("   {line}");
            }
        }
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            strategy,
            json,
            sizing,
        } => execute_run(RunConfig {
            strategy,
            bench: sizing.resolve()?,
            json,
            quiet: cli.quiet,
        }),
        Commands::Compare { output, sizing } => execute_compare(CompareConfig {
            bench: sizing.resolve()?,
            output,
            quiet: cli.quiet,
        }),
    }
}
