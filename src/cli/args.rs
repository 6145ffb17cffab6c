use crate::services::config::{available_presets, config_for_preset};
use crate::services::BenchConfig;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Measures the cost of dynamic versus static dispatch over a catalog of unit variants")]
#[command(version)]
pub struct Cli {
    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time repeated update passes with one dispatch strategy
    Run {
        /// Dispatch strategy to measure
        #[arg(short, long, value_enum, default_value = "polymorphic")]
        strategy: StrategyArg,

        /// Print the outcome as JSON instead of labeled lines
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        sizing: SizingArgs,
    },

    /// Time both strategies with the same unit sequence and compare them
    Compare {
        /// Write the comparison report as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        sizing: SizingArgs,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Polymorphic,
    Static,
}

/// Experiment sizing shared by all subcommands
#[derive(Args, Debug, Default, Clone)]
pub struct SizingArgs {
    /// Configuration preset (default, quick, stress)
    #[arg(short = 'p', long, conflicts_with = "config")]
    pub preset: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Highest variant index (variants are 0..=max_types)
    #[arg(long)]
    pub max_types: Option<usize>,

    /// Number of units to add
    #[arg(short = 'n', long)]
    pub instances: Option<usize>,

    /// Number of timed update passes
    #[arg(short, long)]
    pub repetitions: Option<usize>,

    /// Untimed passes before sampling
    #[arg(short, long)]
    pub warmup: Option<usize>,

    /// Seed for the variant selection
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SizingArgs {
    /// プリセット / 設定ファイル / 既定値 を基に個別指定を上書きして検証
    pub fn resolve(&self) -> Result<BenchConfig> {
        let mut config = match (&self.preset, &self.config) {
            (Some(name), _) => config_for_preset(name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown preset: {name}. Available: {}",
                    available_presets().join(", ")
                )
            })?,
            (None, Some(path)) => BenchConfig::from_json_file(path)?,
            (None, None) => BenchConfig::default(),
        };

        if let Some(max_types) = self.max_types {
            config = config.with_max_types(max_types);
        }
        if let Some(instances) = self.instances {
            config = config.with_max_instances(instances);
        }
        if let Some(repetitions) = self.repetitions {
            config = config.with_repetitions(repetitions);
        }
        if let Some(warmup) = self.warmup {
            config = config.with_warmup(warmup);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
