// 単一戦略の計測実験
// カタログ作成 → シード付き投入 → ハーネス実行 を1つにまとめる

use crate::core::{BenchResult, InstanceStore, ProgressReporter, StrategyKind, Summary};
use crate::harness::TimingHarness;
use crate::services::{BenchConfig, NoOpProgressReporter};
use crate::store::{DispatchStrategy, StoreFactory};
use serde::{Deserialize, Serialize};

/// 実験結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentOutcome {
    pub strategy: StrategyKind,
    pub instances: usize,
    pub variants: usize,
    pub summary: Summary,
}

/// 戦略 `S` で設定どおりの実験を行う
#[derive(Debug)]
pub struct Experiment<S: DispatchStrategy, R: ProgressReporter = NoOpProgressReporter> {
    config: BenchConfig,
    harness: TimingHarness<R>,
    factory: StoreFactory<S>,
}

impl<S: DispatchStrategy> Experiment<S, NoOpProgressReporter> {
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        Self::with_reporter(config, NoOpProgressReporter::new())
    }
}

impl<S: DispatchStrategy, R: ProgressReporter> Experiment<S, R> {
    /// 設定を検証してから実験を構築
    pub fn with_reporter(config: BenchConfig, reporter: R) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self {
            harness: TimingHarness::with_reporter(config.harness_config(), reporter),
            config,
            factory: StoreFactory::new(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// 設定のシードで投入済みのストアを作成
    pub fn prepare(&self) -> BenchResult<S::Store> {
        self.factory.create_populated(
            self.config.catalog(),
            self.config.max_instances,
            self.config.seed,
        )
    }

    /// 実験を実行し、計測後のストアも返す
    pub fn run_with_store(&self) -> BenchResult<(S::Store, ExperimentOutcome)> {
        let mut store = self.prepare()?;
        let summary = self.harness.run_configured(&mut store)?;

        let outcome = ExperimentOutcome {
            strategy: S::KIND,
            instances: store.len(),
            variants: self.config.catalog().variant_count(),
            summary,
        };
        Ok((store, outcome))
    }

    pub fn run(&self) -> BenchResult<ExperimentOutcome> {
        self.run_with_store().map(|(_, outcome)| outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BenchError;
    use crate::store::{Polymorphic, Static};

    fn small_config() -> BenchConfig {
        BenchConfig::new(12, 40, 8).with_seed(11)
    }

    #[test]
    fn test_experiment_outcome_shape() {
        let outcome = Experiment::<Static>::new(small_config())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(outcome.strategy, StrategyKind::Static);
        assert_eq!(outcome.instances, 40);
        assert_eq!(outcome.variants, 13);
        assert_eq!(outcome.summary.samples, 8);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let result = Experiment::<Polymorphic>::new(small_config().with_repetitions(0));
        assert!(matches!(result, Err(BenchError::Configuration { .. })));
    }

    #[test]
    fn test_store_is_updated_after_run() {
        let experiment = Experiment::<Polymorphic>::new(small_config()).unwrap();
        let (store, _) = experiment.run_with_store().unwrap();

        for (variant, result) in store.results() {
            assert_eq!(result, (variant as f32).powi(6));
        }
    }
}
