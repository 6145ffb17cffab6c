//! ディスパッチ戦略間のパフォーマンス比較
//!
//! 同じシード（＝同じ種別列）で両戦略を計測し、結果の一致確認と
//! レポート生成を行う

use super::experiment::{Experiment, ExperimentOutcome};
use crate::core::{BenchError, BenchResult, ProgressReporter};
use crate::services::{BenchConfig, NoOpProgressReporter};
use crate::store::{sorted_results, Polymorphic, Static};
use serde::{Deserialize, Serialize};

/// 計測対象についての注記
pub const MEASUREMENT_NOTE: &str = "units are one record type parameterized by a runtime index; \
     the comparison measures vtable indirection against direct calls, not dispatch over \
     distinct compile-time types";

/// 比較レポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: String,
    pub config: BenchConfig,
    pub polymorphic: ExperimentOutcome,
    pub static_dispatch: ExperimentOutcome,
    /// 平均時間の比（polymorphic / static）
    pub slowdown: Option<f64>,
    /// 両戦略の計算結果が多重集合として一致したか
    pub results_match: bool,
    pub notes: Vec<String>,
}

impl ComparisonReport {
    /// 高速だった戦略名
    pub fn faster_strategy(&self) -> &'static str {
        if self.polymorphic.summary.mean <= self.static_dispatch.summary.mean {
            self.polymorphic.strategy.as_str()
        } else {
            self.static_dispatch.strategy.as_str()
        }
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 ディスパッチ戦略比較サマリー");
        println!("{}", "=".repeat(60));
        println!(
            "   種別数: {}, ユニット数: {}, 計測回数: {}",
            self.polymorphic.variants, self.polymorphic.instances, self.config.repetitions
        );

        for outcome in [&self.polymorphic, &self.static_dispatch] {
            println!("🎯 {}", outcome.strategy);
            for line in outcome.summary.display_lines() {
                println!("   {line}");
            }
            println!();
        }

        match self.slowdown {
            Some(ratio) => println!("🏆 Faster: {} (polymorphic/static = {ratio:.3})", self.faster_strategy()),
            None => println!("🏆 Faster: {}", self.faster_strategy()),
        }
        if self.results_match {
            println!("✅ 両戦略の計算結果は一致しています。");
        } else {
            println!("⚠️  両戦略の計算結果が一致しません。");
        }
        for note in &self.notes {
            println!("📝 {note}");
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &std::path::Path) -> BenchResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BenchError::persistence(e.into()))?;
        std::fs::write(path, json).map_err(|e| {
            BenchError::persistence(anyhow::anyhow!("cannot write {}: {e}", path.display()))
        })?;

        log::info!("comparison report written to {}", path.display());
        Ok(())
    }
}

/// パフォーマンス比較テストスイート
#[derive(Debug)]
pub struct PerformanceComparison<R: ProgressReporter + Clone = NoOpProgressReporter> {
    config: BenchConfig,
    reporter: R,
}

impl PerformanceComparison<NoOpProgressReporter> {
    pub fn new(config: BenchConfig) -> Self {
        Self::with_reporter(config, NoOpProgressReporter::new())
    }
}

impl<R: ProgressReporter + Clone> PerformanceComparison<R> {
    pub fn with_reporter(config: BenchConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    /// 両戦略を計測して比較レポートを作成
    pub fn run(&self) -> BenchResult<ComparisonReport> {
        let polymorphic =
            Experiment::<Polymorphic, R>::with_reporter(self.config.clone(), self.reporter.clone())?;
        let static_dispatch =
            Experiment::<Static, R>::with_reporter(self.config.clone(), self.reporter.clone())?;

        let (poly_store, poly_outcome) = polymorphic.run_with_store()?;
        let (static_store, static_outcome) = static_dispatch.run_with_store()?;

        let results_match = sorted_results(&poly_store) == sorted_results(&static_store);
        if !results_match {
            log::error!("polymorphic and static stores computed different results");
        }

        let slowdown = (static_outcome.summary.mean > 0.0)
            .then(|| poly_outcome.summary.mean / static_outcome.summary.mean);

        Ok(ComparisonReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            config: self.config.clone(),
            polymorphic: poly_outcome,
            static_dispatch: static_outcome,
            slowdown,
            results_match,
            notes: vec![MEASUREMENT_NOTE.to_string()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StrategyKind;

    fn small_config() -> BenchConfig {
        BenchConfig::new(30, 120, 10).with_seed(2024)
    }

    #[test]
    fn test_comparison_runs_both_strategies() {
        let report = PerformanceComparison::new(small_config()).run().unwrap();

        assert_eq!(report.polymorphic.strategy, StrategyKind::Polymorphic);
        assert_eq!(report.static_dispatch.strategy, StrategyKind::Static);
        assert_eq!(report.polymorphic.instances, 120);
        assert_eq!(report.static_dispatch.instances, 120);
        assert!(report.results_match);
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn test_faster_strategy_is_one_of_the_two() {
        let report = PerformanceComparison::new(small_config()).run().unwrap();
        assert!(["polymorphic", "static"].contains(&report.faster_strategy()));
    }

    #[test]
    fn test_export_json_report() {
        let report = PerformanceComparison::new(small_config()).run().unwrap();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");

        report.export_json_report(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: ComparisonReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.polymorphic, report.polymorphic);
        assert_eq!(parsed.config, report.config);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let report = PerformanceComparison::new(small_config()).run().unwrap();
        let path = std::path::Path::new("/nonexistent/dir/report.json");

        let result = report.export_json_report(path);

        assert!(matches!(result, Err(BenchError::Persistence { .. })));
    }
}
