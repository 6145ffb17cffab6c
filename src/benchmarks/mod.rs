//! 実験とパフォーマンス比較モジュール
//!
//! 静的ディスパッチと動的ディスパッチの性能比較を提供

pub mod experiment;
pub mod performance_comparison;

pub use experiment::{Experiment, ExperimentOutcome};
pub use performance_comparison::{ComparisonReport, PerformanceComparison, MEASUREMENT_NOTE};
