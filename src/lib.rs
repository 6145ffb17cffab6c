//! 動的ディスパッチと静的ディスパッチのマイクロベンチマーク
//!
//! 種別インデックスだけが異なるユニット群をストアに投入し、
//! `update_all` の1パスあたりの所要時間を戦略ごとに計測する

pub mod benchmarks;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod harness;
pub mod profiler;
pub mod services;
pub mod store;

pub use crate::benchmarks::{ComparisonReport, Experiment, ExperimentOutcome, PerformanceComparison};
pub use crate::catalog::{TypeCatalog, Unit};
pub use crate::core::{BenchError, BenchResult, Execute, InstanceStore, StrategyKind, Summary};
pub use crate::harness::{HarnessConfig, TimingHarness};
pub use crate::profiler::{MonotonicClock, Profiler, TimingScope};
pub use crate::services::BenchConfig;
pub use crate::store::{
    DispatchStrategy, Polymorphic, PolymorphicStore, Static, StaticStore, StoreFactory,
};
