// サービス層 - 計測を支える周辺機能
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{BenchConfig, BenchPreset, DefaultPreset, QuickPreset, StressPreset};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
