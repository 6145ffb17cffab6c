// 設定管理機能
// 実行時設定の構築・検証と、型レベルのプリセット

pub mod implementations;
pub mod presets;

// 公開API
pub use implementations::BenchConfig;
pub use presets::{
    available_presets, config_for_preset, BenchPreset, DefaultPreset, QuickPreset, StressPreset,
};
