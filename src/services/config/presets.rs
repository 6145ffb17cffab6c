//! コンパイル時設定プリセット
//!
//! 規模を型レベルの定数で表現し、名前から選べるようにする

use super::implementations::BenchConfig;

/// 型レベル設定 - コンパイル時規模表現
pub trait BenchPreset {
    /// 設定名（コンパイル時文字列）
    const NAME: &'static str;

    /// 説明（コンパイル時文字列）
    const DESCRIPTION: &'static str;

    const MAX_TYPES: usize;
    const MAX_INSTANCES: usize;
    const REPETITIONS: usize;
    const WARMUP: usize = 0;

    fn config() -> BenchConfig {
        BenchConfig::new(Self::MAX_TYPES, Self::MAX_INSTANCES, Self::REPETITIONS)
            .with_warmup(Self::WARMUP)
    }
}

/// 既定規模（400種別・1000ユニット・1000回）
pub struct DefaultPreset;

impl BenchPreset for DefaultPreset {
    const NAME: &'static str = "default";
    const DESCRIPTION: &'static str = "標準の比較実験規模";
    const MAX_TYPES: usize = 400;
    const MAX_INSTANCES: usize = 1000;
    const REPETITIONS: usize = 1000;
}

/// 動作確認用の小規模設定
pub struct QuickPreset;

impl BenchPreset for QuickPreset {
    const NAME: &'static str = "quick";
    const DESCRIPTION: &'static str = "スモークテスト用軽量設定";
    const MAX_TYPES: usize = 16;
    const MAX_INSTANCES: usize = 64;
    const REPETITIONS: usize = 20;
}

/// キャッシュに収まらない規模の設定
pub struct StressPreset;

impl BenchPreset for StressPreset {
    const NAME: &'static str = "stress";
    const DESCRIPTION: &'static str = "大規模・空回しあり設定";
    const MAX_TYPES: usize = 4000;
    const MAX_INSTANCES: usize = 100_000;
    const REPETITIONS: usize = 500;
    const WARMUP: usize = 50;
}

/// 名前からプリセット設定を解決
pub fn config_for_preset(name: &str) -> Option<BenchConfig> {
    if name == DefaultPreset::NAME {
        Some(DefaultPreset::config())
    } else if name == QuickPreset::NAME {
        Some(QuickPreset::config())
    } else if name == StressPreset::NAME {
        Some(StressPreset::config())
    } else {
        None
    }
}

/// 利用可能なプリセット名
pub fn available_presets() -> [&'static str; 3] {
    [DefaultPreset::NAME, QuickPreset::NAME, StressPreset::NAME]
}
