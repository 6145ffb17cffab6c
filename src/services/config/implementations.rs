// 設定管理の具象実装

use crate::catalog::TypeCatalog;
use crate::core::{BenchError, BenchResult};
use crate::harness::HarnessConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 種別インデックス上限の許容値（バケット確保量の上限）
pub const MAX_TYPES_LIMIT: usize = 1 << 20;

/// 既定シード（Mersenne Twister の既定値と同じ）
pub const DEFAULT_SEED: u64 = 5489;

/// ベンチマーク実行設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 種別インデックスの上限（0..=max_types）
    pub max_types: usize,
    /// 追加するユニット数
    pub max_instances: usize,
    /// 計測回数
    pub repetitions: usize,
    /// 計測前の空回し回数
    pub warmup: usize,
    /// 種別選択用乱数のシード
    pub seed: u64,
}

impl BenchConfig {
    pub fn new(max_types: usize, max_instances: usize, repetitions: usize) -> Self {
        Self {
            max_types,
            max_instances,
            repetitions,
            ..Self::default()
        }
    }

    pub fn with_max_types(mut self, max_types: usize) -> Self {
        self.max_types = max_types;
        self
    }

    pub fn with_max_instances(mut self, max_instances: usize) -> Self {
        self.max_instances = max_instances;
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 設定をバリデーション
    pub fn validate(&self) -> BenchResult<()> {
        if self.repetitions == 0 {
            return Err(BenchError::configuration(
                "repetitions must be at least 1",
            ));
        }
        if self.max_types > MAX_TYPES_LIMIT {
            return Err(BenchError::configuration(format!(
                "max_types {} exceeds the limit of {MAX_TYPES_LIMIT}",
                self.max_types
            )));
        }
        Ok(())
    }

    pub fn catalog(&self) -> TypeCatalog {
        TypeCatalog::new(self.max_types)
    }

    pub fn harness_config(&self) -> HarnessConfig {
        HarnessConfig::new(self.repetitions).with_warmup(self.warmup)
    }

    /// JSONファイルから設定を読み込み、検証する
    pub fn from_json_file(path: &Path) -> BenchResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BenchError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            BenchError::configuration(format!("invalid config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_types: 400,
            max_instances: 1000,
            repetitions: 1000,
            warmup: 0,
            seed: DEFAULT_SEED,
        }
    }
}
