// 計測結果に関連するデータ型定義

use super::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};

/// ディスパッチ戦略の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// 共通トレイトオブジェクト経由の間接呼び出し
    Polymorphic,
    /// 種別ごとの同種コンテナに対する直接呼び出し
    Static,
}

impl StrategyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Polymorphic => "polymorphic",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 計測サンプルの統計サマリー
///
/// 全ての値はナノ秒単位。標準偏差は母標準偏差（nで割る）を採用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub lowest: f64,
    pub highest: f64,
    pub mean: f64,
    pub standard_deviation: f64,
    pub median: f64,
    pub samples: usize,
}

impl Summary {
    /// ナノ秒サンプル列から統計を計算
    ///
    /// 中央値は奇数個なら中央の値、偶数個なら中央2値の平均
    pub fn from_samples(samples: &[u64]) -> BenchResult<Self> {
        if samples.is_empty() {
            return Err(BenchError::EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let len = sorted.len();
        let lowest = sorted[0] as f64;
        let highest = sorted[len - 1] as f64;

        let sum: u128 = sorted.iter().map(|&s| u128::from(s)).sum();
        // 丸め誤差で範囲外に出ないよう最小値・最大値で挟む
        let mean = (sum as f64 / len as f64).clamp(lowest, highest);

        let median = if len % 2 == 0 {
            (sorted[len / 2 - 1] as f64 + sorted[len / 2] as f64) / 2.0
        } else {
            sorted[len / 2] as f64
        };

        let variance = sorted
            .iter()
            .map(|&s| {
                let diff = s as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / len as f64;

        Ok(Self {
            lowest,
            highest,
            mean,
            standard_deviation: variance.sqrt(),
            median,
            samples: len,
        })
    }

    /// 変動係数（標準偏差 / 平均）
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean.abs() < f64::EPSILON {
            return 0.0;
        }
        self.standard_deviation / self.mean
    }

    /// 標準出力向けのラベル付き5行
    pub fn display_lines(&self) -> [String; 5] {
        [
            format!("Lowest time: {}", self.lowest),
            format!("Highest time: {}", self.highest),
            format!("Mean: {}", self.mean),
            format!("Standard deviation: {}", self.standard_deviation),
            format!("Median: {}", self.median),
        ]
    }
}
