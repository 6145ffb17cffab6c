//! ユニット種別カタログ
//!
//! 種別ごとに別の型を生成する代わりに、種別インデックスを実行時に保持する
//! 単一のユニット型で全種別を表現する：
//! - 3つのフィールドはインデックスの2乗で初期化
//! - `execute` はフィールドの積を結果に書き込むだけの全域関数
//! - カタログは有効なインデックス範囲 `0..=max_index` を管理

use crate::core::{BenchError, BenchResult, Execute};

/// 種別インデックスから生成されるユニット
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    variant: usize,
    x: f32,
    y: f32,
    z: f32,
    result: f32,
}

impl Unit {
    /// 種別 `variant` のユニットを作成（各フィールド = variant²）
    pub fn new(variant: usize) -> Self {
        let index = variant as f64;
        let seed = (index * index) as f32;
        Self {
            variant,
            x: seed,
            y: seed,
            z: seed,
            result: 0.0,
        }
    }

    /// 非仮想版の更新処理
    #[inline]
    pub fn execute(&mut self) {
        self.result = self.x * self.y * self.z;
    }

    #[inline]
    pub fn result(&self) -> f32 {
        self.result
    }

    #[inline]
    pub fn variant(&self) -> usize {
        self.variant
    }

    /// 初期化時の各フィールド値
    pub fn fields(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }
}

impl Execute for Unit {
    fn execute(&mut self) {
        Unit::execute(self)
    }

    fn result(&self) -> f32 {
        Unit::result(self)
    }

    fn variant(&self) -> usize {
        Unit::variant(self)
    }
}

/// 有効な種別インデックスの範囲を管理するカタログ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCatalog {
    max_index: usize,
}

impl TypeCatalog {
    /// `0..=max_index` の種別を持つカタログを作成
    pub const fn new(max_index: usize) -> Self {
        Self { max_index }
    }

    pub const fn max_index(&self) -> usize {
        self.max_index
    }

    /// 種別数（上限インデックスを含むため max_index + 1）
    pub const fn variant_count(&self) -> usize {
        self.max_index.saturating_add(1)
    }

    pub const fn contains(&self, type_index: usize) -> bool {
        type_index <= self.max_index
    }

    /// インデックスを検証し、範囲外なら契約違反を返す
    pub fn validate(&self, type_index: usize) -> BenchResult<usize> {
        if self.contains(type_index) {
            Ok(type_index)
        } else {
            Err(BenchError::contract_violation(
                "add_instance",
                format!(
                    "type index {type_index} is outside 0..={}",
                    self.max_index
                ),
            ))
        }
    }

    /// 検証済みインデックスからユニットを生成
    pub fn construct(&self, type_index: usize) -> BenchResult<Unit> {
        self.validate(type_index).map(Unit::new)
    }
}
