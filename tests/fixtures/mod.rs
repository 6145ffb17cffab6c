// 統合テスト共通のテストデータとテストダブル
#![allow(dead_code)]

use dispatch_bench::{BenchResult, InstanceStore, StrategyKind};

/// 種別 k のユニットが update_all 後に持つ値（k^6）
pub fn expected_result(k: usize) -> f32 {
    let square = (k * k) as f32;
    square * square * square
}

/// 指定パスで panic するストア
pub struct PanickingStore {
    pub passes: usize,
    pub panic_on: usize,
    pub units: usize,
}

impl PanickingStore {
    pub fn new(panic_on: usize) -> Self {
        Self {
            passes: 0,
            panic_on,
            units: 1,
        }
    }
}

impl InstanceStore for PanickingStore {
    fn add_instance(&mut self, _type_index: usize) -> BenchResult<()> {
        self.units += 1;
        Ok(())
    }

    fn update_all(&mut self) {
        if self.passes == self.panic_on {
            panic!("unit update failed on pass {}", self.passes);
        }
        self.passes += 1;
    }

    fn len(&self) -> usize {
        self.units
    }

    fn results(&self) -> Vec<(usize, f32)> {
        Vec::new()
    }

    fn strategy(&self) -> StrategyKind {
        StrategyKind::Polymorphic
    }
}
