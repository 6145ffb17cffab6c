// 静的戦略のストア実装
// 種別ごとの同種 Vec<Unit> に保持し、直接呼び出しで更新

use crate::catalog::{TypeCatalog, Unit};
use crate::core::{BenchResult, InstanceStore, StrategyKind};

/// 種別バケットごとに直接呼び出しで更新するストア
#[derive(Debug)]
pub struct StaticStore {
    catalog: TypeCatalog,
    buckets: Vec<Vec<Unit>>,
    len: usize,
}

impl StaticStore {
    /// カタログの種別数分のバケットを確保して作成
    pub fn new(catalog: TypeCatalog) -> BenchResult<Self> {
        let variant_count = catalog.variant_count();
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(variant_count)?;
        buckets.resize_with(variant_count, Vec::new);

        Ok(Self {
            catalog,
            buckets,
            len: 0,
        })
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// 指定種別のバケット
    pub fn bucket(&self, type_index: usize) -> Option<&[Unit]> {
        self.buckets.get(type_index).map(Vec::as_slice)
    }

    /// 空でないバケットの数
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| !bucket.is_empty()).count()
    }
}

impl InstanceStore for StaticStore {
    fn add_instance(&mut self, type_index: usize) -> BenchResult<()> {
        let unit = self.catalog.construct(type_index)?;
        let bucket = &mut self.buckets[type_index];
        bucket.try_reserve(1)?;
        bucket.push(unit);
        self.len += 1;
        Ok(())
    }

    fn update_all(&mut self) {
        for bucket in self.buckets.iter_mut() {
            for unit in bucket.iter_mut() {
                unit.execute();
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn results(&self) -> Vec<(usize, f32)> {
        self.buckets
            .iter()
            .flatten()
            .map(|unit| (unit.variant(), unit.result()))
            .collect()
    }

    fn strategy(&self) -> StrategyKind {
        StrategyKind::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BenchError;

    #[test]
    fn test_one_bucket_per_variant() {
        let store = StaticStore::new(TypeCatalog::new(9)).unwrap();

        assert!(store.bucket(9).is_some());
        assert!(store.bucket(10).is_none());
        assert_eq!(store.occupied_buckets(), 0);
    }

    #[test]
    fn test_update_walks_buckets_in_ascending_order() {
        let mut store = StaticStore::new(TypeCatalog::new(4)).unwrap();
        for k in [3, 0, 2, 3, 1] {
            store.add_instance(k).unwrap();
        }

        store.update_all();

        let variants: Vec<usize> = store.results().iter().map(|(k, _)| *k).collect();
        assert_eq!(variants, vec![0, 1, 2, 3, 3]);
        assert_eq!(store.bucket(3).unwrap().len(), 2);
        assert_eq!(store.occupied_buckets(), 4);
    }

    #[test]
    fn test_small_sequence_results() {
        let mut store = StaticStore::new(TypeCatalog::new(2)).unwrap();
        for k in [0, 1, 2] {
            store.add_instance(k).unwrap();
        }
        store.update_all();

        let results: Vec<f32> = store.results().iter().map(|(_, r)| *r).collect();
        assert_eq!(results, vec![0.0, 1.0, 64.0]);
    }

    #[test]
    fn test_rejected_add_leaves_store_untouched() {
        let mut store = StaticStore::new(TypeCatalog::new(2)).unwrap();

        let result = store.add_instance(3);

        assert!(matches!(result, Err(BenchError::ContractViolation { .. })));
        assert!(store.is_empty());
        assert_eq!(store.occupied_buckets(), 0);
    }

    #[test]
    fn test_strategy_kind() {
        let store = StaticStore::new(TypeCatalog::new(0)).unwrap();
        assert_eq!(store.strategy(), StrategyKind::Static);
    }
}
