//! ユニットストアとコンパイル時ディスパッチ戦略
//!
//! 戦略は型レベルで選択し、実行時の分岐を更新ループに持ち込まない：
//! - DispatchStrategy: 戦略ごとのストア型をコンパイル時に確定
//! - StoreFactory: PhantomDataのみを持つゼロサイズのストア生成器
//! - populate: シード付き乱数で種別を一様に選んでユニットを追加

pub mod polymorphic;
pub mod static_store;

pub use polymorphic::PolymorphicStore;
pub use static_store::StaticStore;

use crate::catalog::TypeCatalog;
use crate::core::{BenchResult, InstanceStore, StrategyKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::marker::PhantomData;

/// 型レベルのディスパッチ戦略
pub trait DispatchStrategy: Sized + 'static {
    type Store: InstanceStore;

    /// 戦略名（コンパイル時文字列）
    const NAME: &'static str;

    const KIND: StrategyKind;

    /// カタログに対応する空のストアを作成
    fn create_store(catalog: TypeCatalog) -> BenchResult<Self::Store>;

    /// 追加予定のユニット数が分かっている場合の作成
    fn create_store_with_capacity(
        catalog: TypeCatalog,
        _capacity: usize,
    ) -> BenchResult<Self::Store> {
        Self::create_store(catalog)
    }
}

/// 仮想呼び出し戦略
#[derive(Debug, Clone, Copy, Default)]
pub struct Polymorphic;

impl DispatchStrategy for Polymorphic {
    type Store = PolymorphicStore;
    const NAME: &'static str = "polymorphic";
    const KIND: StrategyKind = StrategyKind::Polymorphic;

    fn create_store(catalog: TypeCatalog) -> BenchResult<Self::Store> {
        Ok(PolymorphicStore::new(catalog))
    }

    fn create_store_with_capacity(
        catalog: TypeCatalog,
        capacity: usize,
    ) -> BenchResult<Self::Store> {
        PolymorphicStore::try_with_capacity(catalog, capacity)
    }
}

/// 直接呼び出し戦略
#[derive(Debug, Clone, Copy, Default)]
pub struct Static;

impl DispatchStrategy for Static {
    type Store = StaticStore;
    const NAME: &'static str = "static";
    const KIND: StrategyKind = StrategyKind::Static;

    fn create_store(catalog: TypeCatalog) -> BenchResult<Self::Store> {
        StaticStore::new(catalog)
    }
}

/// 静的ストアファクトリ - コンパイル時に戦略を解決
///
/// PhantomDataのみを保持するため実行時のサイズはゼロ
#[derive(Debug)]
pub struct StoreFactory<S: DispatchStrategy> {
    _strategy: PhantomData<S>,
}

impl<S: DispatchStrategy> StoreFactory<S> {
    pub const fn new() -> Self {
        Self {
            _strategy: PhantomData,
        }
    }

    pub const fn name() -> &'static str {
        S::NAME
    }

    pub const fn kind() -> StrategyKind {
        S::KIND
    }

    pub fn create_store(&self, catalog: TypeCatalog) -> BenchResult<S::Store> {
        S::create_store(catalog)
    }

    /// `count` 個のユニットを `seed` から決まる種別列で追加したストアを作成
    pub fn create_populated(
        &self,
        catalog: TypeCatalog,
        count: usize,
        seed: u64,
    ) -> BenchResult<S::Store> {
        let mut store = S::create_store_with_capacity(catalog, count)?;
        let mut rng = StdRng::seed_from_u64(seed);
        populate(&mut store, &catalog, count, &mut rng)?;
        Ok(store)
    }
}

impl<S: DispatchStrategy> Default for StoreFactory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DispatchStrategy> Clone for StoreFactory<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// 種別インデックスを `0..=max_index` から一様に `count` 回引いて追加
///
/// 最初のエラーで中断し、そのまま呼び出し元へ返す
pub fn populate<T, R>(
    store: &mut T,
    catalog: &TypeCatalog,
    count: usize,
    rng: &mut R,
) -> BenchResult<()>
where
    T: InstanceStore + ?Sized,
    R: Rng,
{
    for _ in 0..count {
        let type_index = rng.gen_range(0..=catalog.max_index());
        store.add_instance(type_index)?;
    }

    log::debug!(
        "populated {} store with {count} units ({} variants)",
        store.strategy(),
        catalog.variant_count()
    );
    Ok(())
}

/// 種別列から決まる結果の多重集合（ソート済み）
pub fn sorted_results<T: InstanceStore + ?Sized>(store: &T) -> Vec<(usize, f32)> {
    let mut results = store.results();
    results.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockInstanceStore;
    use crate::core::BenchError;
    use mockall::predicate::*;

    #[test]
    fn test_zero_runtime_overhead() {
        assert_eq!(std::mem::size_of::<StoreFactory<Polymorphic>>(), 0);
        assert_eq!(std::mem::size_of::<StoreFactory<Static>>(), 0);
    }

    #[test]
    fn test_const_creation() {
        const _FACTORY: StoreFactory<Static> = StoreFactory::new();
        assert_eq!(StoreFactory::<Static>::name(), "static");
        assert_eq!(StoreFactory::<Polymorphic>::kind(), StrategyKind::Polymorphic);
    }

    #[test]
    fn test_populate_issues_requested_count() {
        let catalog = TypeCatalog::new(10);
        let mut mock = MockInstanceStore::new();
        mock.expect_add_instance()
            .with(le(10usize))
            .times(25)
            .returning(|_| Ok(()));
        mock.expect_strategy().return_const(StrategyKind::Static);

        let mut rng = StdRng::seed_from_u64(7);
        populate(&mut mock, &catalog, 25, &mut rng).unwrap();
    }

    #[test]
    fn test_populate_propagates_first_error() {
        let catalog = TypeCatalog::new(3);
        let mut mock = MockInstanceStore::new();
        mock.expect_add_instance()
            .times(1)
            .returning(|_| Err(BenchError::resource_exhaustion("memory", "test")));

        let mut rng = StdRng::seed_from_u64(1);
        let result = populate(&mut mock, &catalog, 10, &mut rng);

        assert!(matches!(result, Err(BenchError::ResourceExhaustion { .. })));
    }

    #[test]
    fn test_same_seed_same_population() {
        let catalog = TypeCatalog::new(50);
        let a = StoreFactory::<Polymorphic>::new()
            .create_populated(catalog, 200, 42)
            .unwrap();
        let b = StoreFactory::<Polymorphic>::new()
            .create_populated(catalog, 200, 42)
            .unwrap();

        assert_eq!(a.results(), b.results());
    }

    #[test]
    fn test_polymorphic_population_reserves_up_front() {
        let catalog = TypeCatalog::new(4);

        let result = StoreFactory::<Polymorphic>::new().create_populated(catalog, usize::MAX, 1);

        assert!(matches!(result, Err(BenchError::ResourceExhaustion { .. })));
    }

    #[test]
    fn test_populated_count_matches_both_strategies() {
        let catalog = TypeCatalog::new(400);
        let poly = StoreFactory::<Polymorphic>::new()
            .create_populated(catalog, 1000, 5489)
            .unwrap();
        let stat = StoreFactory::<Static>::new()
            .create_populated(catalog, 1000, 5489)
            .unwrap();

        assert_eq!(poly.len(), 1000);
        assert_eq!(stat.len(), 1000);
    }

    #[test]
    fn test_strategies_agree_on_result_multiset() {
        let catalog = TypeCatalog::new(20);
        let mut poly = StoreFactory::<Polymorphic>::new()
            .create_populated(catalog, 300, 9)
            .unwrap();
        let mut stat = StoreFactory::<Static>::new()
            .create_populated(catalog, 300, 9)
            .unwrap();

        poly.update_all();
        stat.update_all();

        assert_eq!(sorted_results(&poly), sorted_results(&stat));
    }
}
