// ポリモーフィック戦略のストア実装
// 全ユニットを Box<dyn Execute> の単一シーケンスで保持

use crate::catalog::TypeCatalog;
use crate::core::{BenchResult, Execute, InstanceStore, StrategyKind};

/// トレイトオブジェクト経由で更新するストア
pub struct PolymorphicStore {
    catalog: TypeCatalog,
    handles: Vec<Box<dyn Execute>>,
}

impl PolymorphicStore {
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            catalog,
            handles: Vec::new(),
        }
    }

    /// 予定ユニット数分の領域を事前確保して作成
    pub fn try_with_capacity(catalog: TypeCatalog, capacity: usize) -> BenchResult<Self> {
        let mut handles = Vec::new();
        handles.try_reserve_exact(capacity)?;
        Ok(Self { catalog, handles })
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }
}

impl std::fmt::Debug for PolymorphicStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolymorphicStore")
            .field("catalog", &self.catalog)
            .field("len", &self.handles.len())
            .finish()
    }
}

impl InstanceStore for PolymorphicStore {
    fn add_instance(&mut self, type_index: usize) -> BenchResult<()> {
        let unit = self.catalog.construct(type_index)?;
        self.handles.try_reserve(1)?;
        self.handles.push(Box::new(unit));
        Ok(())
    }

    fn update_all(&mut self) {
        for handle in self.handles.iter_mut() {
            handle.execute();
        }
    }

    fn len(&self) -> usize {
        self.handles.len()
    }

    fn results(&self) -> Vec<(usize, f32)> {
        self.handles
            .iter()
            .map(|handle| (handle.variant(), handle.result()))
            .collect()
    }

    fn strategy(&self) -> StrategyKind {
        StrategyKind::Polymorphic
    }
}
