// ベンチマークシステムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::BenchResult;
use super::types::{StrategyKind, Summary};
use mockall::automock;

/// ユニットの共通能力
///
/// ポリモーフィック戦略ではこのトレイトオブジェクトの背後に種別が消去される。
/// 更新パスが呼ぶのは `execute` のみで、他は観測用
pub trait Execute {
    /// 3つのフィールドの積を結果フィールドに書き込む
    fn execute(&mut self);

    /// 最後に計算された結果
    fn result(&self) -> f32;

    /// 生成元の種別インデックス
    fn variant(&self) -> usize;
}

/// ユニットを保持し一括更新するストアの抽象化トレイト
#[automock]
pub trait InstanceStore {
    /// 指定種別のユニットを1つ生成して追加
    fn add_instance(&mut self, type_index: usize) -> BenchResult<()>;

    /// 保持している全ユニットの `execute` をちょうど1回ずつ呼ぶ
    fn update_all(&mut self);

    /// 保持ユニット数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 更新順に並んだ (種別, 結果) の一覧
    fn results(&self) -> Vec<(usize, f32)>;

    /// このストアのディスパッチ戦略
    fn strategy(&self) -> StrategyKind;
}

/// 計測用時計の抽象化トレイト
#[automock]
pub trait Clock {
    /// 単調増加するナノ秒タイムスタンプ
    fn now_nanos(&self) -> u64;
}

/// 計測進捗報告の抽象化トレイト
#[automock]
pub trait ProgressReporter {
    /// 計測開始時の報告
    fn report_started(&self, strategy: StrategyKind, repetitions: usize);

    /// 進捗更新の報告
    fn report_progress(&self, completed: usize, total: usize);

    /// 計測完了時の報告
    fn report_completed(&self, summary: &Summary);

    /// 計測中断時の報告
    fn report_aborted(&self, completed: usize, reason: &str);
}

// ProgressReporter for Box<dyn ProgressReporter>
impl ProgressReporter for Box<dyn ProgressReporter> {
    fn report_started(&self, strategy: StrategyKind, repetitions: usize) {
        self.as_ref().report_started(strategy, repetitions)
    }

    fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total)
    }

    fn report_completed(&self, summary: &Summary) {
        self.as_ref().report_completed(summary)
    }

    fn report_aborted(&self, completed: usize, reason: &str) {
        self.as_ref().report_aborted(completed, reason)
    }
}
