// 進捗監視の具象実装

use crate::core::{ProgressReporter, StrategyKind, Summary};

/// コンソール出力による進捗報告実装
///
/// 進捗は標準エラーへ出す（標準出力はサマリー専用）
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_started(&self, strategy: StrategyKind, repetitions: usize) {
        if !self.quiet {
            eprintln!("🚀 Starting {strategy} dispatch run: {repetitions} repetitions...");
        }
    }

    fn report_progress(&self, completed: usize, total: usize) {
        // 計測ループ内で呼ばれるため、出力は10%刻みに間引く
        let step = (total / 10).max(1);
        if !self.quiet && (completed % step == 0 || completed == total) {
            let percentage = (completed as f64 / total as f64) * 100.0;
            eprintln!("📊 Progress: {completed}/{total} ({percentage:.1}%)");
        }
    }

    fn report_completed(&self, summary: &Summary) {
        if !self.quiet {
            eprintln!(
                "✅ Completed! Samples: {}, Mean: {:.1}ns",
                summary.samples, summary.mean
            );
        }
    }

    fn report_aborted(&self, completed: usize, reason: &str) {
        if !self.quiet {
            eprintln!("❌ Aborted after {completed} repetitions: {reason}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_started(&self, _strategy: StrategyKind, _repetitions: usize) {
        // 何もしない
    }

    fn report_progress(&self, _completed: usize, _total: usize) {
        // 何もしない
    }

    fn report_completed(&self, _summary: &Summary) {
        // 何もしない
    }

    fn report_aborted(&self, _completed: usize, _reason: &str) {
        // 何もしない
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_progress_reporter() {
        // 出力キャプチャは複雑なため、基本的な呼び出しテストのみ
        let reporter = ConsoleProgressReporter::quiet();
        let summary = Summary::from_samples(&[1, 2, 3]).unwrap();

        reporter.report_started(StrategyKind::Static, 100);
        reporter.report_progress(50, 100);
        reporter.report_completed(&summary);
        reporter.report_aborted(50, "test");
    }

    #[test]
    fn test_console_progress_reporter_creation() {
        let reporter1 = ConsoleProgressReporter::new();
        let reporter2 = ConsoleProgressReporter::quiet();

        assert!(!reporter1.is_quiet());
        assert!(reporter2.is_quiet());
    }

    #[test]
    fn test_boxed_reporter_delegates() {
        let reporter: Box<dyn ProgressReporter> = Box::new(NoOpProgressReporter::new());
        let summary = Summary::from_samples(&[7]).unwrap();

        // 全てのメソッドを呼び出してもパニックしない
        reporter.report_started(StrategyKind::Polymorphic, 1);
        reporter.report_progress(1, 1);
        reporter.report_completed(&summary);
        reporter.report_aborted(0, "none");
    }
}
