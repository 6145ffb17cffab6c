//! 計測ハーネス
//!
//! `update_all` を指定回数だけ計測付きで繰り返し、サマリーを返す：
//! - 0回の計測要求は契約違反として拒否
//! - 計測前に任意回数の空回し（計測対象外）
//! - 更新中のパニックは捕捉し、計測スコープを閉じてから
//!   部分サマリー付きの `Aborted` として返す

use crate::core::{BenchError, BenchResult, Clock, InstanceStore, ProgressReporter, Summary};
use crate::profiler::Profiler;
use crate::services::NoOpProgressReporter;
use std::panic::{self, AssertUnwindSafe};

/// ハーネス設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    repetitions: usize,
    warmup: usize,
}

impl HarnessConfig {
    pub fn new(repetitions: usize) -> Self {
        Self {
            repetitions,
            warmup: 0,
        }
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn warmup(&self) -> usize {
        self.warmup
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// 計測ハーネス
#[derive(Debug)]
pub struct TimingHarness<R: ProgressReporter = NoOpProgressReporter> {
    config: HarnessConfig,
    reporter: R,
}

impl TimingHarness<NoOpProgressReporter> {
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_reporter(config, NoOpProgressReporter::new())
    }
}

impl<R: ProgressReporter> TimingHarness<R> {
    pub fn with_reporter(config: HarnessConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 設定された回数で計測
    pub fn run_configured<S>(&self, store: &mut S) -> BenchResult<Summary>
    where
        S: InstanceStore + ?Sized,
    {
        self.run(store, self.config.repetitions)
    }

    /// `repetitions` 回の `update_all` を単調時計で計測
    pub fn run<S>(&self, store: &mut S, repetitions: usize) -> BenchResult<Summary>
    where
        S: InstanceStore + ?Sized,
    {
        let mut profiler = Profiler::new();
        self.run_with_profiler(store, repetitions, &mut profiler)
    }

    /// 任意の時計を持つプロファイラで計測
    pub fn run_with_profiler<S, C>(
        &self,
        store: &mut S,
        repetitions: usize,
        profiler: &mut Profiler<C>,
    ) -> BenchResult<Summary>
    where
        S: InstanceStore + ?Sized,
        C: Clock,
    {
        if repetitions == 0 {
            return Err(BenchError::contract_violation(
                "TimingHarness::run",
                "repetitions must be at least 1",
            ));
        }
        profiler.reset();
        profiler.reserve(repetitions)?;

        let strategy = store.strategy();
        log::info!(
            "timing {strategy} store: {} units, {} warmup, {repetitions} repetitions",
            store.len(),
            self.config.warmup
        );
        self.reporter.report_started(strategy, repetitions);

        let warmup = panic::catch_unwind(AssertUnwindSafe(|| {
            for _ in 0..self.config.warmup {
                store.update_all();
            }
        }));
        if let Err(payload) = warmup {
            return Err(self.abort(0, &panic_reason(payload.as_ref()), None));
        }

        for completed in 0..repetitions {
            let pass = panic::catch_unwind(AssertUnwindSafe(|| {
                let _scope = profiler.scope();
                store.update_all();
            }));

            if let Err(payload) = pass {
                let partial = profiler.flush().ok();
                return Err(self.abort(completed, &panic_reason(payload.as_ref()), partial));
            }

            self.reporter.report_progress(completed + 1, repetitions);
        }

        let summary = profiler.flush()?;
        log::info!(
            "{strategy} run finished: mean {:.1}ns, median {:.1}ns",
            summary.mean,
            summary.median
        );
        self.reporter.report_completed(&summary);
        Ok(summary)
    }

    fn abort(&self, completed: usize, reason: &str, partial: Option<Summary>) -> BenchError {
        log::warn!("timing run aborted after {completed} repetitions: {reason}");
        self.reporter.report_aborted(completed, reason);
        BenchError::aborted(completed, partial)
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "update_all panicked".to_string()
    }
}
