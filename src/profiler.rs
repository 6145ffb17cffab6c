//! 計測サンプル収集器
//!
//! start/stop の組でナノ秒サンプルを蓄積し、flush でサマリーに変換する。
//! `TimingScope` は Drop で stop を記録するため、計測対象が巻き戻しても
//! サンプルは必ず閉じられる

use crate::core::{BenchResult, Clock, Summary};
use std::time::Instant;

/// `Instant` による単調時計
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// サンプル収集器
#[derive(Debug)]
pub struct Profiler<C: Clock = MonotonicClock> {
    clock: C,
    started_at: Option<u64>,
    samples: Vec<u64>,
}

impl Profiler<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Profiler<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Profiler<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            started_at: None,
            samples: Vec::new(),
        }
    }

    /// サンプル領域を事前確保（計測中の再確保を避ける）
    pub fn reserve(&mut self, additional: usize) -> BenchResult<()> {
        self.samples.try_reserve(additional)?;
        Ok(())
    }

    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now_nanos());
    }

    /// 直前の start からの経過時間を1サンプルとして記録
    pub fn stop(&mut self) {
        let end = self.clock.now_nanos();
        match self.started_at.take() {
            Some(start) => self.samples.push(end.saturating_sub(start)),
            None => log::warn!("profiler stop() without a matching start(); ignored"),
        }
    }

    /// start を記録し、Drop で stop するガードを返す
    pub fn scope(&mut self) -> TimingScope<'_, C> {
        self.start();
        TimingScope { profiler: self }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// 蓄積サンプルと開いたままの start を破棄
    pub fn reset(&mut self) {
        if self.is_running() || !self.samples.is_empty() {
            log::debug!(
                "profiler reset: discarding {} samples (running: {})",
                self.samples.len(),
                self.is_running()
            );
        }
        self.samples.clear();
        self.started_at = None;
    }

    /// 蓄積サンプルをサマリーに変換してクリア
    pub fn flush(&mut self) -> BenchResult<Summary> {
        let summary = Summary::from_samples(&self.samples);
        self.samples.clear();
        self.started_at = None;
        summary
    }
}

/// Drop 時に stop を記録する計測ガード
pub struct TimingScope<'a, C: Clock> {
    profiler: &'a mut Profiler<C>,
}

impl<C: Clock> Drop for TimingScope<'_, C> {
    fn drop(&mut self) {
        self.profiler.stop();
    }
}
