// 進捗監視機能
// 計測開始、進捗、完了、中断の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
