// ベンチマーク専用のカスタムエラー型定義

use super::types::Summary;
use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("契約違反: {operation} - {reason}")]
    ContractViolation { operation: String, reason: String },

    #[error("リソース不足エラー: {resource} - {details}")]
    ResourceExhaustion { resource: String, details: String },

    #[error("サンプルが存在しないため統計を計算できません")]
    EmptySamples,

    #[error("計測が中断されました: {completed}回完了後")]
    Aborted {
        completed: usize,
        partial: Option<Summary>,
    },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("永続化エラー: {source}")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 契約違反エラーの作成
    pub fn contract_violation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// リソース不足エラーの作成
    pub fn resource_exhaustion(resource: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ResourceExhaustion {
            resource: resource.into(),
            details: details.into(),
        }
    }

    /// 中断エラーの作成
    pub fn aborted(completed: usize, partial: Option<Summary>) -> Self {
        Self::Aborted { completed, partial }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::Persistence { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ContractViolation { .. } => ErrorSeverity::Critical,
            Self::ResourceExhaustion { .. } => ErrorSeverity::Critical,
            Self::Configuration { .. } => ErrorSeverity::High,
            Self::Aborted { .. } => ErrorSeverity::High,
            Self::EmptySamples => ErrorSeverity::Medium,
            Self::Persistence { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// リソース不足は再試行しても意味がないため回復不能として扱う
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ContractViolation { .. } | Self::ResourceExhaustion { .. } => false,
            Self::Configuration { .. } => false,
            Self::Aborted { .. } => false,
            Self::EmptySamples => true,
            Self::Persistence { .. } => true,
        }
    }

    /// 中断時に収集済みだった部分サマリーを取得
    pub fn partial_summary(&self) -> Option<&Summary> {
        match self {
            Self::Aborted { partial, .. } => partial.as_ref(),
            _ => None,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 計測停止レベル
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

impl From<std::collections::TryReserveError> for BenchError {
    fn from(error: std::collections::TryReserveError) -> Self {
        BenchError::resource_exhaustion("memory", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_message() {
        let error = BenchError::contract_violation("add_instance", "index 401 > 400");
        let message = error.to_string();

        assert!(message.contains("add_instance"));
        assert!(message.contains("index 401 > 400"));
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_resource_exhaustion_is_fatal() {
        let error = BenchError::resource_exhaustion("memory", "capacity overflow");

        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_try_reserve_error_conversion() {
        let mut units: Vec<u64> = Vec::new();
        let reserve_error = units.try_reserve(usize::MAX).unwrap_err();

        let error: BenchError = reserve_error.into();
        assert!(matches!(error, BenchError::ResourceExhaustion { .. }));
    }

    #[test]
    fn test_aborted_keeps_partial_summary() {
        let partial = Summary::from_samples(&[10, 20, 30]).unwrap();
        let error = BenchError::aborted(3, Some(partial.clone()));

        assert_eq!(error.partial_summary(), Some(&partial));
        assert!(error.to_string().contains('3'));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::High > ErrorSeverity::Medium);
        assert_eq!(ErrorSeverity::Critical.as_str(), "CRITICAL");
    }
}
