// ベンチマーク実行時のエラー型定義
// ディスパッチループ自体は失敗しないため、設定と出力周りのみを扱う

use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("設定エラー: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("出力エラー: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error("内部エラー: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 設定エラーの作成
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 出力エラーの作成
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::Internal { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig { .. } => ErrorSeverity::High,
            Self::Output { .. } => ErrorSeverity::Medium,
            Self::Internal { .. } => ErrorSeverity::Critical,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 出力先が閉じられただけなら計測自体は継続できる
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig { .. } => false,
            Self::Output { .. } => true,
            Self::Internal { .. } => false,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// ベンチマークの結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

impl From<std::io::Error> for BenchError {
    fn from(error: std::io::Error) -> Self {
        BenchError::Output { source: error }
    }
}

impl From<anyhow::Error> for BenchError {
    fn from(error: anyhow::Error) -> Self {
        BenchError::Internal { source: error }
    }
}
