// 共通基盤 - 設定・エラー・計測

pub mod config;
pub mod error;
pub mod timing;

pub use config::{BenchConfig, FullScale, IterationPreset, Smoke};
pub use error::{BenchError, BenchResult, ErrorSeverity};
pub use timing::{measure, Elapsed};
