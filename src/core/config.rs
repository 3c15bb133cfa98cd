//! 計測設定
//!
//! 型レベルのプリセットと実行時の設定値の二層構成：
//! - IterationPreset: コンパイル時に確定する反復回数プリセット
//! - BenchConfig: 実行時に参照する設定値（ビルダー形式）

use super::error::{BenchError, BenchResult};

/// 型レベル設定 - 反復回数プリセット
pub trait IterationPreset {
    /// 設定名
    const NAME: &'static str;

    /// 説明
    const DESCRIPTION: &'static str;

    /// 1ターゲットあたりの呼び出し回数
    const ITERATIONS: u64;
}

/// 本番計測用プリセット（バイナリが使用）
pub struct FullScale;

impl IterationPreset for FullScale {
    const NAME: &'static str = "full_scale";
    const DESCRIPTION: &'static str = "1ターゲットあたり10億回呼び出す本番計測";
    const ITERATIONS: u64 = 1_000_000_000;
}

/// 動作確認用の軽量プリセット
pub struct Smoke;

impl IterationPreset for Smoke {
    const NAME: &'static str = "smoke";
    const DESCRIPTION: &'static str = "構造確認用の最小構成";
    const ITERATIONS: u64 = 5;
}

/// 実行時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    iterations: u64,
}

impl BenchConfig {
    pub fn new(iterations: u64) -> Self {
        Self { iterations }
    }

    /// プリセットから設定を作成
    pub fn from_preset<P: IterationPreset>() -> Self {
        Self::new(P::ITERATIONS)
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// 設定値の検証
    pub fn validate(&self) -> BenchResult<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid_config(
                "iterations",
                "反復回数は1以上である必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::from_preset::<FullScale>()
    }
}
