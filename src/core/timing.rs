// 計測ユーティリティ
// 単調増加クロックで処理の前後を挟み、経過秒数を浮動小数点で返す

use std::fmt;
use std::time::{Duration, Instant};

/// 経過時間
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Elapsed(Duration);

impl Elapsed {
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} seconds", self.as_secs_f64())
    }
}

/// クロージャを一度だけ実行し、その戻り値と経過時間を返す
pub fn measure<T, F>(work: F) -> (T, Elapsed)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = work();
    (output, Elapsed(start.elapsed()))
}
