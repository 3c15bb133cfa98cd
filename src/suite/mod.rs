//! ディスパッチベンチマーク実行器
//!
//! 4つの手法を固定順で逐次計測し、手法ごとに経過時間を報告する。
//! 計測対象は `TargetSet` で型レベルに与えるため、本番の障壁ターゲットと
//! テスト用の計数ターゲットを同じ実行経路で扱える。

pub mod reporter;

pub use reporter::{ConsoleReporter, NoOpReporter, Reporter};

use crate::core::{measure, BenchConfig, BenchResult, Elapsed};
use crate::dispatch::{
    fn_pointer, generic_wrapper, type_erasure, virtual_call, Action, FirstGenerator, FirstInner,
    FirstWorker, NextSample, Perform, SecondGenerator, SecondInner, SecondWorker, Technique,
};
use log::{debug, info, warn};

/// 型レベル計測対象提供者
///
/// 各手法の2つの具象ターゲットを関連型で指定する
pub trait TargetSet {
    type FirstHandle: Perform;
    type SecondHandle: Perform;
    type FirstInner: Action;
    type SecondInner: Action;
    type FirstSample: NextSample;
    type SecondSample: NextSample;

    /// 動的ディスパッチ用のハンドル
    fn handles(&self) -> (&Self::FirstHandle, &Self::SecondHandle);

    /// 関数ポインタ用の自由関数
    fn routines(&self) -> (fn(), fn());

    /// ジェネリックラッパーの転送先
    fn inners(&self) -> (&Self::FirstInner, &Self::SecondInner);

    /// 型消去の対象
    fn samples(&self) -> (&Self::FirstSample, &Self::SecondSample);
}

/// 本番用ターゲット（全て障壁のみの空処理）
#[derive(Debug, Default, Clone, Copy)]
pub struct FenceTargets {
    first_worker: FirstWorker,
    second_worker: SecondWorker,
    first_inner: FirstInner,
    second_inner: SecondInner,
    first_generator: FirstGenerator,
    second_generator: SecondGenerator,
}

impl FenceTargets {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TargetSet for FenceTargets {
    type FirstHandle = FirstWorker;
    type SecondHandle = SecondWorker;
    type FirstInner = FirstInner;
    type SecondInner = SecondInner;
    type FirstSample = FirstGenerator;
    type SecondSample = SecondGenerator;

    fn handles(&self) -> (&FirstWorker, &SecondWorker) {
        (&self.first_worker, &self.second_worker)
    }

    fn routines(&self) -> (fn(), fn()) {
        (fn_pointer::first_routine, fn_pointer::second_routine)
    }

    fn inners(&self) -> (&FirstInner, &SecondInner) {
        (&self.first_inner, &self.second_inner)
    }

    fn samples(&self) -> (&FirstGenerator, &SecondGenerator) {
        (&self.first_generator, &self.second_generator)
    }
}

/// 1手法分の計測結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechniqueTiming {
    pub technique: Technique,
    pub elapsed: Elapsed,
}

/// ベンチマーク実行器
pub struct DispatchSuite<R: Reporter> {
    config: BenchConfig,
    reporter: R,
}

impl<R: Reporter> DispatchSuite<R> {
    pub fn new(config: BenchConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// 全手法を固定順で計測する
    pub fn run<T: TargetSet>(&mut self, targets: &T) -> BenchResult<Vec<TechniqueTiming>> {
        self.config.validate()?;
        info!(
            "Starting dispatch benchmark ({} iterations per target)",
            self.config.iterations()
        );

        let mut timings = Vec::with_capacity(Technique::ALL.len());
        for technique in Technique::ALL {
            timings.push(self.run_technique(technique, targets)?);
        }

        info!("Dispatch benchmark finished");
        Ok(timings)
    }

    /// 1手法のみ計測する
    ///
    /// 計測区間は1つ目のターゲットのループ開始から2つ目のループ終了まで
    pub fn run_technique<T: TargetSet>(
        &mut self,
        technique: Technique,
        targets: &T,
    ) -> BenchResult<TechniqueTiming> {
        self.config.validate()?;
        tolerate(self.reporter.technique_started(technique))?;

        let iterations = self.config.iterations();
        let ((), elapsed) = match technique {
            Technique::VirtualCall => {
                let (first, second) = targets.handles();
                measure(|| virtual_call::drive(iterations, first, second))
            }
            Technique::FunctionPointer => {
                let (first, second) = targets.routines();
                measure(|| fn_pointer::drive(iterations, first, second))
            }
            Technique::GenericWrapper => {
                let (first, second) = targets.inners();
                measure(|| generic_wrapper::drive(iterations, first, second))
            }
            Technique::TypeErasure => {
                let (first, second) = targets.samples();
                measure(|| type_erasure::drive(iterations, first, second))
            }
        };
        debug!("{technique}: {iterations} x 2 calls in {elapsed}");

        tolerate(self.reporter.technique_finished(technique, &elapsed))?;
        Ok(TechniqueTiming { technique, elapsed })
    }
}

/// 報告の失敗のうち回復可能なものは警告に留め、計測を続ける
fn tolerate(result: BenchResult<()>) -> BenchResult<()> {
    match result {
        Err(err) if err.is_recoverable() => {
            warn!("[{}] {err}; 計測を継続します", err.severity().as_str());
            Ok(())
        }
        other => other,
    }
}
