use crate::core::{BenchConfig, FullScale, IterationPreset};
use crate::suite::{ConsoleReporter, DispatchSuite, FenceTargets, Reporter, TechniqueTiming};
use anyhow::{Context, Result};
use log::info;

/// 本番プリセットで全手法を計測し、標準出力へ報告する
pub fn execute_full_scale() -> Result<Vec<TechniqueTiming>> {
    execute_with_preset::<FullScale, _>(ConsoleReporter::stdout())
}

/// 指定プリセットで障壁ターゲットを計測する
pub fn execute_with_preset<P, R>(reporter: R) -> Result<Vec<TechniqueTiming>>
where
    P: IterationPreset,
    R: Reporter,
{
    info!("Using preset '{}': {}", P::NAME, P::DESCRIPTION);

    let mut suite = DispatchSuite::new(BenchConfig::from_preset::<P>(), reporter);
    suite
        .run(&FenceTargets::new())
        .with_context(|| format!("dispatch benchmark failed (preset: {})", P::NAME))
}
