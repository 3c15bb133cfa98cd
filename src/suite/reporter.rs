// 計測結果の報告
// 標準出力へのブロック出力と、何もしない実装

use crate::core::{BenchResult, Elapsed};
use crate::dispatch::Technique;
use std::io::Write;

/// 報告の抽象化トレイト
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// 手法の計測開始時の報告
    fn technique_started(&mut self, technique: Technique) -> BenchResult<()>;

    /// 手法の計測完了時の報告
    fn technique_finished(&mut self, technique: Technique, elapsed: &Elapsed) -> BenchResult<()>;
}

/// 任意の書き込み先へブロック単位で出力する実装
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    quiet: bool,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    pub fn quiet(out: W) -> Self {
        Self { out, quiet: true }
    }

    /// 書き込み先を取り出す
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn technique_started(&mut self, technique: Technique) -> BenchResult<()> {
        if self.quiet {
            return Ok(());
        }
        if technique.ordinal() > 1 {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "🔬 {}. {}...",
            technique.ordinal(),
            technique.label()
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn technique_finished(&mut self, _technique: Technique, elapsed: &Elapsed) -> BenchResult<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "   Total time: {elapsed}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NoOpReporter {
    fn technique_started(&mut self, _technique: Technique) -> BenchResult<()> {
        Ok(())
    }

    fn technique_finished(&mut self, _technique: Technique, _elapsed: &Elapsed) -> BenchResult<()> {
        Ok(())
    }
}
