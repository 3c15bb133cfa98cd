//! ディスパッチ手法モジュール
//!
//! 4種類の呼び出し方式をそれぞれ独立したループとして提供：
//! - virtual_call: トレイトオブジェクト経由の動的ディスパッチ
//! - fn_pointer: 生の関数ポインタ呼び出し
//! - generic_wrapper: ジェネリクスによる転送ラッパー（静的ディスパッチ）
//! - type_erasure: 不透明ポインタ + 関数ポインタによる手動の型消去

pub mod fn_pointer;
pub mod generic_wrapper;
pub mod type_erasure;
pub mod virtual_call;

pub use fn_pointer::{first_routine, second_routine};
pub use generic_wrapper::{Action, FirstInner, Forward, SecondInner};
pub use type_erasure::{ErasedSampler, FirstGenerator, NextSample, SecondGenerator};
pub use virtual_call::{FirstWorker, Perform, SecondWorker};

use std::fmt;

/// 最適化障壁
///
/// 空のインラインアセンブリを挟み、呼び出し本体が副作用なしとして
/// 削除されるのを防ぐ
#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "loongarch64"
))]
#[inline(always)]
pub fn fence() {
    // SAFETY: 空の命令列。レジスタ・スタック・メモリのいずれも変更しない
    unsafe { std::arch::asm!("") }
}

/// インラインアセンブリが使えないターゲット向けの代替
#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "loongarch64"
)))]
#[inline(always)]
pub fn fence() {
    std::hint::black_box(());
}

/// 計測対象のディスパッチ手法（実行順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    VirtualCall,
    FunctionPointer,
    GenericWrapper,
    TypeErasure,
}

impl Technique {
    /// 固定の実行順
    pub const ALL: [Technique; 4] = [
        Technique::VirtualCall,
        Technique::FunctionPointer,
        Technique::GenericWrapper,
        Technique::TypeErasure,
    ];

    /// 1始まりの通し番号
    pub const fn ordinal(&self) -> usize {
        match self {
            Self::VirtualCall => 1,
            Self::FunctionPointer => 2,
            Self::GenericWrapper => 3,
            Self::TypeErasure => 4,
        }
    }

    /// 出力用ラベル
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VirtualCall => "Virtual function dispatch (2 types)",
            Self::FunctionPointer => "Function pointer dispatch (2 functions)",
            Self::GenericWrapper => "Generic wrapper dispatch (2 types)",
            Self::TypeErasure => "Type erasure dispatch (1 rebound slot)",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VirtualCall => "virtual_call",
            Self::FunctionPointer => "fn_pointer",
            Self::GenericWrapper => "generic_wrapper",
            Self::TypeErasure => "type_erasure",
        })
    }
}
