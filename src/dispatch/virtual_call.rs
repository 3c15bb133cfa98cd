// 動的ディスパッチ（トレイトオブジェクト）
// 一つの &dyn Perform を2つの具象型に順に付け替えて呼び出す

use super::fence;
use std::hint::black_box;

/// 多態ハンドルの抽象化トレイト
#[cfg_attr(test, mockall::automock)]
pub trait Perform {
    fn perform(&self);
}

/// 1つ目の具象ハンドル
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstWorker;

/// 2つ目の具象ハンドル
#[derive(Debug, Default, Clone, Copy)]
pub struct SecondWorker;

impl Perform for FirstWorker {
    #[inline(never)]
    fn perform(&self) {
        fence();
    }
}

impl Perform for SecondWorker {
    #[inline(never)]
    fn perform(&self) {
        fence();
    }
}

/// `first` を `iterations` 回呼び出した後、同じハンドルを `second` に
/// 付け替えて `iterations` 回呼び出す
#[inline(never)]
pub fn drive(iterations: u64, first: &dyn Perform, second: &dyn Perform) {
    let mut handle: &dyn Perform = black_box(first);
    for _ in 0..iterations {
        handle.perform();
    }

    handle = black_box(second);
    for _ in 0..iterations {
        handle.perform();
    }
}
