// 関数ポインタ呼び出し
// 束縛データを持たない fn() を2つの自由関数へ順に付け替える

use super::fence;
use std::hint::black_box;

#[inline(never)]
pub fn first_routine() {
    fence();
}

#[inline(never)]
pub fn second_routine() {
    fence();
}

/// `first` を `iterations` 回呼び出した後、同じ関数ポインタを
/// `second` に付け替えて `iterations` 回呼び出す
#[inline(never)]
pub fn drive(iterations: u64, first: fn(), second: fn()) {
    let mut target: fn() = black_box(first);
    for _ in 0..iterations {
        target();
    }

    target = black_box(second);
    for _ in 0..iterations {
        target();
    }
}
