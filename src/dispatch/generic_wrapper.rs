// ジェネリック転送ラッパー（静的ディスパッチ）
// 型パラメータで対象が確定するため、一つの値で対象型を切り替えることはできない

use super::fence;
use std::hint::black_box;

/// ラッパーの転送先が実装するトレイト
pub trait Action {
    fn action(&self);
}

/// 外部所有のインスタンスへの非所有参照を保持し、`call` で転送する
#[derive(Debug)]
pub struct Forward<'a, T> {
    inner: &'a T,
}

impl<T> Clone for Forward<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Forward<'_, T> {}

impl<'a, T: Action> Forward<'a, T> {
    pub fn new(inner: &'a T) -> Self {
        Self { inner }
    }

    /// 転送先の `action` を呼び出す
    #[inline]
    pub fn call(&self) {
        self.inner.action();
    }

    pub fn target(&self) -> &'a T {
        self.inner
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstInner;

#[derive(Debug, Default, Clone, Copy)]
pub struct SecondInner;

impl Action for FirstInner {
    #[inline(never)]
    fn action(&self) {
        fence();
    }
}

impl Action for SecondInner {
    #[inline(never)]
    fn action(&self) {
        fence();
    }
}

/// `Forward<A>` と `Forward<B>` の2つの別々のラッパーを作り、
/// それぞれ `iterations` 回呼び出す
#[inline(never)]
pub fn drive<A: Action, B: Action>(iterations: u64, first: &A, second: &B) {
    let wrapper = Forward::new(black_box(first));
    for _ in 0..iterations {
        wrapper.call();
    }

    let wrapper = Forward::new(black_box(second));
    for _ in 0..iterations {
        wrapper.call();
    }
}
