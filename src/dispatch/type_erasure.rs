//! 手動の型消去（不透明ポインタ + 関数ポインタ）
//!
//! `ErasedSampler` は具象型を隠した `*const ()` と、それを元の型へ
//! 戻して呼び出す関数ポインタの組。自前で組み立てた1エントリの vtable に相当する。
//!
//! ジェネリックラッパーと異なり、同じ変数（同じ静的型）のまま
//! 別の具象型へ実行時に付け替えられる。

use super::fence;
use std::hint::black_box;
use std::marker::PhantomData;

/// 型消去の対象が実装するトレイト
pub trait NextSample {
    fn next_sample(&self);
}

/// 不透明ポインタを受け取り、サンプル値を返す呼び出し関数の型
pub type RawCall = unsafe fn(*const ()) -> f32;

/// 型消去された呼び出し可能値
///
/// 参照先は所有しない。ライフタイム `'a` により、束縛中の対象が
/// この値より先に破棄されることはない。
#[derive(Debug, Clone, Copy)]
pub struct ErasedSampler<'a> {
    object: *const (),
    call: RawCall,
    _borrow: PhantomData<&'a ()>,
}

/// `T` 専用の呼び出し関数
///
/// 対象の戻り値は持たないため、固定値 0.0 を返す。
///
/// # Safety
/// `object` は生存中の `T` を指していなければならない。
unsafe fn trampoline<T: NextSample>(object: *const ()) -> f32 {
    // SAFETY: 呼び出し側が object が有効な T を指すことを保証する
    unsafe { (*object.cast::<T>()).next_sample() };
    0.0
}

impl<'a> ErasedSampler<'a> {
    /// `target` と、その型に対応する呼び出し関数を束縛する
    pub fn bind<T: NextSample>(target: &'a T) -> Self {
        Self {
            object: (target as *const T).cast(),
            call: trampoline::<T>,
            _borrow: PhantomData,
        }
    }

    /// 生のポインタと呼び出し関数から直接組み立てる
    ///
    /// # Safety
    /// `call` は `object` の実際の型に合わせて作られた関数でなければならず、
    /// `object` は `'a` の間有効でなければならない。実行時の検査は行わない。
    pub unsafe fn from_raw_parts(object: *const (), call: RawCall) -> Self {
        Self {
            object,
            call,
            _borrow: PhantomData,
        }
    }

    /// 同じ値を別の対象（別の型でもよい）へ付け替える
    pub fn rebind<T: NextSample>(&mut self, target: &'a T) {
        *self = Self::bind(target);
    }

    /// 束縛中の対象を呼び出す
    #[inline]
    pub fn call(&self) -> f32 {
        // SAFETY: bind / from_raw_parts の契約により object と call の型は一致する
        unsafe { (self.call)(self.object) }
    }

    /// 束縛中の対象のアドレス
    pub fn object_ptr(&self) -> *const () {
        self.object
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct SecondGenerator;

impl NextSample for FirstGenerator {
    #[inline(never)]
    fn next_sample(&self) {
        fence();
    }
}

impl NextSample for SecondGenerator {
    #[inline(never)]
    fn next_sample(&self) {
        fence();
    }
}

/// 単一の `ErasedSampler` を `first` に束縛して `iterations` 回呼び出し、
/// 同じ変数を `second` へ再代入してさらに `iterations` 回呼び出す
#[inline(never)]
pub fn drive<A: NextSample, B: NextSample>(iterations: u64, first: &A, second: &B) {
    drive_slots(
        iterations,
        ErasedSampler::bind(first),
        ErasedSampler::bind(second),
    );
}

/// 束縛済みの2つの値を1つの変数へ順に代入し、それぞれ `iterations` 回呼び出す
///
/// 代入のたびに `black_box` を通すため、呼び出しは必ず格納された
/// 関数ポインタ経由になる
#[inline(never)]
pub fn drive_slots<'a>(iterations: u64, first: ErasedSampler<'a>, second: ErasedSampler<'a>) {
    let mut sampler = black_box(first);
    for _ in 0..iterations {
        black_box(sampler.call());
    }

    sampler = black_box(second);
    for _ in 0..iterations {
        black_box(sampler.call());
    }
}
