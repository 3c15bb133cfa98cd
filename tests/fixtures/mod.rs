// テスト用の計数ターゲット
// 障壁の代わりにカウンタを増やし、呼び出し回数と呼び分けを検証する

#![allow(dead_code)]

use dispatch_bench::dispatch::{Action, NextSample, Perform};
use dispatch_bench::suite::TargetSet;
use std::cell::Cell;

/// 1つ目の型のカウンタ
#[derive(Debug, Default)]
pub struct CountingA {
    pub calls: Cell<u64>,
}

/// 2つ目の型のカウンタ（1つ目とは無関係なレイアウト）
#[derive(Debug, Default)]
pub struct CountingB {
    pub label: &'static str,
    pub calls: Cell<u64>,
}

impl CountingA {
    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl CountingB {
    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Perform for CountingA {
    fn perform(&self) {
        self.bump();
    }
}

impl Perform for CountingB {
    fn perform(&self) {
        self.bump();
    }
}

impl Action for CountingA {
    fn action(&self) {
        self.bump();
    }
}

impl Action for CountingB {
    fn action(&self) {
        self.bump();
    }
}

impl NextSample for CountingA {
    fn next_sample(&self) {
        self.bump();
    }
}

impl NextSample for CountingB {
    fn next_sample(&self) {
        self.bump();
    }
}

thread_local! {
    static ROUTINE_A_CALLS: Cell<u64> = const { Cell::new(0) };
    static ROUTINE_B_CALLS: Cell<u64> = const { Cell::new(0) };
}

pub fn routine_a() {
    ROUTINE_A_CALLS.with(|c| c.set(c.get() + 1));
}

pub fn routine_b() {
    ROUTINE_B_CALLS.with(|c| c.set(c.get() + 1));
}

pub fn routine_calls() -> (u64, u64) {
    (
        ROUTINE_A_CALLS.with(Cell::get),
        ROUTINE_B_CALLS.with(Cell::get),
    )
}

pub fn reset_routine_calls() {
    ROUTINE_A_CALLS.with(|c| c.set(0));
    ROUTINE_B_CALLS.with(|c| c.set(0));
}

/// 手法ごとに独立したカウンタを持つターゲット一式
#[derive(Debug, Default)]
pub struct CountingTargets {
    pub handle_a: CountingA,
    pub handle_b: CountingB,
    pub inner_a: CountingA,
    pub inner_b: CountingB,
    pub sample_a: CountingA,
    pub sample_b: CountingB,
}

impl CountingTargets {
    pub fn new() -> Self {
        reset_routine_calls();
        Self::default()
    }

    /// (手法名, Aの回数, Bの回数) の一覧
    pub fn counts(&self) -> Vec<(&'static str, u64, u64)> {
        let (routine_a, routine_b) = routine_calls();
        vec![
            ("virtual_call", self.handle_a.calls.get(), self.handle_b.calls.get()),
            ("fn_pointer", routine_a, routine_b),
            ("generic_wrapper", self.inner_a.calls.get(), self.inner_b.calls.get()),
            ("type_erasure", self.sample_a.calls.get(), self.sample_b.calls.get()),
        ]
    }
}

impl TargetSet for CountingTargets {
    type FirstHandle = CountingA;
    type SecondHandle = CountingB;
    type FirstInner = CountingA;
    type SecondInner = CountingB;
    type FirstSample = CountingA;
    type SecondSample = CountingB;

    fn handles(&self) -> (&CountingA, &CountingB) {
        (&self.handle_a, &self.handle_b)
    }

    fn routines(&self) -> (fn(), fn()) {
        (routine_a, routine_b)
    }

    fn inners(&self) -> (&CountingA, &CountingB) {
        (&self.inner_a, &self.inner_b)
    }

    fn samples(&self) -> (&CountingA, &CountingB) {
        (&self.sample_a, &self.sample_b)
    }
}
