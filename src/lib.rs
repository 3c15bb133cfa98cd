//! ディスパッチ手法のマイクロベンチマーク
//!
//! 仮想関数呼び出し・関数ポインタ・ジェネリックラッパー・手動型消去の
//! 4手法について、固定回数の呼び出しにかかる実時間を計測する。

pub mod cli;
pub mod core;
pub mod dispatch;
pub mod suite;
