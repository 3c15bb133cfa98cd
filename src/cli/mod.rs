// CLI層 - コマンドライン定義と実行
// 計測対象の選択肢は持たず、--help / --version のみを受け付ける

pub mod args;
pub mod run;

// 公開API
pub use args::*;
pub use run::*;
