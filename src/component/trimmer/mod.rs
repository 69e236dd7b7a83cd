//! 影片批次裁剪元件
//!
//! 依使用者輸入的片頭/片尾時間，逐一裁剪目錄下的影片並輸出到 `Cut` 子資料夾。
//! 片頭接近 0 秒時改用精確編碼模式，避免串流複製造成音畫不同步。

mod main;
mod trim_plan;

pub use main::{TRIM_OUTPUT_DIR, Trimmer, parse_time_pair, trim_output_path, trim_single};
pub use trim_plan::{
    ACCURATE_SEEK_THRESHOLD, TrimPlan, TrimSpec, TrimStrategy, build_trim_args, plan_trim,
};
