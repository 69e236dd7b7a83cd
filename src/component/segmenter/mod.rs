//! 影片分段元件
//!
//! 將每個影片無損切成固定長度的分段，各自放進以檔名命名的子資料夾

mod main;

pub use main::{Segmenter, build_segment_args, keyframe_expr, segment_output_pattern, segment_time_arg};
