//! 批次重新命名元件
//!
//! 去掉檔名中分隔字元之後的尾段，保留原副檔名

mod main;

pub use main::{RenameResult, Renamer, compute_new_name};
