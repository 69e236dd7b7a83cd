//! 影片串接元件
//!
//! 將目錄下所有影片依檔名排序後無損串接成單一輸出檔

mod main;
mod manifest;

pub use main::{Concatenator, OUTPUT_FILE_NAME, build_concat_args};
pub use manifest::{MANIFEST_FILE_NAME, ManifestGuard, manifest_content, write_manifest};
