//! ffmpeg concat 清單檔
//!
//! 清單是暫存檔，不論成功或失敗都必須在結束前刪除，
//! 由 `ManifestGuard` 的 Drop 保證。

use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "filelist.txt";

/// 產生 concat 清單內容，每行 `file '<名稱>'`
///
/// 檔名中的單引號依 ffmpeg concat 格式轉義為 `'\''`。
#[must_use]
pub fn manifest_content(file_names: &[String]) -> String {
    let mut content = String::new();
    for name in file_names {
        let escaped = name.replace('\'', "'\\''");
        content.push_str(&format!("file '{escaped}'\n"));
    }
    content
}

/// 清單檔的自動清除守衛
pub struct ManifestGuard {
    path: PathBuf,
}

impl ManifestGuard {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ManifestGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("無法刪除暫存清單 {}: {e}", self.path.display());
            }
        }
    }
}

/// 將清單寫入目錄下的 `filelist.txt`，回傳清除守衛
pub fn write_manifest(directory: &Path, file_names: &[String]) -> Result<ManifestGuard> {
    let path = directory.join(MANIFEST_FILE_NAME);
    fs::write(&path, manifest_content(file_names))?;
    Ok(ManifestGuard { path })
}
