use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 預設分段長度（分鐘）
pub const DEFAULT_SEGMENT_MINUTES: u32 = 5;
/// 預設重新命名分隔字元
pub const DEFAULT_RENAME_DELIMITER: char = '@';

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    /// 通用影片副檔名（含前導點，小寫）
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
    /// 只有裁剪工具額外接受的副檔名
    #[serde(rename = "TRIMMER_EXTRA_FILE")]
    pub trimmer_extra_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }

    /// 裁剪工具接受通用影片副檔名加上額外清單
    #[must_use]
    pub fn is_trimmable_file(&self, path: &Path) -> bool {
        if self.is_video_file(path) {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let dotted = format!(".{}", ext.to_lowercase());
                self.trimmer_extra_file.iter().any(|e| e == &dotted)
            })
    }
}

/// 分組與重新命名工具只處理 mp4
#[must_use]
pub fn is_mp4_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 分段工具的每段長度（分鐘）
    pub segment_minutes: u32,
    /// 重新命名工具的分隔字元
    pub rename_delimiter: char,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            segment_minutes: DEFAULT_SEGMENT_MINUTES,
            rename_delimiter: DEFAULT_RENAME_DELIMITER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
    pub settings: UserSettings,
}
