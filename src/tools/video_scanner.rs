use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct VideoFileInfo {
    pub path: PathBuf,
    pub size: u64,
}

impl VideoFileInfo {
    /// 檔名（含副檔名）
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// 檔名（不含副檔名）
    #[must_use]
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// 掃描目錄第一層的檔案，依檔名排序（字典序）
///
/// 工作清單在執行開始時建立一次，之後不再重新掃描。
pub fn scan_video_files<F>(directory: &Path, matches: F) -> Result<Vec<VideoFileInfo>>
where
    F: Fn(&Path) -> bool,
{
    let mut video_files: Vec<VideoFileInfo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            // 跳過隱藏檔案
            !entry.file_name().to_string_lossy().starts_with('.')
        })
        .filter(|entry| matches(entry.path()))
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            Some(VideoFileInfo {
                path: entry.into_path(),
                size: metadata.len(),
            })
        })
        .collect();

    video_files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(video_files)
}
