//! 批次重新命名主模組

use crate::config::{Config, is_mp4_file};
use crate::error::ToolError;
use crate::tools::{scan_video_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 批次重新命名器
pub struct Renamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameResult {
    pub renamed: usize,
    pub skipped_collision: usize,
    pub errors: usize,
}

/// 計算新檔名：第一個分隔字元之前的部分加上原副檔名
///
/// 檔名不含分隔字元、新舊名稱相同、或去尾後為空時回傳 `None`（不動作）。
#[must_use]
pub fn compute_new_name(file_name: &str, delimiter: char) -> Option<String> {
    let (before, _) = file_name.split_once(delimiter)?;
    if before.is_empty() {
        return None;
    }

    let extension = std::path::Path::new(file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let new_name = format!("{before}{extension}");
    if new_name == file_name {
        return None;
    }

    Some(new_name)
}

impl Renamer {
    #[must_use]
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== MP4 批次重新命名 ===").cyan().bold());

        let delimiter = self.config.settings.rename_delimiter;
        println!(
            "{}",
            style(format!("將移除檔名中 '{delimiter}' 之後的尾段（可於設定中調整）")).dim()
        );

        let directory = self.prompt_directory()?;
        validate_directory_exists(&directory)?;

        println!("{}", style("掃描 MP4 檔案中...").dim());
        let mp4_files = scan_video_files(&directory, is_mp4_file)?;

        if mp4_files.is_empty() {
            println!("{}", style("沒有找到 MP4 檔案").yellow());
            return Err(ToolError::NoInput.into());
        }

        let mut result = RenameResult::default();

        for file in &mp4_files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止重新命名");
                break;
            }

            let old_name = file.file_name();
            let Some(new_name) = compute_new_name(&old_name, delimiter) else {
                continue;
            };

            let new_path = directory.join(&new_name);
            if new_path.exists() {
                println!(
                    "  ⚠️ 跳過 '{old_name}': 目標 '{new_name}' 已存在"
                );
                result.skipped_collision += 1;
                continue;
            }

            match std::fs::rename(&file.path, &new_path) {
                Ok(()) => {
                    println!("  重新命名成功: \"{old_name}\" -> \"{new_name}\"");
                    result.renamed += 1;
                }
                Err(e) => {
                    println!("  ❌ 無法重新命名 \"{old_name}\": {e}");
                    warn!("重新命名失敗 {old_name}: {e}");
                    result.errors += 1;
                }
            }
        }

        self.print_result(&result);

        Ok(())
    }

    fn prompt_directory(&self) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn print_result(&self, result: &RenameResult) {
        println!();
        println!("{}", style("=== 處理結果 ===").cyan().bold());
        println!("  共重新命名 {} 個檔案", style(result.renamed).green());
        if result.skipped_collision > 0 {
            println!("  跳過（目標已存在）: {} 個", style(result.skipped_collision).yellow());
        }
        if result.errors > 0 {
            println!("  失敗: {} 個", style(result.errors).red());
        }

        info!(
            "重新命名完成 - 成功: {}, 跳過: {}, 失敗: {}",
            result.renamed, result.skipped_collision, result.errors
        );
    }
}
