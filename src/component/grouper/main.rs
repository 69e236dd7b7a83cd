//! 影片分組歸檔主模組
//!
//! 先在記憶體內完成分組與搬移計畫，確認後才動到檔案系統。
//! 單一檔案搬移失敗只記錄，不中斷整批。

use super::folder_namer::{clean_folder_name, folder_name_for_group, truncate_folder_name};
use super::prefix_grouper::{FileGroup, group_files};
use crate::config::is_mp4_file;
use crate::error::ToolError;
use crate::tools::{VideoFileInfo, scan_video_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一檔案的搬移計畫
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub file_name: String,
    pub folder_name: String,
    /// 走獨立資料夾路徑（非多成員分組）
    pub singleton: bool,
}

/// 分組搬移結果統計
#[derive(Debug, Default)]
pub struct GroupMoveResult {
    pub group_moved: usize,
    pub singleton_moved: usize,
    pub group_folders: usize,
    pub singleton_folders: usize,
    pub errors: usize,
}

/// 影片分組歸檔器
pub struct Grouper {
    shutdown_signal: Arc<AtomicBool>,
}

/// 由分組結果產生搬移計畫
///
/// 只有兩個成員以上的分組走分組路徑；單成員分組與沒有有效
/// 分組名稱的成員，一律改為以清理後的個別檔名建立獨立資料夾。
#[must_use]
pub fn plan_moves(groups: &[FileGroup]) -> Vec<MovePlan> {
    let mut plans = Vec::new();

    for group in groups {
        if group.files.len() >= 2 {
            if let Some(folder_name) = folder_name_for_group(group) {
                for file_name in &group.files {
                    plans.push(MovePlan {
                        file_name: file_name.clone(),
                        folder_name: folder_name.clone(),
                        singleton: false,
                    });
                }
                continue;
            }
        }

        for file_name in &group.files {
            plans.push(MovePlan {
                file_name: file_name.clone(),
                folder_name: singleton_folder_name(file_name),
                singleton: true,
            });
        }
    }

    plans
}

/// 獨立資料夾名稱：清理後的個別檔名（去副檔名）
fn singleton_folder_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());

    truncate_folder_name(&clean_folder_name(&stem))
}

impl Grouper {
    #[must_use]
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== MP4 分組歸檔 ===").cyan().bold());

        let directory = self.prompt_directory()?;
        validate_directory_exists(&directory)?;

        println!("{}", style("掃描 MP4 檔案中...").dim());
        let mp4_files = scan_video_files(&directory, is_mp4_file)?;

        if mp4_files.is_empty() {
            println!("{}", style("沒有找到 MP4 檔案").yellow());
            return Err(ToolError::NoInput.into());
        }

        let file_names: Vec<String> = mp4_files.iter().map(VideoFileInfo::file_name).collect();
        let groups = group_files(&file_names);
        let plans = plan_moves(&groups);

        self.print_preview(&file_names, &plans);

        if !self.confirm_move()? {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        let result = self.execute_moves(&directory, &plans);
        self.print_result(&result);

        Ok(())
    }

    /// 依計畫建立資料夾並搬移檔案
    pub fn execute_moves(&self, directory: &Path, plans: &[MovePlan]) -> GroupMoveResult {
        let mut result = GroupMoveResult::default();
        let mut group_folders: HashSet<String> = HashSet::new();
        let mut singleton_folders: HashSet<String> = HashSet::new();

        for plan in plans {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止搬移");
                break;
            }

            let folder = directory.join(&plan.folder_name);
            if let Err(e) = std::fs::create_dir_all(&folder) {
                println!(
                    "  ❌ 建立資料夾 '{}' 失敗: {e}",
                    plan.folder_name
                );
                warn!("建立資料夾失敗 {}: {e}", plan.folder_name);
                result.errors += 1;
                continue;
            }

            let source = directory.join(&plan.file_name);
            let target = folder.join(&plan.file_name);

            match std::fs::rename(&source, &target) {
                Ok(()) => {
                    if plan.singleton {
                        println!(
                            "  移動獨立檔案 '{}' -> '{}/'",
                            plan.file_name, plan.folder_name
                        );
                        singleton_folders.insert(plan.folder_name.clone());
                        result.singleton_moved += 1;
                    } else {
                        println!(
                            "  移動分組檔案 '{}' -> '{}/'",
                            plan.file_name, plan.folder_name
                        );
                        group_folders.insert(plan.folder_name.clone());
                        result.group_moved += 1;
                    }
                }
                Err(e) => {
                    println!("  ❌ 移動 '{}' 失敗: {e}", plan.file_name);
                    warn!("移動失敗 {}: {e}", plan.file_name);
                    result.errors += 1;
                }
            }
        }

        result.group_folders = group_folders.len();
        result.singleton_folders = singleton_folders.len();
        result
    }

    fn prompt_directory(&self) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn confirm_move(&self) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt("確定要分組搬移這些檔案嗎？")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    fn print_preview(&self, file_names: &[String], plans: &[MovePlan]) {
        let group_count = plans.iter().filter(|p| !p.singleton).count();
        let singleton_count = plans.len() - group_count;

        println!();
        println!(
            "{}",
            style(format!(
                "找到 {} 個 MP4 檔案：{} 個將分組搬移，{} 個將獨立成資料夾",
                file_names.len(),
                group_count,
                singleton_count
            ))
            .green()
        );

        // 只顯示前 10 個計畫
        let display_count = plans.len().min(10);
        for plan in plans.iter().take(display_count) {
            println!("  {} '{}' -> '{}/'", style("→").dim(), plan.file_name, plan.folder_name);
        }
        if plans.len() > display_count {
            println!(
                "  {} ...還有 {} 個",
                style("⋯").dim(),
                plans.len() - display_count
            );
        }
        println!();
    }

    fn print_result(&self, result: &GroupMoveResult) {
        println!();
        println!("{}", style("=== 處理結果 ===").cyan().bold());
        println!(
            "  共移動 {} 個檔案",
            style(result.group_moved + result.singleton_moved).green()
        );
        println!("  - 建立 {} 個分組資料夾", result.group_folders);
        println!("  - 建立 {} 個獨立資料夾", result.singleton_folders);
        println!("  - 移動 {} 個分組檔案", result.group_moved);
        println!("  - 移動 {} 個獨立檔案", result.singleton_moved);

        if result.errors > 0 {
            println!("  失敗: {} 個", style(result.errors).red());
        }

        info!(
            "分組歸檔完成 - 分組: {}, 獨立: {}, 失敗: {}",
            result.group_moved, result.singleton_moved, result.errors
        );
    }
}
