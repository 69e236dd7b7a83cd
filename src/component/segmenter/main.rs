//! 影片分段主模組

use crate::config::Config;
use crate::error::{Result as ToolResult, ToolError};
use crate::tools::{
    FfmpegTool, MediaTool, VideoFileInfo, ensure_directory_exists, scan_video_files,
    validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 影片分段器
pub struct Segmenter {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    tool: Box<dyn MediaTool>,
}

/// `-segment_time` 參數，`HH:MM:SS` 格式
#[must_use]
pub fn segment_time_arg(minutes: u32) -> String {
    let total_seconds = minutes * 60;
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// 在每個分段邊界強制關鍵幀的表達式
#[must_use]
pub fn keyframe_expr(minutes: u32) -> String {
    format!("expr:gte(t,n_forced*{})", minutes * 60)
}

/// 分段輸出樣板：`<檔名>/<檔名>_part%03d<副檔名>`
#[must_use]
pub fn segment_output_pattern(input: &Path, output_dir: &Path) -> PathBuf {
    let base = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    output_dir.join(format!("{base}_part%03d{ext}"))
}

/// 組出分段參數：流複製、保留所有串流、每段重置時間戳
#[must_use]
pub fn build_segment_args(input: &Path, output_pattern: &Path, minutes: u32) -> Vec<String> {
    vec![
        "-i".to_string(),
        input.display().to_string(),
        "-c".to_string(),
        "copy".to_string(),
        "-map".to_string(),
        "0".to_string(),
        "-segment_time".to_string(),
        segment_time_arg(minutes),
        "-f".to_string(),
        "segment".to_string(),
        "-reset_timestamps".to_string(),
        "1".to_string(),
        "-force_key_frames".to_string(),
        keyframe_expr(minutes),
        output_pattern.display().to_string(),
    ]
}

impl Segmenter {
    #[must_use]
    pub fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
            tool: Box::new(FfmpegTool),
        }
    }

    /// 替換外部工具實作（測試用）
    #[must_use]
    pub fn with_tool(mut self, tool: Box<dyn MediaTool>) -> Self {
        self.tool = tool;
        self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 影片定長分段 ===").cyan().bold());

        self.tool.check_available()?;

        let directory = self.prompt_directory()?;
        validate_directory_exists(&directory)?;

        let minutes = self.config.settings.segment_minutes;
        println!(
            "{}",
            style(format!("每段長度: {minutes} 分鐘（可於設定中調整）")).dim()
        );

        println!("{}", style("掃描影片檔案中...").dim());
        let table = self.config.file_type_table.clone();
        let video_files = scan_video_files(&directory, |p| table.is_video_file(p))?;

        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Err(ToolError::NoInput.into());
        }

        println!(
            "{}",
            style(format!("開始處理 {} 個影片...", video_files.len())).cyan()
        );

        let mut success_count = 0;

        for file in &video_files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                break;
            }

            let name = file.file_name();
            match self.segment_single(file, &directory, minutes) {
                Ok(output_dir) => {
                    println!(
                        "  ✅ 成功分割: {} -> {}/",
                        name,
                        output_dir
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default()
                    );
                    success_count += 1;
                }
                Err(e) => {
                    println!("  ❌ 分割失敗 {name}: {e}");
                    warn!("分割失敗 {name}: {e}");
                }
            }
        }

        println!();
        println!("{}", style("=== 處理完成 ===").cyan().bold());
        println!(
            "  成功處理: {}/{} 個影片",
            style(success_count).green(),
            video_files.len()
        );

        info!("分段完成 - 成功: {}/{}", success_count, video_files.len());

        Ok(())
    }

    /// 分段單一檔案：建立（或重用）子資料夾後呼叫 ffmpeg
    fn segment_single(
        &self,
        file: &VideoFileInfo,
        directory: &Path,
        minutes: u32,
    ) -> ToolResult<PathBuf> {
        let output_dir = directory.join(file.base_name());
        std::fs::create_dir_all(&output_dir)?;

        let pattern = segment_output_pattern(&file.path, &output_dir);
        let args = build_segment_args(&file.path, &pattern, minutes);

        self.tool.run(&args)?;
        Ok(output_dir)
    }

    fn prompt_directory(&self) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }
}
