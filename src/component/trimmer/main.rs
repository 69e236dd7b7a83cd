//! 影片批次裁剪主模組
//!
//! 協調使用者輸入、逐檔探測與裁剪執行；單一檔案的失敗只記錄並繼續。

use super::trim_plan::{TrimSpec, TrimStrategy, build_trim_args, plan_trim};
use crate::config::Config;
use crate::error::{Result as ToolResult, ToolError};
use crate::tools::{
    FfmpegTool, MediaTool, VideoFileInfo, ensure_directory_exists, scan_video_files,
    validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// 裁剪結果輸出子資料夾
pub const TRIM_OUTPUT_DIR: &str = "Cut";

/// 影片批次裁剪器
pub struct Trimmer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    tool: Box<dyn MediaTool>,
}

/// 解析「分 秒」輸入，兩個非負整數
pub fn parse_time_pair(input: &str) -> std::result::Result<(u32, u32), String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("請輸入兩個數字（分 秒）".to_string());
    }

    let minutes: u32 = parts[0]
        .parse()
        .map_err(|_| "分鐘必須是非負整數".to_string())?;
    let seconds: u32 = parts[1]
        .parse()
        .map_err(|_| "秒數必須是非負整數".to_string())?;

    Ok((minutes, seconds))
}

/// 裁剪輸出路徑：`Cut/<檔名>_cut<副檔名>`
#[must_use]
pub fn trim_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let base = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    output_dir.join(format!("{base}_cut{ext}"))
}

/// 裁剪單一檔案：探測時長、計算區間、執行、驗證輸出
///
/// ffmpeg 回報成功但輸出不存在或為空時仍視為失敗。
pub fn trim_single(
    tool: &dyn MediaTool,
    input: &Path,
    output: &Path,
    spec: &TrimSpec,
) -> ToolResult<TrimStrategy> {
    let duration = tool.probe_duration(input)?;
    let plan = plan_trim(duration, spec)?;
    let args = build_trim_args(&plan, input, output);

    tool.run(&args)?;

    let output_size = std::fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    if output_size == 0 {
        return Err(ToolError::ToolExecution {
            tool: "ffmpeg".to_string(),
            stderr: format!("輸出檔案不存在或為空: {}", output.display()),
        });
    }

    Ok(plan.strategy)
}

impl Trimmer {
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
        println!("{}", style("=== 影片批次裁剪（關鍵幀優化） ===").cyan().bold());

        // ffmpeg 不存在時整批中止
        self.tool.check_available()?;

        let directory = self.prompt_directory()?;
        validate_directory_exists(&directory)?;

        self.print_banner();

        let spec = self.prompt_trim_spec()?;

        println!("{}", style("掃描影片檔案中...").dim());
        let table = self.config.file_type_table.clone();
        let video_files = scan_video_files(&directory, |p| table.is_trimmable_file(p))?;

        if video_files.is_empty() {
            println!("{}", style("找不到支援的影片檔案").yellow());
            return Err(ToolError::NoInput.into());
        }

        println!("\n找到以下影片檔案:");
        for (index, file) in video_files.iter().enumerate() {
            println!("  {}. {}", index + 1, file.file_name());
        }

        println!(
            "\n將裁剪: 片頭 {:.0} 秒, 片尾 {:.0} 秒",
            spec.head_seconds, spec.tail_seconds
        );
        println!("{}", style("片頭接近 0 秒時會自動使用精確模式保證音畫同步").dim());

        if !self.confirm_start()? {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        // 輸出目錄建立失敗是整批錯誤
        let output_dir = directory.join(TRIM_OUTPUT_DIR);
        ensure_directory_exists(&output_dir)?;

        let success_count = self.execute_batch(&video_files, &output_dir, &spec);

        println!();
        println!("{}", style("=== 處理完成 ===").cyan().bold());
        println!(
            "  成功處理: {}/{} 個影片",
            style(success_count).green(),
            video_files.len()
        );
        println!("  輸出目錄: {}", output_dir.display());

        info!("裁剪完成 - 成功: {}/{}", success_count, video_files.len());

        Ok(())
    }

    fn execute_batch(
        &self,
        video_files: &[VideoFileInfo],
        output_dir: &Path,
        spec: &TrimSpec,
    ) -> usize {
        let mut success_count = 0;

        let progress_bar = ProgressBar::new(video_files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );

        for file in video_files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message("操作已中斷");
                break;
            }

            let name = file.file_name();
            progress_bar.set_message(name.clone());

            let output = trim_output_path(&file.path, output_dir);
            let started = Instant::now();

            match trim_single(self.tool.as_ref(), &file.path, &output, spec) {
                Ok(strategy) => {
                    let elapsed = started.elapsed().as_secs_f64();
                    let mode = match strategy {
                        TrimStrategy::Accurate => "精確編碼",
                        TrimStrategy::StreamCopy => "串流複製",
                    };
                    progress_bar
                        .println(format!("  ✅ {name}（{mode}，{elapsed:.1} 秒）"));
                    success_count += 1;
                }
                Err(e) => {
                    progress_bar.println(format!("  ⚠️ 跳過 {name}: {e}"));
                    warn!("裁剪失敗 {name}: {e}");
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("完成");
        success_count
    }

    fn print_banner(&self) {
        let extensions: Vec<String> = self
            .config
            .file_type_table
            .video_file
            .iter()
            .chain(self.config.file_type_table.trimmer_extra_file.iter())
            .cloned()
            .collect();

        println!("{}", style("說明:").bold());
        println!("- 請按格式輸入時間（例如：片頭 2 分 30 秒 → 輸入 2 30）");
        println!("- 處理後的影片將保存到 '{TRIM_OUTPUT_DIR}' 資料夾");
        println!("- 支援格式: {}", extensions.join(", "));
    }

    fn prompt_directory(&self) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }

    fn prompt_trim_spec(&self) -> Result<TrimSpec> {
        let head = self.prompt_time_pair("▶ 片頭時間（分 秒）")?;
        let tail = self.prompt_time_pair("⏹ 片尾時間（分 秒）")?;
        Ok(TrimSpec::from_minutes_seconds(head, tail))
    }

    fn prompt_time_pair(&self, prompt: &str) -> Result<(u32, u32)> {
        loop {
            let input: String = Input::new().with_prompt(prompt).interact_text()?;
            match parse_time_pair(&input) {
                Ok(pair) => return Ok(pair),
                Err(msg) => println!("{} {}", style("輸入錯誤:").red(), msg),
            }
        }
    }

    fn confirm_start(&self) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt("開始處理?")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_pair_valid() {
        assert_eq!(parse_time_pair("2 30"), Ok((2, 30)));
        assert_eq!(parse_time_pair("  0   0 "), Ok((0, 0)));
    }

    #[test]
    fn test_parse_time_pair_rejects_bad_input() {
        assert!(parse_time_pair("2").is_err());
        assert!(parse_time_pair("2 30 5").is_err());
        assert!(parse_time_pair("a b").is_err());
        // 負數不是合法輸入
        assert!(parse_time_pair("-1 30").is_err());
    }

    #[test]
    fn test_trim_output_path_keeps_extension() {
        let output = trim_output_path(Path::new("/videos/片段.mkv"), Path::new("/videos/Cut"));
        assert_eq!(output, PathBuf::from("/videos/Cut/片段_cut.mkv"));
    }

    #[test]
    fn test_trim_output_path_without_extension() {
        let output = trim_output_path(Path::new("/videos/clip"), Path::new("/videos/Cut"));
        assert_eq!(output, PathBuf::from("/videos/Cut/clip_cut"));
    }
}
