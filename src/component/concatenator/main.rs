//! 影片串接主模組

use super::manifest::write_manifest;
use crate::config::Config;
use crate::error::{Result as ToolResult, ToolError};
use crate::tools::{
    FfmpegTool, MediaTool, VideoFileInfo, scan_video_files, validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub const OUTPUT_FILE_NAME: &str = "output.mp4";

/// 影片串接器
pub struct Concatenator {
    config: Config,
    #[allow(dead_code)]
    shutdown_signal: Arc<AtomicBool>,
    tool: Box<dyn MediaTool>,
}

/// 組出 concat 串接參數（直接流複製，不重新編碼）
#[must_use]
pub fn build_concat_args(manifest: &Path, output: &Path) -> Vec<String> {
    vec![
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        manifest.display().to_string(),
        "-c".to_string(),
        "copy".to_string(),
        "-y".to_string(),
        output.display().to_string(),
    ]
}

impl Concatenator {
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
        println!("{}", style("=== 影片無損串接 ===").cyan().bold());

        let directory = self.prompt_directory()?;
        validate_directory_exists(&directory)?;

        println!("{}", style("掃描影片檔案中...").dim());
        let table = self.config.file_type_table.clone();
        let video_files = scan_video_files(&directory, |p| table.is_video_file(p))?;

        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Err(ToolError::NoInput.into());
        }

        println!(
            "{}",
            style(format!("將依下列順序串接 {} 個檔案：", video_files.len())).green()
        );
        for (index, file) in video_files.iter().enumerate() {
            println!("  {}. {}", index + 1, file.file_name());
        }

        println!("{}", style("串接中...").cyan());
        let output = self.concatenate(&directory, &video_files)?;

        println!(
            "\n{} {}",
            style("操作完成! 輸出檔案:").green().bold(),
            output.display()
        );

        Ok(())
    }

    /// 寫入清單、呼叫 ffmpeg、回傳輸出路徑；清單在任何路徑下都會被刪除
    pub fn concatenate(
        &self,
        directory: &Path,
        video_files: &[VideoFileInfo],
    ) -> ToolResult<PathBuf> {
        if video_files.is_empty() {
            return Err(ToolError::NoInput);
        }

        let file_names: Vec<String> = video_files.iter().map(VideoFileInfo::file_name).collect();
        let manifest = write_manifest(directory, &file_names)?;

        let output = directory.join(OUTPUT_FILE_NAME);
        let args = build_concat_args(manifest.path(), &output);

        self.tool.run(&args)?;

        info!("串接完成: {} 個檔案 -> {}", file_names.len(), output.display());
        Ok(output)
    }

    fn prompt_directory(&self) -> Result<PathBuf> {
        let path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        Ok(PathBuf::from(path.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_args_use_stream_copy() {
        let args = build_concat_args(Path::new("/tmp/filelist.txt"), Path::new("/tmp/output.mp4"));
        assert_eq!(args[0], "-f");
        assert_eq!(args[1], "concat");
        let copy_index = args.iter().position(|a| a == "-c").unwrap();
        assert_eq!(args[copy_index + 1], "copy");
        assert!(args.contains(&"-y".to_string()));
        assert_eq!(args.last().unwrap(), "/tmp/output.mp4");
    }
}
