//! 外部媒體工具介面
//!
//! 所有 ffmpeg / ffprobe 呼叫都經由 `MediaTool` 介面，
//! 測試時可替換成不啟動子行程的假實作。

use crate::error::{Result, ToolError};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

pub trait MediaTool {
    /// 取得影片總時長（秒）
    fn probe_duration(&self, path: &Path) -> Result<f64>;

    /// 以給定參數執行轉檔工具，阻塞直到子行程結束
    fn run(&self, args: &[String]) -> Result<()>;

    /// 確認轉檔工具存在於 PATH
    fn check_available(&self) -> Result<()>;
}

/// 正式實作：同步呼叫 ffmpeg 與 ffprobe
pub struct FfmpegTool;

impl FfmpegTool {
    fn map_spawn_error(tool: &str, e: &std::io::Error) -> ToolError {
        if e.kind() == ErrorKind::NotFound {
            ToolError::ToolInvocation {
                tool: tool.to_string(),
            }
        } else {
            ToolError::ToolExecution {
                tool: tool.to_string(),
                stderr: e.to_string(),
            }
        }
    }
}

impl MediaTool for FfmpegTool {
    fn probe_duration(&self, path: &Path) -> Result<f64> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|e| Self::map_spawn_error("ffprobe", &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::Probe(format!(
                "{}: {}",
                path.display(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<f64>()
            .map_err(|_| ToolError::Probe(format!("{}: 輸出無法解析", path.display())))
    }

    fn run(&self, args: &[String]) -> Result<()> {
        let output = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::map_spawn_error("ffmpeg", &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::ToolExecution {
                tool: "ffmpeg".to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    fn check_available(&self) -> Result<()> {
        let status = Command::new("ffmpeg")
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Self::map_spawn_error("ffmpeg", &e))?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::ToolInvocation {
                tool: "ffmpeg".to_string(),
            })
        }
    }
}
