//! 錯誤分類
//!
//! 區分整批中止的錯誤（沒有輸入、外部工具不存在）與單一項目的錯誤
//! （工具執行失敗、探測失敗、裁剪區間無效、檔案系統操作失敗）。
//! 單一項目的錯誤會被記錄後繼續處理下一個檔案。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// 找不到任何可處理的檔案，整批中止
    #[error("找不到任何可處理的檔案")]
    NoInput,

    /// 外部工具不在 PATH 上，整批中止
    #[error("找不到 {tool}，請先安裝並加入系統 PATH")]
    ToolInvocation { tool: String },

    /// 外部工具執行後回傳非零結束碼
    #[error("{tool} 執行失敗:\n{stderr}")]
    ToolExecution { tool: String, stderr: String },

    /// 無法取得影片時長
    #[error("無法取得影片時長: {0}")]
    Probe(String),

    /// 計算出的裁剪區間無效
    #[error("裁剪時間無效（總時長: {duration:.1} 秒）")]
    InvalidWindow { duration: f64 },

    /// 建立資料夾、移動或重新命名失敗
    #[error("檔案系統操作失敗: {0}")]
    FileSystem(#[from] std::io::Error),
}

impl ToolError {
    /// 是否為整批中止的錯誤（其餘錯誤只影響單一項目）
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::NoInput | Self::ToolInvocation { .. })
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(ToolError::NoInput.is_fatal());
        assert!(
            ToolError::ToolInvocation {
                tool: "ffmpeg".to_string()
            }
            .is_fatal()
        );
        assert!(
            !ToolError::ToolExecution {
                tool: "ffmpeg".to_string(),
                stderr: "boom".to_string()
            }
            .is_fatal()
        );
        assert!(!ToolError::InvalidWindow { duration: 3.0 }.is_fatal());
    }
}
