//! 裁剪區間計算與 ffmpeg 參數組合

use crate::error::{Result, ToolError};
use std::path::Path;

/// 片頭小於此秒數時使用精確編碼模式
pub const ACCURATE_SEEK_THRESHOLD: f64 = 0.5;
/// 結束時間保留的安全邊界，避免超出串流長度
const END_GUARD_SECONDS: f64 = 0.1;

/// 裁剪設定（片頭與片尾要去掉的秒數）
#[derive(Debug, Clone, Copy)]
pub struct TrimSpec {
    pub head_seconds: f64,
    pub tail_seconds: f64,
}

impl TrimSpec {
    /// 由兩組（分, 秒）非負整數組成
    #[must_use]
    pub fn from_minutes_seconds(head: (u32, u32), tail: (u32, u32)) -> Self {
        Self {
            head_seconds: f64::from(head.0 * 60 + head.1),
            tail_seconds: f64::from(tail.0 * 60 + tail.1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimStrategy {
    /// 重新編碼，保證切點的音畫同步
    Accurate,
    /// 串流複製，輸入前定位關鍵幀，速度快
    StreamCopy,
}

#[derive(Debug, Clone, Copy)]
pub struct TrimPlan {
    pub start_seconds: f64,
    pub end_seconds: f64,
    pub strategy: TrimStrategy,
}

/// 由總時長與裁剪設定計算裁剪區間
///
/// 結束時間取 `min(D - tail, D - 0.1)`；區間非正時回報 `InvalidWindow`。
pub fn plan_trim(duration: f64, spec: &TrimSpec) -> Result<TrimPlan> {
    let effective_end = (duration - spec.tail_seconds).min(duration - END_GUARD_SECONDS);

    if effective_end <= spec.head_seconds {
        return Err(ToolError::InvalidWindow { duration });
    }

    let strategy = if spec.head_seconds < ACCURATE_SEEK_THRESHOLD {
        TrimStrategy::Accurate
    } else {
        TrimStrategy::StreamCopy
    };

    Ok(TrimPlan {
        start_seconds: spec.head_seconds,
        end_seconds: effective_end,
        strategy,
    })
}

/// 依裁剪計畫組出 ffmpeg 參數
///
/// 兩種模式都帶 `-avoid_negative_ts make_zero`，避免輸出負時間戳。
#[must_use]
pub fn build_trim_args(plan: &TrimPlan, input: &Path, output: &Path) -> Vec<String> {
    match plan.strategy {
        TrimStrategy::Accurate => vec![
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-ss".to_string(),
            plan.start_seconds.to_string(),
            "-to".to_string(),
            plan.end_seconds.to_string(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
            "-preset".to_string(),
            "fast".to_string(),
            "-crf".to_string(),
            "23".to_string(),
            "-avoid_negative_ts".to_string(),
            "make_zero".to_string(),
            output.display().to_string(),
        ],
        TrimStrategy::StreamCopy => vec![
            "-y".to_string(),
            "-ss".to_string(),
            plan.start_seconds.to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-to".to_string(),
            (plan.end_seconds - plan.start_seconds).to_string(),
            "-c".to_string(),
            "copy".to_string(),
            "-avoid_negative_ts".to_string(),
            "make_zero".to_string(),
            "-noaccurate_seek".to_string(),
            output.display().to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_when_trims_exceed_duration() {
        // 總長 60 秒，片頭 30 + 片尾 40 超過總長
        let spec = TrimSpec::from_minutes_seconds((0, 30), (0, 40));
        let result = plan_trim(60.0, &spec);
        assert!(matches!(result, Err(ToolError::InvalidWindow { .. })));
    }

    #[test]
    fn test_end_guard_applied_with_zero_tail() {
        let spec = TrimSpec::from_minutes_seconds((0, 10), (0, 0));
        let plan = plan_trim(60.0, &spec).unwrap();
        assert!((plan.end_seconds - 59.9).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_threshold_at_half_second() {
        let accurate = plan_trim(
            60.0,
            &TrimSpec {
                head_seconds: 0.0,
                tail_seconds: 0.0,
            },
        )
        .unwrap();
        assert_eq!(accurate.strategy, TrimStrategy::Accurate);

        let accurate_close = plan_trim(
            60.0,
            &TrimSpec {
                head_seconds: 0.4,
                tail_seconds: 0.0,
            },
        )
        .unwrap();
        assert_eq!(accurate_close.strategy, TrimStrategy::Accurate);

        let copy = plan_trim(
            60.0,
            &TrimSpec {
                head_seconds: 0.5,
                tail_seconds: 0.0,
            },
        )
        .unwrap();
        assert_eq!(copy.strategy, TrimStrategy::StreamCopy);
    }

    #[test]
    fn test_accurate_args_seek_after_input() {
        let plan = TrimPlan {
            start_seconds: 0.0,
            end_seconds: 59.9,
            strategy: TrimStrategy::Accurate,
        };
        let args = build_trim_args(&plan, Path::new("in.mp4"), Path::new("Cut/in_cut.mp4"));

        let i_index = args.iter().position(|a| a == "-i").unwrap();
        let ss_index = args.iter().position(|a| a == "-ss").unwrap();
        assert!(i_index < ss_index, "-ss 應在 -i 之後（精確定位）");
        assert!(args.contains(&"libx264".to_string()));
        assert!(args.contains(&"make_zero".to_string()));
    }

    #[test]
    fn test_copy_args_seek_before_input_with_relative_to() {
        let plan = TrimPlan {
            start_seconds: 150.0,
            end_seconds: 3450.0,
            strategy: TrimStrategy::StreamCopy,
        };
        let args = build_trim_args(&plan, Path::new("in.mp4"), Path::new("Cut/in_cut.mp4"));

        let i_index = args.iter().position(|a| a == "-i").unwrap();
        let ss_index = args.iter().position(|a| a == "-ss").unwrap();
        assert!(ss_index < i_index, "-ss 應在 -i 之前（關鍵幀定位）");

        // -to 在輸入前定位時是相對長度
        let to_index = args.iter().position(|a| a == "-to").unwrap();
        assert_eq!(args[to_index + 1], "3300");
        assert!(args.contains(&"copy".to_string()));
        assert!(args.contains(&"-noaccurate_seek".to_string()));
    }
}
