//! 資料夾命名
//!
//! 把分組鍵或共同前綴清理成可用的資料夾名稱：
//! 去掉結尾的集數序號與標點，過長時截斷。

use super::prefix_grouper::{FileGroup, GroupKind, common_prefix_of_all, extract_author_tag};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 資料夾名稱的最大字元數，超過時截為 47 字元加省略號
pub const MAX_FOLDER_NAME_CHARS: usize = 50;
const TRUNCATED_CHARS: usize = 47;

static REGEX_TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[0-9]+\s*$").expect("Invalid regex"));

static REGEX_TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[ 　～~\-_.,;:!?()\[\]【】（）「」“”"'*#@&$%^+=|\\<>/`]+$"#)
        .expect("Invalid regex")
});

/// 清理資料夾名稱
///
/// 含作者標籤時直接用標籤；否則去掉結尾數字序號與標點。
/// 清理後為空就退回原始名稱（去頭尾空白）。
#[must_use]
pub fn clean_folder_name(name: &str) -> String {
    if let Some(tag) = extract_author_tag(name) {
        return tag;
    }

    let without_number = REGEX_TRAILING_NUMBER.replace(name, "");
    let cleaned = REGEX_TRAILING_PUNCT.replace(&without_number, "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        name.trim().to_string()
    } else {
        cleaned.to_string()
    }
}

/// 過長的名稱截為前 47 字元加 `...`
#[must_use]
pub fn truncate_folder_name(name: &str) -> String {
    if name.chars().count() > MAX_FOLDER_NAME_CHARS {
        let truncated: String = name.chars().take(TRUNCATED_CHARS).collect();
        format!("{truncated}...")
    } else {
        name.to_string()
    }
}

/// 計算分組的資料夾名稱
///
/// 作者分組用標籤本身；前綴分組用成員檔名（去副檔名）的最長共同前綴，
/// 清理後使用。共同前綴為空時回傳 `None`，成員改走獨立資料夾路徑。
#[must_use]
pub fn folder_name_for_group(group: &FileGroup) -> Option<String> {
    match group.kind {
        GroupKind::Author => Some(truncate_folder_name(&group.key)),
        GroupKind::Prefix => {
            let stems: Vec<String> = group
                .files
                .iter()
                .map(|name| {
                    Path::new(name)
                        .file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| name.clone())
                })
                .collect();

            let prefix = common_prefix_of_all(&stems);
            if prefix.is_empty() {
                return None;
            }

            let cleaned = clean_folder_name(&prefix);
            if cleaned.is_empty() {
                return None;
            }

            Some(truncate_folder_name(&cleaned))
        }
    }
}
