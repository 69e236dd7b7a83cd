//! 分組邏輯
//!
//! 兩段式分組：先依方括號作者標籤，再對無標籤檔案做貪婪共同前綴比對。
//! 前綴比對是由左至右的單次掃描，結果依輸入排序而定，不是全域最佳分群。

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 前綴分組的最低共同字元數
pub const MIN_PREFIX_CHARS: usize = 2;

static REGEX_AUTHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// 以方括號作者標籤分組
    Author,
    /// 以共同前綴分組
    Prefix,
}

/// 一個分組：鍵與依序加入的成員檔名
#[derive(Debug, Clone)]
pub struct FileGroup {
    pub key: String,
    pub kind: GroupKind,
    pub files: Vec<String>,
}

/// 取出檔名中第一個非空的方括號標籤，連同方括號原樣回傳
#[must_use]
pub fn extract_author_tag(name: &str) -> Option<String> {
    REGEX_AUTHOR_TAG
        .captures(name)
        .map(|caps| format!("[{}]", &caps[1]))
}

/// 兩字串的字元層級共同前綴
#[must_use]
pub fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

/// 一組字串的最長共同前綴
#[must_use]
pub fn common_prefix_of_all(names: &[String]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };

    names[1..]
        .iter()
        .fold(first.clone(), |prefix, name| common_prefix(&prefix, name))
}

/// 檔名去掉副檔名
fn stem_of(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string())
}

/// 將已排序的檔名清單分組
///
/// 每個檔案只屬於一個分組。回傳順序：作者分組（依首見順序）在前，
/// 前綴分組（依建立順序）在後。
#[must_use]
pub fn group_files(file_names: &[String]) -> Vec<FileGroup> {
    let mut author_groups: Vec<FileGroup> = Vec::new();
    let mut prefix_groups: Vec<FileGroup> = Vec::new();

    for name in file_names {
        if let Some(tag) = extract_author_tag(name) {
            match author_groups.iter_mut().find(|g| g.key == tag) {
                Some(group) => group.files.push(name.clone()),
                None => author_groups.push(FileGroup {
                    key: tag,
                    kind: GroupKind::Author,
                    files: vec![name.clone()],
                }),
            }
            continue;
        }

        let base = stem_of(name);

        // 在既有分組鍵中找最長的合格共同前綴；同長度時先掃到的優先
        let mut best_index: Option<usize> = None;
        let mut best_len = 0usize;

        for (index, group) in prefix_groups.iter().enumerate() {
            let common_len = common_prefix(&group.key, &base).chars().count();
            if common_len >= MIN_PREFIX_CHARS && common_len > best_len {
                best_len = common_len;
                best_index = Some(index);
            }
        }

        match best_index {
            Some(index) => prefix_groups[index].files.push(name.clone()),
            None => prefix_groups.push(FileGroup {
                key: base,
                kind: GroupKind::Prefix,
                files: vec![name.clone()],
            }),
        }
    }

    author_groups.extend(prefix_groups);
    author_groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_extract_author_tag() {
        assert_eq!(
            extract_author_tag("Show [Author] ep01.mp4"),
            Some("[Author]".to_string())
        );
        assert_eq!(extract_author_tag("random_clip.mp4"), None);
        // 空方括號不算標籤
        assert_eq!(extract_author_tag("clip [].mp4"), None);
    }

    #[test]
    fn test_extract_author_tag_takes_first() {
        assert_eq!(
            extract_author_tag("[A] title [B].mp4"),
            Some("[A]".to_string())
        );
    }

    #[test]
    fn test_common_prefix_of_all() {
        let prefix = common_prefix_of_all(&names(&["abc123", "abc456", "abcxyz"]));
        assert_eq!(prefix, "abc");
    }

    #[test]
    fn test_common_prefix_empty_when_no_overlap() {
        assert_eq!(common_prefix("abc", "xyz"), "");
        assert_eq!(common_prefix_of_all(&[]), "");
    }

    #[test]
    fn test_common_prefix_multibyte() {
        assert_eq!(common_prefix("影片01", "影片02"), "影片0");
    }

    #[test]
    fn test_group_by_author_tag() {
        let groups = group_files(&names(&[
            "[Ann] clip1.mp4",
            "[Ann] clip2.mp4",
            "[Bob] other.mp4",
        ]));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "[Ann]");
        assert_eq!(groups[0].kind, GroupKind::Author);
        assert_eq!(groups[0].files.len(), 2);
        assert_eq!(groups[1].key, "[Bob]");
    }

    #[test]
    fn test_group_by_prefix_greedy() {
        let groups = group_files(&names(&["show_ep1.mp4", "show_ep2.mp4", "other.mp4"]));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "show_ep1");
        assert_eq!(groups[0].files.len(), 2);
        assert_eq!(groups[1].files, vec!["other.mp4".to_string()]);
    }

    #[test]
    fn test_prefix_requires_two_chars() {
        // 共同前綴只有一個字元，不合格
        let groups = group_files(&names(&["a1.mp4", "a2.mp4"]));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_greedy_first_match_is_order_dependent() {
        // "abx1" 與首組鍵 "abcde1" 共享 "ab"（2 字元）即加入，
        // 之後 "abcde2" 也加入同組；單次貪婪掃描不是全域最佳分群
        let groups = group_files(&names(&["abcde1.mp4", "abx1.mp4", "abcde2.mp4"]));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "abcde1");
        assert_eq!(groups[0].files.len(), 3);
    }

    #[test]
    fn test_each_file_in_exactly_one_group() {
        let input = names(&[
            "[Ann] a.mp4",
            "show_1.mp4",
            "show_2.mp4",
            "lonely.mp4",
        ]);
        let groups = group_files(&input);

        let total: usize = groups.iter().map(|g| g.files.len()).sum();
        assert_eq!(total, input.len());
    }
}
