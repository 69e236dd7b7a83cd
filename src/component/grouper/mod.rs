//! 影片分組歸檔元件
//!
//! 依方括號作者標籤或最長共同前綴將 MP4 檔案分組，
//! 搬進對應資料夾；沒有同伴的檔案各自獨立成一個資料夾。

mod folder_namer;
mod main;
mod prefix_grouper;

pub use folder_namer::{
    MAX_FOLDER_NAME_CHARS, clean_folder_name, folder_name_for_group, truncate_folder_name,
};
pub use main::{GroupMoveResult, Grouper, MovePlan, plan_moves};
pub use prefix_grouper::{
    FileGroup, GroupKind, MIN_PREFIX_CHARS, common_prefix, common_prefix_of_all,
    extract_author_tag, group_files,
};
