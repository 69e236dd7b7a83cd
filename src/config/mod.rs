pub mod load;
pub mod save;
pub mod types;

pub use types::{
    Config, DEFAULT_RENAME_DELIMITER, DEFAULT_SEGMENT_MINUTES, FileTypeTable, UserSettings,
    is_mp4_file,
};
