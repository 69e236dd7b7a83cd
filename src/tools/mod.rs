mod media_tool;
mod path_validator;
mod video_scanner;

pub use media_tool::{FfmpegTool, MediaTool};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use video_scanner::{VideoFileInfo, scan_video_files};
