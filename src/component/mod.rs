//! 功能元件模組
//!
//! 每個子模組實現一個獨立的工具，包含主要邏輯和專用輔助模組

pub mod concatenator;
pub mod grouper;
pub mod renamer;
pub mod segmenter;
pub mod trimmer;

pub use concatenator::Concatenator;
pub use grouper::Grouper;
pub use renamer::Renamer;
pub use segmenter::Segmenter;
pub use trimmer::Trimmer;
