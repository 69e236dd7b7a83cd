use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_rejects_missing_and_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
        assert!(validate_directory_exists(&temp_dir.path().join("nope")).is_err());

        let file = temp_dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_directory_exists(&file).is_err());
    }

    #[test]
    fn test_ensure_creates_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("dir");
        ensure_directory_exists(&target).unwrap();
        assert!(target.is_dir());
        // 再呼叫一次不應失敗
        ensure_directory_exists(&target).unwrap();
    }
}
