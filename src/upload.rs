//! 画像ファイルの受け付け

use crate::error::{EcoQnetError, Result};
use eco_qnet_common::media_type_for_extension;
use std::path::{Path, PathBuf};

/// 解析に渡す画像1枚
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// 画像ファイルを読み込む
    ///
    /// 拡張子が画像でない場合は読み込み前にエラー
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(EcoQnetError::FileNotFound(path.display().to_string()));
        }

        let media_type = path
            .extension()
            .and_then(|ext| media_type_for_extension(&ext.to_string_lossy()))
            .ok_or_else(|| EcoQnetError::NotAnImage(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let bytes = std::fs::read(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            media_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_jpeg() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("cam01.JPG");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let upload = ImageUpload::read(&path).expect("読み込み失敗");
        assert_eq!(upload.file_name, "cam01.JPG");
        assert_eq!(upload.media_type, "image/jpeg");
        assert_eq!(upload.bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_reject_non_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = ImageUpload::read(&path).unwrap_err();
        assert!(matches!(err, EcoQnetError::NotAnImage(_)));
    }

    #[test]
    fn test_reject_missing_file() {
        let err = ImageUpload::read(Path::new("/nonexistent/path/12345.jpg")).unwrap_err();
        assert!(matches!(err, EcoQnetError::FileNotFound(_)));
    }

    #[test]
    fn test_reject_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = ImageUpload::read(dir.path()).unwrap_err();
        assert!(matches!(err, EcoQnetError::FileNotFound(_)));
    }
}
