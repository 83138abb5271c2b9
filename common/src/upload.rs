//! アップロード画像の判定

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// メディアタイプが画像か（"image/" で始まる）
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// 拡張子からメディアタイプを推定（大文字小文字を区別しない）
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, media_type)| *media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_media_type() {
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("image/png"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type("text/plain"));
        assert!(!is_image_media_type(""));
    }

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(media_type_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(media_type_for_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(media_type_for_extension("Png"), Some("image/png"));
        assert_eq!(media_type_for_extension("tif"), Some("image/tiff"));
        assert_eq!(media_type_for_extension("txt"), None);
        assert_eq!(media_type_for_extension(""), None);
    }
}
