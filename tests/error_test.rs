//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use eco_qnet::error::EcoQnetError;
use eco_qnet::upload::ImageUpload;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像
#[test]
fn test_upload_nonexistent_file() {
    let result = ImageUpload::read(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(EcoQnetError::FileNotFound(_))));
}

/// 画像以外のファイル
#[test]
fn test_upload_non_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, "%PDF-1.4").unwrap();

    let err = ImageUpload::read(&path).unwrap_err();
    assert!(matches!(err, EcoQnetError::NotAnImage(_)));
    assert!(format!("{}", err).contains("report.pdf"));
}

/// EcoQnetErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        EcoQnetError::Config("テスト設定エラー".to_string()),
        EcoQnetError::FileNotFound("cam01.jpg".to_string()),
        EcoQnetError::NotAnImage("notes.txt".to_string()),
        EcoQnetError::ApiCall("connection refused".to_string()),
        EcoQnetError::ApiStatus(502),
        EcoQnetError::ApiParse("missing field: prediction".to_string()),
        EcoQnetError::Timeout(30),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ステータスとタイムアウトのメッセージ
#[test]
fn test_api_error_messages() {
    assert!(format!("{}", EcoQnetError::ApiStatus(503)).contains("503"));
    assert!(format!("{}", EcoQnetError::Timeout(12)).contains("12"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: EcoQnetError = io_err.into();

    assert!(matches!(err, EcoQnetError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: EcoQnetError = json_err.into();

    assert!(matches!(err, EcoQnetError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = eco_qnet_common::Error::Config("escalation field must not be empty".to_string());
    let err: EcoQnetError = common_err.into();

    assert!(matches!(err, EcoQnetError::Common(_)));
    assert_eq!(format!("{}", err), "Config error: escalation field must not be empty");
}

/// 状態遷移エラーからの変換
#[test]
fn test_transition_error_conversion() {
    let transition = eco_qnet_common::TransitionError::UploadNotAllowed("analyzing");
    let err: EcoQnetError = transition.into();

    assert!(matches!(err, EcoQnetError::Transition(_)));
    assert!(format!("{}", err).contains("analyzing"));
}
