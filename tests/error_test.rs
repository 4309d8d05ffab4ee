//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use anomaly_upload::error::AppError;
use anomaly_upload::runner;
use anomaly_upload_common::{ControllerError, Operation, TransportError, UserInputError};
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = runner::load_file(Path::new("/nonexistent/path/12345.csv"));
    assert!(matches!(result, Err(AppError::FileNotFound(_))));
}

/// ディレクトリを指定した場合
#[test]
fn test_load_directory_is_not_a_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = runner::load_file(dir.path());
    assert!(matches!(result, Err(AppError::FileNotFound(_))));
}

/// ファイル名とバイト列がそのまま読み込まれる
#[test]
fn test_load_file_keeps_name_and_bytes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sensor.csv");
    std::fs::write(&path, "temp,pressure\n1,2\n").unwrap();

    let file = runner::load_file(&path).expect("読み込み失敗");
    assert_eq!(file.file_name(), "sensor.csv");
    assert_eq!(file.bytes(), b"temp,pressure\n1,2\n");
}

/// AppErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AppError::Config("テスト設定エラー".to_string()),
        AppError::FileNotFound("data.csv".to_string()),
        AppError::HttpClient("TLS初期化失敗".to_string()),
        AppError::Prompt("端末がありません".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// コントローラのエラーは通知文がそのまま表示される
#[test]
fn test_controller_error_is_transparent() {
    let err: AppError = ControllerError::Transport {
        operation: Operation::RequestColumns,
        error: TransportError::Status {
            status: 400,
            message: Some("bad format".to_string()),
        },
    }
    .into();

    assert_eq!(err.to_string(), "Error uploading file: bad format");
}

/// 入力エラーからの変換
#[test]
fn test_user_input_error_conversion() {
    let err: AppError = UserInputError::NoColumnsSelected.into();

    assert!(matches!(
        err,
        AppError::Controller(ControllerError::UserInput(UserInputError::NoColumnsSelected))
    ));
    assert_eq!(
        err.to_string(),
        "Please select at least one column for anomaly detection."
    );
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AppError = io_err.into();

    assert!(matches!(err, AppError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AppError = json_err.into();

    assert!(matches!(err, AppError::JsonParse(_)));
}
