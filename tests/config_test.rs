//! 設定ファイルテスト

use anomaly_upload::config::{Config, BASE_URL_ENV};
use anomaly_upload::error::AppError;
use tempfile::tempdir;

/// 設定ファイルがない場合はデフォルト値
#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.default_contamination, 0.05);
    assert_eq!(config.timeout_seconds, 120);
}

/// 保存した設定を再読み込みできる
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_base_url("https://anomaly.example.com".to_string());
    config.set_default_contamination(0.1).expect("設定失敗");
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"baseUrl\""));
    assert!(raw.contains("\"defaultContamination\""));
}

/// 一部のキーだけの設定ファイルは残りをデフォルトで補う
#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"baseUrl": "http://10.0.0.5:5000"}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.base_url, "http://10.0.0.5:5000");
    assert_eq!(config.default_contamination, 0.05);
    assert_eq!(config.timeout_seconds, 120);
}

/// 壊れた設定ファイルはJSONエラー
#[test]
fn test_invalid_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(AppError::JsonParse(_))));
}

/// 環境変数 → 引数の順で上書きされる
#[test]
fn test_overrides_env_then_cli() {
    std::env::set_var(BASE_URL_ENV, "http://from-env:5000");

    let config = Config::default().with_overrides(None);
    assert_eq!(config.base_url, "http://from-env:5000");

    let config = Config::default().with_overrides(Some("http://from-cli:5000".to_string()));
    assert_eq!(config.base_url, "http://from-cli:5000");

    std::env::remove_var(BASE_URL_ENV);
}

/// 相対URLはネイティブクライアントでは使えない
#[test]
fn test_validate_rejects_relative_base_url() {
    let mut config = Config::default();
    config.set_base_url("/api".to_string());
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    config.set_base_url("http://localhost:5000".to_string());
    assert!(config.validate().is_ok());
}

/// contaminationのデフォルト値は開区間(0, 1)
#[test]
fn test_set_default_contamination_range() {
    let mut config = Config::default();
    assert!(config.set_default_contamination(1.0).is_err());
    assert!(config.set_default_contamination(0.0).is_err());
    assert_eq!(config.default_contamination, 0.05);

    config.set_default_contamination(0.2).expect("設定失敗");
    assert_eq!(config.default_contamination, 0.2);
}
