use crate::error::{AppError, Result};
use anomaly_upload_common::{is_valid_contamination, DEFAULT_CONTAMINATION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "ANOMALY_UPLOAD_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub base_url: String,
    pub default_contamination: f64,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            default_contamination: DEFAULT_CONTAMINATION,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("anomaly-upload").join("config.json"))
    }

    /// 環境変数 → コマンドライン引数の順で上書き
    pub fn with_overrides(mut self, cli_base_url: Option<String>) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        if let Some(url) = cli_base_url {
            self.base_url = url;
        }
        self
    }

    /// ネイティブクライアントは絶対URLが必要
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "baseUrlは http:// または https:// で始まる必要があります: {}",
                self.base_url
            )));
        }
        if !is_valid_contamination(self.default_contamination) {
            return Err(AppError::Config(format!(
                "defaultContaminationは0と1の間である必要があります: {}",
                self.default_contamination
            )));
        }
        Ok(())
    }

    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }

    pub fn set_default_contamination(&mut self, value: f64) -> Result<()> {
        if !is_valid_contamination(value) {
            return Err(AppError::Config(format!(
                "defaultContaminationは0と1の間である必要があります: {}",
                value
            )));
        }
        self.default_contamination = value;
        Ok(())
    }
}
