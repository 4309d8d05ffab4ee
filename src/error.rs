use anomaly_upload_common::{ControllerError, UserInputError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UserInputError> for AppError {
    fn from(error: UserInputError) -> Self {
        AppError::Controller(error.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
