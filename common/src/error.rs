//! エラー型定義
//!
//! `Display` の文字列はそのままユーザー通知として表示される。

use std::fmt;
use thiserror::Error;

/// 操作の種類（通知メッセージの接頭辞に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// カラム一覧の取得
    RequestColumns,
    /// 異常検知
    DetectAnomalies,
}

impl Operation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            Operation::RequestColumns => "Error uploading file",
            Operation::DetectAnomalies => "Error detecting anomalies",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::RequestColumns => write!(f, "get columns"),
            Operation::DetectAnomalies => write!(f, "detect anomalies"),
        }
    }
}

/// 入力不備（ネットワーク呼び出し前に検出）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UserInputError {
    #[error("Please select a file to upload.")]
    NoFileToUpload,

    #[error("Please upload a file.")]
    NoFileForDetection,

    #[error("Please select at least one column for anomaly detection.")]
    NoColumnsSelected,

    #[error("Contamination must be between 0 and 1 (exclusive), got {0}.")]
    ContaminationOutOfRange(f64),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// 通信エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// 2xx以外のHTTPステータス。`message` はレスポンスの `error` フィールド
    #[error("{}", status_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

fn status_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("Request failed with status code {}", status),
    }
}

/// コントローラ操作のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    #[error(transparent)]
    UserInput(#[from] UserInputError),

    #[error("{}: {error}", .operation.failure_prefix())]
    Transport {
        operation: Operation,
        error: TransportError,
    },

    #[error("A request to {0} is already in progress.")]
    Busy(Operation),
}

impl ControllerError {
    /// ユーザー通知用メッセージ
    pub fn notification(&self) -> String {
        self.to_string()
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_failure_uses_server_message() {
        let error = ControllerError::Transport {
            operation: Operation::RequestColumns,
            error: TransportError::Status {
                status: 400,
                message: Some("bad format".to_string()),
            },
        };
        assert_eq!(error.notification(), "Error uploading file: bad format");
    }

    #[test]
    fn test_status_without_message_falls_back() {
        let error = ControllerError::Transport {
            operation: Operation::DetectAnomalies,
            error: TransportError::Status { status: 500, message: None },
        };
        assert_eq!(
            error.notification(),
            "Error detecting anomalies: Request failed with status code 500"
        );
    }

    #[test]
    fn test_network_error_message() {
        let error = ControllerError::Transport {
            operation: Operation::RequestColumns,
            error: TransportError::Network("Network Error".to_string()),
        };
        assert_eq!(error.notification(), "Error uploading file: Network Error");
    }

    #[test]
    fn test_user_input_is_transparent() {
        let error: ControllerError = UserInputError::NoColumnsSelected.into();
        assert!(matches!(error, ControllerError::UserInput(_)));
        assert_eq!(
            error.notification(),
            "Please select at least one column for anomaly detection."
        );
    }

    #[test]
    fn test_contamination_message() {
        let error = UserInputError::ContaminationOutOfRange(1.5);
        assert_eq!(
            error.to_string(),
            "Contamination must be between 0 and 1 (exclusive), got 1.5."
        );
    }
}
