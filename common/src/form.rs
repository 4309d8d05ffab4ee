//! multipartフォームの組み立て
//!
//! ネイティブ(reqwest)とWASM(FormData)の両方が同じ `UploadForm` を
//! エンコードするので、フィールド名と値の形式はここで決まる。

use crate::types::SelectedFile;
use std::sync::Arc;

/// AnomalyServiceのエンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetColumns,
    Upload,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetColumns => "/get_columns",
            Endpoint::Upload => "/upload",
        }
    }

    /// ベースURLとパスを結合する
    ///
    /// 空のベースURLは同一オリジン（相対パス）を意味する。
    ///
    /// # Examples
    /// ```
    /// use anomaly_upload_common::Endpoint;
    ///
    /// assert_eq!(Endpoint::Upload.url(""), "/upload");
    /// assert_eq!(Endpoint::GetColumns.url("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/get_columns");
    /// ```
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim().trim_end_matches('/'), self.path())
    }
}

/// フォームフィールドの値
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File { file_name: String, bytes: Arc<[u8]> },
}

/// フォームフィールド
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: &'static str,
    pub value: FormValue,
}

/// 送信するmultipartフォーム
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm {
    pub endpoint: Endpoint,
    pub parts: Vec<FormPart>,
}

impl UploadForm {
    /// `/get_columns` 用: `file` のみ
    pub fn columns(file: &SelectedFile) -> Self {
        Self {
            endpoint: Endpoint::GetColumns,
            parts: vec![file_part(file)],
        }
    }

    /// `/upload` 用: `file`, `columns`(JSON配列), `contamination`(文字列)
    pub fn detection(file: &SelectedFile, columns: &[String], contamination: f64) -> Self {
        Self {
            endpoint: Endpoint::Upload,
            parts: vec![
                file_part(file),
                FormPart {
                    name: "columns",
                    value: FormValue::Text(encode_columns(columns)),
                },
                FormPart {
                    name: "contamination",
                    value: FormValue::Text(contamination.to_string()),
                },
            ],
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            FormValue::Text(text) if part.name == name => Some(text.as_str()),
            _ => None,
        })
    }
}

fn file_part(file: &SelectedFile) -> FormPart {
    FormPart {
        name: "file",
        value: FormValue::File {
            file_name: file.file_name().to_string(),
            bytes: file.shared_bytes(),
        },
    }
}

fn encode_columns(columns: &[String]) -> String {
    // Vec<String> のシリアライズは失敗しない
    serde_json::to_string(columns).unwrap_or_else(|_| "[]".to_string())
}
