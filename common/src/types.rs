//! セッションで扱うデータ型
//!
//! - SelectedFile: ユーザーが選択したファイル（バイト列 + ファイル名）
//! - ColumnsResponse: `/get_columns` の成功レスポンス
//! - DetectionResult: `/upload` の成功レスポンス（中身は解釈しない）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// contaminationのデフォルト値
pub const DEFAULT_CONTAMINATION: f64 = 0.05;

/// 選択されたファイル
///
/// バイト列は `Arc` で共有するので、リクエストごとの複製は安価。
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    file_name: String,
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// `/get_columns` のレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

/// 異常検知結果
///
/// バックエンドの返したJSONをそのまま保持する。加工や型変換はしない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult(serde_json::Value);

impl DetectionResult {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// 表示用の整形済みJSON
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<serde_json::Value> for DetectionResult {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selected_file_accessors() {
        let file = SelectedFile::new("data.csv", b"a,b\n1,2\n".to_vec());
        assert_eq!(file.file_name(), "data.csv");
        assert_eq!(file.bytes(), b"a,b\n1,2\n");
        assert_eq!(file.len(), 8);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_selected_file_debug_hides_bytes() {
        let file = SelectedFile::new("data.csv", vec![0u8; 1024]);
        let debug = format!("{:?}", file);
        assert!(debug.contains("data.csv"));
        assert!(debug.contains("1024"));
    }

    #[test]
    fn test_columns_response_deserialize() {
        let response: ColumnsResponse =
            serde_json::from_str(r#"{"columns": ["a", "b", "c"]}"#).expect("デシリアライズ失敗");
        assert_eq!(response.columns, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_detection_result_is_transparent() {
        let value = json!({"anomalies": [1, 5, 9]});
        let result = DetectionResult::from(value.clone());
        let serialized = serde_json::to_value(&result).expect("シリアライズ失敗");
        assert_eq!(serialized, value);
        assert_eq!(result.into_value(), value);
    }
}
