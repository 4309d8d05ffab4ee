//! AnomalyService との境界
//!
//! 実装はフォームを送ってJSONを返すだけ。レスポンスの解釈は
//! コントローラ側で行う。

use crate::error::TransportError;
use crate::form::UploadForm;
use serde_json::Value;

/// 異常検知バックエンド
#[allow(async_fn_in_trait)]
pub trait AnomalyService {
    /// フォームをエンドポイントへPOSTし、2xxならJSONボディを返す
    async fn post_form(&self, form: &UploadForm) -> Result<Value, TransportError>;
}

/// エラーレスポンスのボディから `error` フィールドを取り出す
///
/// ボディがJSONオブジェクトでない、または `error` が文字列でない場合はNone。
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// HTTPステータスとボディをTransportErrorに変換する（非2xx用）
pub fn status_error(status: u16, body: &str) -> TransportError {
    TransportError::Status {
        status,
        message: error_message_from_body(body),
    }
}

/// 2xxボディをJSONとしてパースする
pub fn parse_success_body(body: &str) -> Result<Value, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
}
