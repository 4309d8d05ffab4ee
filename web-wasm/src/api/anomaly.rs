//! fetch APIによるAnomalyService実装
//!
//! `UploadForm` を `FormData` に変換してPOSTする。
//! Content-Typeはブラウザがboundary付きで設定するので指定しない。

use anomaly_upload_common::{
    parse_success_body, status_error, AnomalyService, FormValue, TransportError, UploadForm,
};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

#[derive(Clone, Debug)]
pub struct FetchAnomalyService {
    base_url: String,
}

impl FetchAnomalyService {
    /// 空文字は同一オリジン
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl AnomalyService for FetchAnomalyService {
    async fn post_form(&self, form: &UploadForm) -> Result<Value, TransportError> {
        let url = form.endpoint.url(&self.base_url);
        let body: JsValue = to_form_data(form).map_err(network_error)?.into();

        let mut opts = RequestInit::new();
        opts.method("POST");
        opts.mode(RequestMode::Cors);
        opts.body(Some(&body));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        let text = JsFuture::from(resp.text().map_err(network_error)?)
            .await
            .map_err(network_error)?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            return Err(status_error(resp.status(), &text));
        }

        parse_success_body(&text)
    }
}

fn to_form_data(form: &UploadForm) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for part in &form.parts {
        match &part.value {
            FormValue::Text(text) => data.append_with_str(part.name, text)?,
            FormValue::File { file_name, bytes } => {
                let array = js_sys::Uint8Array::from(&bytes[..]);
                let blob = Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array))?;
                data.append_with_blob_and_filename(part.name, &blob, file_name)?;
            }
        }
    }
    Ok(data)
}

fn network_error(value: JsValue) -> TransportError {
    TransportError::Network(js_message(&value))
}

/// JS側の例外からメッセージを取り出す
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
