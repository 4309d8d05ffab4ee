//! reqwestによるAnomalyService実装

use crate::error::{AppError, Result};
use anomaly_upload_common::{
    parse_success_body, status_error, AnomalyService, FormValue, TransportError, UploadForm,
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub struct HttpAnomalyService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnomalyService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl AnomalyService for HttpAnomalyService {
    async fn post_form(&self, form: &UploadForm) -> std::result::Result<Value, TransportError> {
        let url = form.endpoint.url(&self.base_url);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .multipart(to_multipart(form))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        parse_success_body(&body)
    }
}

fn to_multipart(form: &UploadForm) -> Form {
    form.parts.iter().fold(Form::new(), |multipart, part| match &part.value {
        FormValue::Text(text) => multipart.text(part.name, text.clone()),
        FormValue::File { file_name, bytes } => multipart.part(
            part.name,
            Part::bytes(bytes.to_vec()).file_name(file_name.clone()),
        ),
    })
}
