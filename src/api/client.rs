use super::{ApiError, ApiResult, AskRequest, AskResponse, DocumentApi, UploadResponse};
use crate::config::ApiConfig;
use crate::types::PdfFile;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const UPLOAD_PATH: &str = "/upload";
const ASK_PATH: &str = "/ask";
const PDF_MIME: &str = "application/pdf";

pub const UPLOAD_FALLBACK: &str = "Failed to upload PDF";
pub const ASK_FALLBACK: &str = "Failed to get answer";

/// reqwest-backed client for the document backend
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl DocumentApi for ApiClient {
    async fn upload(&self, file: PdfFile) -> ApiResult<UploadResponse> {
        let url = self.config.endpoint(UPLOAD_PATH);
        debug!(%url, file = %file.name, bytes = file.bytes.len(), "uploading document");

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(PDF_MIME)?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body, UPLOAD_FALLBACK)
    }

    async fn ask(&self, request: &AskRequest) -> ApiResult<AskResponse> {
        let url = self.config.endpoint(ASK_PATH);
        debug!(%url, document = ?request.pdf_name, "asking question");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(status, &body, ASK_FALLBACK)
    }
}

/// Turn a status and raw body into the expected payload or an [`ApiError`].
///
/// `fallback` is the message used when the backend gives no usable detail.
pub fn interpret_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    fallback: &str,
) -> ApiResult<T> {
    if !status.is_success() {
        let detail = error_detail(body).unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), %detail, "backend rejected request");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_str(body).map_err(|err| {
        warn!(status = status.as_u16(), error = %err, "unexpected response body");
        ApiError::Malformed(fallback.to_string())
    })
}

/// Extract the `detail` field of an error body.
///
/// Strings are returned as-is; other JSON values (FastAPI validation lists)
/// are rendered as JSON. Missing, null, or empty details yield `None`.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("detail")? {
        Value::Null => None,
        Value::String(detail) if detail.is_empty() => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
