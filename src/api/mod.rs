//! Client for the document question-answering backend.
//!
//! The backend exposes two endpoints:
//!
//! - `POST /upload` takes a multipart `file` field and answers `{ "filename": ... }`
//! - `POST /ask` takes `{ "question": ..., "pdf_name": ... }` and answers `{ "answer": ... }`
//!
//! Failures answer with a non-2xx status and an optional `{ "detail": ... }`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use docchat::api::{ApiClient, AskRequest, DocumentApi};
//!
//! # async fn example() -> docchat::api::ApiResult<()> {
//! let api = ApiClient::from_env();
//! let request = AskRequest::new("What is the revenue?", Some("report.pdf".to_string()));
//! let response = api.ask(&request).await?;
//! println!("{}", response.answer);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

use crate::types::PdfFile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::{ASK_FALLBACK, ApiClient, UPLOAD_FALLBACK, error_detail, interpret_response};
pub use error::{ApiError, ApiResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_name: Option<String>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, pdf_name: Option<String>) -> Self {
        Self {
            question: question.into(),
            pdf_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// The two backend operations the chat depends on.
///
/// Futures are not required to be `Send`: on `wasm32` the reqwest futures
/// are tied to the browser's event loop.
#[async_trait(?Send)]
pub trait DocumentApi {
    async fn upload(&self, file: PdfFile) -> ApiResult<UploadResponse>;

    async fn ask(&self, request: &AskRequest) -> ApiResult<AskResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_omits_missing_document() {
        let body = serde_json::to_value(AskRequest::new("hi", None)).unwrap();
        assert_eq!(body, serde_json::json!({ "question": "hi" }));

        let body =
            serde_json::to_value(AskRequest::new("hi", Some("report.pdf".to_string()))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "question": "hi", "pdf_name": "report.pdf" })
        );
    }

    #[test]
    fn upload_response_ignores_extra_fields() {
        let parsed: UploadResponse = serde_json::from_str(
            r#"{"message":"PDF uploaded and processed successfully","filename":"report.pdf"}"#,
        )
        .unwrap();
        assert_eq!(parsed.filename, "report.pdf");
    }
}
