//! Conversation state and the transitions that change it.
//!
//! Every user action is a two-phase transition: `begin_*` applies the
//! optimistic part and takes the busy slot, `finish_*` applies the backend
//! result and releases it. The busy flag is the only lock; a `begin_*` call
//! while busy is refused without touching state.

use crate::api::{ApiError, ApiResult, AskRequest, AskResponse, DocumentApi, UploadResponse};
use crate::types::{ChatMessage, PdfFile};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    current_document: Option<String>,
    busy: bool,
    input: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn current_document(&self) -> Option<&str> {
        self.current_document.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn can_upload(&self) -> bool {
        !self.busy
    }

    /// Questions need a loaded document and a free slot.
    pub fn input_enabled(&self) -> bool {
        !self.busy && self.current_document.is_some()
    }

    pub fn can_send(&self) -> bool {
        self.input_enabled()
    }

    /// Take the busy slot for an upload. Returns `false` if a request is in flight.
    pub fn begin_upload(&mut self) -> bool {
        if self.busy {
            debug!("upload ignored while busy");
            return false;
        }
        self.busy = true;
        true
    }

    /// Replace the conversation with the outcome of an upload.
    pub fn finish_upload(&mut self, result: ApiResult<UploadResponse>) {
        let notice = match result {
            Ok(UploadResponse { filename }) => {
                info!(document = %filename, "document loaded");
                let notice = upload_success_text(&filename);
                self.current_document = Some(filename);
                notice
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                upload_failure_text(&err)
            }
        };
        self.messages = vec![ChatMessage::assistant(notice)];
        self.busy = false;
    }

    /// Append the trimmed input as a user message and build the request for it.
    ///
    /// Returns `None` without mutating anything when busy or when the input
    /// is blank.
    pub fn begin_send(&mut self) -> Option<AskRequest> {
        if self.busy {
            debug!("send ignored while busy");
            return None;
        }
        let question = self.input.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_string();

        self.messages.push(ChatMessage::user(question.clone()));
        self.input.clear();
        self.busy = true;
        Some(AskRequest::new(question, self.current_document.clone()))
    }

    /// Append the assistant's answer, or an inline error, and release the slot.
    pub fn finish_send(&mut self, result: ApiResult<AskResponse>) {
        let reply = match result {
            Ok(AskResponse { answer }) => answer,
            Err(err) => {
                warn!(error = %err, "question failed");
                ask_failure_text(&err)
            }
        };
        self.messages.push(ChatMessage::assistant(reply));
        self.busy = false;
    }
}

pub fn upload_success_text(filename: &str) -> String {
    format!("PDF \"{filename}\" uploaded successfully. You can now ask questions about it.")
}

pub fn upload_failure_text(err: &ApiError) -> String {
    format!("Error uploading PDF: {err}")
}

pub fn ask_failure_text(err: &ApiError) -> String {
    format!("Error: {err}")
}

/// Mutable access to a [`ChatSession`] that may live behind a reactive
/// container. Borrows never span an `.await`.
pub trait SessionHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R;
}

impl SessionHandle for &mut ChatSession {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        f(&mut **self)
    }
}

impl SessionHandle for Rc<RefCell<ChatSession>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run a full upload: take the slot, resolve the picked file, send it, and
/// settle the conversation.
pub async fn upload_document<S, A, F>(session: &mut S, api: &A, file: F)
where
    S: SessionHandle,
    A: DocumentApi + ?Sized,
    F: Future<Output = ApiResult<PdfFile>>,
{
    if !session.update(|s| s.begin_upload()) {
        return;
    }
    let result = match file.await {
        Ok(file) => api.upload(file).await,
        Err(err) => Err(err),
    };
    session.update(|s| s.finish_upload(result));
}

/// Run a full question round trip for the current input.
///
/// Returns `false` if nothing was sent.
pub async fn send_question<S, A>(session: &mut S, api: &A) -> bool
where
    S: SessionHandle,
    A: DocumentApi + ?Sized,
{
    let Some(request) = session.update(|s| s.begin_send()) else {
        return false;
    };
    let result = api.ask(&request).await;
    session.update(|s| s.finish_send(result));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn loaded(document: &str) -> ChatSession {
        let mut session = ChatSession::new();
        assert!(session.begin_upload());
        session.finish_upload(Ok(UploadResponse {
            filename: document.to_string(),
        }));
        session
    }

    #[test]
    fn fresh_session_only_allows_upload() {
        let session = ChatSession::new();
        assert!(session.can_upload());
        assert!(!session.can_send());
        assert!(!session.input_enabled());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn begin_send_trims_and_clears_input() {
        let mut session = loaded("report.pdf");
        session.set_input("  What is the revenue?\n");

        let request = session.begin_send().unwrap();
        assert_eq!(request.question, "What is the revenue?");
        assert_eq!(request.pdf_name.as_deref(), Some("report.pdf"));
        assert_eq!(session.input(), "");
        assert!(session.is_busy());

        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "What is the revenue?");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = loaded("report.pdf");
        let before = session.messages().len();
        for blank in ["", "   ", "\n\t "] {
            session.set_input(blank);
            assert!(session.begin_send().is_none());
        }
        assert_eq!(session.messages().len(), before);
        assert!(!session.is_busy());
    }

    #[test]
    fn busy_refuses_both_actions() {
        let mut session = loaded("report.pdf");
        session.set_input("first");
        session.begin_send().unwrap();

        session.set_input("second");
        assert!(session.begin_send().is_none());
        assert!(!session.begin_upload());
        assert!(!session.can_send());
        assert!(!session.can_upload());
        assert_eq!(session.input(), "second");
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn send_without_document_omits_pdf_name() {
        let mut session = ChatSession::new();
        session.set_input("hello");
        let request = session.begin_send().unwrap();
        assert_eq!(request.pdf_name, None);
    }

    #[test]
    fn failed_upload_keeps_previous_document() {
        let mut session = loaded("first.pdf");
        assert!(session.begin_upload());
        session.finish_upload(Err(ApiError::Rejected {
            status: 400,
            detail: "Only PDF files are allowed".to_string(),
        }));

        assert_eq!(session.current_document(), Some("first.pdf"));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(
            session.messages()[0].content,
            "Error uploading PDF: Only PDF files are allowed"
        );
        assert!(!session.is_busy());
    }
}
