use crate::api::{ApiClient, ApiError};
use crate::session::{ChatSession, upload_document};
use crate::types::PdfFile;
use dioxus::events::FormEvent;
use dioxus::prelude::*;
use std::path::Path;
use std::rc::Rc;

const LOGO_ICON: &str = r#"<svg width="32" height="32" viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="16" cy="16" r="14" stroke="currentColor" stroke-width="2"/><path d="M11 10h7l4 4v8a1 1 0 0 1-1 1H11a1 1 0 0 1-1-1V11a1 1 0 0 1 1-1Z" stroke="currentColor" stroke-width="1.5"/></svg>"#;
const UPLOAD_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M8 12V4M8 4L5 7M8 4L11 7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const FILE_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M14 4.5V14C14 14.5523 13.5523 15 13 15H3C2.44772 15 2 14.5523 2 14V2C2 1.44772 2.44772 1 3 1H10.5L14 4.5Z" stroke="currentColor" stroke-width="1.5"/></svg>"#;

#[component]
pub fn AppHeader(session: Signal<ChatSession>) -> Element {
    let current_document = session.read().current_document().map(str::to_string);
    rsx! {
        div { class: "header",
            Brand {}
            div { class: "header-actions",
                if let Some(name) = current_document {
                    DocumentIndicator { name }
                }
                UploadButton { session }
            }
        }
    }
}

#[component]
fn Brand() -> Element {
    rsx! {
        div { class: "brand",
            span { class: "brand-logo", dangerous_inner_html: LOGO_ICON }
            div { class: "brand-text",
                span { class: "brand-name", "DocChat" }
                span { class: "brand-sub", "Ask questions about your PDF" }
            }
        }
    }
}

#[component]
fn DocumentIndicator(name: String) -> Element {
    rsx! {
        div { class: "doc-indicator", title: "{name}",
            span { class: "icon", dangerous_inner_html: FILE_ICON }
            "{name}"
        }
    }
}

/// Hidden `.pdf` file picker wrapped in a label so the whole button opens it.
#[component]
fn UploadButton(session: Signal<ChatSession>) -> Element {
    let api = use_context::<Rc<ApiClient>>();
    let disabled = !session.read().can_upload();

    let on_pick = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };
        let api = api.clone();
        let mut session = session;
        spawn(async move {
            let file = async {
                engine
                    .read_file(&path)
                    .await
                    .map(|bytes| PdfFile::new(display_name(&path), bytes))
                    .ok_or_else(|| ApiError::ReadFile(display_name(&path)))
            };
            upload_document(&mut session, &*api, file).await;
        });
    };

    rsx! {
        label {
            class: format_args!("btn upload-btn {}", if disabled { "disabled" } else { "" }),
            input {
                r#type: "file",
                accept: ".pdf",
                style: "display: none;",
                disabled: disabled,
                onchange: on_pick,
            }
            span { class: "icon", dangerous_inner_html: UPLOAD_ICON }
            "Upload PDF"
        }
    }
}

/// Desktop pickers report a full path; the backend only wants the file name.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::display_name;

    #[test]
    fn strips_directories() {
        assert_eq!(display_name("report.pdf"), "report.pdf");
        assert_eq!(display_name("/home/me/docs/report.pdf"), "report.pdf");
    }
}
