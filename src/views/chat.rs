use crate::api::ApiClient;
use crate::session::{ChatSession, send_question};
use crate::types::{ChatMessage, Role};
use dioxus::events::{FormEvent, Key, KeyboardEvent};
use dioxus::prelude::*;
use std::rc::Rc;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const SEND_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M20 12L4 4L6 12L4 20L20 12Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/></svg>"#;

const SCROLL_TO_BOTTOM: &str = r#"
const list = document.getElementById("chat-list");
if (list) { list.scrollTop = list.scrollHeight; }
"#;

/// Enter submits; Shift+Enter does not.
fn is_submit_key(key: &Key, shift: bool) -> bool {
    *key == Key::Enter && !shift
}

fn avatar_label(role: Role) -> &'static str {
    match role {
        Role::User => "U",
        Role::Assistant => "AI",
    }
}

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatView(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let api = use_context::<Rc<ApiClient>>();

    use_effect(move || {
        let _ = (session.read().messages().len(), session.read().is_busy());
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    let submit = move || {
        let api = api.clone();
        let mut session = session;
        spawn(async move {
            send_question(&mut session, &*api).await;
        });
    };
    let submit_on_enter = submit.clone();

    let (messages, busy, input_enabled, has_document, input) = {
        let state = session.read();
        (
            state.messages().to_vec(),
            state.is_busy(),
            state.input_enabled(),
            state.current_document().is_some(),
            state.input().to_string(),
        )
    };

    rsx! {
        div { id: "chat-list", class: "chat-list",
            if messages.is_empty() && !busy && !has_document {
                p { class: "chat-empty", "Upload a PDF to start asking questions about it." }
            }
            for (i, msg) in messages.into_iter().enumerate() {
                MessageRow { key: "{i}", message: msg }
            }
            if busy {
                div { class: "message-row assistant",
                    div { class: "avatar assistant", "AI" }
                    div { class: "message-stack",
                        div { class: "bubble assistant pending", "Thinking..." }
                    }
                }
            }
        }

        div { class: "composer",
            div { class: "composer-inner",
                input {
                    r#type: "text",
                    placeholder: "Send a message...",
                    value: "{input}",
                    disabled: !input_enabled,
                    oninput: move |ev: FormEvent| session.write().set_input(ev.value()),
                    onkeydown: move |ev: KeyboardEvent| {
                        if is_submit_key(&ev.key(), ev.modifiers().shift()) {
                            ev.prevent_default();
                            submit_on_enter();
                        }
                    },
                }
                button {
                    class: "send-btn",
                    r#type: "button",
                    title: "Send",
                    disabled: !input_enabled,
                    onclick: move |_| submit(),
                    span { dangerous_inner_html: SEND_ICON }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let class = role_class(message.role);
    rsx! {
        div { class: "message-row {class}",
            div { class: "avatar {class}", "{avatar_label(message.role)}" }
            div { class: "message-stack",
                div { class: "bubble {class}", "{message.content}" }
                if let Some(ts) = format_message_timestamp(message.created_at) {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_unless_shifted() {
        assert!(is_submit_key(&Key::Enter, false));
        assert!(!is_submit_key(&Key::Enter, true));
        assert!(!is_submit_key(&Key::Character("a".into()), false));
        assert!(!is_submit_key(&Key::Tab, false));
    }

    #[test]
    fn avatars_follow_role() {
        assert_eq!(avatar_label(Role::User), "U");
        assert_eq!(avatar_label(Role::Assistant), "AI");
        assert_eq!(role_class(Role::Assistant), "assistant");
    }

    #[test]
    fn missing_timestamp_renders_nothing() {
        assert_eq!(format_message_timestamp(None), None);
        let formatted = format_message_timestamp(Some(OffsetDateTime::UNIX_EPOCH)).unwrap();
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }
}
