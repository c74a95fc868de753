use crate::api::ApiClient;
use crate::session::{ChatSession, SessionHandle};
use crate::theme::APP_CSS;
use crate::views::{AppHeader, ChatView};
use dioxus::prelude::*;
use std::rc::Rc;

impl SessionHandle for Signal<ChatSession> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        f(&mut *self.write())
    }
}

#[component]
pub fn App() -> Element {
    let session = use_signal(ChatSession::new);
    use_context_provider(|| Rc::new(ApiClient::from_env()));

    rsx! {
        ThemeStyles {}
        div { class: "app",
            AppHeader { session }
            ChatView { session }
        }
    }
}

#[component]
fn ThemeStyles() -> Element {
    rsx! {
        style { dangerous_inner_html: APP_CSS }
    }
}
