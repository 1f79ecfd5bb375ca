//! Message display components with Markdown rendering

use dioxus::prelude::*;

use crate::content::{markdown::render_html, prepare_message};
use crate::types::{ChatMessage, User};
use crate::ui::components::DeleteConfirm;

/// Render raw message content: sanitize, link mentions, then Markdown.
pub fn render_message_html(content: &str, users: &[User]) -> String {
    render_html(&prepare_message(content, users), users)
}

/// Sanitized, mention-aware Markdown body of a message
#[component]
pub fn MessageContent(content: String, users: Vec<User>) -> Element {
    let html = render_message_html(&content, &users);

    rsx! {
        div {
            class: "bubble-text markdown-content",
            dangerous_inner_html: "{html}",
        }
    }
}

/// A chat bubble with sender header and an inline delete flow
#[component]
pub fn MessageBubble(
    message: ChatMessage,
    users: Vec<User>,
    #[props(default)]
    is_deleting: bool,
    delete_error: Option<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut confirming = use_signal(|| false);

    let sender = users.iter().find(|u| u.id == message.sender_id);
    let sender_name = sender
        .map(|u| u.name.clone())
        .unwrap_or_else(|| message.sender_id.clone());
    let is_agent = sender.map(User::is_agent).unwrap_or(false);
    let bubble_class = if is_agent {
        "message-bubble agent-bubble"
    } else {
        "message-bubble user-bubble"
    };
    let time = message.timestamp.format("%H:%M").to_string();
    let show_confirm = confirming() || is_deleting || delete_error.is_some();
    let message_id = message.id.clone();

    rsx! {
        div { class: "{bubble_class}",
            div { class: "bubble-header",
                span { class: "sender-name", "{sender_name}" }
                span { class: "bubble-time", "{time}" }
                if !show_confirm {
                    button {
                        class: "bubble-delete-btn",
                        title: "Delete message",
                        onclick: move |_| confirming.set(true),
                        "×"
                    }
                }
            }

            MessageContent { content: message.content.clone(), users: users.clone() }

            if show_confirm {
                DeleteConfirm {
                    is_deleting,
                    error: delete_error.clone(),
                    on_cancel: move |_| confirming.set(false),
                    on_confirm: move |_| on_delete.call(message_id.clone()),
                }
            }
        }
    }
}
