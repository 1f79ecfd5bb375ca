//! Root Dioxus application component
//!
//! A showcase room: the scripted demo card, a message list with the delete
//! flow, and the privacy audit panel, all fed from in-memory sample state.

use std::time::Duration;

use dioxus::prelude::*;

use crate::storage::settings::{load_settings, UiSettings};
use crate::types::{Agent, AgentStatus, ChatMessage, User};
use crate::ui::{MessageBubble, PrivacyPanel, SimulatedChat};

/// Simulated round trip for a delete request
const DELETE_LATENCY: Duration = Duration::from_millis(600);

/// Application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<UiSettings>,
    pub users: Signal<Vec<User>>,
    pub messages: Signal<Vec<ChatMessage>>,
    pub agents: Signal<Vec<Agent>>,
    /// Id of the message whose delete is in flight
    pub deleting: Signal<Option<String>>,
    pub privacy_open: Signal<bool>,
}

impl AppState {
    /// Must be called inside a Dioxus runtime, e.g. from `use_context_provider`.
    pub fn new() -> Self {
        let settings = load_settings();
        tracing::info!(theme = %settings.theme, "AppState initialized");

        Self {
            privacy_open: Signal::new(settings.show_privacy_panel),
            settings: Signal::new(settings),
            users: Signal::new(sample_users()),
            messages: Signal::new(sample_messages()),
            agents: Signal::new(sample_agents()),
            deleting: Signal::new(None),
        }
    }
}

fn sample_users() -> Vec<User> {
    let mut gradient = User::agent("a1", "Gradient");
    gradient.is_llm = true;
    vec![User::new("u1", "Alice"), User::new("u2", "Bob"), gradient]
}

fn sample_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new("u1", "@Gradient can you summarize yesterday's notes for @bob?"),
        ChatMessage::new(
            "a1",
            "<|channel|>analysis<|message|>User wants a summary.<|end|><|start|>assistant<|channel|>final<|message|>Sure @Alice, here it is:\n\n- Shipped the **login** fix\n- Reviewed [the design doc](https://example.com/doc)\n\n\n\nAnything else?",
        ),
        ChatMessage::new("u2", "<think>should I ask?</think>Thanks! @Carol will want this too."),
    ]
}

fn sample_agents() -> Vec<Agent> {
    vec![Agent::new("a1", "Gradient", AgentStatus::Active).with_runtime("parallax")]
}

#[component]
pub fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut privacy_open = state.privacy_open;
    let mut deleting = state.deleting;
    let mut messages = state.messages;

    let users = state.users.read().clone();
    let demo_settings = state.settings.read().demo.clone();
    let theme_class = format!("app-root theme-{}", state.settings.read().theme);
    let list = messages.read().clone();
    let deleting_id = deleting.read().clone();

    let handle_delete = move |id: String| {
        deleting.set(Some(id.clone()));
        spawn(async move {
            tokio::time::sleep(DELETE_LATENCY).await;
            messages.write().retain(|m| m.id != id);
            deleting.set(None);
            tracing::debug!(message_id = %id, "message deleted");
        });
    };

    rsx! {
        div { class: "{theme_class}",
            header { class: "app-header",
                button {
                    class: "privacy-toggle",
                    onclick: move |_| privacy_open.set(true),
                    "Privacy Audit"
                }
            }

            main { class: "app-main",
                section { class: "landing",
                    SimulatedChat { settings: demo_settings }
                }

                section { class: "room",
                    for message in list {
                        MessageBubble {
                            key: "{message.id}",
                            is_deleting: deleting_id.as_deref() == Some(message.id.as_str()),
                            message: message.clone(),
                            users: users.clone(),
                            on_delete: handle_delete,
                        }
                    }
                }
            }

            PrivacyPanel {
                is_open: privacy_open(),
                on_close: move |_| privacy_open.set(false),
                messages: state.messages.read().clone(),
                users: users.clone(),
                agents: state.agents.read().clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::prepare_message;

    #[test]
    fn test_sample_messages_render_cleanly() {
        let users = sample_users();
        let messages = sample_messages();

        let reply = prepare_message(&messages[1].content, &users);
        assert!(reply.starts_with("Sure [@Alice](mention://u1), here it is:"));
        assert!(reply.ends_with("Anything else?"));
        assert!(!reply.contains("\n\n\n"));

        let thanks = prepare_message(&messages[2].content, &users);
        assert_eq!(thanks, "Thanks! @Carol will want this too.");
    }

    #[test]
    fn test_sample_agents_are_local() {
        let report = crate::stats::PrivacyReport::build(&sample_messages(), &sample_users(), &sample_agents());
        assert!(report.overall.is_secure);
        assert_eq!(report.stats.agent, 1);
        assert_eq!(report.stats.human, 2);
    }
}
