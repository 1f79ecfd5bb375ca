//! Inline delete confirmation
//!
//! Shown in place of a message's actions once the user asks to delete it.

use dioxus::prelude::*;

/// Labels and button state for a given delete status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmView {
    pub prompt: &'static str,
    pub confirm_label: &'static str,
    pub buttons_disabled: bool,
}

impl DeleteConfirmView {
    pub fn new(is_deleting: bool, error: Option<&str>) -> Self {
        Self {
            prompt: if error.is_some() {
                "Delete failed"
            } else {
                "Confirm delete?"
            },
            confirm_label: if is_deleting { "..." } else { "Delete" },
            buttons_disabled: is_deleting,
        }
    }
}

#[component]
pub fn DeleteConfirm(
    is_deleting: bool,
    error: Option<String>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let view = DeleteConfirmView::new(is_deleting, error.as_deref());

    rsx! {
        div { class: "delete-confirm-wrapper",
            span {
                class: "delete-confirm-text",
                title: error.clone().unwrap_or_default(),
                "{view.prompt}"
            }
            div { class: "delete-actions",
                button {
                    class: "delete-action-btn cancel",
                    disabled: view.buttons_disabled,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "delete-action-btn confirm",
                    disabled: view.buttons_disabled,
                    onclick: move |_| on_confirm.call(()),
                    "{view.confirm_label}"
                }
            }
        }
    }
}
