//! Privacy audit panel
//!
//! Slide-in panel summarizing where chat data flows, derived from the
//! in-memory messages, users and agents it is given.

use dioxus::prelude::*;

use crate::stats::{format_count, PrivacyItemKind, PrivacyReport};
use crate::types::{Agent, ChatMessage, User};

#[component]
pub fn PrivacyPanel(
    is_open: bool,
    on_close: EventHandler<()>,
    messages: Vec<ChatMessage>,
    users: Vec<User>,
    agents: Vec<Agent>,
) -> Element {
    let report = PrivacyReport::build(&messages, &users, &agents);
    let overall = report.overall;

    let open_suffix = if is_open { " open" } else { "" };
    let warning_suffix = if overall.is_secure { "" } else { " warning" };

    let badge = overall.badge();
    let footer = overall.footer();
    let item_rows: Vec<_> = report
        .items
        .iter()
        .map(|item| {
            let color = item.status.color();
            (
                item.label,
                item.value.clone(),
                item.kind,
                format!("color: {color};"),
                format!("background-color: {color}15; color: {color};"),
                item.status.badge(),
            )
        })
        .collect();
    let stat_rows = [
        ("Total Messages", format_count(report.stats.total as u64)),
        ("User Messages", format_count(report.stats.human as u64)),
        ("Agent Replies", format_count(report.stats.agent as u64)),
        ("Estimated Tokens", format_count(report.stats.tokens)),
    ];

    rsx! {
        div {
            class: "privacy-panel-backdrop{open_suffix}",
            onclick: move |_| on_close.call(()),
        }

        div { class: "privacy-panel{open_suffix}",
            div { class: "privacy-panel-header",
                div { class: "privacy-panel-title",
                    {shield_icon(20)}
                    span { "Privacy Audit" }
                }
                button {
                    class: "privacy-panel-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            div { class: "privacy-panel-content",
                div { class: "privacy-status-banner{warning_suffix}",
                    div { class: "privacy-status-icon", {shield_icon(24)} }
                    div { class: "privacy-status-info",
                        span { class: "privacy-status-label", "Current Status" }
                        span { class: "privacy-status-value", "{overall.label}" }
                    }
                    div { class: "privacy-status-badge{warning_suffix}",
                        span { "{badge}" }
                    }
                }

                div { class: "privacy-section",
                    div { class: "privacy-section-title", "Data Flow" }
                    div { class: "privacy-items",
                        for (label, value, kind, icon_style, badge_style, item_badge) in item_rows {
                            div { key: "{label}", class: "privacy-item",
                                div { class: "privacy-item-left",
                                    div { class: "privacy-item-icon", style: "{icon_style}",
                                        {item_icon(kind)}
                                    }
                                    div { class: "privacy-item-info",
                                        span { class: "privacy-item-label", "{label}" }
                                        span { class: "privacy-item-value", "{value}" }
                                    }
                                }
                                div { class: "privacy-item-badge", style: "{badge_style}", "{item_badge}" }
                            }
                        }
                    }
                }

                div { class: "privacy-section",
                    div { class: "privacy-section-title", "Message Statistics" }
                    div { class: "privacy-cost-card",
                        for (label, value) in stat_rows {
                            div { key: "{label}", class: "privacy-cost-row",
                                span { class: "privacy-cost-label", "{label}" }
                                span { class: "privacy-cost-value", "{value}" }
                            }
                        }
                    }
                }
            }

            div { class: "privacy-footer{warning_suffix}",
                span { "{footer}" }
            }
        }
    }
}

fn shield_icon(size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        }
    }
}

fn item_icon(kind: PrivacyItemKind) -> Element {
    let path = match kind {
        PrivacyItemKind::LocalServer => "M2 4h20v6H2zM2 14h20v6H2zM6 7h.01M6 17h.01",
        PrivacyItemKind::CloudServer => "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z",
        PrivacyItemKind::Database => "M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3zM3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5M3 12c0 1.66 4 3 9 3s9-1.34 9-3",
        PrivacyItemKind::Search => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35",
        PrivacyItemKind::Network => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 0 20M12 2a15.3 15.3 0 0 0 0 20",
    };

    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{path}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentStatus;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_local_panel() {
        fn app() -> Element {
            let users = vec![User::new("u1", "Alice"), User::agent("a1", "Helper")];
            let messages = vec![
                ChatMessage::new("u1", "hello there"),
                ChatMessage::new("a1", "hi"),
                ChatMessage::new("a1", "how can I help"),
            ];
            rsx! {
                PrivacyPanel {
                    is_open: true,
                    on_close: |_| {},
                    messages,
                    users,
                    agents: Vec::new(),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("privacy-panel open"), "{html}");
        assert!(html.contains("All Running Locally"), "{html}");
        assert!(html.contains("Not configured"), "{html}");
        assert!(html.contains("Your data never leaves your local network"), "{html}");
        assert!(!html.contains(" warning"), "{html}");
    }

    #[test]
    fn test_cloud_panel() {
        fn app() -> Element {
            let agents = vec![Agent::new("a1", "Helper", AgentStatus::Active).with_provider("openai")];
            rsx! {
                PrivacyPanel {
                    is_open: false,
                    on_close: |_| {},
                    messages: Vec::new(),
                    users: Vec::new(),
                    agents,
                }
            }
        }
        let html = render(app);
        assert!(!html.contains("privacy-panel open"), "{html}");
        assert!(html.contains("Partial Cloud"), "{html}");
        assert!(html.contains("privacy-status-banner warning"), "{html}");
        assert!(html.contains("Cloud LLM API"), "{html}");
        assert!(html.contains("Some data may be sent to cloud APIs"), "{html}");
    }
}
