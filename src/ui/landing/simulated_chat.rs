//! Scripted group-chat demo card
//!
//! Plays the built-in scenarios on a timer: typing indicator, tool badge,
//! message, and auto-advance to the next tab after the last line.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::demo::{scenarios, DemoState, Scenario, Timeline, TimelineEvent};
use crate::storage::settings::DemoSettings;

/// Spawn the playback task for the current scenario.
///
/// The task keeps going across `Advance` events and ends once a scenario
/// finishes without one (auto-play off). Cancel it before starting another.
fn play(mut state: Signal<DemoState>, catalogue: Rc<Vec<Scenario>>, settings: DemoSettings) -> Task {
    spawn(async move {
        loop {
            let index = state.peek().scenario_index;
            let Some(scenario) = catalogue.get(index) else {
                break;
            };
            tracing::debug!(scenario = scenario.id, "playing demo scenario");

            let effective = state.peek().effective_settings(&settings);
            let timeline = Timeline::for_scenario(scenario, &effective);
            let mut advanced = false;
            for (wait, event) in timeline.steps() {
                tokio::time::sleep(Duration::from_millis(wait)).await;
                state.write().apply(event, catalogue.len());
                advanced |= event == TimelineEvent::Advance;
            }
            if !advanced {
                break;
            }
        }
    })
}

/// Pre-formatted message row
struct DemoRow {
    key: String,
    is_user: bool,
    is_assistant: bool,
    bubble_class: &'static str,
    avatar_style: String,
    name_style: String,
    name: &'static str,
    badge: Option<&'static str>,
    content: &'static str,
}

fn demo_rows(state: &DemoState, scenario: &Scenario) -> Vec<DemoRow> {
    state
        .visible_lines(scenario)
        .filter_map(|line| {
            let persona = scenario.persona(line.role)?;
            let avatar = if line.is_user() {
                persona.color
            } else {
                persona.background()
            };
            Some(DemoRow {
                key: format!("{}-{}", state.scenario_index, line.id),
                is_user: line.is_user(),
                is_assistant: line.is_assistant(),
                bubble_class: if line.is_user() {
                    "message-bubble user-bubble"
                } else if line.is_assistant() {
                    "message-bubble ai-bubble"
                } else {
                    "message-bubble agent-bubble"
                },
                avatar_style: format!("background: {avatar};"),
                name_style: format!("color: {};", persona.color),
                name: persona.name,
                badge: line.tool.map(|tool| tool.badge()),
                content: line.content,
            })
        })
        .collect()
}

#[component]
pub fn SimulatedChat(#[props(default)] settings: DemoSettings) -> Element {
    let catalogue = use_hook(|| Rc::new(scenarios()));
    let mut state = use_signal(DemoState::default);
    let mut playback = use_signal(|| None::<Task>);

    // Runs on mount and again whenever the settings prop changes.
    use_effect(use_reactive((&settings,), {
        let catalogue = catalogue.clone();
        move |(settings,)| {
            if let Some(previous) = playback.take() {
                previous.cancel();
            }
            let index = state.peek().scenario_index;
            state.write().switch_to(index);
            playback.set(Some(play(state, catalogue.clone(), settings)));
        }
    }));

    let current = state.read().clone();
    let Some(scenario) = catalogue.get(current.scenario_index) else {
        return rsx! {};
    };
    let online_count = scenario.online_count();
    let rows = demo_rows(&current, scenario);
    let typing_label = current.active_tool.map(|tool| tool.progress_label());

    rsx! {
        div { class: "simulated-chat-card",
            div { class: "tab-bar",
                for (idx, tab) in catalogue.iter().enumerate() {
                    button {
                        key: "{tab.id}",
                        class: if idx == current.scenario_index { "tab-item active" } else { "tab-item" },
                        onclick: {
                            let catalogue = catalogue.clone();
                            let settings = settings.clone();
                            move |_| {
                                if let Some(previous) = playback.take() {
                                    previous.cancel();
                                }
                                state.write().switch_to(idx);
                                playback.set(Some(play(state, catalogue.clone(), settings.clone())));
                            }
                        },
                        span { "{tab.name}" }
                    }
                }
            }

            div { class: "chat-header",
                div { class: "header-left",
                    div { class: "window-controls",
                        div { class: "dot red" }
                        div { class: "dot yellow" }
                        div { class: "dot green" }
                    }
                }
                div { class: "header-center",
                    span { class: "chat-title", "{scenario.name}" }
                }
                div { class: "header-right",
                    div { class: "online-indicator",
                        span { "{online_count}" }
                    }
                }
            }

            div { class: "chat-messages",
                for row in rows {
                    div {
                        key: "{row.key}",
                        class: if row.is_user { "message-row user-row" } else { "message-row agent-row" },
                        if !row.is_user {
                            div { class: "avatar", style: "{row.avatar_style}",
                                if row.is_assistant {
                                    div { class: "ai-ring" }
                                }
                            }
                        }
                        div { class: "{row.bubble_class}",
                            if !row.is_user {
                                div { class: "bubble-header",
                                    span { class: "agent-name", style: "{row.name_style}", "{row.name}" }
                                    if let Some(badge) = row.badge {
                                        span { class: "tool-badge", "{badge}" }
                                    }
                                }
                            }
                            div { class: "message-content", "{row.content}" }
                        }
                        if row.is_user {
                            div { class: "avatar", style: "{row.avatar_style}" }
                        }
                    }
                }

                if current.is_typing {
                    div { class: "message-row agent-row",
                        div { class: "avatar ai-avatar",
                            div { class: "ai-ring" }
                        }
                        div { class: "typing-bubble",
                            if let Some(label) = typing_label {
                                span { class: "typing-tool", "{label}" }
                            }
                            div { class: "typing-dots",
                                span {}
                                span {}
                                span {}
                            }
                        }
                    }
                }
            }
        }
    }
}
