//! Demo playback: timeline construction and the state reducer

use super::scenarios::{DemoTool, Scenario, ScriptLine};
use crate::storage::settings::DemoSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Show the typing indicator, optionally with the tool being used
    TypingStarted { tool: Option<DemoTool> },
    /// Reveal the script line at `index`
    LineShown { index: usize },
    /// Move on to the next scenario
    Advance,
}

/// Timestamped events for one scenario run, sorted by time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<(u64, TimelineEvent)>,
}

impl Timeline {
    pub fn for_scenario(scenario: &Scenario, settings: &DemoSettings) -> Self {
        let mut events = Vec::with_capacity(scenario.script.len() * 2 + 1);

        for (index, line) in scenario.script.iter().enumerate() {
            if line.is_assistant() && line.delay_ms > settings.typing_lead_ms {
                events.push((
                    line.delay_ms - settings.typing_lead_ms,
                    TimelineEvent::TypingStarted { tool: line.tool },
                ));
            }
            events.push((line.delay_ms, TimelineEvent::LineShown { index }));
        }

        if settings.auto_play {
            if let Some(last) = scenario.script.last() {
                events.push((last.delay_ms + settings.advance_delay_ms, TimelineEvent::Advance));
            }
        }

        // Stable: equal timestamps fire in the order they were scheduled.
        events.sort_by_key(|(at, _)| *at);
        Self { events }
    }

    pub fn events(&self) -> &[(u64, TimelineEvent)] {
        &self.events
    }

    /// Events paired with the wait since the previous one
    pub fn steps(&self) -> impl Iterator<Item = (u64, TimelineEvent)> + '_ {
        let mut previous = 0;
        self.events.iter().map(move |&(at, event)| {
            let wait = at.saturating_sub(previous);
            previous = at;
            (wait, event)
        })
    }
}

/// What the demo card currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoState {
    pub scenario_index: usize,
    /// Indices into the current scenario's script
    pub visible: Vec<usize>,
    pub is_typing: bool,
    pub active_tool: Option<DemoTool>,
    /// Whether the card moves on by itself once a script ends
    pub auto_playing: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            scenario_index: 0,
            visible: Vec::new(),
            is_typing: false,
            active_tool: None,
            auto_playing: true,
        }
    }
}

impl DemoState {
    /// Jump to a scenario tab, restarting playback from scratch.
    pub fn switch_to(&mut self, index: usize) {
        self.scenario_index = index;
        self.clear_playback();
        self.auto_playing = true;
    }

    pub fn apply(&mut self, event: TimelineEvent, scenario_count: usize) {
        match event {
            TimelineEvent::TypingStarted { tool } => {
                self.is_typing = true;
                if tool.is_some() {
                    self.active_tool = tool;
                }
            }
            TimelineEvent::LineShown { index } => {
                self.is_typing = false;
                self.active_tool = None;
                self.visible.push(index);
            }
            TimelineEvent::Advance if !self.auto_playing => {}
            TimelineEvent::Advance => {
                if scenario_count > 0 {
                    self.scenario_index = (self.scenario_index + 1) % scenario_count;
                }
                self.clear_playback();
            }
        }
    }

    /// Playback settings for the next timeline, with auto-advance off
    /// while this card is not auto-playing.
    pub fn effective_settings(&self, settings: &DemoSettings) -> DemoSettings {
        DemoSettings {
            auto_play: settings.auto_play && self.auto_playing,
            ..settings.clone()
        }
    }

    pub fn visible_lines<'a>(&'a self, scenario: &'a Scenario) -> impl Iterator<Item = &'a ScriptLine> + 'a {
        self.visible
            .iter()
            .filter_map(move |&index| scenario.script.get(index))
    }

    fn clear_playback(&mut self) {
        self.visible.clear();
        self.is_typing = false;
        self.active_tool = None;
    }
}
