//! Scripted chat demo
//!
//! A fixed catalogue of conversations played back on a timer for the
//! landing page. The playback itself is modelled as a pure timeline and a
//! state reducer; the `SimulatedChat` component only sleeps between events.

pub mod player;
pub mod scenarios;

pub use player::{DemoState, Timeline, TimelineEvent};
pub use scenarios::{scenarios, AgentPersona, DemoTool, Scenario, ScriptLine, ASSISTANT_ROLE, USER_ROLE};
