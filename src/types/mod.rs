//! Shared type definitions
//!
//! Data model for chat state handed to the UI components: users, messages
//! and agents.

pub mod agent;
pub mod message;
pub mod user;

pub use agent::{Agent, AgentStatus, ModelConfig, RuntimeConfig};
pub use message::ChatMessage;
pub use user::{User, UserKind};
