//! UI components
//!
//! All user interface components, built with Dioxus. Components take chat
//! state as props; the showcase app in `crate::app` wires them together.

pub mod chat;
pub mod components;
pub mod landing;

pub use chat::{MessageBubble, MessageContent};
pub use components::{DeleteConfirm, PrivacyPanel};
pub use landing::SimulatedChat;
