//! Chat interface components
//!
//! Message bubbles and their Markdown body.

pub mod message;

pub use message::{render_message_html, MessageBubble, MessageContent};
