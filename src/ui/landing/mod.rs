//! Landing-page showcase components

pub mod simulated_chat;

pub use simulated_chat::SimulatedChat;
