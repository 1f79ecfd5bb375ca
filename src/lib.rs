//! groupchat-ui
//!
//! Presentational components for a group chat where humans and LLM agents
//! share a room: a sanitizing, mention-aware message renderer, an inline
//! delete confirmation, a privacy audit panel and a scripted chat demo.

pub mod app;
pub mod content;
pub mod demo;
pub mod stats;
pub mod storage;
pub mod types;
pub mod ui;
