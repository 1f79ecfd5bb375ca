//! Privacy audit statistics
//!
//! Descriptive figures derived from in-memory chat state for the privacy
//! panel. Nothing here is persisted or sent anywhere.

pub mod report;
pub mod tokens;

pub use report::{OverallStatus, PrivacyItem, PrivacyItemKind, PrivacyReport, PrivacyStatus, RuntimeInfo};
pub use tokens::{estimate_tokens, format_count, MessageStats};
