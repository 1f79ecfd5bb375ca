//! Link-target guarding
//!
//! The renderer consults this module for every link and image destination.

use crate::types::User;

/// Private scheme for resolved mentions, never navigated to.
pub const MENTION_SCHEME: &str = "mention://";

const BLOCKED_SCHEMES: [&str; 2] = ["javascript:", "data:"];

/// Filter a link destination before it reaches the output.
///
/// Mention targets pass through untouched. `javascript:` and `data:` targets
/// (checked after trimming and lowercasing) are blanked. Anything else is
/// returned unchanged; this is a deny-list, not a URL validator.
pub fn classify_link_target(href: &str) -> String {
    if href.starts_with(MENTION_SCHEME) {
        return href.to_string();
    }
    let normalized = href.trim().to_lowercase();
    if BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
    {
        tracing::debug!(href, "blocked unsafe link target");
        return String::new();
    }
    href.to_string()
}

/// How a (classified) link destination should be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Non-navigating highlight for a `mention://` target
    Mention {
        user_id: String,
        display_name: Option<String>,
    },
    /// Ordinary anchor
    Anchor { href: String },
}

impl LinkKind {
    pub fn of(href: &str, roster: &[User]) -> Self {
        match href.strip_prefix(MENTION_SCHEME) {
            Some(user_id) => LinkKind::Mention {
                user_id: user_id.to_string(),
                display_name: roster
                    .iter()
                    .find(|user| user.id == user_id)
                    .map(|user| user.name.clone()),
            },
            None => LinkKind::Anchor {
                href: href.to_string(),
            },
        }
    }

    /// Hover text for a mention; absent for unknown users and anchors.
    pub fn tooltip(&self) -> Option<String> {
        match self {
            LinkKind::Mention {
                display_name: Some(name),
                ..
            } => Some(format!("@{name}")),
            _ => None,
        }
    }
}
