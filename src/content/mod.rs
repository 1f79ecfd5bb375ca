//! Message content pipeline
//!
//! Turns raw model output into display-safe markdown:
//! [`sanitize`] strips channel markup, think blocks and stray sentinels,
//! [`link_mentions`] rewrites `@name` tokens into `mention://` links, and
//! [`markdown::render_html`] renders the result with guarded link targets.
//!
//! Every function here is pure. Malformed input degrades to literal text.

pub mod links;
pub mod markdown;
pub mod mentions;
pub mod sanitize;

use crate::types::User;

pub use links::{classify_link_target, LinkKind, MENTION_SCHEME};
pub use mentions::{link_mentions, resolve_mention};
pub use sanitize::sanitize;

/// Sanitize raw message text and link its mentions against `roster`.
pub fn prepare_message(raw: &str, roster: &[User]) -> String {
    link_mentions(&sanitize(raw), roster)
}
