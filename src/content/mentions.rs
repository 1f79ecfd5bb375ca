//! Mention linking
//!
//! Rewrites `@name` tokens that resolve against the roster into markdown
//! links with a private `mention://<userId>` target. Unresolved tokens stay
//! literal.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::links::MENTION_SCHEME;
use crate::types::User;

static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([\p{L}\p{N}_\-.]+)").expect("mention regex pattern is valid")
});

/// Find the roster entry a mention candidate refers to.
///
/// A candidate matches a user whose `id` is exactly equal, or whose display
/// name is equal ignoring case. The first matching entry in roster order wins.
pub fn resolve_mention<'a>(candidate: &str, roster: &'a [User]) -> Option<&'a User> {
    let folded = candidate.to_lowercase();
    roster
        .iter()
        .find(|user| user.name.to_lowercase() == folded || user.id == candidate)
}

/// Link every resolvable mention in already-sanitized text.
///
/// The link text keeps the mention as typed; only the target carries the
/// resolved user id.
pub fn link_mentions(clean: &str, roster: &[User]) -> String {
    if roster.is_empty() || !clean.contains('@') {
        return clean.to_string();
    }

    MENTION_RE
        .replace_all(clean, |caps: &Captures| {
            let candidate = &caps[1];
            match resolve_mention(candidate, roster) {
                Some(user) => format!("[@{candidate}]({MENTION_SCHEME}{})", user.id),
                None => {
                    tracing::trace!(candidate, "unresolved mention left literal");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![
            User::new("u1", "Alice"),
            User::agent("a1", "Gradient"),
            User::new("u2", "Élodie"),
        ]
    }

    #[test]
    fn test_resolved_and_unresolved() {
        let out = link_mentions("hello @Alice and @bob", &roster());
        assert_eq!(out, "hello [@Alice](mention://u1) and @bob");
    }

    #[test]
    fn test_case_insensitive_name_preserves_typed_casing() {
        let out = link_mentions("@aLiCe hi", &roster());
        assert_eq!(out, "[@aLiCe](mention://u1) hi");
    }

    #[test]
    fn test_match_by_id() {
        assert_eq!(link_mentions("ping @a1", &roster()), "ping [@a1](mention://a1)");
    }

    #[test]
    fn test_id_match_is_case_sensitive() {
        assert_eq!(link_mentions("ping @A1", &roster()), "ping @A1");
    }

    #[test]
    fn test_unicode_letters() {
        let out = link_mentions("merci @élodie", &roster());
        assert_eq!(out, "merci [@élodie](mention://u2)");

        let cjk = vec![User::new("u9", "小明")];
        assert_eq!(link_mentions("你好@小明", &cjk), "你好[@小明](mention://u9)");
    }

    #[test]
    fn test_trailing_period_is_part_of_candidate() {
        assert_eq!(link_mentions("thanks @Alice.", &roster()), "thanks @Alice.");
    }

    #[test]
    fn test_first_roster_entry_wins() {
        let dupes = vec![User::new("first", "Sam"), User::new("second", "sam")];
        assert_eq!(link_mentions("@SAM", &dupes), "[@SAM](mention://first)");
    }

    #[test]
    fn test_multiword_names_do_not_resolve_by_name() {
        let team = vec![User::new("lead", "Tech Lead")];
        assert_eq!(link_mentions("@Tech Lead please", &team), "@Tech Lead please");
    }

    #[test]
    fn test_empty_roster_and_bare_at() {
        assert_eq!(link_mentions("@Alice", &[]), "@Alice");
        assert_eq!(link_mentions("mail me @ noon", &roster()), "mail me @ noon");
    }

    #[test]
    fn test_input_roster_untouched() {
        let people = roster();
        let before = people.clone();
        let _ = link_mentions("@Alice", &people);
        assert_eq!(people, before);
    }
}
