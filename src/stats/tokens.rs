//! Message counts and token estimates

use std::collections::HashSet;

use crate::types::{ChatMessage, User};

/// Rough token count: about 1.5 chars per token for CJK ideographs and
/// 4 chars per token for everything else.
pub fn estimate_tokens(text: &str) -> u64 {
    let (cjk, other) = text.chars().fold((0u64, 0u64), |(cjk, other), ch| {
        if ('\u{4e00}'..='\u{9fff}').contains(&ch) {
            (cjk + 1, other)
        } else {
            (cjk, other + 1)
        }
    });
    (cjk as f64 / 1.5 + other as f64 / 4.0).ceil() as u64
}

/// Group thousands with commas, e.g. `12,345`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Message counts split by sender kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageStats {
    pub total: usize,
    /// Messages sent by agent or LLM users
    pub agent: usize,
    /// Everything else, including senders missing from the roster
    pub human: usize,
    pub tokens: u64,
}

impl MessageStats {
    pub fn compute(messages: &[ChatMessage], users: &[User]) -> Self {
        let agent_ids: HashSet<&str> = users
            .iter()
            .filter(|u| u.is_agent())
            .map(|u| u.id.as_str())
            .collect();

        let agent = messages
            .iter()
            .filter(|m| agent_ids.contains(m.sender_id.as_str()))
            .count();

        Self {
            total: messages.len(),
            agent,
            human: messages.len() - agent,
            tokens: messages.iter().map(|m| estimate_tokens(&m.content)).sum(),
        }
    }
}
