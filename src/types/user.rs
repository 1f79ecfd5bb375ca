//! User types
//!
//! Roster entries for humans and agents sharing a room.

use serde::{Deserialize, Serialize};

/// Kind of room participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    /// A person
    #[default]
    Human,
    /// An automated agent
    Agent,
}

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, opaque identifier
    pub id: String,
    /// Display name, not required to be unique
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: UserKind,
    /// Set for LLM-backed participants regardless of `kind`
    #[serde(default, rename = "isLLM")]
    pub is_llm: bool,
}

impl User {
    /// Create a human user
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: UserKind::Human,
            is_llm: false,
        }
    }

    /// Create an agent user
    pub fn agent(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: UserKind::Agent,
            ..Self::new(id, name)
        }
    }

    pub fn is_agent(&self) -> bool {
        self.kind == UserKind::Agent || self.is_llm
    }
}
