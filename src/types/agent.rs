//! Agent types
//!
//! Agent configuration as seen by the front-end. Only the fields the privacy
//! audit inspects are typed; everything else is carried in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    #[default]
    Inactive,
    Error,
}

/// Model backing an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Runtime hosting an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An agent configured in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeConfig>,
    /// Untyped configuration preserved from the wire
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: AgentStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            model: None,
            runtime: None,
            extra: Map::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.model.get_or_insert_with(ModelConfig::default).provider = Some(provider.into());
        self
    }

    pub fn with_runtime(mut self, kind: impl Into<String>) -> Self {
        self.runtime.get_or_insert_with(RuntimeConfig::default).kind = Some(kind.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// Provider name, falling back to the runtime type when it is missing or empty
    pub fn provider_label(&self) -> Option<&str> {
        self.model
            .as_ref()
            .and_then(|m| m.provider.as_deref())
            .filter(|provider| !provider.is_empty())
            .or_else(|| self.runtime.as_ref().and_then(|r| r.kind.as_deref()))
            .filter(|kind| !kind.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_label_fallback() {
        let agent = Agent::new("a1", "Helper", AgentStatus::Active).with_runtime("ollama");
        assert_eq!(agent.provider_label(), Some("ollama"));

        let agent = agent.with_provider("openai");
        assert_eq!(agent.provider_label(), Some("openai"));

        let bare = Agent::new("a2", "Bare", AgentStatus::Active);
        assert_eq!(bare.provider_label(), None);

        let blank = Agent::new("a3", "Blank", AgentStatus::Active)
            .with_provider("")
            .with_runtime("ollama");
        assert_eq!(blank.provider_label(), Some("ollama"));

        let json = r#"{"model":{"provider":""},"runtime":{"type":"ollama"}}"#;
        let agent: Agent = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(agent.provider_label(), Some("ollama"));
    }

    #[test]
    fn test_nested_extra_fields_round_trip() {
        let json = r#"{"id":"a1","name":"Helper","model":{"provider":"openai","baseUrl":"http://parallax.lan:3000"},"runtime":{"type":"remote","gpu":"a100"}}"#;
        let agent: Agent = serde_json::from_str(json).expect("Failed to deserialize");
        let model = agent.model.as_ref().expect("model present");
        assert_eq!(model.extra.get("baseUrl"), Some(&Value::from("http://parallax.lan:3000")));
        let runtime = agent.runtime.as_ref().expect("runtime present");
        assert_eq!(runtime.extra.get("gpu"), Some(&Value::from("a100")));

        let out = serde_json::to_string(&agent).expect("Failed to serialize");
        assert!(out.contains("\"baseUrl\":\"http://parallax.lan:3000\""));
        assert!(out.contains("\"gpu\":\"a100\""));
    }

    #[test]
    fn test_agent_extra_fields_round_trip() {
        let json = r#"{"id":"a1","name":"Helper","status":"active","runtime":{"type":"local"},"systemPrompt":"be nice"}"#;
        let agent: Agent = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(agent.is_active());
        assert_eq!(agent.extra.get("systemPrompt"), Some(&Value::from("be nice")));

        let out = serde_json::to_string(&agent).expect("Failed to serialize");
        assert!(out.contains("\"systemPrompt\":\"be nice\""));
        assert!(out.contains("\"type\":\"local\""));
    }
}
