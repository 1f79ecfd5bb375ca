//! Privacy report: runtime locality and data-flow items

use super::tokens::MessageStats;
use crate::types::{Agent, ChatMessage, User};

const LOCAL_NODE_MARKER: &str = "parallax";

/// Where a data flow ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyStatus {
    Local,
    Private,
    None,
    Cloud,
}

impl PrivacyStatus {
    pub fn color(self) -> &'static str {
        match self {
            PrivacyStatus::Local | PrivacyStatus::Private | PrivacyStatus::None => "#10b981",
            PrivacyStatus::Cloud => "#f59e0b",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            PrivacyStatus::Local => "Local",
            PrivacyStatus::Private => "Private",
            PrivacyStatus::None => "Secure",
            PrivacyStatus::Cloud => "Cloud",
        }
    }
}

/// Which icon a data-flow row carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacyItemKind {
    LocalServer,
    CloudServer,
    Database,
    Search,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivacyItem {
    pub label: &'static str,
    pub value: String,
    pub status: PrivacyStatus,
    pub kind: PrivacyItemKind,
}

/// LLM runtime summary for the active agents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub provider: String,
    pub is_local: bool,
    pub active_count: usize,
}

impl RuntimeInfo {
    pub fn detect(agents: &[Agent]) -> Self {
        let active: Vec<&Agent> = agents.iter().filter(|a| a.is_active()).collect();
        if active.is_empty() {
            return Self {
                provider: "Not configured".to_string(),
                is_local: true,
                active_count: 0,
            };
        }

        // The marker may sit anywhere in the agent config, so search the
        // whole serialized form.
        let has_local_node = active.iter().any(|agent| {
            serde_json::to_string(agent)
                .map(|json| json.to_lowercase().contains(LOCAL_NODE_MARKER))
                .unwrap_or(false)
        });
        if has_local_node {
            return Self {
                provider: "Parallax Local Node".to_string(),
                is_local: true,
                active_count: active.len(),
            };
        }

        let mut providers: Vec<&str> = Vec::new();
        for label in active.iter().filter_map(|a| a.provider_label()) {
            if !providers.contains(&label) {
                providers.push(label);
            }
        }
        let provider = if providers.is_empty() {
            "Cloud API".to_string()
        } else {
            providers.join(", ")
        };

        Self {
            provider,
            is_local: false,
            active_count: active.len(),
        }
    }
}

/// Banner summary for the whole report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallStatus {
    pub label: &'static str,
    pub is_secure: bool,
}

impl OverallStatus {
    pub fn badge(self) -> &'static str {
        if self.is_secure {
            "Secure"
        } else {
            "Caution"
        }
    }

    pub fn footer(self) -> &'static str {
        if self.is_secure {
            "Your data never leaves your local network"
        } else {
            "Some data may be sent to cloud APIs"
        }
    }
}

/// Everything the privacy panel displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivacyReport {
    pub stats: MessageStats,
    pub runtime: RuntimeInfo,
    pub items: Vec<PrivacyItem>,
    pub overall: OverallStatus,
}

impl PrivacyReport {
    pub fn build(messages: &[ChatMessage], users: &[User], agents: &[Agent]) -> Self {
        let stats = MessageStats::compute(messages, users);
        let runtime = RuntimeInfo::detect(agents);
        let local = runtime.is_local;

        let items = vec![
            PrivacyItem {
                label: "LLM Inference",
                value: runtime.provider.clone(),
                status: if local { PrivacyStatus::Local } else { PrivacyStatus::Cloud },
                kind: if local {
                    PrivacyItemKind::LocalServer
                } else {
                    PrivacyItemKind::CloudServer
                },
            },
            PrivacyItem {
                label: "Data Storage",
                value: "lowdb Local JSON".to_string(),
                status: PrivacyStatus::Local,
                kind: PrivacyItemKind::Database,
            },
            PrivacyItem {
                label: "RAG Vector Store",
                value: "ChromaDB Local".to_string(),
                status: PrivacyStatus::Local,
                kind: PrivacyItemKind::Database,
            },
            PrivacyItem {
                label: "Web Search",
                value: "DuckDuckGo (Privacy-first)".to_string(),
                status: PrivacyStatus::Private,
                kind: PrivacyItemKind::Search,
            },
            PrivacyItem {
                label: "External API Calls",
                value: if local { "None" } else { "Cloud LLM API" }.to_string(),
                status: if local { PrivacyStatus::None } else { PrivacyStatus::Cloud },
                kind: PrivacyItemKind::Network,
            },
        ];

        let overall = if local {
            OverallStatus {
                label: "All Running Locally",
                is_secure: true,
            }
        } else {
            OverallStatus {
                label: "Partial Cloud",
                is_secure: false,
            }
        };

        Self {
            stats,
            runtime,
            items,
            overall,
        }
    }
}
