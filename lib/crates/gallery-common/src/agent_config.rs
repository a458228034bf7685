// lib/crates/gallery-common/src/agent_config.rs

use serde::{Deserialize, Serialize};

/// Declarative agent definition (`root_agent.yaml`).
///
/// `name` and `model` are the keys the validator enforces; the rest of the
/// document is config-only agent authoring and passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}
