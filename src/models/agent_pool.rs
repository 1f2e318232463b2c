use serde::{Deserialize, Serialize};

/// Agent pool resource. Pools are keyed by integer ids assigned on creation;
/// `max_agents` of `None` means the pool size is unlimited.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPool {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_agents: Option<i32>,
}

impl AgentPool {
    pub fn new(name: &str) -> AgentPool {
        AgentPool {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_max_agents(name: &str, max_agents: i32) -> AgentPool {
        AgentPool {
            name: name.to_string(),
            max_agents: Some(max_agents),
            ..Default::default()
        }
    }
}

/// Shallow agent pool representation returned by list responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPoolReference {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Collection wire shape for the agent pool list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPools {
    pub count: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(rename = "agentPool", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<AgentPoolReference>,
}
