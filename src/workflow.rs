//! Workflow Serializer - node list to workflow document
//!
//! Output shape (key order preserved):
//! ```text
//! schema_version  "2.0"
//! workflow_id     "workflow-<unix millis>"
//! agents          one AssistantAgent per `agent` node
//! orchestration   { type: "Sequential", agents: [every node name] }
//! ```
//!
//! `agents` only lists `agent` nodes while `orchestration.agents` lists every
//! node. Both are kept as the exported format expects them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BuilderError;
use crate::node::{NodeModel, NodeType, WorkflowNode};

pub const SCHEMA_VERSION: &str = "2.0";
pub const AGENT_CLASS: &str = "AssistantAgent";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const ORCHESTRATION_TYPE: &str = "Sequential";

/// Exported workflow document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    pub schema_version: String,
    pub workflow_id: String,
    pub agents: Vec<AgentSpec>,
    pub orchestration: Orchestration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub system_message: String,
    pub llm_config: LlmConfig,
    pub tools: Vec<String>,
}

impl AgentSpec {
    fn from_node(node: &WorkflowNode) -> Self {
        Self {
            name: node.name.clone(),
            class_name: AGENT_CLASS.to_string(),
            system_message: String::new(),
            llm_config: LlmConfig::default(),
            tools: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orchestration {
    #[serde(rename = "type")]
    pub kind: String,
    pub agents: Vec<String>,
}

impl WorkflowDocument {
    /// Pretty JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> Result<String, BuilderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `workflow-<millis>`
pub fn workflow_id(unix_millis: i64) -> String {
    format!("workflow-{}", unix_millis)
}

/// Serialize the node list, stamping the id with the current time
pub fn generate(model: &NodeModel) -> WorkflowDocument {
    generate_at(model, chrono::Utc::now().timestamp_millis())
}

/// Serialize the node list with a fixed timestamp
pub fn generate_at(model: &NodeModel, unix_millis: i64) -> WorkflowDocument {
    let agents: Vec<AgentSpec> = model
        .nodes()
        .iter()
        .filter(|n| n.node_type == NodeType::Agent)
        .map(AgentSpec::from_node)
        .collect();

    let orchestration = Orchestration {
        kind: ORCHESTRATION_TYPE.to_string(),
        agents: model.nodes().iter().map(|n| n.name.clone()).collect(),
    };

    debug!(
        agents = agents.len(),
        steps = orchestration.agents.len(),
        "workflow generated"
    );

    WorkflowDocument {
        schema_version: SCHEMA_VERSION.to_string(),
        workflow_id: workflow_id(unix_millis),
        agents,
        orchestration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_model() {
        let doc = generate_at(&NodeModel::new(), 0);
        assert!(doc.agents.is_empty());
        assert!(doc.orchestration.agents.is_empty());
        assert_eq!(doc.workflow_id, "workflow-0");
    }

    #[test]
    fn test_agent_and_groupchat() {
        let mut model = NodeModel::new();
        model.add_node(NodeType::Agent);
        model.add_node(NodeType::GroupChat);

        let doc = generate_at(&model, 1_700_000_000_000);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            value,
            json!({
                "schema_version": "2.0",
                "workflow_id": "workflow-1700000000000",
                "agents": [{
                    "name": "new_agent_1",
                    "class": "AssistantAgent",
                    "system_message": "",
                    "llm_config": { "model": "gpt-4", "temperature": 0.3 },
                    "tools": []
                }],
                "orchestration": {
                    "type": "Sequential",
                    "agents": ["new_agent_1", "new_groupchat_2"]
                }
            })
        );
    }

    #[test]
    fn test_orchestration_type_ignores_node_types() {
        let mut model = NodeModel::new();
        model.add_node(NodeType::Parallel);
        model.add_node(NodeType::GroupChat);

        let doc = generate_at(&model, 5);
        assert_eq!(doc.orchestration.kind, "Sequential");
        assert!(doc.agents.is_empty());
        assert_eq!(doc.orchestration.agents.len(), 2);
    }

    #[test]
    fn test_pretty_json_layout() {
        let doc = generate_at(&NodeModel::new(), 42);
        let text = doc.to_pretty_json().unwrap();

        let expected = "{\n  \"schema_version\": \"2.0\",\n  \"workflow_id\": \"workflow-42\",\n  \"agents\": [],\n  \"orchestration\": {\n    \"type\": \"Sequential\",\n    \"agents\": []\n  }\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_generate_uses_current_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let doc = generate(&NodeModel::new());
        let millis: i64 = doc
            .workflow_id
            .strip_prefix("workflow-")
            .unwrap()
            .parse()
            .unwrap();
        assert!(millis >= before);
    }
}
