//! Node Model - ordered list of workflow nodes
//!
//! Nodes are append-only. Ids are the 1-based position at creation time and
//! restart at 1 once the list is cleared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BuilderError;

/// The four node kinds offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Agent,
    GroupChat,
    Sequential,
    Parallel,
}

impl NodeType {
    /// All node types, in palette order
    pub const ALL: [NodeType; 4] = [
        NodeType::Agent,
        NodeType::GroupChat,
        NodeType::Sequential,
        NodeType::Parallel,
    ];

    /// Tag used in node names and the action wire format
    pub fn tag(&self) -> &'static str {
        match self {
            NodeType::Agent => "agent",
            NodeType::GroupChat => "groupchat",
            NodeType::Sequential => "sequential",
            NodeType::Parallel => "parallel",
        }
    }

    /// Human-readable label shown on canvas cards
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Agent => "Agent Node",
            NodeType::GroupChat => "Group Chat",
            NodeType::Sequential => "Sequential",
            NodeType::Parallel => "Parallel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NodeType::Agent => "👤",
            NodeType::GroupChat => "👥",
            NodeType::Sequential => "➡️",
            NodeType::Parallel => "🔀",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for NodeType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| BuilderError::InvalidNodeType { tag: s.to_string() })
    }
}

/// One unit on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: usize,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
}

impl WorkflowNode {
    fn new(id: usize, node_type: NodeType) -> Self {
        Self {
            id,
            node_type,
            name: format!("new_{}_{}", node_type, id),
        }
    }
}

/// In-memory node list owned by the UI shell
#[derive(Debug, Default)]
pub struct NodeModel {
    nodes: Vec<WorkflowNode>,
}

impl NodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node of the given type and return it
    pub fn add_node(&mut self, node_type: NodeType) -> &WorkflowNode {
        let node = WorkflowNode::new(self.nodes.len() + 1, node_type);
        debug!(id = node.id, name = %node.name, "node added");
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Parse a textual tag and append; the list is untouched on error
    pub fn add_node_tag(&mut self, tag: &str) -> Result<&WorkflowNode, BuilderError> {
        let node_type = tag.parse::<NodeType>()?;
        Ok(self.add_node(node_type))
    }

    /// Truncate to empty in place
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            debug!(removed = self.nodes.len(), "nodes cleared");
        }
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes of one type
    pub fn count_of(&self, node_type: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut model = NodeModel::new();
        for (i, t) in NodeType::ALL.iter().enumerate() {
            let node = model.add_node(*t);
            assert_eq!(node.id, i + 1);
        }
        assert_eq!(model.len(), 4);
        let ids: Vec<usize> = model.nodes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_generated_names() {
        let mut model = NodeModel::new();
        model.add_node(NodeType::Agent);
        model.add_node(NodeType::GroupChat);
        model.add_node(NodeType::Agent);

        let names: Vec<&str> = model.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["new_agent_1", "new_groupchat_2", "new_agent_3"]);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut model = NodeModel::new();
        for t in NodeType::ALL {
            model.add_node(t);
        }
        model.clear();
        assert!(model.is_empty());

        let node = model.add_node(NodeType::Parallel);
        assert_eq!(node.id, 1);
        assert_eq!(node.name, "new_parallel_1");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut model = NodeModel::new();
        model.clear();
        model.clear();
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn test_invalid_tag_leaves_list_untouched() {
        let mut model = NodeModel::new();
        model.add_node(NodeType::Agent);

        let err = model.add_node_tag("loop").unwrap_err();
        assert!(matches!(err, BuilderError::InvalidNodeType { ref tag } if tag == "loop"));
        assert_eq!(model.len(), 1);

        // Tags are case-sensitive
        assert!(model.add_node_tag("Agent").is_err());
    }

    #[test]
    fn test_count_of() {
        let mut model = NodeModel::new();
        model.add_node(NodeType::Agent);
        model.add_node(NodeType::Sequential);
        model.add_node(NodeType::Agent);
        assert_eq!(model.count_of(NodeType::Agent), 2);
        assert_eq!(model.count_of(NodeType::Parallel), 0);
    }

    #[test]
    fn test_node_type_serde_tag() {
        let json = serde_json::to_string(&NodeType::GroupChat).unwrap();
        assert_eq!(json, "\"groupchat\"");
    }
}
