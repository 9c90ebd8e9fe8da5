//! Canvas Renderer - node list to view tree
//!
//! The view tree is toolkit-neutral: the TUI and the text surface both draw
//! from it. The canvas is rebuilt in full after every mutation.

use crate::node::{NodeModel, NodeType, WorkflowNode};

/// Shown when no node has been added yet
pub const EMPTY_CANVAS_MESSAGE: &str = "Click above to add nodes";

/// Per-type accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn for_type(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Agent => Accent::rgb(0x00, 0xD4, 0xAA),
            NodeType::GroupChat => Accent::rgb(0x7B, 0x61, 0xFF),
            NodeType::Sequential => Accent::rgb(0xFF, 0x6B, 0x4A),
            NodeType::Parallel => Accent::rgb(0xFF, 0xD9, 0x3D),
        }
    }

    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One visual card per node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCard {
    pub title: String,
    pub type_label: &'static str,
    pub icon: &'static str,
    pub node_type: NodeType,
    pub accent: Accent,
}

impl From<&WorkflowNode> for NodeCard {
    fn from(node: &WorkflowNode) -> Self {
        Self {
            title: node.name.clone(),
            type_label: node.node_type.label(),
            icon: node.node_type.icon(),
            node_type: node.node_type,
            accent: Accent::for_type(node.node_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasView {
    Placeholder(&'static str),
    Cards(Vec<NodeCard>),
}

impl CanvasView {
    pub fn cards(&self) -> &[NodeCard] {
        match self {
            CanvasView::Placeholder(_) => &[],
            CanvasView::Cards(cards) => cards,
        }
    }
}

/// Project the node list into a view tree
pub fn render(model: &NodeModel) -> CanvasView {
    if model.is_empty() {
        return CanvasView::Placeholder(EMPTY_CANVAS_MESSAGE);
    }
    CanvasView::Cards(model.nodes().iter().map(NodeCard::from).collect())
}
