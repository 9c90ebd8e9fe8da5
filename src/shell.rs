//! UI Shell - owns the session state and dispatches user actions

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::canvas::{self, CanvasView};
use crate::error::BuilderError;
use crate::node::{NodeModel, NodeType};
use crate::workflow::{self, WorkflowDocument};

pub const TITLE: &str = "Agent Workflow Builder";

/// Shown in the output area until a workflow is generated
pub const OUTPUT_PLACEHOLDER: &str = "// Generated JSON will appear here";

/// Inbound user action
///
/// Wire form: `add:<nodeType>`, `generate`, `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(NodeType),
    Generate,
    Clear,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add(t) => write!(f, "add:{}", t),
            Action::Generate => f.write_str("generate"),
            Action::Clear => f.write_str("clear"),
        }
    }
}

impl FromStr for Action {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "generate" => Ok(Action::Generate),
            "clear" => Ok(Action::Clear),
            _ => match s.strip_prefix("add:") {
                Some(tag) => Ok(Action::Add(tag.parse()?)),
                None => Err(BuilderError::UnknownAction {
                    input: s.to_string(),
                }),
            },
        }
    }
}

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellDocument {
    pub title: &'static str,
    pub canvas: CanvasView,
    pub output: String,
}

/// Session state: the node list plus what is currently on screen
#[derive(Debug)]
pub struct UiShell {
    model: NodeModel,
    canvas: CanvasView,
    output: String,
    last_workflow: Option<WorkflowDocument>,
}

impl Default for UiShell {
    fn default() -> Self {
        let model = NodeModel::new();
        let canvas = canvas::render(&model);
        Self {
            model,
            canvas,
            output: OUTPUT_PLACEHOLDER.to_string(),
            last_workflow: None,
        }
    }
}

impl UiShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: Action) -> Result<(), BuilderError> {
        debug!(%action, "dispatch");
        match action {
            Action::Add(node_type) => {
                self.model.add_node(node_type);
                self.canvas = canvas::render(&self.model);
            }
            Action::Generate => {
                let doc = workflow::generate(&self.model);
                self.output = doc.to_pretty_json()?;
                self.last_workflow = Some(doc);
            }
            Action::Clear => {
                self.model.clear();
                self.canvas = canvas::render(&self.model);
                self.output = OUTPUT_PLACEHOLDER.to_string();
                self.last_workflow = None;
            }
        }
        Ok(())
    }

    /// Parse the wire form and apply it
    pub fn dispatch_str(&mut self, input: &str) -> Result<(), BuilderError> {
        let action = input.parse::<Action>().inspect_err(|e| {
            warn!(input, error = %e, "rejected action");
        })?;
        self.dispatch(action)
    }

    pub fn document(&self) -> ShellDocument {
        ShellDocument {
            title: TITLE,
            canvas: self.canvas.clone(),
            output: self.output.clone(),
        }
    }

    pub fn model(&self) -> &NodeModel {
        &self.model
    }

    pub fn canvas(&self) -> &CanvasView {
        &self.canvas
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Most recent generated workflow, reset by `clear`
    pub fn last_workflow(&self) -> Option<&WorkflowDocument> {
        self.last_workflow.as_ref()
    }
}
