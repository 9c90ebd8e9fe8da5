//! Workflow Builder - visual node editor for agent workflow definitions

pub mod canvas;
pub mod error;
pub mod node;
pub mod replay;
pub mod shell;
pub mod surface;
pub mod tui;
pub mod workflow;

pub use canvas::{Accent, CanvasView, NodeCard};
pub use error::{BuilderError, FixSuggestion};
pub use node::{NodeModel, NodeType, WorkflowNode};
pub use shell::{Action, ShellDocument, UiShell};
pub use surface::{RenderSurface, TextSurface};
pub use workflow::{AgentSpec, LlmConfig, Orchestration, WorkflowDocument};
