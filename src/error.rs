//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum BuilderError {
    // ─────────────────────────────────────────────────────────────
    // Input errors (WFB-010 to WFB-011)
    // ─────────────────────────────────────────────────────────────
    #[error("WFB-010: Invalid node type '{tag}'")]
    InvalidNodeType { tag: String },

    #[error("WFB-011: Unknown action '{input}'")]
    UnknownAction { input: String },

    // ─────────────────────────────────────────────────────────────
    // Output errors (WFB-020 to WFB-030)
    // ─────────────────────────────────────────────────────────────
    #[error("WFB-020: JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WFB-030: IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Replay errors (WFB-040)
    // ─────────────────────────────────────────────────────────────
    #[error("WFB-040: Replay failed at line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: Box<BuilderError>,
    },
}

impl BuilderError {
    /// Wrap an error with the script line it came from
    pub fn at_line(self, line: usize) -> Self {
        BuilderError::Replay {
            line,
            source: Box::new(self),
        }
    }
}

impl FixSuggestion for BuilderError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            BuilderError::InvalidNodeType { .. } => {
                Some("Use one of: agent, groupchat, sequential, parallel")
            }
            BuilderError::UnknownAction { .. } => {
                Some("Actions are add:<nodeType>, generate or clear")
            }
            BuilderError::Json(_) => None,
            BuilderError::Io(_) => Some("Check file path and permissions"),
            BuilderError::Replay { source, .. } => source.fix_suggestion(),
        }
    }
}

/// Suggestions survive conversion into `anyhow::Error`
impl FixSuggestion for anyhow::Error {
    fn fix_suggestion(&self) -> Option<&str> {
        self.downcast_ref::<BuilderError>()
            .and_then(|e| e.fix_suggestion())
    }
}
