//! TUI Module - interactive node editor
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        UI LAYER (widgets/)                          │
//! │  Pure rendering. No business logic. Receives ShellDocument.         │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ ShellDocument (derived)
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       SHELL (crate::shell)                          │
//! │  UiShell owns the node list. Actions in, documents out.             │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ Action
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       INPUT (events.rs)                             │
//! │  Key presses mapped to shell actions or view-only actions.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod events;
mod theme;

pub mod widgets;

pub use app::{TerminalSurface, TuiApp, ViewState};
pub use events::{handle_key_event, KeyAction};
pub use theme::BuilderTheme;

/// Run the interactive editor until the user quits
pub fn run() -> anyhow::Result<()> {
    app::install_panic_hook();
    let terminal = app::setup_terminal()?;
    TuiApp::new(terminal).run()
}
