//! Builder Theme - Visual Design System
//!
//! Dark palette with one accent per node type.

use ratatui::style::{Color, Modifier, Style};

use crate::canvas::Accent;
use crate::node::NodeType;

/// Builder color palette
pub struct BuilderTheme {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
}

impl Default for BuilderTheme {
    fn default() -> Self {
        Self {
            bg_primary: Color::Rgb(13, 13, 18),    // #0D0D12
            bg_secondary: Color::Rgb(22, 22, 29),  // #16161D
            bg_tertiary: Color::Rgb(30, 30, 40),   // #1E1E28
            text_primary: Color::Rgb(244, 244, 246), // #F4F4F6
            text_secondary: Color::Rgb(139, 139, 154), // #8B8B9A
            border: Color::Rgb(42, 42, 54),        // #2A2A36
        }
    }
}

impl BuilderTheme {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Node Type Colors
    // ─────────────────────────────────────────────────────────────────────

    pub fn accent_color(&self, accent: Accent) -> Color {
        Color::Rgb(accent.r, accent.g, accent.b)
    }

    pub fn node_color(&self, node_type: NodeType) -> Color {
        self.accent_color(Accent::for_type(node_type))
    }

    /// Border style for a node card
    pub fn node_border(&self, node_type: NodeType) -> Style {
        Style::default().fg(self.node_color(node_type))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Title style (agent accent, bold)
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.node_color(NodeType::Agent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.node_color(NodeType::Parallel))
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel(&self) -> Style {
        Style::default().bg(self.bg_secondary)
    }

    pub fn card(&self) -> Style {
        Style::default().bg(self.bg_tertiary)
    }

    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_primary)
    }
}
