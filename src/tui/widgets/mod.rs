//! TUI Widgets - UI Components
//!
//! Each widget is a stateless renderer over the shell's view tree.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::theme::BuilderTheme;
use crate::canvas::{CanvasView, NodeCard};
use crate::node::NodeType;

const CARD_HEIGHT: u16 = 4;
const CARD_GAP: u16 = 1;

/// Node cards laid out left to right, wrapping into rows
pub struct CanvasWidget<'a> {
    view: &'a CanvasView,
    theme: &'a BuilderTheme,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(view: &'a CanvasView, theme: &'a BuilderTheme) -> Self {
        Self { view, theme }
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = match self.view {
            CanvasView::Placeholder(message) => {
                Paragraph::new(Line::styled(*message, self.theme.dimmed())).render(area, buf);
                return;
            }
            CanvasView::Cards(cards) => cards,
        };

        let mut x = area.x;
        let mut y = area.y;
        for (i, card) in cards.iter().enumerate() {
            let width = utils::card_width(card).min(area.width);
            if x > area.x && x + width > area.right() {
                x = area.x;
                y += CARD_HEIGHT;
            }
            if y + CARD_HEIGHT > area.bottom() {
                let hidden = cards.len() - i;
                let line = Line::styled(format!("+{} more", hidden), self.theme.dimmed());
                let last_row = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
                line.render(last_row, buf);
                return;
            }
            render_card(card, Rect::new(x, y, width, CARD_HEIGHT), self.theme, buf);
            x += width + CARD_GAP;
        }
    }
}

fn render_card(card: &NodeCard, area: Rect, theme: &BuilderTheme, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color(card.accent)))
        .style(theme.card());
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::styled(card.title.as_str(), theme.card_title()),
        Line::from(vec![
            Span::raw(card.icon),
            Span::raw(" "),
            Span::styled(card.type_label, theme.dimmed()),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}

/// The four "add node" buttons
pub struct PaletteWidget<'a> {
    theme: &'a BuilderTheme,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(theme: &'a BuilderTheme) -> Self {
        Self { theme }
    }
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, node_type) in NodeType::ALL.iter().enumerate() {
            spans.push(Span::styled("▌", self.theme.node_border(*node_type)));
            spans.push(Span::styled(format!("[{}] ", i + 1), self.theme.key_hint()));
            spans.push(Span::raw(node_type.icon()));
            spans.push(Span::styled(
                format!(" {}", node_type.label()),
                self.theme.text(),
            ));
            spans.push(Span::raw("   "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Common widget utilities
pub mod utils {
    use ratatui::text::Line;

    use crate::canvas::NodeCard;

    /// Card width: widest line plus borders and padding
    pub fn card_width(card: &NodeCard) -> u16 {
        let title = Line::from(card.title.as_str()).width();
        let label = Line::from(format!("{} {}", card.icon, card.type_label)).width();
        (title.max(label) + 4) as u16
    }

    /// Truncate string with ellipsis
    pub fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else if max_len <= 3 {
            s.chars().take(max_len).collect()
        } else {
            let head: String = s.chars().take(max_len - 3).collect();
            format!("{}...", head)
        }
    }
}
