//! TUI Application - Main entry point and run loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::info;

use super::events::{handle_key_event, poll_event, KeyAction};
use super::theme::BuilderTheme;
use super::widgets::{utils, CanvasWidget, PaletteWidget};
use crate::error::BuilderError;
use crate::shell::{Action, ShellDocument, UiShell};
use crate::surface::RenderSurface;

/// Screen-only state, not part of the shell document
#[derive(Debug, Default)]
pub struct ViewState {
    pub output_scroll: u16,
    pub show_help: bool,
    pub status: Option<String>,
}

/// Terminal-backed surface
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    theme: BuilderTheme,
    pub view: ViewState,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            theme: BuilderTheme::new(),
            view: ViewState::default(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> RenderSurface for TerminalSurface<B> {
    fn show(&mut self, document: &ShellDocument) -> Result<(), BuilderError> {
        let theme = &self.theme;
        let view = &self.view;
        self.terminal
            .draw(|frame| render(frame, document, view, theme))?;
        Ok(())
    }
}

/// Render one frame
fn render(frame: &mut Frame, document: &ShellDocument, view: &ViewState, theme: &BuilderTheme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.background()), area);

    // Header, Palette, Canvas, Output, Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Header
            Constraint::Length(3),      // Palette
            Constraint::Min(8),         // Canvas
            Constraint::Percentage(40), // Output
            Constraint::Length(1),      // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], document, view, theme);
    render_palette(frame, chunks[1], theme);
    render_canvas(frame, chunks[2], document, theme);
    render_output(frame, chunks[3], document, view, theme);
    render_footer(frame, chunks[4], theme);

    if view.show_help {
        render_help(frame, area, theme);
    }
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    document: &ShellDocument,
    view: &ViewState,
    theme: &BuilderTheme,
) {
    let mut spans = vec![
        Span::styled(format!("🤖 {}", document.title), theme.header()),
        Span::raw("  │  "),
        Span::styled(format!("{} nodes", document.canvas.cards().len()), theme.dimmed()),
    ];
    if let Some(status) = &view.status {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(utils::truncate(status, 40), theme.text()));
    }
    let header = Line::from(spans);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_palette(frame: &mut Frame, area: Rect, theme: &BuilderTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(" ADD NODE ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(PaletteWidget::new(theme), inner);
}

fn render_canvas(frame: &mut Frame, area: Rect, document: &ShellDocument, theme: &BuilderTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .style(theme.panel())
        .title(" CANVAS ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(CanvasWidget::new(&document.canvas, theme), inner);
}

fn render_output(
    frame: &mut Frame,
    area: Rect,
    document: &ShellDocument,
    view: &ViewState,
    theme: &BuilderTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .style(theme.panel())
        .title(" 📋 JSON ");
    let paragraph = Paragraph::new(document.output.as_str())
        .style(theme.text())
        .block(block)
        .scroll((view.output_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &BuilderTheme) {
    let help = Line::from(vec![
        Span::styled(" [1-4]", theme.key_hint()),
        Span::styled(" add  ", theme.dimmed()),
        Span::styled("[Enter]", theme.key_hint()),
        Span::styled(" generate  ", theme.dimmed()),
        Span::styled("[c]", theme.key_hint()),
        Span::styled("lear  ", theme.dimmed()),
        Span::styled("[↑↓]", theme.key_hint()),
        Span::styled(" scroll  ", theme.dimmed()),
        Span::styled("[?]", theme.key_hint()),
        Span::styled(" help  ", theme.dimmed()),
        Span::styled("[q]", theme.key_hint()),
        Span::styled("uit", theme.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &BuilderTheme) {
    let width = area.width.min(44);
    let height = area.height.min(11);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let lines = vec![
        Line::from("1 / a   add Agent Node"),
        Line::from("2 / g   add Group Chat"),
        Line::from("3 / s   add Sequential"),
        Line::from("4 / p   add Parallel"),
        Line::from("Enter   generate JSON"),
        Line::from("c / Del clear canvas"),
        Line::from("↑ / ↓   scroll output"),
        Line::from("q       quit"),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.header())
        .title(" HELP ");

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(theme.background())
            .wrap(Wrap { trim: false }),
        popup,
    );
}

/// TUI Application
pub struct TuiApp<B: Backend> {
    shell: UiShell,
    surface: TerminalSurface<B>,
    should_quit: bool,
}

impl<B: Backend> TuiApp<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            shell: UiShell::new(),
            surface: TerminalSurface::new(terminal),
            should_quit: false,
        }
    }

    pub fn shell(&self) -> &UiShell {
        &self.shell
    }

    pub fn surface(&self) -> &TerminalSurface<B> {
        &self.surface
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Redraw from the current shell document
    pub fn draw(&mut self) -> Result<(), BuilderError> {
        let document = self.shell.document();
        self.surface.show(&document)
    }

    /// Apply one key action
    pub fn apply(&mut self, action: KeyAction) {
        let view = &mut self.surface.view;
        match action {
            KeyAction::Shell(action) => {
                view.show_help = false;
                match self.shell.dispatch(action) {
                    Ok(()) => {
                        if action != Action::Generate {
                            view.output_scroll = 0;
                        }
                        view.status = Some(describe(&self.shell, action));
                    }
                    Err(e) => view.status = Some(e.to_string()),
                }
            }
            KeyAction::ScrollUp => view.output_scroll = view.output_scroll.saturating_sub(1),
            KeyAction::ScrollDown => {
                let max = self.shell.output().lines().count().saturating_sub(1) as u16;
                view.output_scroll = (view.output_scroll + 1).min(max);
            }
            KeyAction::Help => view.show_help = !view.show_help,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }
}

/// Status-line text after a successful action
fn describe(shell: &UiShell, action: Action) -> String {
    match action {
        Action::Add(_) => match shell.model().nodes().last() {
            Some(node) => format!("Added {}", node.name),
            None => String::new(),
        },
        Action::Generate => match shell.last_workflow() {
            Some(doc) => format!("Generated {}", doc.workflow_id),
            None => String::new(),
        },
        Action::Clear => "Canvas cleared".to_string(),
    }
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Run the TUI application
    pub fn run(mut self) -> anyhow::Result<()> {
        info!("workflow builder opened");

        let result = self.main_loop();

        restore_terminal(self.surface.terminal_mut())?;
        result
    }

    /// Main event loop
    fn main_loop(&mut self) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(50);

        while !self.should_quit {
            self.draw()?;
            if let Some(key) = poll_event(tick_rate)? {
                self.apply(handle_key_event(key));
            }
        }

        Ok(())
    }
}

/// Setup terminal for TUI
///
/// Raw mode is switched back off if any later step fails.
pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    unwind_on_error(enter_alternate_screen(), reset_terminal_modes)
}

fn enter_alternate_screen() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Run `cleanup` when `result` is an error, then pass the result through
fn unwind_on_error<T>(result: anyhow::Result<T>, cleanup: impl FnOnce()) -> anyhow::Result<T> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Best-effort reset used on failure paths and from the panic hook
pub(super) fn reset_terminal_modes() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Restore the terminal before the default panic message is printed
pub(super) fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_terminal_modes();
        previous(info);
    }));
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
