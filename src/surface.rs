//! Rendering surfaces - anything that can show a ShellDocument

use std::io::Write;

use crate::canvas::CanvasView;
use crate::error::BuilderError;
use crate::shell::ShellDocument;

/// Host side of the shell: receives a full document after every action
pub trait RenderSurface {
    fn show(&mut self, document: &ShellDocument) -> Result<(), BuilderError>;
}

/// Plain-text rendition for pipes and logs
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn show(&mut self, document: &ShellDocument) -> Result<(), BuilderError> {
        writeln!(self.out, "== {} ==", document.title)?;
        match &document.canvas {
            CanvasView::Placeholder(message) => writeln!(self.out, "  {}", message)?,
            CanvasView::Cards(cards) => {
                for card in cards {
                    writeln!(
                        self.out,
                        "  [{}] {} {}",
                        card.title, card.icon, card.type_label
                    )?;
                }
            }
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", document.output)?;
        self.out.flush()?;
        Ok(())
    }
}
