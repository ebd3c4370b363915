//! Human-readable previews of generated colors.
//!
//! Previews are write-only diagnostics: nothing here feeds back into the
//! palette.

pub mod widgets;

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};
use tracing::{info, warn};

use crate::color::decode_hex;
use crate::pipeline::assign::RegionColor;
use widgets::SwatchWidget;

/// Receives every color the caller wants shown, with a label.
pub trait PreviewSink {
    fn emit(&mut self, hex: &str, label: &str);
}

/// Writes one colored line per color: the label on the color itself, in
/// black or white text depending on the color's brightness.
pub struct TerminalPreview<W: Write> {
    out: W,
}

impl TerminalPreview<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPreview<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one preview line. Undecodable hex is printed as-is.
    pub fn write(&mut self, hex: &str, label: &str) -> io::Result<()> {
        let Some(color) = decode_hex(hex) else {
            writeln!(self.out, "{hex} {label}")?;
            return self.out.flush();
        };

        let text = if label.is_empty() { hex } else { label };
        let fg = if color.is_light() {
            TermColor::Black
        } else {
            TermColor::White
        };
        queue!(
            self.out,
            SetBackgroundColor(TermColor::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            }),
            SetForegroundColor(fg),
            Print(format!(" {text} ")),
            ResetColor,
            Print("\n"),
        )?;
        self.out.flush()
    }
}

impl<W: Write> PreviewSink for TerminalPreview<W> {
    fn emit(&mut self, hex: &str, label: &str) {
        if let Err(err) = self.write(hex, label) {
            warn!(%err, hex, "failed to write color preview");
        }
    }
}

/// Sends previews to the log instead of the terminal.
#[derive(Debug, Default)]
pub struct LogPreview;

impl PreviewSink for LogPreview {
    fn emit(&mut self, hex: &str, label: &str) {
        info!(hex, label, "color");
    }
}

/// Draw the swatch grid inline below the cursor.
pub fn show_grid(regions: &[RegionColor]) -> io::Result<()> {
    let (width, _) = crossterm::terminal::size()?;
    let widget = SwatchWidget::new(regions);
    let height = widget.height(width);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    terminal.draw(|frame| frame.render_widget(widget, frame.area()))?;
    terminal.show_cursor()?;
    println!();
    Ok(())
}
