use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::assign::RegionColor;

const SWATCH_WIDTH: usize = 10;
const LABEL_WIDTH: usize = SWATCH_WIDTH - 2;
const MARGIN: u16 = 2;

/// Renders assigned region colors as rows of labeled swatches, with the
/// palette position under each one.
pub struct SwatchWidget<'a> {
    regions: &'a [RegionColor],
}

impl<'a> SwatchWidget<'a> {
    pub fn new(regions: &'a [RegionColor]) -> Self {
        Self { regions }
    }

    /// Swatches that fit on one row of a widget `width` cells wide.
    pub fn per_row(width: u16) -> usize {
        let inner = width.saturating_sub(2 + MARGIN) as usize;
        (inner / (SWATCH_WIDTH + 1)).max(1)
    }

    /// Rows needed to show every swatch at `width`, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.regions.len().div_ceil(Self::per_row(width));
        let lines = if rows == 0 { 1 } else { rows * 3 - 1 };
        lines as u16 + 2
    }
}

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Black or white text, whichever reads better on `c`.
fn contrast_fg(c: AppColor) -> Color {
    if c.is_light() {
        Color::Black
    } else {
        Color::White
    }
}

fn short_label(name: &str) -> String {
    name.chars().take(LABEL_WIDTH).collect()
}

fn build_swatch_row(regions: &[RegionColor]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(MARGIN as usize))];
    for region in regions {
        let style = Style::default()
            .bg(to_color(region.color))
            .fg(contrast_fg(region.color));
        let label = format!("{:^width$}", short_label(&region.name), width = SWATCH_WIDTH);
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn build_index_row(start: usize, count: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(MARGIN as usize))];
    for i in start..start + count {
        spans.push(Span::styled(
            format!("{:^width$}", i, width = SWATCH_WIDTH),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for SwatchWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(format!("Palette ({})", self.regions.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.regions.is_empty() {
            Paragraph::new("  (no colors)").render(inner, buf);
            return;
        }

        let per_row = Self::per_row(area.width);
        let mut lines = Vec::new();
        for (row, chunk) in self.regions.chunks(per_row).enumerate() {
            if row > 0 {
                lines.push(Line::from(""));
            }
            lines.push(build_swatch_row(chunk));
            lines.push(build_index_row(row * per_row, chunk.len()));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
