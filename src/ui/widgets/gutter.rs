// ui/widgets/gutter.rs - Line number gutter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;
use crate::view::Screen;

/// Right-aligned 1-based line numbers for the visible rows.
pub struct Gutter<'a> {
    pub screen: &'a Screen,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(screen: &'a Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, row) in self.screen.rows.iter().enumerate().take(area.height as usize) {
            let text = match row {
                Some(row) => format!("{:>4} ", row.number),
                None => continue,
            };
            let line = Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.ui.gutter_fg),
            ));
            buf.set_line(area.x, area.y + i as u16, &line, area.width);
        }
    }
}
