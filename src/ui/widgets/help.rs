// ui/widgets/help.rs - Full-screen help page

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::command::HELP_TEXT;
use crate::ui::theme::Theme;

pub const HELP_TITLE: &str = concat!("iclass v", env!("CARGO_PKG_VERSION"), " - Help");

pub struct HelpScreen<'a> {
    pub theme: &'a Theme,
}

impl<'a> HelpScreen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.ui.background));
        let title = Line::styled(
            HELP_TITLE,
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );
        buf.set_line(area.x, area.y, &title, area.width);

        let body = Style::default().fg(self.theme.ui.message_fg);
        for (i, text) in HELP_TEXT.iter().enumerate() {
            let y = i as u16 + 2;
            if y >= area.height {
                break;
            }
            buf.set_line(area.x, area.y + y, &Line::styled(*text, body), area.width);
        }
    }
}
