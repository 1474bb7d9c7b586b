// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;
use crate::view::Screen;

const MODIFIED_TAG: &str = "[Modified]";

/// Mode, grammar, position and filename across the full width.
pub struct StatusBar<'a> {
    pub screen: &'a Screen,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(screen: &'a Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = Style::default()
            .bg(self.theme.ui.status_bar_bg)
            .fg(self.theme.ui.status_bar_fg);
        buf.set_style(area, bar);

        let status = self.screen.status.as_str();
        let spans = match status.strip_suffix(MODIFIED_TAG) {
            Some(head) if self.screen.modified => vec![
                Span::styled(head, bar),
                Span::styled(MODIFIED_TAG, bar.fg(self.theme.ui.modified_fg)),
            ],
            _ => vec![Span::styled(status, bar)],
        };
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
