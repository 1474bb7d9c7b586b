// ui/widgets/message_line.rs - Bottom line: prompt, message or hint

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::ui::theme::Theme;
use crate::view::{BottomLine, Screen};

pub struct MessageLine<'a> {
    pub screen: &'a Screen,
    pub theme: &'a Theme,
}

impl<'a> MessageLine<'a> {
    pub fn new(screen: &'a Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for MessageLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.screen.bottom {
            BottomLine::Hint(_) => Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
            BottomLine::Prompt(_) | BottomLine::Message(_) => {
                Style::default().fg(self.theme.ui.message_fg)
            }
        };
        let line = Line::styled(self.screen.bottom.text(), style);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
