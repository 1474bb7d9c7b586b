// ui/widgets/editor_pane.rs - Highlighted buffer text

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;
use crate::view::Screen;

/// Paints each visible row as one styled span per token.
pub struct EditorPane<'a> {
    pub screen: &'a Screen,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(screen: &'a Screen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.ui.background));

        for (i, row) in self.screen.rows.iter().enumerate().take(area.height as usize) {
            let line = match row {
                Some(row) => Line::from(
                    row.tokens
                        .iter()
                        .map(|token| {
                            Span::styled(
                                token.text(&row.text).to_string(),
                                Style::default().fg(self.theme.token_color(token.kind)),
                            )
                        })
                        .collect::<Vec<_>>(),
                ),
                None => Line::from(Span::styled(
                    "~",
                    Style::default().fg(self.theme.ui.tilde_fg),
                )),
            };
            buf.set_line(area.x, area.y + i as u16, &line, area.width);
        }
    }
}
