// ui/renderer.rs - Ratatui-based renderer for the editor

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::help::HelpScreen;
use crate::ui::widgets::message_line::MessageLine;
use crate::ui::widgets::status_bar::StatusBar;
use crate::view::GUTTER_WIDTH;

/// Rows below the text area: status bar and message line.
const CHROME_ROWS: u16 = 2;

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw one frame of the editor.
    pub fn draw(&mut self, editor: &mut Editor) -> io::Result<()> {
        let size = self.terminal.size()?;
        let screen = editor.screen(size.height.saturating_sub(CHROME_ROWS) as usize);
        let theme = &self.theme;

        self.terminal.draw(|f| {
            let area = f.size();
            if screen.help {
                f.render_widget(HelpScreen::new(theme), area);
                return;
            }

            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),    // Text area
                    Constraint::Length(1), // Status bar
                    Constraint::Length(1), // Message line
                ])
                .split(area);

            let editor_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(GUTTER_WIDTH as u16),
                    Constraint::Min(1),
                ])
                .split(vertical_chunks[0]);

            f.render_widget(Gutter::new(&screen, theme), editor_chunks[0]);
            f.render_widget(EditorPane::new(&screen, theme), editor_chunks[1]);
            f.render_widget(StatusBar::new(&screen, theme), vertical_chunks[1]);
            f.render_widget(MessageLine::new(&screen, theme), vertical_chunks[2]);

            let (x, y) = screen.cursor;
            if x < area.width as usize && y < area.height as usize {
                f.set_cursor(x as u16, y as u16);
            }
        })?;
        Ok(())
    }
}
