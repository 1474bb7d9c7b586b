// ui/theme.rs - Colours for tokens and editor chrome

use ratatui::style::Color;

use crate::syntax::TokenKind;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub syntax: SyntaxTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    pub keyword: Color,
    pub register: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
    pub symbol: Color,
    pub plain: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub background: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub modified_fg: Color,
    pub gutter_fg: Color,
    pub tilde_fg: Color,
    pub message_fg: Color,
}

impl Default for SyntaxTheme {
    fn default() -> Self {
        Self {
            keyword: Color::Green,
            register: Color::Magenta,
            string: Color::Magenta,
            number: Color::Yellow,
            comment: Color::Blue,
            symbol: Color::Cyan,
            plain: Color::White,
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            modified_fg: Color::Green,
            gutter_fg: Color::Yellow,
            tilde_fg: Color::DarkGray,
            message_fg: Color::White,
        }
    }
}

impl Theme {
    pub fn token_color(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Keyword => self.syntax.keyword,
            TokenKind::Register => self.syntax.register,
            TokenKind::StringLiteral => self.syntax.string,
            TokenKind::NumberLiteral => self.syntax.number,
            TokenKind::Comment => self.syntax.comment,
            TokenKind::Symbol => self.syntax.symbol,
            TokenKind::Plain | TokenKind::Whitespace => self.syntax.plain,
        }
    }
}
