#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Command,
    Insert,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Command => "COMMAND",
            Mode::Insert => "INSERT",
        }
    }
}
