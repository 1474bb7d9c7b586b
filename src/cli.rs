use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::syntax::Grammar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrammarArg {
    C,
    Py,
    Asm,
    Text,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::C => Grammar::CLike,
            GrammarArg::Py => Grammar::PyLike,
            GrammarArg::Asm => Grammar::AsmLike,
            GrammarArg::Text => Grammar::Text,
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "iclass")]
#[command(version = "0.1.0")]
#[command(about = "A small modal terminal editor with syntax highlighting")]
pub struct CliArgs {
    /// File to open
    pub file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Grammar to use instead of detecting it from the file extension
    #[arg(long, short = 'g', value_enum)]
    pub grammar: Option<GrammarArg>,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
