use crate::syntax::Grammar;
use std::path::Path;

const C_KEYWORDS: &[&str] = &[
    "int", "char", "float", "double", "if", "else", "while", "for", "return", "void", "main",
    "#include", "define",
];

const PY_KEYWORDS: &[&str] = &[
    "def", "if", "else", "elif", "while", "for", "return", "class", "import", "from", "as", "try",
    "except", "with",
];

const ASM_KEYWORDS: &[&str] = &[
    "mov", "add", "sub", "mul", "div", "jmp", "cmp", "je", "jne", "call", "ret", "push", "pop",
    "int", "section", "global",
];

const ASM_REGISTERS: &[&str] = &[
    "eax", "ebx", "ecx", "edx", "esi", "edi", "esp", "ebp", "rax", "rbx", "rcx", "rdx", "rsi",
    "rdi", "rsp", "rbp",
];

/// How a grammar indents the line created by Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentRule {
    /// Always start at column 0.
    None,
    /// Keep the source indent, one step deeper after a trailing `:`.
    Colon,
    /// Keep the source indent, one step deeper for `{`, one shallower for `}`.
    Braces,
}

/// Per-grammar rule table consulted by the highlighter and indenter.
#[derive(Debug, Clone, Copy)]
pub struct GrammarRules {
    pub keywords: &'static [&'static str],
    pub registers: &'static [&'static str],
    /// Markers that start a comment running to end of line.
    pub comment_markers: &'static [&'static str],
    pub indent: IndentRule,
}

impl Grammar {
    pub const ALL: [Grammar; 4] = [
        Grammar::Text,
        Grammar::CLike,
        Grammar::PyLike,
        Grammar::AsmLike,
    ];

    pub fn rules(self) -> GrammarRules {
        match self {
            Grammar::Text => GrammarRules {
                keywords: &[],
                registers: &[],
                comment_markers: &[],
                indent: IndentRule::None,
            },
            Grammar::CLike => GrammarRules {
                keywords: C_KEYWORDS,
                registers: &[],
                comment_markers: &[";", "//"],
                indent: IndentRule::Braces,
            },
            Grammar::PyLike => GrammarRules {
                keywords: PY_KEYWORDS,
                registers: &[],
                comment_markers: &[";", "//", "#"],
                indent: IndentRule::Colon,
            },
            Grammar::AsmLike => GrammarRules {
                keywords: ASM_KEYWORDS,
                registers: ASM_REGISTERS,
                comment_markers: &[";", "//"],
                indent: IndentRule::None,
            },
        }
    }

    /// Whether lines are classified beyond whitespace and plain text.
    pub fn highlights(self) -> bool {
        self != Grammar::Text
    }

    pub fn name(self) -> &'static str {
        match self {
            Grammar::Text => "Text",
            Grammar::CLike => "C",
            Grammar::PyLike => "Python",
            Grammar::AsmLike => "Assembly",
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "py" => Grammar::PyLike,
            "c" => Grammar::CLike,
            "asm" | "s" => Grammar::AsmLike,
            _ => Grammar::Text,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }
}
