//! Labeled source ranges for syntax highlighting.

use std::fmt;

use istsim_foundation::Span;

/// What a highlighted range of command text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeBlockKind {
    /// The command keyword, e.g. `initialize`.
    Command,
    /// A fixed keyword inside a command, e.g. `slots`.
    Keyword,
    /// An amount or other number.
    Number,
    /// A resolved item name.
    Item,
    /// A metadata block.
    Meta,
    /// Text that failed to parse or resolve.
    Invalid,
}

impl CodeBlockKind {
    /// Returns the scope name renderers key their colours on.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "keyword.command",
            Self::Keyword => "keyword.other",
            Self::Number => "constant.numeric",
            Self::Item => "item.name",
            Self::Meta => "item.meta",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for CodeBlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled range of command text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    /// Where the block is.
    pub span: Span,
    /// What it is.
    pub kind: CodeBlockKind,
}

impl CodeBlock {
    /// Creates a code block.
    #[must_use]
    pub const fn new(span: Span, kind: CodeBlockKind) -> Self {
        Self { span, kind }
    }
}
