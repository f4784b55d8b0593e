//! Syntax highlighting for command lines.
//!
//! Colours come from the code blocks a parsed command carries, so what the
//! user sees always agrees with how the command was resolved.

use std::borrow::Cow;

use istsim_engine::{CodeBlock, CodeBlockKind, parse_command};
use istsim_foundation::ItemSearch;

const RESET: &str = "\x1b[0m";

/// Renders command text with ANSI colours.
#[derive(Clone, Copy, Debug)]
pub struct Highlighter {
    color: bool,
}

impl Highlighter {
    /// Creates a highlighter. With `color` off, text passes through.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Returns true if colours are emitted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.color
    }

    /// Returns the escape sequence for a block kind.
    #[must_use]
    pub const fn style(kind: CodeBlockKind) -> &'static str {
        match kind {
            CodeBlockKind::Command => "\x1b[1;32m", // bold green
            CodeBlockKind::Keyword => "\x1b[32m",   // green
            CodeBlockKind::Number => "\x1b[35m",    // magenta
            CodeBlockKind::Item => "\x1b[36m",      // cyan
            CodeBlockKind::Meta => "\x1b[33m",      // yellow
            CodeBlockKind::Invalid => "\x1b[4;31m", // red underline
        }
    }

    /// Colours `line` according to `blocks`.
    ///
    /// Blocks are applied in start order. Overlapping blocks and ranges
    /// that do not fall on character boundaries are skipped.
    #[must_use]
    pub fn render<'l>(&self, line: &'l str, blocks: &[CodeBlock]) -> Cow<'l, str> {
        if !self.color || blocks.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut ordered: Vec<&CodeBlock> = blocks.iter().collect();
        ordered.sort_by_key(|b| (b.span.start, b.span.end));

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;
        for block in ordered {
            let (start, end) = (block.span.start, block.span.end.min(line.len()));
            if start < cursor || start >= end {
                continue;
            }
            let (Some(before), Some(text)) = (line.get(cursor..start), line.get(start..end)) else {
                continue;
            };
            result.push_str(before);
            result.push_str(Self::style(block.kind));
            result.push_str(text);
            result.push_str(RESET);
            cursor = end;
        }
        result.push_str(line.get(cursor..).unwrap_or_default());

        Cow::Owned(result)
    }

    /// Parses `line` against `search` and colours the result.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, search: &dyn ItemSearch) -> Cow<'l, str> {
        if !self.color || line.trim().is_empty() {
            return Cow::Borrowed(line);
        }
        let command = parse_command(line, search);
        self.render(line, command.code_blocks())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(true)
    }
}
