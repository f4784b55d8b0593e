//! Abstract syntax tree for commands.
//!
//! One variant per grammar rule. Every node carries the spans of its
//! literal tokens; [`AstCommand::Error`] stands for input the grammar could
//! not recognize at all.

use istsim_foundation::Span;

/// A literal word in the source, case preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstLiteral {
    /// The word as typed.
    pub text: String,
    /// Where it was typed.
    pub span: Span,
}

/// A number in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AstNumber {
    /// The value.
    pub value: u32,
    /// Where it was typed.
    pub span: Span,
}

/// The value of an item amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AstAmountValue {
    /// An explicit count.
    Count(u32),
    /// The word `all`.
    All,
}

/// An explicit item amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AstAmount {
    /// The amount.
    pub value: AstAmountValue,
    /// Where it was typed.
    pub span: Span,
}

/// The value side of a `key=value` metadata entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstMetaValue {
    /// A number.
    Int(AstNumber),
    /// A word, e.g. `true`.
    Word(AstLiteral),
}

impl AstMetaValue {
    /// Returns the value's span.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Int(n) => n.span,
            Self::Word(w) => w.span,
        }
    }
}

/// One metadata entry: `equip` or `life=30`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstMetaEntry {
    /// The key.
    pub key: AstLiteral,
    /// The value, if `=` was given.
    pub value: Option<AstMetaValue>,
}

/// A bracketed metadata block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstMeta {
    /// The entries in order.
    pub entries: Vec<AstMetaEntry>,
    /// The whole block, brackets included.
    pub span: Span,
}

/// An item specification: `[amount] name... [meta]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstItem {
    /// The amount, if given.
    pub amount: Option<AstAmount>,
    /// The name words.
    pub name: Vec<AstLiteral>,
    /// The metadata block, if given.
    pub meta: Option<AstMeta>,
}

impl AstItem {
    /// Returns the name words joined by single spaces.
    #[must_use]
    pub fn name_text(&self) -> String {
        self.name
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the span of the name words.
    #[must_use]
    pub fn name_span(&self) -> Span {
        match (self.name.first(), self.name.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::default(),
        }
    }
}

/// A command keyword followed by item specifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstItemList {
    /// The command keyword.
    pub verb: AstLiteral,
    /// The items in order.
    pub items: Vec<AstItem>,
}

/// `break <n> slots`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstBreakSlots {
    /// `break`
    pub verb: AstLiteral,
    /// How many slots.
    pub amount: AstNumber,
    /// `slots`
    pub slots: AstLiteral,
}

/// `set life <n> slot <k>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstSetLife {
    /// `set`
    pub verb: AstLiteral,
    /// `life`
    pub life_keyword: AstLiteral,
    /// The new durability.
    pub life: AstNumber,
    /// `slot`
    pub slot_keyword: AstLiteral,
    /// The slot index.
    pub slot: AstNumber,
}

/// Input the grammar could not recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstError {
    /// What went wrong.
    pub message: String,
    /// Where it went wrong.
    pub span: Span,
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstCommand {
    /// `initialize <items*>`
    Initialize(AstItemList),
    /// `get|add|pickup <items+>`
    Get(AstItemList),
    /// `remove|drop|sell <items+>`
    Remove(AstItemList),
    /// `eat <items+>`
    Eat(AstItemList),
    /// `equip <item>`
    Equip(AstItemList),
    /// `unequip <item>`
    Unequip(AstItemList),
    /// `save`
    Save(AstLiteral),
    /// `reload`
    Reload(AstLiteral),
    /// `sync`
    Sync(AstLiteral),
    /// `break <n> slots`
    BreakSlots(AstBreakSlots),
    /// `set life <n> slot <k>`
    SetLife(AstSetLife),
    /// Unrecognized input
    Error(AstError),
}

impl AstCommand {
    /// Returns true for the error variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the command keyword, if the input was recognized.
    #[must_use]
    pub fn verb(&self) -> Option<&AstLiteral> {
        match self {
            Self::Initialize(list)
            | Self::Get(list)
            | Self::Remove(list)
            | Self::Eat(list)
            | Self::Equip(list)
            | Self::Unequip(list) => Some(&list.verb),
            Self::Save(verb) | Self::Reload(verb) | Self::Sync(verb) => Some(verb),
            Self::BreakSlots(b) => Some(&b.verb),
            Self::SetLife(s) => Some(&s.verb),
            Self::Error(_) => None,
        }
    }
}
