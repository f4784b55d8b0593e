//! Grammar parser for the command language.
//!
//! The parser never fails: input it cannot recognize becomes
//! [`AstCommand::Error`] with the span of the offending token.

use istsim_foundation::Span;
use tracing::trace;

use crate::ast::{
    AstAmount, AstAmountValue, AstBreakSlots, AstCommand, AstError, AstItem, AstItemList,
    AstLiteral, AstMeta, AstMetaEntry, AstMetaValue, AstNumber, AstSetLife,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

type ParseResult<T> = std::result::Result<T, AstError>;

/// How many items a command keyword takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arity {
    ZeroOrMore,
    OneOrMore,
    ExactlyOne,
}

/// Parser for one line of command text.
pub struct Parser {
    /// All tokens, ending with `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    position: usize,
}

impl Parser {
    /// Creates a parser for the given source.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::tokenize_all(source),
            position: 0,
        }
    }

    /// Parses the whole line into a command.
    pub fn parse(&mut self) -> AstCommand {
        let command = self.parse_command().unwrap_or_else(AstCommand::Error);
        trace!(?command, "parsed command");
        command
    }

    fn parse_command(&mut self) -> ParseResult<AstCommand> {
        let verb = match &self.current().kind {
            TokenKind::Eof => return Err(self.error("empty command")),
            TokenKind::Word(_) => self.literal()?,
            kind => return Err(self.error(&format!("expected a command, found {}", kind.name()))),
        };

        let command = match verb.text.to_ascii_lowercase().as_str() {
            "initialize" => AstCommand::Initialize(self.item_list(verb, Arity::ZeroOrMore)?),
            "get" | "add" | "pickup" => AstCommand::Get(self.item_list(verb, Arity::OneOrMore)?),
            "remove" | "drop" | "sell" => {
                AstCommand::Remove(self.item_list(verb, Arity::OneOrMore)?)
            }
            "eat" => AstCommand::Eat(self.item_list(verb, Arity::OneOrMore)?),
            "equip" => AstCommand::Equip(self.item_list(verb, Arity::ExactlyOne)?),
            "unequip" => AstCommand::Unequip(self.item_list(verb, Arity::ExactlyOne)?),
            "save" => AstCommand::Save(verb),
            "reload" => AstCommand::Reload(verb),
            "sync" => AstCommand::Sync(verb),
            "break" => AstCommand::BreakSlots(self.break_slots(verb)?),
            "set" => AstCommand::SetLife(self.set_life(verb)?),
            _ => {
                return Err(AstError {
                    message: format!("unknown command: {}", verb.text),
                    span: verb.span,
                });
            }
        };

        self.expect_end()?;
        Ok(command)
    }

    fn item_list(&mut self, verb: AstLiteral, arity: Arity) -> ParseResult<AstItemList> {
        let mut items = Vec::new();
        while !self.at_end() {
            items.push(self.item()?);
        }

        let ok = match arity {
            Arity::ZeroOrMore => true,
            Arity::OneOrMore => !items.is_empty(),
            Arity::ExactlyOne => items.len() == 1,
        };
        if !ok {
            let message = match arity {
                Arity::ExactlyOne => format!("{} takes exactly one item", verb.text),
                _ => format!("{} needs at least one item", verb.text),
            };
            let span = items
                .last()
                .map_or(verb.span, |item: &AstItem| verb.span.to(item.name_span()));
            return Err(AstError { message, span });
        }

        Ok(AstItemList { verb, items })
    }

    /// `[amount] word+ [meta]`
    fn item(&mut self) -> ParseResult<AstItem> {
        let amount = self.amount();

        let mut name = Vec::new();
        while let TokenKind::Word(_) = self.current().kind {
            name.push(self.literal()?);
        }
        if name.is_empty() {
            return Err(self.error("expected an item name"));
        }

        let meta = if self.current().kind == TokenKind::LBracket {
            Some(self.meta()?)
        } else {
            None
        };

        match &self.current().kind {
            TokenKind::Eof | TokenKind::Int(_) => {}
            TokenKind::Word(_) if meta.is_some() => {}
            kind => return Err(self.error(&format!("unexpected {}", kind.name()))),
        }

        Ok(AstItem { amount, name, meta })
    }

    fn amount(&mut self) -> Option<AstAmount> {
        let token = self.current().clone();
        let value = match token.kind {
            TokenKind::Int(n) => AstAmountValue::Count(n),
            TokenKind::Word(_) if token.is_keyword("all") => AstAmountValue::All,
            _ => return None,
        };
        self.advance();
        Some(AstAmount {
            value,
            span: token.span,
        })
    }

    /// `[ entry (, entry)* ]`
    fn meta(&mut self) -> ParseResult<AstMeta> {
        let start = self.current().span;
        self.advance();

        let mut entries = Vec::new();
        loop {
            let key = match self.current().kind {
                TokenKind::Word(_) => self.literal()?,
                _ => return Err(self.error("expected a metadata key")),
            };
            let value = if self.current().kind == TokenKind::Equals {
                self.advance();
                Some(self.meta_value()?)
            } else {
                None
            };
            entries.push(AstMetaEntry { key, value });

            match self.current().kind {
                TokenKind::Comma => self.advance(),
                TokenKind::RBracket => break,
                _ => return Err(self.error("expected ',' or ']'")),
            }
        }

        let end = self.current().span;
        self.advance();
        Ok(AstMeta {
            entries,
            span: start.to(end),
        })
    }

    fn meta_value(&mut self) -> ParseResult<AstMetaValue> {
        match self.current().kind {
            TokenKind::Int(_) => Ok(AstMetaValue::Int(self.number()?)),
            TokenKind::Word(_) => Ok(AstMetaValue::Word(self.literal()?)),
            _ => Err(self.error("expected a metadata value")),
        }
    }

    /// `break <n> slots`
    fn break_slots(&mut self, verb: AstLiteral) -> ParseResult<AstBreakSlots> {
        let amount = self.number()?;
        let slots = self.keyword(&["slots", "slot"])?;
        Ok(AstBreakSlots {
            verb,
            amount,
            slots,
        })
    }

    /// `set life <n> slot <k>`
    fn set_life(&mut self, verb: AstLiteral) -> ParseResult<AstSetLife> {
        let life_keyword = self.keyword(&["life"])?;
        let life = self.number()?;
        let slot_keyword = self.keyword(&["slot"])?;
        let slot = self.number()?;
        Ok(AstSetLife {
            verb,
            life_keyword,
            life,
            slot_keyword,
            slot,
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn current(&self) -> &Token {
        // tokenize_all always ends with Eof, and advance never passes it
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn expect_end(&self) -> ParseResult<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error(&format!("unexpected {}", self.current().kind.name())))
        }
    }

    fn literal(&mut self) -> ParseResult<AstLiteral> {
        let token = self.current().clone();
        let TokenKind::Word(text) = token.kind else {
            return Err(self.error("expected a word"));
        };
        self.advance();
        Ok(AstLiteral {
            text,
            span: token.span,
        })
    }

    fn number(&mut self) -> ParseResult<AstNumber> {
        let token = self.current();
        let TokenKind::Int(value) = token.kind else {
            return Err(self.error("expected a number"));
        };
        let span = token.span;
        self.advance();
        Ok(AstNumber { value, span })
    }

    fn keyword(&mut self, accepted: &[&str]) -> ParseResult<AstLiteral> {
        if accepted.iter().any(|k| self.current().is_keyword(k)) {
            return self.literal();
        }
        Err(self.error(&format!("expected '{}'", accepted[0])))
    }

    fn error(&self, fallback: &str) -> AstError {
        let token = self.current();
        let message = match &token.kind {
            TokenKind::Error(msg) => msg.clone(),
            _ => fallback.to_string(),
        };
        AstError {
            message,
            span: token.span,
        }
    }
}

/// Parses one line of command text.
#[must_use]
pub fn parse_command(source: &str) -> AstCommand {
    Parser::new(source).parse()
}
