//! AST to command delegation.
//!
//! Each command kind has a `parse_ast_command_*` function that labels its
//! keyword tokens for highlighting and hands its item list to
//! [`parse_ast_items`]. A bad item never aborts the command: its diagnostic
//! is collected, and the items before it are kept.

use istsim_foundation::{Amount, Error, ItemSearch};
use istsim_language::{
    AstAmountValue, AstBreakSlots, AstCommand, AstItem, AstItemList, AstLiteral, AstMetaValue,
    AstSetLife, parse_command as parse_ast,
};
use tracing::debug;

use crate::arg::{ItemStackArg, MAX_UNSTACKABLE_COUNT};
use crate::code_block::{CodeBlock, CodeBlockKind};
use crate::command::{CmdErr, Command, CommandAction, RemoveMode};

/// Parses text all the way to a command.
#[must_use]
pub fn parse_command(source: &str, search: &dyn ItemSearch) -> Command {
    let command = parse_ast_command(&parse_ast(source), search);
    debug!(source, cmd_err = ?command.cmd_err(), "parsed");
    command
}

/// Converts a parsed AST into a command.
#[must_use]
pub fn parse_ast_command(ast: &AstCommand, search: &dyn ItemSearch) -> Command {
    match ast {
        AstCommand::Initialize(list) => parse_ast_command_initialize(list, search),
        AstCommand::Get(list) => parse_ast_command_get(list, search),
        AstCommand::Remove(list) => parse_ast_command_remove(list, search),
        AstCommand::Eat(list) => parse_ast_command_eat(list, search),
        AstCommand::Equip(list) => parse_ast_command_equip(list, search, true),
        AstCommand::Unequip(list) => parse_ast_command_equip(list, search, false),
        AstCommand::Save(verb) => keyword_only(verb, CommandAction::Save),
        AstCommand::Reload(verb) => keyword_only(verb, CommandAction::Reload),
        AstCommand::Sync(verb) => keyword_only(verb, CommandAction::Sync),
        AstCommand::BreakSlots(ast) => parse_ast_command_break_slots(ast),
        AstCommand::SetLife(ast) => parse_ast_command_set_life(ast),
        AstCommand::Error(err) => Command::ast_error(err.message.clone(), err.span),
    }
}

/// Resolves a list of AST items against the catalog.
///
/// Returns the arguments before the first failing item, plus one
/// diagnostic per failing item. Code blocks are pushed for every item.
pub fn parse_ast_items(
    items: &[AstItem],
    search: &dyn ItemSearch,
    allow_all: bool,
    code_blocks: &mut Vec<CodeBlock>,
) -> (Vec<ItemStackArg>, Vec<String>) {
    let mut args = Vec::new();
    let mut errors = Vec::new();
    for item in items {
        match parse_ast_item(item, search, allow_all, code_blocks) {
            Ok(arg) if errors.is_empty() => args.push(arg),
            Ok(_) => {}
            Err(message) => errors.push(message),
        }
    }
    (args, errors)
}

fn parse_ast_item(
    item: &AstItem,
    search: &dyn ItemSearch,
    allow_all: bool,
    code_blocks: &mut Vec<CodeBlock>,
) -> Result<ItemStackArg, String> {
    let mut errors: Vec<String> = Vec::new();
    let mut amount_block = None;

    let amount = match item.amount {
        None => Amount::default(),
        Some(ast) => {
            let (amount, valid) = match ast.value {
                AstAmountValue::Count(n) => (Amount::Count(n), true),
                AstAmountValue::All => (Amount::All, allow_all),
            };
            if !valid {
                errors.push(
                    Error::invalid_amount("'all' is only allowed when removing items").to_string(),
                );
            }
            amount_block = Some(code_blocks.len());
            code_blocks.push(CodeBlock::new(
                ast.span,
                if valid {
                    CodeBlockKind::Number
                } else {
                    CodeBlockKind::Invalid
                },
            ));
            amount
        }
    };

    let name = item.name_text();
    let found = search.search_item(&name);
    code_blocks.push(CodeBlock::new(
        item.name_span(),
        if found.is_some() {
            CodeBlockKind::Item
        } else {
            CodeBlockKind::Invalid
        },
    ));

    let mut stack = found.as_ref().map(|item| item.create_default_stack());
    if found.is_none() {
        errors.push(Error::unknown_item(name).to_string());
    }

    // every unit of an unstackable item becomes its own slot
    if let (Some(current), Some(n)) = (&stack, amount.count()) {
        if !current.item.stackable && n > MAX_UNSTACKABLE_COUNT {
            errors.push(
                Error::invalid_amount(format!(
                    "at most {MAX_UNSTACKABLE_COUNT} {} per item",
                    current.item.name
                ))
                .to_string(),
            );
            if let Some(block) = amount_block.and_then(|i| code_blocks.get_mut(i)) {
                block.kind = CodeBlockKind::Invalid;
            }
        }
    }

    if let Some(meta) = &item.meta {
        let mut meta_ok = true;
        for entry in &meta.entries {
            let value = entry.value.as_ref().map(meta_value_text);
            let Some(current) = &stack else {
                break;
            };
            match current.modify_meta(&entry.key.text, value.as_deref()) {
                Ok(modified) => stack = Some(modified),
                Err(err) => {
                    meta_ok = false;
                    errors.push(err.to_string());
                }
            }
        }
        code_blocks.push(CodeBlock::new(
            meta.span,
            if meta_ok {
                CodeBlockKind::Meta
            } else {
                CodeBlockKind::Invalid
            },
        ));
    }

    match stack {
        Some(stack) if errors.is_empty() => Ok(ItemStackArg::new(stack, amount)),
        _ => Err(errors.join("; ")),
    }
}

fn meta_value_text(value: &AstMetaValue) -> String {
    match value {
        AstMetaValue::Int(n) => n.value.to_string(),
        AstMetaValue::Word(w) => w.text.clone(),
    }
}

fn command_block(verb: &AstLiteral) -> CodeBlock {
    CodeBlock::new(verb.span, CodeBlockKind::Command)
}

fn keyword_only(verb: &AstLiteral, action: CommandAction) -> Command {
    Command::new(action, vec![command_block(verb)])
}

fn item_list(
    list: &AstItemList,
    search: &dyn ItemSearch,
    allow_all: bool,
) -> (Vec<ItemStackArg>, Vec<CodeBlock>, Vec<String>) {
    let mut code_blocks = vec![command_block(&list.verb)];
    let (args, errors) = parse_ast_items(&list.items, search, allow_all, &mut code_blocks);
    (args, code_blocks, errors)
}

/// `initialize <items*>`
#[must_use]
pub fn parse_ast_command_initialize(list: &AstItemList, search: &dyn ItemSearch) -> Command {
    let (args, code_blocks, errors) = item_list(list, search, false);
    Command::new(CommandAction::Initialize(args), code_blocks).with_parse_errors(errors)
}

/// `get|add|pickup <items+>`
#[must_use]
pub fn parse_ast_command_get(list: &AstItemList, search: &dyn ItemSearch) -> Command {
    let (args, code_blocks, errors) = item_list(list, search, false);
    Command::new(CommandAction::Get(args), code_blocks).with_parse_errors(errors)
}

/// `remove|drop|sell <items+>`
#[must_use]
pub fn parse_ast_command_remove(list: &AstItemList, search: &dyn ItemSearch) -> Command {
    let mode = match list.verb.text.to_ascii_lowercase().as_str() {
        "drop" => RemoveMode::Drop,
        "sell" => RemoveMode::Sell,
        _ => RemoveMode::Remove,
    };
    let (items, code_blocks, errors) = item_list(list, search, true);
    Command::new(CommandAction::Remove { items, mode }, code_blocks).with_parse_errors(errors)
}

/// `eat <items+>`
#[must_use]
pub fn parse_ast_command_eat(list: &AstItemList, search: &dyn ItemSearch) -> Command {
    let (args, code_blocks, errors) = item_list(list, search, true);
    Command::new(CommandAction::Eat(args), code_blocks).with_parse_errors(errors)
}

/// `equip <item>` and `unequip <item>`
#[must_use]
pub fn parse_ast_command_equip(
    list: &AstItemList,
    search: &dyn ItemSearch,
    equip: bool,
) -> Command {
    let (mut args, code_blocks, errors) = item_list(list, search, false);
    match args.pop() {
        Some(arg) if errors.is_empty() && args.is_empty() => {
            let action = if equip {
                CommandAction::Equip(arg)
            } else {
                CommandAction::Unequip(arg)
            };
            Command::new(action, code_blocks)
        }
        _ if errors.is_empty() => Command::error(
            CmdErr::Parse,
            code_blocks,
            vec![format!("{} takes exactly one item", list.verb.text)],
        ),
        _ => Command::error(CmdErr::Parse, code_blocks, errors),
    }
}

/// `break <n> slots`
#[must_use]
pub fn parse_ast_command_break_slots(ast: &AstBreakSlots) -> Command {
    Command::new(
        CommandAction::BreakSlots(ast.amount.value),
        vec![
            command_block(&ast.verb),
            CodeBlock::new(ast.amount.span, CodeBlockKind::Number),
            CodeBlock::new(ast.slots.span, CodeBlockKind::Keyword),
        ],
    )
}

/// `set life <n> slot <k>`
#[must_use]
pub fn parse_ast_command_set_life(ast: &AstSetLife) -> Command {
    let code_blocks = vec![
        command_block(&ast.verb),
        CodeBlock::new(ast.life_keyword.span, CodeBlockKind::Keyword),
        CodeBlock::new(ast.life.span, CodeBlockKind::Number),
        CodeBlock::new(ast.slot_keyword.span, CodeBlockKind::Keyword),
        CodeBlock::new(ast.slot.span, CodeBlockKind::Number),
    ];
    match usize::try_from(ast.slot.value) {
        Ok(slot) => Command::new(
            CommandAction::SetLife {
                life: ast.life.value,
                slot,
            },
            code_blocks,
        ),
        Err(_) => Command::error(
            CmdErr::Parse,
            code_blocks,
            vec![format!("slot {} is not addressable", ast.slot.value)],
        ),
    }
}
