//! Parsing of raw command lines into validated [`Command`]s.
//!
//! The parser splits a line into a command word and an argument string,
//! tokenizes the arguments by prefix, and validates every field through the
//! field types' own predicates. It performs no schedule lookups: index
//! arguments are carried as [`DisplayIndex`] values and resolved only when
//! the command executes.

pub mod tokenizer;

use std::collections::BTreeSet;

use crate::command::{Command, EditEventDescriptor};
use crate::error::ParseError;
use crate::model::{BlockedSlot, Date, DisplayIndex, Event, Location, Name, Remark, Tag, TimeSlot};

use self::tokenizer::{
    ArgumentTokens, Prefix, PREFIX_DATE, PREFIX_LOCATION, PREFIX_NAME, PREFIX_REMARK, PREFIX_TAG,
    PREFIX_TIME_SLOT,
};

const ALL_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_DATE,
    PREFIX_TIME_SLOT,
    PREFIX_LOCATION,
    PREFIX_TAG,
    PREFIX_REMARK,
];

/// Parse one line of user input into a command.
///
/// Blank input and arguments that do not fit the command's grammar fail
/// with [`ParseError::InvalidCommandFormat`]; an unrecognized command word
/// fails with [`ParseError::UnknownCommand`].
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: Command::HELP_USAGE,
        });
    }

    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (input, ""),
    };

    match word {
        "add" => parse_add(args),
        "edit" => parse_edit(args),
        "delete" => parse_delete(args),
        "find" => parse_find(args),
        "findtag" => parse_findtag(args),
        "block" => parse_block(args),
        // Bare-word commands ignore trailing arguments.
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "upcoming" => Ok(Command::Upcoming),
        "next" => Ok(Command::NextEvent),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

fn parse_add(args: &str) -> Result<Command, ParseError> {
    let tokens = ArgumentTokens::tokenize(args, ALL_PREFIXES);
    if !tokens.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: Command::ADD_USAGE,
        });
    }

    let name = Name::new(required(&tokens, PREFIX_NAME, "name")?)?;
    let date = Date::new(required(&tokens, PREFIX_DATE, "date")?)?;
    let time_slot = TimeSlot::parse(required(&tokens, PREFIX_TIME_SLOT, "time slot")?)?;
    let location = Location::new(required(&tokens, PREFIX_LOCATION, "location")?)?;
    let tags = parse_tags(tokens.all_values(PREFIX_TAG))?;
    let remark = Remark::new(tokens.value(PREFIX_REMARK).unwrap_or_default());

    Ok(Command::Add(Event::new(
        name, date, time_slot, location, tags, remark,
    )))
}

fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let tokens = ArgumentTokens::tokenize(args, ALL_PREFIXES);
    if tokens.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: Command::EDIT_USAGE,
        });
    }
    let index = DisplayIndex::parse(tokens.preamble())?;

    let descriptor = EditEventDescriptor {
        name: tokens.value(PREFIX_NAME).map(Name::new).transpose()?,
        date: tokens.value(PREFIX_DATE).map(Date::new).transpose()?,
        time_slot: tokens
            .value(PREFIX_TIME_SLOT)
            .map(TimeSlot::parse)
            .transpose()?,
        location: tokens
            .value(PREFIX_LOCATION)
            .map(Location::new)
            .transpose()?,
        tags: parse_tags_for_edit(&tokens)?,
        remark: tokens.value(PREFIX_REMARK).map(Remark::new),
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::InvalidCommandFormat {
            usage: Command::EDIT_USAGE,
        });
    }

    Ok(Command::Edit { index, descriptor })
}

fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let args = args.trim();
    if args.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: Command::DELETE_USAGE,
        });
    }
    Ok(Command::Delete(DisplayIndex::parse(args)?))
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords = keyword_list(args).ok_or(ParseError::InvalidCommandFormat {
        usage: Command::FIND_USAGE,
    })?;
    Ok(Command::Find(keywords))
}

fn parse_findtag(args: &str) -> Result<Command, ParseError> {
    let keywords = keyword_list(args).ok_or(ParseError::InvalidCommandFormat {
        usage: Command::FINDTAG_USAGE,
    })?;
    Ok(Command::FindTag(keywords))
}

fn parse_block(args: &str) -> Result<Command, ParseError> {
    let tokens = ArgumentTokens::tokenize(args, ALL_PREFIXES);
    let date = Date::new(required(&tokens, PREFIX_DATE, "date")?)?;
    let time_slot = TimeSlot::parse(required(&tokens, PREFIX_TIME_SLOT, "time slot")?)?;
    Ok(Command::Block(BlockedSlot::new(date, time_slot)))
}

/// Fetch a mandatory prefix value or fail with the field's name.
fn required<'a>(
    tokens: &'a ArgumentTokens,
    prefix: Prefix,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.value(prefix).ok_or(ParseError::MissingField(field))
}

fn parse_tags(values: Vec<&str>) -> Result<BTreeSet<Tag>, ParseError> {
    values.into_iter().map(Tag::new).collect()
}

/// Tags on an edit: an absent prefix means "keep", a single empty `t/`
/// means "clear all tags", anything else replaces the set.
fn parse_tags_for_edit(tokens: &ArgumentTokens) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    if !tokens.contains(PREFIX_TAG) {
        return Ok(None);
    }
    let values = tokens.all_values(PREFIX_TAG);
    if values == [""] {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(values).map(Some)
}

fn keyword_list(args: &str) -> Option<Vec<String>> {
    let keywords: Vec<String> = args.split_whitespace().map(String::from).collect();
    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

// ============================================================================
// Tests
// ============================================================================
