//! Free-text command parsing.
//!
//! Converts one console line into a `CommandResult`. Pure classification:
//! no state is touched here, so the same parser backs both the full-screen
//! console and a single-line command bar. Actions are executed later by the
//! dispatcher.
//!
//! Tokens are case-sensitive. Commands that take an argument consume the
//! remainder of the raw line after the recognized prefix, so search terms
//! and filenames may contain spaces.

use crate::{Action, EditKind, MotionKind, ReadKind};
use core_state::SearchMode;
use std::path::PathBuf;

/// Outcome of parsing one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Help text to display verbatim.
    Help(String),
    /// A syntax-level problem; the text is the full message.
    Error(String),
    /// A recognized command, ready for the dispatcher.
    Action(Action),
}

/// Per-command detail text, keyed by canonical name.
const COMMAND_HELP: &[(&str, &str)] = &[
    ("next", "next (n, down, d) - move to the next line at the same indentation"),
    ("prev", "prev (p, up, u) - move to the previous line at the same indentation"),
    ("out", "out (o, leave, left) - move up one indentation level"),
    ("in", "in (i, right) - move down one indentation level"),
    ("newline", "newline after|before (nl a, nl b) - insert a blank line next to the current line"),
    ("jump", "jump <text> (j) - jump to a line containing text; jump func <name> (jf), jump com <text> (jc)"),
    ("jn", "jn - move to the next search match"),
    ("jp", "jp - move to the previous search match"),
    ("read", "read [line|block|func] (r, r l, r b, r f) - read the current line, block, or function"),
    ("run", "run - run the program in the sandbox"),
    ("on", "on - read the next program output line"),
    ("op", "op - read the previous program output line"),
    ("save", "save [name] (s) - save the buffer to a file"),
    ("load", "load <file> (l) - replace the buffer with a file's contents"),
    ("clear", "clear - clear the status line"),
    ("quit", "quit (q) - exit the editor"),
];

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> CommandResult {
        let s = raw.trim();
        if s.is_empty() {
            return CommandResult::Error("Unknown command: ".to_string());
        }
        if s == "?" {
            return CommandResult::Help(summary());
        }
        if let Some(topic) = s.strip_prefix('?') {
            return CommandResult::Help(detail(topic.trim()));
        }
        let (head, rest) = match s.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (s, ""),
        };
        // Commands that take no argument reject trailing text so "next foo"
        // surfaces as unknown instead of silently moving the cursor.
        let bare = |action: Action| -> CommandResult {
            if rest.is_empty() {
                CommandResult::Action(action)
            } else {
                unknown(s)
            }
        };
        match head {
            "next" | "n" | "down" | "d" => bare(Action::Motion(MotionKind::NextSibling)),
            "prev" | "p" | "up" | "u" => bare(Action::Motion(MotionKind::PrevSibling)),
            "out" | "o" | "leave" | "left" => bare(Action::Motion(MotionKind::StepOut)),
            "in" | "i" | "right" => bare(Action::Motion(MotionKind::StepIn)),
            "newline" | "nl" => match rest {
                "after" | "a" => CommandResult::Action(Action::Edit(EditKind::NewLineAfter)),
                "before" | "b" => CommandResult::Action(Action::Edit(EditKind::NewLineBefore)),
                _ => unknown(s),
            },
            "jump" | "j" => parse_jump(rest),
            "jf" => jump(SearchMode::Function, rest),
            "jc" => jump(SearchMode::Comment, rest),
            "jn" => bare(Action::SearchNext),
            "jp" => bare(Action::SearchPrev),
            "read" | "r" => match rest {
                "" | "line" | "l" => CommandResult::Action(Action::Read(ReadKind::Line)),
                "block" | "b" => CommandResult::Action(Action::Read(ReadKind::Block)),
                "func" | "f" => CommandResult::Action(Action::Read(ReadKind::Function)),
                _ => unknown(s),
            },
            "run" => bare(Action::Run),
            "on" => bare(Action::OutputNext),
            "op" => bare(Action::OutputPrev),
            "save" | "s" => CommandResult::Action(Action::Save(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "load" | "l" => CommandResult::Action(Action::Load(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "clear" => bare(Action::Clear),
            "quit" | "q" | "exit" => bare(Action::Quit),
            _ => unknown(s),
        }
    }
}

/// `jump`'s argument starts with an optional mode keyword; everything after
/// it is the search term.
fn parse_jump(rest: &str) -> CommandResult {
    if let Some(term) = strip_keyword(rest, &["func", "f"]) {
        return jump(SearchMode::Function, term);
    }
    if let Some(term) = strip_keyword(rest, &["com", "c"]) {
        return jump(SearchMode::Comment, term);
    }
    jump(SearchMode::Any, rest)
}

fn strip_keyword<'a>(rest: &'a str, keywords: &[&str]) -> Option<&'a str> {
    for kw in keywords {
        if rest == *kw {
            return Some("");
        }
        if let Some(tail) = rest.strip_prefix(kw)
            && tail.starts_with(char::is_whitespace)
        {
            return Some(tail.trim_start());
        }
    }
    None
}

fn jump(mode: SearchMode, term: &str) -> CommandResult {
    CommandResult::Action(Action::Jump {
        mode,
        term: term.trim().trim_matches('"').to_string(),
    })
}

fn unknown(text: &str) -> CommandResult {
    CommandResult::Error(format!("Unknown command: {text}"))
}

fn summary() -> String {
    let mut text = String::from("Available commands:\n");
    for (_, line) in COMMAND_HELP {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("? <command> - detail for one command");
    text
}

/// Help lookup keys on the first word, so multi-word spellings like
/// `? read block` and `? newline after` resolve to their command's entry.
fn detail(topic: &str) -> String {
    let key = topic.split_whitespace().next().unwrap_or("");
    COMMAND_HELP
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, line)| line.to_string())
        .unwrap_or_else(|| format!("No help for '{topic}'"))
}
