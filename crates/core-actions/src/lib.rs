//! Actions and their dispatch.
//!
//! Every user intention, whether it arrived as a keyboard shortcut or as a
//! typed console command, becomes one `Action`. The dispatcher applies the
//! action to `EditorState` and returns a `DispatchResult` carrying the status
//! text to announce. Parsing (`command_parser`) and key translation
//! (`key_translator`) are pure; only `dispatcher` mutates state.

use core_state::SearchMode;
use std::path::PathBuf;

pub mod command_parser;
pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use command_parser::{CommandParser, CommandResult};
pub use dispatcher::{DispatchResult, dispatch};

/// Indent-relative cursor movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// Next line at the same indentation within the block.
    NextSibling,
    /// Previous line at the same indentation within the block.
    PrevSibling,
    /// Up one indentation level, to the enclosing block's own level.
    StepOut,
    /// Down one indentation level, to the first child line.
    StepIn,
}

/// Structural line insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    NewLineAfter,
    NewLineBefore,
}

/// What to read aloud from the current cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    Line,
    Block,
    Function,
}

/// A fully resolved user intention, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    /// Start a new search session and move to its first match.
    Jump { mode: SearchMode, term: String },
    SearchNext,
    SearchPrev,
    Read(ReadKind),
    /// Send the buffer to the execution sandbox.
    Run,
    OutputNext,
    OutputPrev,
    /// Persist the buffer; `None` uses the configured default filename.
    Save(Option<String>),
    /// Replace the buffer from a file; `None` is a missing-argument request.
    Load(Option<PathBuf>),
    /// Clear the status line back to the ready prompt.
    Clear,
    Quit,
}
