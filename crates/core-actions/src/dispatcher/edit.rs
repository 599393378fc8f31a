//! Structural line insertion.
//!
//! Both edits insert a blank line carrying synthesized indentation: the
//! active line's own indent, deepened by one tab unit when inserting after a
//! block header (a line whose code portion ends with `:`), so the new line
//! is ready for the body the header expects.
//!
//! `NewLineAfter` moves the cursor onto the new line. `NewLineBefore` keeps
//! the cursor index unchanged, which also means it now addresses the new
//! blank line at that index.

use super::DispatchResult;
use crate::EditKind;
use core_parse::split_trailing_comment;
use core_state::EditorState;
use core_text::indent::indent_level;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    tab_width: usize,
) -> DispatchResult {
    let active = state.active_line;
    match kind {
        EditKind::NewLineAfter => {
            let indent = insertion_indent(state.active_line_text(), tab_width);
            state.edit_buffer(|b| b.insert_line(active + 1, " ".repeat(indent)));
            state.active_line = active + 1;
            DispatchResult::dirty("Created new line after")
        }
        EditKind::NewLineBefore => {
            let indent = indent_level(state.active_line_text());
            state.edit_buffer(|b| b.insert_line(active, " ".repeat(indent)));
            DispatchResult::dirty("Created new line before")
        }
    }
}

/// Indent for a line inserted after `line`: same depth, or one level deeper
/// when `line` opens a block.
///
/// The insertion point is always the physically adjacent index, not the end
/// of the active statement's block. A header line therefore gets a new first
/// body line (hence the extra tab unit) instead of a sibling below its block.
fn insertion_indent(line: &str, tab_width: usize) -> usize {
    let indent = indent_level(line);
    let (code, _comment) = split_trailing_comment(line);
    if code.trim_end().ends_with(':') {
        indent + tab_width
    } else {
        indent
    }
}
