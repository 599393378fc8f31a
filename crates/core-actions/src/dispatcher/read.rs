//! Read-out sub-dispatch: announce the line, block, or function under the
//! cursor. Spans come from the flat-line locators so read-outs keep working
//! on structurally broken buffers. Line numbers are reported 1-based.

use super::DispatchResult;
use crate::ReadKind;
use core_parse::locate::{block_span, enclosing_function_span};
use core_state::EditorState;

pub(crate) fn handle_read(kind: ReadKind, state: &EditorState) -> DispatchResult {
    match kind {
        ReadKind::Line => DispatchResult::status(format!(
            "Line {}: {}",
            state.active_line + 1,
            state.active_line_text()
        )),
        ReadKind::Block => {
            let span = block_span(state.buffer().lines(), state.active_line);
            DispatchResult::status(format!(
                "Reading block (lines {}-{})",
                span.start + 1,
                span.end + 1
            ))
        }
        ReadKind::Function => {
            match enclosing_function_span(state.buffer().lines(), state.active_line) {
                Some(span) => DispatchResult::status(format!(
                    "Reading function (lines {}-{})",
                    span.start + 1,
                    span.end + 1
                )),
                None => DispatchResult::status("Not in a function"),
            }
        }
    }
}
