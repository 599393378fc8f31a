//! Editor session state: buffer, active line, derived tree, search session,
//! and program output history.
//!
//! One `EditorState` owns everything a command can touch, and every handler
//! receives it by `&mut` — there is no ambient/global session state. The flat
//! line buffer is authoritative; the statement tree is derived and rebuilt
//! wholesale after any buffer mutation (never patched, never written back).

use core_parse::Parsed;
use core_text::Buffer;
use std::path::PathBuf;

pub mod output;
pub mod search;

pub use output::OutputHistory;
pub use search::{SearchMode, SearchSession};

/// Central mutable session state threaded through the dispatcher.
#[derive(Debug)]
pub struct EditorState {
    buffer: Buffer,
    /// Cursor into the buffer, always in `[0, line_count - 1]`.
    pub active_line: usize,
    /// Statement tree derived from the buffer text.
    tree: Parsed,
    /// Most recent jump session; replaced wholesale by every new jump.
    pub search: Option<SearchSession>,
    /// Output of the current/last run.
    pub output: OutputHistory,
    /// True between sending `run` and receiving the terminal event.
    pub run_in_flight: bool,
    /// True while the running program is blocked on an input request.
    pub awaiting_input: bool,
    /// Path the buffer was loaded from, if any.
    pub file_name: Option<PathBuf>,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        let tree = core_parse::parse(&buffer.to_text());
        Self {
            buffer,
            active_line: 0,
            tree,
            search: None,
            output: OutputHistory::default(),
            run_in_flight: false,
            awaiting_input: false,
            file_name: None,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Statement tree for the current buffer contents.
    pub fn tree(&self) -> &Parsed {
        &self.tree
    }

    /// Mutate the buffer through `f`, then rebuild the derived tree and
    /// re-clamp the cursor. All edits go through here so buffer and tree can
    /// never drift apart.
    pub fn edit_buffer<R>(&mut self, f: impl FnOnce(&mut Buffer) -> R) -> R {
        let result = f(&mut self.buffer);
        self.reparse();
        self.clamp_active_line();
        result
    }

    /// Replace the whole buffer (file load), resetting cursor and search.
    pub fn replace_buffer(&mut self, content: &str, file_name: Option<PathBuf>) {
        self.buffer.replace_contents(content);
        self.active_line = 0;
        self.search = None;
        self.file_name = file_name;
        self.reparse();
        tracing::info!(
            target: "state",
            lines = self.buffer.line_count(),
            diagnostics = self.tree.diagnostics.len(),
            "buffer_loaded"
        );
    }

    fn reparse(&mut self) {
        self.tree = core_parse::parse(&self.buffer.to_text());
    }

    /// Move the cursor, refusing out-of-range targets. Returns true when the
    /// cursor actually moved to `target`.
    pub fn set_active_line(&mut self, target: usize) -> bool {
        if target >= self.buffer.line_count() {
            self.clamp_active_line();
            return false;
        }
        self.active_line = target;
        true
    }

    pub fn clamp_active_line(&mut self) {
        let max = self.buffer.line_count().saturating_sub(1);
        if self.active_line > max {
            self.active_line = max;
        }
    }

    /// Text of the line under the cursor.
    pub fn active_line_text(&self) -> &str {
        self.buffer.line(self.active_line).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(text: &str) -> EditorState {
        EditorState::new(Buffer::from_str("t", text))
    }

    #[test]
    fn new_state_parses_tree() {
        let s = state("def f():\n    return 1");
        assert_eq!(s.tree().statements.len(), 1);
        assert_eq!(s.active_line, 0);
    }

    #[test]
    fn set_active_line_rejects_out_of_range() {
        let mut s = state("a\nb\nc");
        assert!(s.set_active_line(2));
        assert!(!s.set_active_line(3));
        assert_eq!(s.active_line, 2);
    }

    #[test]
    fn edit_buffer_reparses_and_clamps() {
        let mut s = state("a\nb\nc");
        s.active_line = 2;
        s.edit_buffer(|b| b.replace_contents("x = 1"));
        assert_eq!(s.active_line, 0);
        assert_eq!(s.tree().statements.len(), 1);
    }

    #[test]
    fn replace_buffer_resets_cursor_and_search() {
        let mut s = state("a\nb");
        s.active_line = 1;
        s.search = Some(SearchSession::new(
            SearchMode::Any,
            "a".into(),
            vec![0],
        ));
        s.replace_buffer("def g():\n    pass", None);
        assert_eq!(s.active_line, 0);
        assert!(s.search.is_none());
        assert_eq!(s.tree().statements.len(), 1);
    }
}
