//! Line-vector text buffer abstraction.
//!
//! The buffer is the single source of truth for program text. It stores the
//! document as an ordered `Vec<String>` of physical lines; the statement tree
//! (`core-parse`) is always derived from it, never the other way around.
//! Splitting on `'\n'` and joining with `'\n'` round-trip exactly, so the
//! serialized form written to disk is byte-identical to what was loaded.

pub mod indent;

/// A text buffer backed by a vector of physical lines.
///
/// Invariant: the buffer always contains at least one line (an empty document
/// is a single empty line), so an active-line cursor in `[0, line_count())`
/// is always addressable.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    pub name: String,
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Self {
        Self {
            lines: split_lines(content),
            name: name.into(),
        }
    }

    /// Total number of lines in the buffer. Always >= 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The requested line, without any trailing newline.
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// True when the line at `idx` is empty or whitespace-only.
    pub fn is_blank(&self, idx: usize) -> bool {
        self.lines
            .get(idx)
            .map(|l| l.trim().is_empty())
            .unwrap_or(true)
    }

    /// Borrow the full line slice for scan-style callers (indent model,
    /// block locator, search).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert a whole line before index `idx` (`idx == line_count()` appends).
    /// Out-of-range indices are clamped to an append.
    pub fn insert_line(&mut self, idx: usize, text: impl Into<String>) {
        let idx = idx.min(self.lines.len());
        self.lines.insert(idx, text.into());
    }

    /// Replace the text of an existing line. Returns false if `idx` is out of
    /// range (buffer unchanged).
    pub fn replace_line(&mut self, idx: usize, text: impl Into<String>) -> bool {
        match self.lines.get_mut(idx) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Replace the entire contents, e.g. after a file load.
    pub fn replace_contents(&mut self, content: &str) {
        self.lines = split_lines(content);
        tracing::debug!(target: "text", lines = self.lines.len(), "buffer_replaced");
    }

    /// Serialize the buffer back to a single string. Exact inverse of
    /// `from_str` for any input without embedded carriage returns.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Split program text into physical lines. `""` yields one empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Join physical lines back into program text.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
