//! Program output history: append-only lines from one run plus a review
//! cursor, independent of source navigation.

/// Output lines emitted by the current (or last finished) run.
///
/// The cursor starts unset; the first `next`/`prev` lands on the first entry.
/// Stepping clamps at the ends rather than wrapping.
#[derive(Debug, Clone, Default)]
pub struct OutputHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl OutputHistory {
    /// Append one output line in arrival order.
    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Clear history and unset the cursor; called at run start.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Step the review cursor by `delta`, clamped to `[0, len - 1]`.
    /// Returns `(index, line)` for the new position, or `None` when the
    /// history is empty.
    pub fn step(&mut self, delta: isize) -> Option<(usize, &str)> {
        if self.entries.is_empty() {
            return None;
        }
        let max = self.entries.len() as isize - 1;
        let next = match self.cursor {
            Some(c) => (c as isize + delta).clamp(0, max),
            // First step lands on the nearest end in the travel direction.
            None => {
                if delta < 0 {
                    max
                } else {
                    0
                }
            }
        };
        let idx = next as usize;
        self.cursor = Some(idx);
        Some((idx, self.entries[idx].as_str()))
    }
}
