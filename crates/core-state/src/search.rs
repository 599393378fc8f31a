//! Search session state: the remembered match set from the most recent jump.

/// What kind of line a jump matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Lines containing `def <term>`.
    Function,
    /// Lines containing a `#` and the term.
    Comment,
    /// Plain substring containment.
    Any,
}

impl SearchMode {
    pub fn describe(&self) -> &'static str {
        match self {
            SearchMode::Function => "function",
            SearchMode::Comment => "comment",
            SearchMode::Any => "text",
        }
    }
}

/// The match list and position from the most recent jump command.
///
/// Sessions are ephemeral: every new jump replaces the previous session
/// entirely. `next`/`prev` wrap modulo the match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub mode: SearchMode,
    pub term: String,
    matches: Vec<usize>,
    cursor: usize,
}

impl SearchSession {
    /// Callers must only construct sessions with at least one match; a jump
    /// with zero matches reports "no matches" and creates no session.
    pub fn new(mode: SearchMode, term: String, matches: Vec<usize>) -> Self {
        debug_assert!(!matches.is_empty());
        Self {
            mode,
            term,
            matches,
            cursor: 0,
        }
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Line index of the current match.
    pub fn current(&self) -> usize {
        self.matches[self.cursor]
    }

    /// 1-based position of the current match within the match list.
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Advance circularly and return the new match's line index.
    pub fn advance(&mut self, delta: isize) -> usize {
        let len = self.matches.len() as isize;
        self.cursor = ((self.cursor as isize + delta).rem_euclid(len)) as usize;
        self.current()
    }
}
