//! Jump sub-dispatch: session creation and match cycling.
//!
//! A jump scans every line with the mode's predicate, creates a fresh
//! session from the matches, and moves to the first one. Zero matches leave
//! any previous session untouched. `jn`/`jp` only ever operate on the most
//! recent session.

use super::DispatchResult;
use core_state::{EditorState, SearchMode, SearchSession};

pub(crate) fn handle_jump(mode: SearchMode, term: &str, state: &mut EditorState) -> DispatchResult {
    let term = term.trim().trim_matches('"');
    if term.is_empty() {
        return DispatchResult::status(match mode {
            SearchMode::Function => "Usage: jump func <name>",
            SearchMode::Comment => "Usage: jump com <text>",
            SearchMode::Any => "Usage: jump <text>",
        });
    }
    let matches: Vec<usize> = state
        .buffer()
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| matches_mode(line, mode, term))
        .map(|(i, _)| i)
        .collect();
    tracing::debug!(target: "actions.search", mode = mode.describe(), term, count = matches.len(), "jump");
    if matches.is_empty() {
        return DispatchResult::status(match mode {
            SearchMode::Function => format!("Function '{term}' not found"),
            SearchMode::Comment => format!("Comment '{term}' not found"),
            SearchMode::Any => format!("'{term}' not found"),
        });
    }
    let session = SearchSession::new(mode, term.to_string(), matches);
    let first = session.current();
    let count = session.match_count();
    state.search = Some(session);
    state.active_line = first;
    let line = first + 1;
    DispatchResult::status(match mode {
        SearchMode::Function => {
            format!("Jumped to function '{term}' at line {line} (1 of {count} matches)")
        }
        SearchMode::Comment => {
            format!("Jumped to comment '{term}' at line {line} (1 of {count} matches)")
        }
        SearchMode::Any => format!("Jumped to '{term}' at line {line} (1 of {count} matches)"),
    })
}

fn matches_mode(line: &str, mode: SearchMode, term: &str) -> bool {
    match mode {
        SearchMode::Function => line.contains(&format!("def {term}")),
        SearchMode::Comment => line.contains('#') && line.contains(term),
        SearchMode::Any => line.contains(term),
    }
}

pub(crate) fn handle_search_step(delta: isize, state: &mut EditorState) -> DispatchResult {
    let Some(session) = state.search.as_mut() else {
        return DispatchResult::status("No active search - use jump first");
    };
    let target = session.advance(delta);
    let position = session.position();
    let count = session.match_count();
    if !state.set_active_line(target) {
        // The buffer shrank since the session was built.
        return DispatchResult::status("Search match is out of date");
    }
    DispatchResult::status(format!(
        "Match {position} of {count}: line {}",
        target + 1
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use pretty_assertions::assert_eq;

    const SRC: &str = "def fib(n):\n    # base case\n    if n <= 1:\n        return n\n    return fib(n - 1) + fib(n - 2)\n\nprint(fib(10))";

    fn state() -> EditorState {
        EditorState::new(Buffer::from_str("t", SRC))
    }

    #[test]
    fn function_jump_moves_to_def_line() {
        let mut s = state();
        let r = handle_jump(SearchMode::Function, "fib", &mut s);
        assert_eq!(s.active_line, 0);
        assert_eq!(r.status, "Jumped to function 'fib' at line 1 (1 of 1 matches)");
    }

    #[test]
    fn quoted_term_is_unwrapped() {
        let mut s = state();
        handle_jump(SearchMode::Function, "\"fib\"", &mut s);
        assert_eq!(s.active_line, 0);
        assert_eq!(s.search.as_ref().map(|ss| ss.term.as_str()), Some("fib"));
    }

    #[test]
    fn comment_jump_requires_hash() {
        let mut s = state();
        let r = handle_jump(SearchMode::Comment, "base", &mut s);
        assert_eq!(s.active_line, 1);
        assert!(r.status.starts_with("Jumped to comment 'base'"));
    }

    #[test]
    fn zero_matches_creates_no_session() {
        let mut s = state();
        let r = handle_jump(SearchMode::Function, "nope", &mut s);
        assert_eq!(r.status, "Function 'nope' not found");
        assert!(s.search.is_none());
        assert_eq!(s.active_line, 0);
    }

    #[test]
    fn empty_term_is_usage_not_search() {
        let mut s = state();
        let r = handle_jump(SearchMode::Any, "  ", &mut s);
        assert_eq!(r.status, "Usage: jump <text>");
        assert!(s.search.is_none());
    }

    #[test]
    fn step_without_session_reports_no_search() {
        let mut s = state();
        let r = handle_search_step(1, &mut s);
        assert_eq!(r.status, "No active search - use jump first");
    }

    #[test]
    fn cycling_wraps_and_returns_to_first() {
        let mut s = state();
        handle_jump(SearchMode::Any, "fib", &mut s);
        let first = s.active_line;
        let count = s.search.as_ref().unwrap().match_count();
        assert!(count > 1);
        for _ in 0..count {
            handle_search_step(1, &mut s);
        }
        assert_eq!(s.active_line, first);
    }

    #[test]
    fn step_reports_position_and_line() {
        let mut s = state();
        handle_jump(SearchMode::Any, "return", &mut s);
        let r = handle_search_step(1, &mut s);
        assert_eq!(r.status, "Match 2 of 2: line 5");
        assert_eq!(s.active_line, 4);
    }
}
