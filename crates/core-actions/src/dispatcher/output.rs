//! Output history review sub-dispatch.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_output_step(delta: isize, state: &mut EditorState) -> DispatchResult {
    let len = state.output.len();
    match state.output.step(delta) {
        Some((idx, line)) => DispatchResult::status(format!("{} of {}: {}", idx + 1, len, line)),
        None => DispatchResult::status("No program output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use pretty_assertions::assert_eq;

    fn state_with_output(lines: &[&str]) -> EditorState {
        let mut s = EditorState::new(Buffer::from_str("t", "x = 1"));
        for line in lines {
            s.output.append(*line);
        }
        s
    }

    #[test]
    fn forward_review_clamps_at_end() {
        let mut s = state_with_output(&["a", "b"]);
        assert_eq!(handle_output_step(1, &mut s).status, "1 of 2: a");
        assert_eq!(handle_output_step(1, &mut s).status, "2 of 2: b");
        assert_eq!(handle_output_step(1, &mut s).status, "2 of 2: b");
    }

    #[test]
    fn backward_review_starts_at_last_line() {
        let mut s = state_with_output(&["a", "b", "c"]);
        assert_eq!(handle_output_step(-1, &mut s).status, "3 of 3: c");
        assert_eq!(handle_output_step(-1, &mut s).status, "2 of 3: b");
    }

    #[test]
    fn empty_history_reports_unavailable() {
        let mut s = state_with_output(&[]);
        assert_eq!(handle_output_step(1, &mut s).status, "No program output");
        assert_eq!(handle_output_step(-1, &mut s).status, "No program output");
    }
}
