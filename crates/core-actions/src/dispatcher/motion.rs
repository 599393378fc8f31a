//! Indent-relative motion sub-dispatch.
//!
//! Every motion either moves the cursor and announces the landing line, or
//! leaves the cursor untouched and announces why no target exists. The
//! sibling scan itself lives in `core_text::indent`; this module supplies
//! the target indent for each motion kind.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;
use core_text::indent::{Direction, find_sibling_at_indent, indent_level, is_blank};

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    match kind {
        MotionKind::NextSibling => sibling_motion(
            state,
            Direction::Forward,
            "No next line with same indentation",
        ),
        MotionKind::PrevSibling => sibling_motion(
            state,
            Direction::Backward,
            "No previous line with same indentation",
        ),
        MotionKind::StepOut => step_out(state),
        MotionKind::StepIn => step_in(state),
    }
}

fn moved(state: &mut EditorState, target: usize) -> DispatchResult {
    state.active_line = target;
    DispatchResult::status(format!("Moved to line {}", target + 1))
}

fn sibling_motion(
    state: &mut EditorState,
    direction: Direction,
    miss: &'static str,
) -> DispatchResult {
    let target_indent = indent_level(state.active_line_text());
    let target =
        find_sibling_at_indent(state.buffer().lines(), state.active_line, target_indent, direction);
    match target {
        Some(idx) => moved(state, idx),
        None => DispatchResult::status(miss),
    }
}

/// Move to the enclosing block's own level: find the parent indent (nearest
/// earlier shallower non-blank line), then the nearest earlier line at
/// exactly that indent. The parent header itself qualifies, so this usually
/// lands on it.
fn step_out(state: &mut EditorState) -> DispatchResult {
    let current = indent_level(state.active_line_text());
    if current == 0 {
        return DispatchResult::status("Already at root level");
    }
    let target = {
        let lines = state.buffer().lines();
        let parent_indent = (0..state.active_line)
            .rev()
            .map(|i| lines[i].as_str())
            .filter(|l| !is_blank(l))
            .map(indent_level)
            .find(|&indent| indent < current);
        parent_indent.and_then(|indent| {
            find_sibling_at_indent(lines, state.active_line, indent, Direction::Backward)
        })
    };
    match target {
        Some(idx) => moved(state, idx),
        None => DispatchResult::status("No parent level found"),
    }
}

/// Move to the first line of the nearest contained deeper block. Equal-indent
/// siblings are scanned past; only a strictly shallower line closes the
/// current block and ends the search.
fn step_in(state: &mut EditorState) -> DispatchResult {
    let current = indent_level(state.active_line_text());
    let target = state
        .buffer()
        .lines()
        .iter()
        .enumerate()
        .skip(state.active_line + 1)
        .filter(|(_, line)| !is_blank(line))
        .map(|(i, line)| (i, indent_level(line)))
        .take_while(|&(_, indent)| indent >= current)
        .find(|&(_, indent)| indent > current)
        .map(|(i, _)| i);
    match target {
        Some(idx) => moved(state, idx),
        None => DispatchResult::status("No child level found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use pretty_assertions::assert_eq;

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(Buffer::from_str("t", &lines.join("\n")))
    }

    #[test]
    fn next_sibling_skips_deeper_block() {
        let mut s = state(&["if x:", "    y = 1", "z = 2"]);
        let r = handle_motion(MotionKind::NextSibling, &mut s);
        assert_eq!(r.status, "Moved to line 3");
        assert_eq!(s.active_line, 2);
    }

    #[test]
    fn next_sibling_miss_leaves_cursor() {
        let mut s = state(&["only = 1"]);
        let r = handle_motion(MotionKind::NextSibling, &mut s);
        assert_eq!(r.status, "No next line with same indentation");
        assert_eq!(s.active_line, 0);
    }

    #[test]
    fn prev_sibling_within_block() {
        let mut s = state(&["def f():", "    a = 1", "    b = 2"]);
        s.active_line = 2;
        let r = handle_motion(MotionKind::PrevSibling, &mut s);
        assert_eq!(r.status, "Moved to line 2");
        assert_eq!(s.active_line, 1);
    }

    #[test]
    fn prev_sibling_miss_at_block_start() {
        let mut s = state(&["def f():", "    a = 1"]);
        s.active_line = 1;
        let r = handle_motion(MotionKind::PrevSibling, &mut s);
        assert_eq!(r.status, "No previous line with same indentation");
        assert_eq!(s.active_line, 1);
    }

    #[test]
    fn step_out_lands_on_block_header() {
        let mut s = state(&["def f():", "    x = 1", "    return x"]);
        s.active_line = 2;
        let r = handle_motion(MotionKind::StepOut, &mut s);
        assert_eq!(r.status, "Moved to line 1");
        assert_eq!(s.active_line, 0);
    }

    #[test]
    fn step_out_at_root_reports_root() {
        let mut s = state(&["x = 1", "y = 2"]);
        s.active_line = 1;
        let r = handle_motion(MotionKind::StepOut, &mut s);
        assert_eq!(r.status, "Already at root level");
        assert_eq!(s.active_line, 1);
    }

    #[test]
    fn step_out_from_nested_block_goes_one_level() {
        let mut s = state(&["def f():", "    if x:", "        y = 1"]);
        s.active_line = 2;
        handle_motion(MotionKind::StepOut, &mut s);
        assert_eq!(s.active_line, 1);
    }

    #[test]
    fn step_in_enters_first_child() {
        let mut s = state(&["def f():", "", "    x = 1"]);
        let r = handle_motion(MotionKind::StepIn, &mut s);
        assert_eq!(r.status, "Moved to line 3");
        assert_eq!(s.active_line, 2);
    }

    #[test]
    fn step_in_scans_past_equal_indent_siblings() {
        let mut s = state(&["x = 1", "if a:", "    y = 1"]);
        let r = handle_motion(MotionKind::StepIn, &mut s);
        assert_eq!(r.status, "Moved to line 3");
        assert_eq!(s.active_line, 2);
    }

    #[test]
    fn step_in_blocked_by_shallower_line() {
        let mut s = state(&["    a = 1", "b = 2", "    c = 3"]);
        let r = handle_motion(MotionKind::StepIn, &mut s);
        assert_eq!(r.status, "No child level found");
        assert_eq!(s.active_line, 0);
    }

    #[test]
    fn step_in_then_out_round_trips() {
        let mut s = state(&["def f():", "    x = 1", "    return x", "", "print(f())"]);
        handle_motion(MotionKind::StepIn, &mut s);
        assert_eq!(s.active_line, 1);
        handle_motion(MotionKind::StepOut, &mut s);
        assert_eq!(s.active_line, 0);
    }
}
