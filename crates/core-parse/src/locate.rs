//! Block and function location over the flat line slice.
//!
//! These work on raw lines instead of the statement tree so "read block" and
//! "read function" keep answering even when the buffer is mid-edit and the
//! tree is structurally off.

use core_text::indent::{indent_level, is_blank};

/// An inclusive range of line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

/// The contiguous block of lines sharing `lines[active]`'s indentation.
///
/// The scan extends forward through blank and deeper-indented lines; the
/// block ends at the last same-indent line before a shallower non-blank line
/// appears. `start` is always `active` itself.
pub fn block_span(lines: &[String], active: usize) -> LineSpan {
    let target = lines.get(active).map(|l| indent_level(l)).unwrap_or(0);
    let mut end = active;
    for (i, line) in lines.iter().enumerate().skip(active + 1) {
        if is_blank(line) {
            continue;
        }
        let indent = indent_level(line);
        if indent < target {
            break;
        }
        if indent == target {
            end = i;
        }
    }
    LineSpan { start: active, end }
}

/// The span of the function definition enclosing `active`, if any.
///
/// Scans upward for the nearest line introducing a function, then downward
/// while indentation stays strictly deeper than the definition header
/// (skipping blanks).
pub fn enclosing_function_span(lines: &[String], active: usize) -> Option<LineSpan> {
    let start = (0..=active.min(lines.len().saturating_sub(1)))
        .rev()
        .find(|&i| introduces_function(&lines[i]))?;
    let def_indent = indent_level(&lines[start]);
    let mut end = start;
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if is_blank(line) {
            continue;
        }
        if indent_level(line) <= def_indent {
            break;
        }
        end = i;
    }
    Some(LineSpan { start, end })
}

fn introduces_function(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("def ") || trimmed.starts_with("async def ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn block_span_of_function_body() {
        let ls = lines(&["def f():", "    x = 1", "    return x", "", "print(f())"]);
        assert_eq!(block_span(&ls, 1), LineSpan { start: 1, end: 2 });
    }

    #[test]
    fn block_span_extends_through_deeper_lines() {
        let ls = lines(&["a = 1", "if a:", "    b = 2", "c = 3", ""]);
        assert_eq!(block_span(&ls, 0), LineSpan { start: 0, end: 3 });
    }

    #[test]
    fn block_span_single_line() {
        let ls = lines(&["    x = 1", "done = True"]);
        assert_eq!(block_span(&ls, 0), LineSpan { start: 0, end: 0 });
    }

    #[test]
    fn function_span_from_body_line() {
        let ls = lines(&["def f():", "    x = 1", "    return x", "", "print(f())"]);
        assert_eq!(
            enclosing_function_span(&ls, 2),
            Some(LineSpan { start: 0, end: 2 })
        );
    }

    #[test]
    fn function_span_from_header_line() {
        let ls = lines(&["def f():", "    return 1"]);
        assert_eq!(
            enclosing_function_span(&ls, 0),
            Some(LineSpan { start: 0, end: 1 })
        );
    }

    #[test]
    fn no_enclosing_function() {
        let ls = lines(&["x = 1", "print(x)"]);
        assert_eq!(enclosing_function_span(&ls, 1), None);
    }

    #[test]
    fn nested_function_picks_nearest_def() {
        let ls = lines(&[
            "def outer():",
            "    def inner():",
            "        return 1",
            "    return inner()",
        ]);
        assert_eq!(
            enclosing_function_span(&ls, 2),
            Some(LineSpan { start: 1, end: 2 })
        );
    }

    #[test]
    fn async_def_counts_as_function() {
        let ls = lines(&["async def f():", "    await g()"]);
        assert_eq!(
            enclosing_function_span(&ls, 1),
            Some(LineSpan { start: 0, end: 1 })
        );
    }

    #[test]
    fn blank_lines_do_not_end_function_body() {
        let ls = lines(&["def f():", "    a = 1", "", "    b = 2", "c = 3"]);
        assert_eq!(
            enclosing_function_span(&ls, 1),
            Some(LineSpan { start: 0, end: 3 })
        );
    }
}
