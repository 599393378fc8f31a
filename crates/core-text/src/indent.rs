//! Indentation model: pure scans over the flat line slice.
//!
//! Everything structural in the editor reduces to these two questions: how
//! deep is a line, and where is the next line at a given depth inside the
//! same block. Both operate on raw lines rather than the parsed tree so they
//! keep working on partially invalid programs.

/// Scan direction for sibling searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Indentation depth of a line: the count of leading whitespace characters.
///
/// A whitespace-only line reports the depth of that whitespace; an empty line
/// reports 0. Callers that care about blocks must skip blank lines instead of
/// trusting their depth (see `find_sibling_at_indent`).
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True when the line contains nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Find the nearest line in `direction` from `from` whose indent equals
/// `target_indent`, staying inside the current block.
///
/// Blank lines are skipped. The scan terminates with `None` as soon as a
/// non-blank line shallower than `target_indent` appears: that line closes
/// the block, so any equal-indent line beyond it is a different block's
/// sibling, not ours.
pub fn find_sibling_at_indent(
    lines: &[String],
    from: usize,
    target_indent: usize,
    direction: Direction,
) -> Option<usize> {
    let indices: Box<dyn Iterator<Item = usize>> = match direction {
        Direction::Forward => Box::new(from + 1..lines.len()),
        Direction::Backward => Box::new((0..from).rev()),
    };
    for i in indices {
        let line = &lines[i];
        if is_blank(line) {
            continue;
        }
        let indent = indent_level(line);
        if indent < target_indent {
            break;
        }
        if indent == target_indent {
            return Some(i);
        }
    }
    None
}
