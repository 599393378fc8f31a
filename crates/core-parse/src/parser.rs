//! Whole-buffer structural parse (line-walking variant).
//!
//! Each non-blank line is classified by its leading token: a comment, a
//! compound block header (keyword + header expression + trailing `:`), or a
//! simple statement. A compound's children are the contiguous strictly
//! deeper-indented lines below it. Trailing `#`-comments are split off the
//! code portion with a same-line quote-balance scan, not full tokenization.

use crate::{Keyword, ParseDiagnostic, Parsed, Statement, is_valid_continuation};
use core_text::indent::{indent_level, is_blank};
use core_text::split_lines;

/// Parse the full buffer text into a top-level statement sequence.
pub fn parse(source: &str) -> Parsed {
    let lines = split_lines(source);
    let starts = line_start_offsets(&lines);
    let mut diagnostics = Vec::new();
    let mut idx = 0;
    let statements = parse_block(&lines, &starts, &mut idx, 0, &mut diagnostics);
    if !diagnostics.is_empty() {
        tracing::debug!(target: "parse", count = diagnostics.len(), "parse_diagnostics");
    }
    Parsed {
        statements,
        diagnostics,
    }
}

/// Byte offset of the start of each line within the joined text.
fn line_start_offsets(lines: &[String]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(lines.len());
    let mut offset = 0;
    for line in lines {
        starts.push(offset);
        offset += line.len() + 1; // '+1' for the joining newline
    }
    starts
}

fn parse_block(
    lines: &[String],
    starts: &[usize],
    idx: &mut usize,
    indent_floor: usize,
    diags: &mut Vec<ParseDiagnostic>,
) -> Vec<Statement> {
    let mut out = Vec::new();
    // Keyword of the immediately preceding sibling, for continuation checks.
    let mut prev_keyword: Option<Keyword> = None;

    while *idx < lines.len() {
        let line = &lines[*idx];
        if is_blank(line) {
            *idx += 1;
            continue;
        }
        let indent = indent_level(line);
        if indent < indent_floor {
            break;
        }

        let line_no = *idx;
        let span_start = starts[line_no];
        let line_end = span_start + line.len();
        let (code, _trailing) = split_trailing_comment(line);
        let trimmed = code.trim();

        if trimmed.is_empty() {
            out.push(Statement::Comment {
                raw: line.trim().to_string(),
                span: span_start..line_end,
            });
            prev_keyword = None;
            *idx += 1;
            continue;
        }

        let token = leading_token(trimmed);
        if let Some(kw) = Keyword::from_token(token)
            && trimmed.ends_with(':')
        {
            if !is_valid_continuation(prev_keyword, kw) {
                diags.push(ParseDiagnostic {
                    line: line_no,
                    message: format!(
                        "'{}' does not follow a matching block header",
                        kw.as_str()
                    ),
                });
            }
            let header = trimmed[token.len()..]
                .trim()
                .strip_suffix(':')
                .unwrap_or("")
                .trim()
                .to_string();
            *idx += 1;
            let children = parse_block(lines, starts, idx, indent + 1, diags);
            let span_end = children.last().map(|c| c.span().end).unwrap_or(line_end);
            out.push(Statement::Compound {
                keyword: kw,
                header,
                children,
                span: span_start..span_end,
            });
            prev_keyword = Some(kw);
            continue;
        }

        out.push(Statement::Simple {
            raw: trimmed.to_string(),
            span: span_start..line_end,
        });
        prev_keyword = None;
        *idx += 1;
    }
    out
}

/// Split a physical line into its code portion and any trailing comment.
/// The `#` only starts a comment when it sits outside a quoted string; the
/// scan tracks single/double quotes and backslash escapes on this line only.
pub fn split_trailing_comment(line: &str) -> (&str, Option<&str>) {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_single || in_double => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => {
                return (&line[..i], Some(&line[i..]));
            }
            _ => {}
        }
    }
    (line, None)
}

/// The leading identifier-shaped token of a trimmed code line.
fn leading_token(trimmed: &str) -> &str {
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_alphanumeric() && *c != '_')
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}
