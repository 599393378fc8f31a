//! Structural model of an indented Python-like source buffer.
//!
//! The parser derives a statement tree from raw text on every buffer change;
//! the tree is always discarded and rebuilt, never patched in place. Parsing
//! is deliberately permissive: structural anomalies (an `elif` with no `if`,
//! irregular indentation) are recorded as diagnostics while the tree is still
//! produced, so navigation keeps working on half-written programs.

pub mod locate;
mod parser;

pub use parser::{parse, split_trailing_comment};

use std::ops::Range;

/// Block-introducing keywords. Closed vocabulary: anything else that looks
/// like a block header parses as a simple statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    Elif,
    Else,
    For,
    While,
    Def,
    Class,
    With,
    Try,
    Except,
    Finally,
    Match,
    Case,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Def => "def",
            Keyword::Class => "class",
            Keyword::With => "with",
            Keyword::Try => "try",
            Keyword::Except => "except",
            Keyword::Finally => "finally",
            Keyword::Match => "match",
            Keyword::Case => "case",
        }
    }

    /// Resolve a leading token against the keyword table.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "if" => Keyword::If,
            "elif" => Keyword::Elif,
            "else" => Keyword::Else,
            "for" => Keyword::For,
            "while" => Keyword::While,
            "def" => Keyword::Def,
            "class" => Keyword::Class,
            "with" => Keyword::With,
            "try" => Keyword::Try,
            "except" => Keyword::Except,
            "finally" => Keyword::Finally,
            "match" => Keyword::Match,
            "case" => Keyword::Case,
            _ => return None,
        })
    }

    /// Continuation keywords only make sense after specific sibling headers.
    pub fn is_continuation(&self) -> bool {
        !self.valid_parents().is_empty()
    }

    /// The sibling keywords a continuation may legally follow. Empty for
    /// keywords that open a block on their own.
    pub fn valid_parents(&self) -> &'static [Keyword] {
        use Keyword::*;
        match self {
            Elif => &[If, Elif],
            Else => &[If, Elif, For, While, Try, Except],
            Except => &[Try, Except],
            Finally => &[Try, Except, Else],
            Case => &[Match, Case],
            _ => &[],
        }
    }
}

/// One parsed unit of source.
///
/// `span` is the byte range of the statement within the original text; a
/// compound's span runs from its header line through its last child line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Simple {
        raw: String,
        span: Range<usize>,
    },
    Comment {
        raw: String,
        span: Range<usize>,
    },
    Compound {
        keyword: Keyword,
        header: String,
        children: Vec<Statement>,
        span: Range<usize>,
    },
}

impl Statement {
    pub fn span(&self) -> &Range<usize> {
        match self {
            Statement::Simple { span, .. }
            | Statement::Comment { span, .. }
            | Statement::Compound { span, .. } => span,
        }
    }
}

/// A structural anomaly that did not stop the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub line: usize,
    pub message: String,
}

/// Result of a whole-buffer parse: the top-level statement sequence plus any
/// recorded anomalies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub statements: Vec<Statement>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Continuation legality check: may `kw` follow a sibling that parsed as
/// `prev`? Non-continuations are always legal.
pub fn is_valid_continuation(prev: Option<Keyword>, kw: Keyword) -> bool {
    if !kw.is_continuation() {
        return true;
    }
    match prev {
        Some(p) => kw.valid_parents().contains(&p),
        None => false,
    }
}
