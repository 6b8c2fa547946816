use std::fmt;

use crate::kind::Kind;

/// Source location of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column.
    pub column: usize,
    /// Absolute byte offset into the input.
    pub offset: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `*`
    Star,
    /// Backslash command naming a structural unit (`\section`).
    Keyword(Kind),
    /// Any other command (`\emph`) or a bare identifier run.
    Identifier,
    /// Any other single character, including a lone backslash and
    /// the space that stands in for a collapsed whitespace run.
    Other(char),
}

impl TokenKind {
    /// Kind of a single-character token.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        match ch {
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            '{' => Self::OpenBrace,
            '}' => Self::CloseBrace,
            '[' => Self::OpenBracket,
            ']' => Self::CloseBracket,
            '*' => Self::Star,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => f.pad("open-paren"),
            Self::CloseParen => f.pad("close-paren"),
            Self::OpenBrace => f.pad("open-brace"),
            Self::CloseBrace => f.pad("close-brace"),
            Self::OpenBracket => f.pad("open-bracket"),
            Self::CloseBracket => f.pad("close-bracket"),
            Self::Star => f.pad("star"),
            Self::Keyword(kind) => f.pad(&format!("keyword:{kind}")),
            Self::Identifier => f.pad("identifier"),
            Self::Other(_) => f.pad("other"),
        }
    }
}

/// A single token with its kind, text, and source location.
///
/// Command tokens keep their leading backslash in `text`;
/// single-character tokens carry that character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Structural kind if this token is a keyword.
    #[must_use]
    pub const fn keyword(&self) -> Option<Kind> {
        match self.kind {
            TokenKind::Keyword(kind) => Some(kind),
            _ => None,
        }
    }
}

/// The input stream is exhausted.
///
/// Not a fault: every parsing step returns it to stop the pass
/// cleanly, discarding whatever unit was in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("end of input")]
pub struct EndOfInput;
