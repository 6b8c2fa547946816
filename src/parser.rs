//! Structural tag recognition over the token stream.
//!
//! A single forward pass: every structural keyword hands control to
//! the tag recognizer, which reads the optional `[...]` argument,
//! the optional `*`, and the `{...}` argument, emits at most one tag,
//! and records the unit in the scope state. Running out of input at
//! any point abandons the unit in progress and ends the pass.

use crate::kind::Kind;
use crate::lexer::Lexer;
use crate::options::Options;
use crate::scope::ScopeState;
use crate::tag::{Emitter, TagEntry, TagSink};
use crate::token::{EndOfInput, Token, TokenKind};

/// Extract tags from a document with every kind enabled.
#[must_use]
pub fn extract(input: &str) -> Vec<TagEntry> {
    extract_with(input.as_bytes(), &Options::default())
}

/// Extract tags from a document, possibly not UTF-8.
#[must_use]
pub fn extract_with(input: &[u8], options: &Options) -> Vec<TagEntry> {
    let mut tags = Vec::new();
    parse(input, options, &mut tags);
    tags
}

/// Parse a document and send every tag to `sink`.
pub fn parse<S: TagSink + ?Sized>(input: &[u8], options: &Options, sink: &mut S) {
    let mut scope = ScopeState::new();
    parse_with_scope(input, options, &mut scope, sink);
}

/// Parse a document against caller-owned scope state.
///
/// `scope` is left as the last completed unit set it, which is how
/// the outline of a document can be inspected after the fact. Pass a
/// fresh state for every independent document.
pub fn parse_with_scope<S: TagSink + ?Sized>(
    input: &[u8],
    options: &Options,
    scope: &mut ScopeState,
    sink: &mut S,
) {
    let mut out = Emitter::new(sink, options.kinds);
    // Exhaustion is how every document ends.
    let _ = Parser::new(input).parse_document(scope, &mut out);
}

/// Whether a `[...]` argument names the unit. Labels only skip it.
const fn tags_bracket(kind: Kind) -> bool {
    !matches!(kind, Kind::Label)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    fn parse_document<S: TagSink + ?Sized>(
        &mut self,
        scope: &mut ScopeState,
        out: &mut Emitter<'_, S>,
    ) -> Result<(), EndOfInput> {
        loop {
            let token = self.lexer.next_token(false)?;
            if let Some(kind) = token.keyword() {
                self.parse_tag(&token, kind, tags_bracket(kind), scope, out)?;
            }
        }
    }

    /// Recognize one unit after its keyword.
    ///
    /// Accepted shapes:
    ///   `\keyword{any number of words}`
    ///   `\keyword[short name]{any number of words}`
    ///   `\keyword*[short name]{any number of words}`
    ///
    /// With `tag_bracket`, a `[...]` argument becomes the name and the
    /// unit ends at its `]`. Without it the bracket is skipped and the
    /// braces name the unit.
    fn parse_tag<S: TagSink + ?Sized>(
        &mut self,
        keyword: &Token,
        kind: Kind,
        tag_bracket: bool,
        scope: &mut ScopeState,
        out: &mut Emitter<'_, S>,
    ) -> Result<(), EndOfInput> {
        let mut name = String::new();
        let mut token = self.lexer.next_token(false)?;

        if token.kind == TokenKind::OpenBracket {
            token = self.lexer.next_token(false)?;
            while token.kind != TokenKind::CloseBracket {
                if tag_bracket && token.kind == TokenKind::Identifier {
                    if !name.is_empty() {
                        name.push(' ');
                    }
                    name.push_str(&token.text);
                }
                token = self.lexer.next_token(false)?;
            }
            if tag_bracket {
                Self::finish_tag(keyword, kind, &name, scope, out);
                return Ok(());
            }
            token = self.lexer.next_token(false)?;
        }

        if token.kind == TokenKind::Star {
            token = self.lexer.next_token(false)?;
        }

        if token.kind == TokenKind::OpenBrace {
            name = self.read_brace_body()?;
        }

        Self::finish_tag(keyword, kind, &name, scope, out);
        Ok(())
    }

    /// Read up to and including the `}` matching an already consumed
    /// `{`, returning the reconstructed name.
    fn read_brace_body(&mut self) -> Result<String, EndOfInput> {
        let mut body = BraceBody::new();
        let mut token = self.lexer.next_token(false)?;
        while !body.feed(&token) {
            token = self.lexer.next_token(true)?;
        }
        Ok(body.into_name())
    }

    fn finish_tag<S: TagSink + ?Sized>(
        keyword: &Token,
        kind: Kind,
        name: &str,
        scope: &mut ScopeState,
        out: &mut Emitter<'_, S>,
    ) {
        if !name.is_empty() {
            out.emit(name, kind, keyword.span, scope);
        }
        scope.record(kind, name);
    }
}

/// Name reconstruction inside a `{...}` argument.
///
/// Every token up to the closing brace contributes its text, nested
/// braces included; whitespace arrives already collapsed to single
/// spaces.
#[derive(Debug)]
struct BraceBody {
    depth: usize,
    name: String,
}

impl BraceBody {
    const fn new() -> Self {
        Self {
            depth: 1,
            name: String::new(),
        }
    }

    /// Feed the next token. Returns `true` once the outermost brace
    /// has closed.
    fn feed(&mut self, token: &Token) -> bool {
        match token.kind {
            TokenKind::OpenBrace => self.depth += 1,
            TokenKind::CloseBrace => self.depth -= 1,
            _ => {}
        }
        if self.depth == 0 {
            return true;
        }
        self.name.push_str(&token.text);
        false
    }

    fn into_name(mut self) -> String {
        let len = self
            .name
            .trim_end_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c'])
            .len();
        self.name.truncate(len);
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn body_of(input: &str) -> (bool, String) {
        let mut body = BraceBody::new();
        let closed = tokenize(input).iter().any(|t| body.feed(t));
        (closed, body.into_name())
    }

    #[test]
    fn brace_body_tracks_depth() {
        assert_eq!(body_of("A{b}c}"), (true, "A{b}c".to_string()));
        assert_eq!(body_of("}"), (true, String::new()));
        assert_eq!(body_of("A{b}"), (false, "A{b}".to_string()));
    }

    #[test]
    fn brace_body_strips_trailing_whitespace() {
        let mut body = BraceBody::new();
        for text in ["A", " ", "\r"] {
            body.feed(&Token {
                kind: TokenKind::Other(' '),
                text: text.to_string(),
                span: crate::token::Span::default(),
            });
        }
        assert_eq!(body.into_name(), "A");
    }

    #[test]
    fn label_skips_bracket() {
        assert!(tags_bracket(Kind::Section));
        assert!(tags_bracket(Kind::Include));
        assert!(!tags_bracket(Kind::Label));
    }

    #[test]
    fn simple_section() {
        let tags = extract(r"\section{Intro}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Intro");
        assert_eq!(tags[0].kind, Kind::Section);
        assert_eq!(tags[0].scope, None);
    }

    #[test]
    fn short_name_wins() {
        let tags = extract(r"\section[Short Title]{A Much Longer Title}");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Short Title");
    }

    #[test]
    fn unterminated_unit_leaves_scope_alone() {
        let mut scope = ScopeState::new();
        scope.record(Kind::Section, "Old");
        let mut tags: Vec<TagEntry> = Vec::new();
        parse_with_scope(br"\section{Open", &Options::default(), &mut scope, &mut tags);
        assert!(tags.is_empty());
        assert_eq!(scope.get(Kind::Section), Some("Old"));
    }
}
