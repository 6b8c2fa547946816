use crate::kind::Kind;
use crate::token::{EndOfInput, Span, Token, TokenKind};

/// Whether `byte` may appear in a command or identifier name.
///
/// Every byte of a multi-byte UTF-8 sequence qualifies, so names
/// never split a character.
#[must_use]
pub const fn is_ident_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || byte >= 0x80
        || matches!(byte, b'$' | b'_' | b'#' | b'-' | b'.' | b':')
}

/// Tokenize a whole document with whitespace collapsing off.
///
/// Useful for inspecting what the parser sees; the parser itself
/// pulls tokens one at a time.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut tokens = Vec::new();
    while let Ok(token) = lexer.next_token(false) {
        tokens.push(token);
    }
    tokens
}

/// Pull-based tokenizer over an in-memory document.
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer, skipping a leading UTF-8 byte-order mark.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        let start = if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
            3
        } else {
            0
        };
        Self {
            input,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    /// Read the next token.
    ///
    /// With `collapse_whitespace`, a run of skipped whitespace that
    /// is followed by something other than a comment or the end of
    /// input comes back as a single `Other(' ')` token first. A
    /// comment counts as whitespace.
    ///
    /// # Errors
    ///
    /// Returns `EndOfInput` once the input is exhausted.
    pub fn next_token(&mut self, collapse_whitespace: bool) -> Result<Token, EndOfInput> {
        let mut skipped = 0usize;

        loop {
            while let Some(b' ' | b'\t' | b'\n') = self.peek() {
                self.advance();
                skipped += 1;
            }

            let span = self.span();
            let Some(ch) = self.peek() else {
                return Err(EndOfInput);
            };

            if collapse_whitespace && skipped > 0 && ch != b'%' {
                return Ok(Token {
                    kind: TokenKind::Other(' '),
                    text: " ".to_string(),
                    span,
                });
            }

            match ch {
                b'%' => {
                    self.skip_comment();
                    skipped += 1;
                }
                b'\\' => {
                    self.advance();
                    return Ok(self.read_command(span));
                }
                _ if is_ident_char(ch) => {
                    let text = self.read_ident();
                    return Ok(Token {
                        kind: TokenKind::Identifier,
                        text,
                        span,
                    });
                }
                _ => {
                    self.advance();
                    let ch = char::from(ch);
                    return Ok(Token {
                        kind: TokenKind::from_char(ch),
                        text: ch.to_string(),
                        span,
                    });
                }
            }
        }
    }

    /// Current location.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
            offset: self.pos,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(&byte) = self.input.get(self.pos) {
            if byte == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    /// Skip through the end of the line, newline included.
    fn skip_comment(&mut self) {
        while let Some(byte) = self.peek() {
            self.advance();
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Read after a backslash. Only an alphabetic character starts a
    /// command; otherwise the backslash stands alone and the next
    /// character is left for the following read.
    fn read_command(&mut self, span: Span) -> Token {
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                let name = self.read_ident();
                let kind = Kind::from_keyword(&name).map_or(TokenKind::Identifier, TokenKind::Keyword);
                Token {
                    kind,
                    text: format!("\\{name}"),
                    span,
                }
            }
            _ => Token {
                kind: TokenKind::Other('\\'),
                text: "\\".to_string(),
                span,
            },
        }
    }

    fn read_ident(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.advance();
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn ident_chars() {
        for byte in b"aZ09$_#-.:" {
            assert!(is_ident_char(*byte), "{}", char::from(*byte));
        }
        for byte in b" {}[]()*\\%,;!" {
            assert!(!is_ident_char(*byte), "{}", char::from(*byte));
        }
        assert!(is_ident_char(0xC3));
    }

    #[test]
    fn keyword_and_identifier_commands() {
        let tokens = tokenize(r"\section \emph");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Kind::Section));
        assert_eq!(tokens[0].text, r"\section");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, r"\emph");
    }

    #[test]
    fn command_name_stops_at_non_ident() {
        let tokens = tokenize(r"\label{fig:a-1}");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Kind::Label));
        assert_eq!(tokens[2].text, "fig:a-1");
    }

    #[test]
    fn lone_backslash() {
        let tokens = tokenize(r"\\ \{");
        assert_eq!(tokens[0].kind, TokenKind::Other('\\'));
        assert_eq!(tokens[1].kind, TokenKind::Other('\\'));
        assert_eq!(tokens[2].kind, TokenKind::Other('\\'));
        assert_eq!(tokens[3].kind, TokenKind::OpenBrace);
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("( ) { } [ ] * ,"),
            vec![
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::Star,
                TokenKind::Other(','),
            ]
        );
    }

    #[test]
    fn comments_produce_nothing() {
        let tokens = tokenize("a % b c\nd");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "d"]);
    }

    #[test]
    fn collapsed_whitespace() {
        let mut lexer = Lexer::new(b"a \n\t b");
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("a".to_string()));
        let space = lexer.next_token(true).expect("space");
        assert_eq!(space.kind, TokenKind::Other(' '));
        assert_eq!(space.span.line, 2);
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("b".to_string()));
        assert_eq!(lexer.next_token(true), Err(EndOfInput));
    }

    #[test]
    fn no_space_before_end() {
        let mut lexer = Lexer::new(b"b  \n");
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("b".to_string()));
        assert_eq!(lexer.next_token(true), Err(EndOfInput));
    }

    #[test]
    fn comment_counts_as_whitespace() {
        let mut lexer = Lexer::new(b"a%x\nb");
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("a".to_string()));
        assert_eq!(lexer.next_token(true).map(|t| t.kind), Ok(TokenKind::Other(' ')));
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("b".to_string()));
    }

    #[test]
    fn comment_without_collapse_yields_nothing() {
        let mut lexer = Lexer::new(b"a%x\nb");
        assert_eq!(lexer.next_token(false).map(|t| t.text), Ok("a".to_string()));
        assert_eq!(lexer.next_token(false).map(|t| t.text), Ok("b".to_string()));
    }

    #[test]
    fn whitespace_count_survives_comment() {
        let mut lexer = Lexer::new(b"a %x\nb");
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("a".to_string()));
        assert_eq!(lexer.next_token(true).map(|t| t.kind), Ok(TokenKind::Other(' ')));
        assert_eq!(lexer.next_token(true).map(|t| t.text), Ok("b".to_string()));
    }

    #[test]
    fn span_tracking() {
        let tokens = tokenize("ab\n  \\part");
        assert_eq!(tokens[0].span, Span { line: 1, column: 1, offset: 0 });
        assert_eq!(tokens[1].span, Span { line: 2, column: 3, offset: 5 });
    }

    #[test]
    fn bom_stripping() {
        let tokens = tokenize("\u{FEFF}\\chapter");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Kind::Chapter));
        assert_eq!(tokens[0].span.offset, 3);
    }

    #[test]
    fn utf8_stays_in_identifiers() {
        let tokens = tokenize("Einführung");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Einführung");
    }
}
