//! Scanner for Chroma markup.
//!
//! Converts input text into a flat stream of tokens.

use std::ops::Range;

/// The kind of a markup token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`
    TagOpen,
    /// `>`
    TagClose,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `/`
    Slash,
    /// `,`
    Comma,
    /// A run of letters/digits, or any other single character.
    Identifier,
}

/// A token produced by the scanner.
///
/// `start` and `end` are byte offsets into the scanned source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme: &'a str,
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(lexeme: &'a str, kind: TokenKind, start: usize) -> Self {
        Self {
            lexeme,
            kind,
            start,
            end: start + lexeme.len(),
        }
    }

    /// A token is whitespace iff its first character is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.lexeme.chars().next().is_some_and(char::is_whitespace)
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Scanner for Chroma markup.
///
/// # Examples
///
/// ```
/// use chroma::parser::{Scanner, TokenKind};
///
/// let kinds: Vec<_> = Scanner::new("<red>hi").map(|token| token.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::TagOpen, TokenKind::Identifier, TokenKind::TagClose, TokenKind::Identifier]
/// );
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Greedily consume the rest of a letter/digit run.
    fn consume_identifier(&mut self) {
        while self.peek().is_some_and(char::is_alphanumeric) {
            self.advance();
        }
    }

    fn token(&self, start: usize, kind: TokenKind) -> Token<'a> {
        Token::new(&self.input[start..self.pos], kind, start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let c = self.advance()?;

        let kind = match c {
            '<' => TokenKind::TagOpen,
            '>' => TokenKind::TagClose,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '/' => TokenKind::Slash,
            ',' => TokenKind::Comma,
            c if c.is_alphanumeric() => {
                self.consume_identifier();
                TokenKind::Identifier
            }
            _ => TokenKind::Identifier,
        };

        Some(self.token(start, kind))
    }
}

/// Scan a whole source into a token list.
pub fn scan(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Scanner::new(source).collect();
    log::trace!("chroma: scanned {} tokens from {} bytes", tokens.len(), source.len());
    tokens
}
