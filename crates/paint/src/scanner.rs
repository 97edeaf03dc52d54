//! Tokenizer for painted text.
//!
//! Splits text into runs of letters and digits plus single characters for
//! everything else, whitespace included. Neighbor links are filled in as
//! tokens are produced.

use crate::token::{Token, TokenStream};

struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    last_non_whitespace: Option<usize>,
    char_offset: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            last_non_whitespace: None,
            char_offset: 0,
        }
    }

    fn run(mut self) -> TokenStream<'a> {
        let mut chars = self.source.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            let mut end = start + ch.len_utf8();
            let mut char_len = 1;

            if ch.is_alphanumeric() {
                while let Some(&(offset, next)) = chars.peek() {
                    if !next.is_alphanumeric() {
                        break;
                    }
                    end = offset + next.len_utf8();
                    char_len += 1;
                    chars.next();
                }
            }

            self.push(start, end, char_len);
        }

        TokenStream::new(self.tokens)
    }

    fn push(&mut self, start: usize, end: usize, char_len: usize) {
        let index = self.tokens.len();
        let char_start = self.char_offset;
        self.char_offset += char_len;

        let token = Token {
            lexeme: &self.source[start..end],
            start,
            end,
            char_start,
            char_end: self.char_offset,
            next: None,
            previous: index.checked_sub(1),
            next_non_whitespace: None,
            previous_non_whitespace: self.last_non_whitespace,
        };

        if let Some(previous) = token.previous {
            self.tokens[previous].next = Some(index);
        }

        if !token.is_whitespace() {
            // Link the last non-whitespace token and any whitespace after it.
            let from = self.last_non_whitespace.unwrap_or(0);
            for earlier in &mut self.tokens[from..] {
                earlier.next_non_whitespace = Some(index);
            }
            self.last_non_whitespace = Some(index);
        }

        self.tokens.push(token);
    }
}

/// Tokenize `source` for painting.
///
/// # Examples
///
/// ```
/// let tokens = paint::scan("let x1 = 2;");
/// assert_eq!(tokens.lexemes(), ["let", " ", "x1", " ", "=", " ", "2", ";"]);
/// ```
pub fn scan(source: &str) -> TokenStream<'_> {
    let tokens = Scanner::new(source).run();
    log::trace!("scanned {} paint tokens", tokens.len());
    tokens
}
