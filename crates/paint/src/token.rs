//! Tokens of the rule painter and multi-token targets.
//!
//! Tokens live in a [`TokenStream`] and refer to their neighbors by index.
//! Rules and conditions see a token through a [`TokenRef`], which can walk
//! to the previous/next token and to the nearest non-whitespace neighbors.

use std::fmt;

/// A token with its neighbor links.
///
/// `start`/`end` are byte offsets into the source; `char_start`/`char_end`
/// are character offsets, used to place a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme: &'a str,
    pub start: usize,
    pub end: usize,
    pub char_start: usize,
    pub char_end: usize,
    pub(crate) next: Option<usize>,
    pub(crate) previous: Option<usize>,
    pub(crate) next_non_whitespace: Option<usize>,
    pub(crate) previous_non_whitespace: Option<usize>,
}

impl Token<'_> {
    /// A token is whitespace iff its first character is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.lexeme.chars().next().is_some_and(char::is_whitespace)
    }
}

/// The tokens of one painted source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TokenRef<'_>> {
        (index < self.tokens.len()).then_some(TokenRef {
            tokens: &self.tokens,
            index,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenRef<'_>> {
        (0..self.tokens.len()).map(|index| TokenRef {
            tokens: &self.tokens,
            index,
        })
    }

    pub fn lexemes(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|token| token.lexeme).collect()
    }
}

/// A token seen from within its stream.
#[derive(Clone, Copy)]
pub struct TokenRef<'t> {
    tokens: &'t [Token<'t>],
    index: usize,
}

impl<'t> TokenRef<'t> {
    fn at(&self, index: Option<usize>) -> Option<TokenRef<'t>> {
        index.map(|index| TokenRef {
            tokens: self.tokens,
            index,
        })
    }

    pub fn token(&self) -> &'t Token<'t> {
        &self.tokens[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn lexeme(&self) -> &'t str {
        self.token().lexeme
    }

    pub fn start(&self) -> usize {
        self.token().start
    }

    pub fn end(&self) -> usize {
        self.token().end
    }

    pub fn is_whitespace(&self) -> bool {
        self.token().is_whitespace()
    }

    pub fn next(&self) -> Option<TokenRef<'t>> {
        self.at(self.token().next)
    }

    pub fn previous(&self) -> Option<TokenRef<'t>> {
        self.at(self.token().previous)
    }

    pub fn next_non_whitespace(&self) -> Option<TokenRef<'t>> {
        self.at(self.token().next_non_whitespace)
    }

    pub fn previous_non_whitespace(&self) -> Option<TokenRef<'t>> {
        self.at(self.token().previous_non_whitespace)
    }
}

impl fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRef")
            .field("index", &self.index)
            .field("lexeme", &self.lexeme())
            .finish()
    }
}

/// An ordered sequence of lexemes to match starting at a token.
///
/// An empty lexeme matches any token. When whitespace is ignored (the
/// default), whitespace tokens never match and matching steps over them.
///
/// # Examples
///
/// ```
/// use paint::{TokenTarget, scan};
///
/// let tokens = scan("a = = b");
/// let target = TokenTarget::new(["=", "="]);
/// assert_eq!(target.match_at(tokens.get(2).unwrap()), Some(3));
/// assert!(!target.with_ignore_whitespace(false).matches(tokens.get(2).unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTarget {
    lexemes: Vec<String>,
    ignore_whitespace: bool,
}

impl TokenTarget {
    pub fn new<I, S>(lexemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lexemes: lexemes.into_iter().map(Into::into).collect(),
            ignore_whitespace: true,
        }
    }

    /// A target of a single lexeme.
    pub fn single(lexeme: impl Into<String>) -> Self {
        Self::new([lexeme])
    }

    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn lexemes(&self) -> &[String] {
        &self.lexemes
    }

    pub fn ignores_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Match starting at `token`.
    ///
    /// Returns the number of tokens the match spans, counting any whitespace
    /// tokens stepped over. An empty target never matches.
    pub fn match_at(&self, token: TokenRef<'_>) -> Option<usize> {
        let first = token.index();
        let mut last = first;
        let mut current = Some(token);

        if self.lexemes.is_empty() {
            return None;
        }

        for expected in &self.lexemes {
            let candidate = current?;

            if self.ignore_whitespace && candidate.is_whitespace() {
                return None;
            }

            if !expected.is_empty() && candidate.lexeme() != expected {
                return None;
            }

            last = candidate.index();
            current = if self.ignore_whitespace {
                candidate.next_non_whitespace()
            } else {
                candidate.next()
            };
        }

        Some(last - first + 1)
    }

    pub fn matches(&self, token: TokenRef<'_>) -> bool {
        self.match_at(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn neighbor_links() {
        let tokens = scan("a + b");
        let plus = tokens.get(2).unwrap();

        assert_eq!(plus.previous().unwrap().lexeme(), " ");
        assert_eq!(plus.next().unwrap().lexeme(), " ");
        assert_eq!(plus.previous_non_whitespace().unwrap().lexeme(), "a");
        assert_eq!(plus.next_non_whitespace().unwrap().lexeme(), "b");
    }

    #[test]
    fn whitespace_run_links_forward() {
        let tokens = scan("x  \ty");
        for index in 0..4 {
            let token = tokens.get(index).unwrap();
            assert_eq!(token.next_non_whitespace().unwrap().lexeme(), "y");
        }
        assert!(tokens.get(4).unwrap().next_non_whitespace().is_none());
    }

    #[test]
    fn edges_have_no_neighbors() {
        let tokens = scan("ab");
        let only = tokens.get(0).unwrap();
        assert!(only.previous().is_none());
        assert!(only.next().is_none());
        assert!(only.previous_non_whitespace().is_none());
        assert!(tokens.get(1).is_none());
    }

    #[test]
    fn single_target() {
        let tokens = scan("x==y");
        let target = TokenTarget::single("=");
        assert!(!target.matches(tokens.get(0).unwrap()));
        assert_eq!(target.match_at(tokens.get(1).unwrap()), Some(1));
    }

    #[test]
    fn sequence_target() {
        let tokens = scan("x==y");
        let target = TokenTarget::new(["=", "="]);
        assert_eq!(target.match_at(tokens.get(1).unwrap()), Some(2));
        assert_eq!(target.match_at(tokens.get(2).unwrap()), None);
    }

    #[test]
    fn wildcard_lexeme() {
        let tokens = scan("f(x)");
        let target = TokenTarget::new(["f", "(", ""]);
        assert_eq!(target.match_at(tokens.get(0).unwrap()), Some(3));
    }

    #[test]
    fn whitespace_target_when_not_ignored() {
        let tokens = scan("a b");
        let space = TokenTarget::single(" ");
        assert!(!space.matches(tokens.get(1).unwrap()));
        assert!(space.with_ignore_whitespace(false).matches(tokens.get(1).unwrap()));
    }

    #[test]
    fn empty_target_never_matches() {
        let tokens = scan("a");
        let target = TokenTarget::new(Vec::<String>::new());
        assert!(!target.matches(tokens.get(0).unwrap()));
    }
}
