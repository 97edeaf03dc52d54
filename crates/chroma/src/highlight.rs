//! Highlighting a token span inside a markup source.

use std::ops::Range;

use ansi::ColorObject;
use ansi::escape::RESET;

use crate::parser::Token;

/// The start and end tokens of a highlight, as byte spans of the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightTarget {
    pub from: Range<usize>,
    pub to: Range<usize>,
}

impl HighlightTarget {
    pub fn new(from: Range<usize>, to: Range<usize>) -> Self {
        Self { from, to }
    }

    /// A target spanning `from` through `to`.
    pub fn between(from: &Token<'_>, to: &Token<'_>) -> Self {
        Self::new(from.span(), to.span())
    }

    /// A target covering a single token.
    pub fn token(token: &Token<'_>) -> Self {
        Self::between(token, token)
    }
}

/// Insert a reset after the end of `target` and `color`'s sequence before
/// its start.
///
/// Offsets that fall outside `source` or inside a multi-byte character are
/// skipped.
///
/// # Examples
///
/// ```
/// use chroma::HighlightTarget;
/// use chroma::highlight::highlight;
///
/// let target = HighlightTarget::new(2..3, 3..4);
/// assert_eq!(highlight("ab<>", &target, &ansi::value::FG_RED), "ab\x1b[31m<>\x1b[0m");
/// ```
pub fn highlight(source: &str, target: &HighlightTarget, color: &ColorObject) -> String {
    let mut highlighted = source.to_string();

    if highlighted.is_char_boundary(target.to.end) {
        highlighted.insert_str(target.to.end, RESET);
    }

    if target.from.start <= target.to.end && highlighted.is_char_boundary(target.from.start) {
        highlighted.insert_str(target.from.start, &color.sequence());
    }

    highlighted
}
