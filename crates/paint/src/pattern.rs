//! Repeating per-character color patterns.

use ansi::{ColorObject, escape};

use crate::painter::Painter;

/// What happens when a pattern runs out of colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetMode {
    /// Start over from the first color.
    #[default]
    FromBeginning,
    /// Walk the colors in reverse order, then forward again.
    Revert,
}

/// A color applied to `length` consecutive characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternColor {
    pub color: ColorObject,
    pub length: usize,
}

impl PatternColor {
    pub fn new(color: ColorObject, length: usize) -> Self {
        Self { color, length }
    }
}

/// A sequence of colors cycled over the characters of a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPattern {
    pub colors: Vec<PatternColor>,
    /// Characters copied without consuming the pattern. Defaults to a space.
    pub ignore_chars: Vec<char>,
    pub reset_mode: ResetMode,
}

impl ColorPattern {
    pub fn new(colors: impl IntoIterator<Item = PatternColor>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            ignore_chars: vec![' '],
            reset_mode: ResetMode::default(),
        }
    }

    /// Every color painting `length` characters.
    pub fn uniform(colors: impl IntoIterator<Item = ColorObject>, length: usize) -> Self {
        Self::new(colors.into_iter().map(|color| PatternColor::new(color, length)))
    }

    pub fn with_ignore_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.ignore_chars = chars.into_iter().collect();
        self
    }

    pub fn with_reset_mode(mut self, reset_mode: ResetMode) -> Self {
        self.reset_mode = reset_mode;
        self
    }
}

/// Paints characters by cycling through a [`ColorPattern`].
///
/// ```
/// use ansi::value;
/// use paint::{ColorPattern, PatternPainter, Painter};
///
/// let mut painter = PatternPainter::new(ColorPattern::uniform([value::FG_RED, value::FG_BLUE], 1));
/// assert_eq!(painter.paint("ab"), "\x1b[31ma\x1b[34mb\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPainter {
    pub pattern: ColorPattern,
}

impl PatternPainter {
    pub fn new(pattern: ColorPattern) -> Self {
        Self { pattern }
    }
}

impl Painter for PatternPainter {
    fn paint(&mut self, source: &str) -> String {
        let mut colors: Vec<PatternColor> = self
            .pattern
            .colors
            .iter()
            .copied()
            .filter(|entry| entry.length > 0)
            .collect();

        if colors.is_empty() {
            return source.to_string();
        }

        let mut out = String::new();
        let mut index = 0;
        let mut painted = 0;

        for ch in source.chars() {
            if self.pattern.ignore_chars.contains(&ch) {
                out.push(ch);
                continue;
            }

            if index == colors.len() {
                if self.pattern.reset_mode == ResetMode::Revert {
                    colors.reverse();
                }
                index = 0;
            }

            let entry = colors[index];
            out.push_str(&entry.color.sequence());
            out.push(ch);

            painted += 1;
            if painted >= entry.length {
                painted = 0;
                index += 1;
            }
        }

        out.push_str(escape::RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi::value;

    fn visible(styled: &str) -> String {
        styled.replace('\x1b', "ESC")
    }

    #[test]
    fn lengths_and_ignored_chars() {
        let pattern = ColorPattern::new([
            PatternColor::new(value::FG_RED, 2),
            PatternColor::new(value::FG_GREEN, 1),
        ]);
        insta::assert_snapshot!(
            visible(&PatternPainter::new(pattern).paint("ab cd")),
            @"ESC[31maESC[31mb ESC[32mcESC[31mdESC[0m"
        );
    }

    #[test]
    fn revert_mode() {
        let pattern = ColorPattern::uniform([value::FG_RED, value::FG_GREEN, value::FG_BLUE], 1)
            .with_reset_mode(ResetMode::Revert);
        insta::assert_snapshot!(
            visible(&PatternPainter::new(pattern).paint("abcdef")),
            @"ESC[31maESC[32mbESC[34mcESC[34mdESC[32meESC[31mfESC[0m"
        );
    }

    #[test]
    fn empty_pattern_leaves_text() {
        let mut painter = PatternPainter::new(ColorPattern::new([PatternColor::new(value::FG_RED, 0)]));
        assert_eq!(painter.paint("abc"), "abc");
    }

    #[test]
    fn custom_ignore_chars() {
        let pattern = ColorPattern::uniform([value::BOLD], 1).with_ignore_chars(['-']);
        assert_eq!(
            PatternPainter::new(pattern).paint("a-"),
            "\x1b[1ma-\x1b[0m"
        );
    }
}
