//! Structure builder for Chroma markup.
//!
//! Consumes scanned tokens into literal text and format tags.
//!
//! Tag grammar:
//!
//! ```text
//! tag   := '<' '/' any                        reset
//!        | '<' slot* '>'                      up to three slots: fg bg mode
//! slot  := identifier | rgb
//! rgb   := '(' channel ((',' | ' ')* channel)* ')'   1-3 channels, 0-255
//! ```
//!
//! Whitespace inside a tag separates slots and is otherwise discarded;
//! whitespace outside a tag is literal text.

use std::fmt;

use ansi::{ColorElement, ColorLayer, ColorObject, TextMode};

use crate::error::MarkupError;
use crate::highlight::HighlightTarget;

use super::notation::{self, DEFAULT_NOTATION};
use super::scanner::{Token, TokenKind};

/// The value of a single tag slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation<'a> {
    /// A name or number: `red`, `231`, `bold`, or the default `_`.
    Identifier(&'a str),
    /// An RGB triple: `(255, 0, 23)`.
    Rgb(u8, u8, u8),
}

impl<'a> Notation<'a> {
    /// The sentinel notation for a slot that was not given.
    pub const DEFAULT: Self = Notation::Identifier(DEFAULT_NOTATION);

    pub fn is_default(&self) -> bool {
        *self == Notation::Identifier(DEFAULT_NOTATION)
    }

    /// Resolve to a color element on `layer`.
    pub fn to_color_element(&self, layer: ColorLayer) -> Option<ColorElement> {
        match *self {
            Notation::Identifier(text) => notation::to_color_element(text, layer),
            Notation::Rgb(red, green, blue) => Some(ColorElement::rgb((red, green, blue), layer)),
        }
    }

    /// Resolve to a text mode.
    pub fn to_mode(&self) -> Option<TextMode> {
        match *self {
            Notation::Identifier(text) => notation::to_mode(text),
            Notation::Rgb(..) => None,
        }
    }
}

impl fmt::Display for Notation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Identifier(text) => f.write_str(text),
            Notation::Rgb(red, green, blue) => write!(f, "{red} {green} {blue}"),
        }
    }
}

/// A format tag: `<green red underline>` or the reset tag `</>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatTag<'a> {
    pub foreground: Notation<'a>,
    pub background: Notation<'a>,
    pub mode: Notation<'a>,
    pub reset: bool,
}

impl<'a> FormatTag<'a> {
    pub fn new(foreground: Notation<'a>, background: Notation<'a>, mode: Notation<'a>) -> Self {
        Self {
            foreground,
            background,
            mode,
            reset: false,
        }
    }

    /// The `</>` tag.
    pub fn reset() -> Self {
        Self {
            foreground: Notation::DEFAULT,
            background: Notation::DEFAULT,
            mode: Notation::DEFAULT,
            reset: true,
        }
    }

    /// Convert this tag to the color object it applies.
    ///
    /// Default slots stay unset. Slots that do not resolve degrade to unset
    /// instead of failing. A foreground or background slot naming a text mode
    /// supplies the mode when the mode slot itself is unset, so `<bold>`
    /// means bold.
    pub fn to_color_object(&self) -> ColorObject {
        if self.reset {
            return ColorObject::reset();
        }

        let (foreground, fg_mode) = resolve_color_slot(&self.foreground, ColorLayer::Foreground);
        let (background, bg_mode) = resolve_color_slot(&self.background, ColorLayer::Background);

        let mode = if self.mode.is_default() {
            None
        } else {
            self.mode.to_mode()
        };

        ColorObject::new(foreground, background, mode.or(fg_mode).or(bg_mode))
    }
}

fn resolve_color_slot(
    slot: &Notation<'_>,
    layer: ColorLayer,
) -> (Option<ColorElement>, Option<TextMode>) {
    if slot.is_default() {
        return (None, None);
    }

    match slot.to_mode() {
        Some(mode) => (None, Some(mode)),
        None => (slot.to_color_element(layer), None),
    }
}

/// A parsed markup structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structure<'a> {
    /// Literal text outside any tag.
    Identifier(&'a str),
    /// A format tag.
    FormatTag(FormatTag<'a>),
}

/// Consumes a token list into structures.
pub struct StructureBuilder<'t, 'a> {
    tokens: &'t [Token<'a>],
    index: usize,
}

impl<'t, 'a> StructureBuilder<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Build the structures for the whole token list.
    pub fn build(mut self) -> Result<Vec<Structure<'a>>, MarkupError> {
        let mut structures = Vec::new();

        while let Some(current) = self.advance() {
            match current.kind {
                TokenKind::TagOpen => {
                    let tag = self.build_tag(current)?;
                    structures.push(Structure::FormatTag(tag));
                }
                _ => structures.push(Structure::Identifier(current.lexeme)),
            }
        }

        Ok(structures)
    }

    fn build_tag(&mut self, open: Token<'a>) -> Result<FormatTag<'a>, MarkupError> {
        let mut slots: Vec<Notation<'a>> = Vec::with_capacity(3);

        loop {
            let current = self.advance().ok_or_else(|| self.unterminated(&open))?;

            if current.is_whitespace() {
                continue;
            }

            let slot = match current.kind {
                TokenKind::TagClose => break,
                TokenKind::Identifier => Notation::Identifier(current.lexeme),
                TokenKind::LParen => self.build_rgb(current)?,
                TokenKind::Slash => {
                    self.advance().ok_or_else(|| self.unterminated(&open))?;
                    return Ok(FormatTag::reset());
                }
                TokenKind::TagOpen | TokenKind::RParen | TokenKind::Comma => continue,
            };

            if slots.len() < 3 {
                slots.push(slot);
            } else {
                log::debug!("chroma: ignoring extra tag slot `{}` at {}", slot, current.start);
            }
        }

        slots.resize(3, Notation::DEFAULT);

        Ok(FormatTag::new(slots[0], slots[1], slots[2]))
    }

    fn build_rgb(&mut self, open: Token<'a>) -> Result<Notation<'a>, MarkupError> {
        let close = self.tokens[self.index..]
            .iter()
            .find(|token| token.kind == TokenKind::RParen)
            .copied()
            .ok_or_else(|| self.unterminated(&open))?;

        let target = HighlightTarget::between(&open, &close);
        let mut channels = Vec::with_capacity(3);

        while let Some(current) = self.advance() {
            match current.kind {
                TokenKind::RParen => break,
                TokenKind::Comma => {}
                _ if current.is_whitespace() => {}
                _ => channels.push(current),
            }
        }

        if channels.is_empty() || channels.len() > 3 {
            return Err(MarkupError::RgbChannelCount {
                count: channels.len(),
                target,
            });
        }

        let mut values = [0u8; 3];
        for (value, token) in values.iter_mut().zip(&channels) {
            *value = token
                .lexeme
                .parse::<u8>()
                .map_err(|_| MarkupError::InvalidRgbChannel {
                    lexeme: token.lexeme.to_string(),
                    target: target.clone(),
                })?;
        }

        Ok(Notation::Rgb(values[0], values[1], values[2]))
    }

    fn unterminated(&self, open: &Token<'a>) -> MarkupError {
        let last = self.tokens.last().unwrap_or(open);
        MarkupError::UnterminatedTag {
            target: HighlightTarget::between(open, last),
        }
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.index).copied()?;
        self.index += 1;
        Some(token)
    }
}

/// Build structures from a token list.
pub fn build_structures<'a>(tokens: &[Token<'a>]) -> Result<Vec<Structure<'a>>, MarkupError> {
    StructureBuilder::new(tokens).build()
}
