//! The composite color object: foreground, background and text mode.

use std::fmt;
use std::ops::Add;

use crate::color::{Color16, ColorLayer, Rgb, TextMode};
use crate::element::ColorElement;
use crate::escape::{RESET, build_sequence};

/// A foreground, a background and a text mode, each optional.
///
/// Unset fields are left untouched by the emitted sequence, so applying a
/// color object never clobbers state it does not mention.
///
/// # Examples
///
/// ```
/// use ansi::{Color16, ColorObject, TextMode};
///
/// let color = ColorObject::from_color16(Some(Color16::FgRed), None, Some(TextMode::Bold));
/// assert_eq!(color.sequence(), "\x1b[1;31m");
/// assert_eq!(color.paint("hi"), "\x1b[1;31mhi\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorObject {
    pub foreground: Option<ColorElement>,
    pub background: Option<ColorElement>,
    pub mode: Option<TextMode>,
}

impl ColorObject {
    pub fn new(
        foreground: Option<ColorElement>,
        background: Option<ColorElement>,
        mode: Option<TextMode>,
    ) -> Self {
        Self {
            foreground,
            background,
            mode,
        }
    }

    /// A color object with nothing set.
    pub fn none() -> Self {
        Self::default()
    }

    /// The canonical reset object (`fg = Reset`).
    pub fn reset() -> Self {
        Self::from_color16(Some(Color16::Reset), None, None)
    }

    pub fn from_color16(fg: Option<Color16>, bg: Option<Color16>, mode: Option<TextMode>) -> Self {
        Self::new(
            Some(ColorElement::Code16(fg)),
            Some(ColorElement::Code16(bg)),
            mode,
        )
    }

    pub fn from_color256(fg: Option<u8>, bg: Option<u8>, mode: Option<TextMode>) -> Self {
        Self::new(
            Some(ColorElement::Code256 {
                code: fg,
                layer: ColorLayer::Foreground,
            }),
            Some(ColorElement::Code256 {
                code: bg,
                layer: ColorLayer::Background,
            }),
            mode,
        )
    }

    pub fn from_rgb(fg: Option<Rgb>, bg: Option<Rgb>, mode: Option<TextMode>) -> Self {
        Self::new(
            Some(ColorElement::Rgb {
                color: fg.unwrap_or_default(),
                layer: ColorLayer::Foreground,
            }),
            Some(ColorElement::Rgb {
                color: bg.unwrap_or_default(),
                layer: ColorLayer::Background,
            }),
            mode,
        )
    }

    pub fn from_mode(mode: TextMode) -> Self {
        Self::new(None, None, Some(mode))
    }

    /// One foreground 8-bit color object per code in `from..=to`.
    ///
    /// ```
    /// use ansi::ColorObject;
    ///
    /// let ramp = ColorObject::color256_sequence(232, 255);
    /// assert_eq!(ramp.len(), 24);
    /// ```
    pub fn color256_sequence(from: u8, to: u8) -> Vec<ColorObject> {
        (from..=to)
            .map(|code| Self::from_color256(Some(code), None, None))
            .collect()
    }

    /// The foreground element if it carries color data.
    pub fn valid_foreground(&self) -> Option<&ColorElement> {
        self.foreground.as_ref().filter(|element| element.is_valid())
    }

    /// The background element if it carries color data.
    pub fn valid_background(&self) -> Option<&ColorElement> {
        self.background.as_ref().filter(|element| element.is_valid())
    }

    /// Returns true if applying this object would change nothing.
    pub fn is_empty(&self) -> bool {
        self.valid_foreground().is_none()
            && self.valid_background().is_none()
            && self.mode.is_none()
    }

    /// Merge two color objects; `self` has the higher priority.
    ///
    /// Each field of `self` is kept when it is valid, otherwise the field of
    /// `other` is used.
    pub fn merge(&self, other: &ColorObject) -> ColorObject {
        let pick = |left: Option<ColorElement>, right: Option<ColorElement>| {
            if left.is_some_and(|element| element.is_valid()) {
                left
            } else {
                right
            }
        };

        ColorObject {
            foreground: pick(self.foreground, other.foreground),
            background: pick(self.background, other.background),
            mode: self.mode.or(other.mode),
        }
    }

    /// The escape sequence for this object: mode, then foreground, then
    /// background.
    ///
    /// An empty object produces an empty string rather than `ESC[m`, which
    /// terminals would read as a reset.
    pub fn sequence(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mode = self.mode.map(|mode| mode.code().to_string());
        let fg = self.foreground.and_then(|element| element.params());
        let bg = self.background.and_then(|element| element.params());

        build_sequence([mode.as_deref(), fg.as_deref(), bg.as_deref()])
    }

    /// Wrap `text` with this object's sequence and a reset.
    ///
    /// An empty object returns the text unchanged.
    pub fn paint(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        let mut painted = self.sequence();
        painted.push_str(text);
        painted.push_str(RESET);
        painted
    }
}

impl Add for ColorObject {
    type Output = ColorObject;

    fn add(self, rhs: ColorObject) -> ColorObject {
        self.merge(&rhs)
    }
}

impl From<TextMode> for ColorObject {
    fn from(mode: TextMode) -> Self {
        Self::from_mode(mode)
    }
}

impl From<Rgb> for ColorObject {
    fn from(color: Rgb) -> Self {
        Self::from_rgb(Some(color), None, None)
    }
}

impl fmt::Display for ColorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence())
    }
}
