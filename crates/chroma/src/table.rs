//! Named color and text mode tables.
//!
//! Color names are keyed by layer prefix: `"fgred"`, `"bgred"`. Bright
//! variants insert a `b`: `"fgbred"`, `"bgbred"`. Text modes are keyed by
//! their plain name.

use ansi::{Color16, ColorElement, ColorLayer, TextMode};
use phf::phf_map;

use crate::error::NotationError;

static COLOR_TABLE: phf::Map<&'static str, Color16> = phf_map! {
    "fgblack" => Color16::FgBlack,
    "fgred" => Color16::FgRed,
    "fggreen" => Color16::FgGreen,
    "fgyellow" => Color16::FgYellow,
    "fgblue" => Color16::FgBlue,
    "fgmagenta" => Color16::FgMagenta,
    "fgcyan" => Color16::FgCyan,
    "fgwhite" => Color16::FgWhite,
    "fgdefault" => Color16::FgDefault,

    "fgbblack" => Color16::FgBrightBlack,
    "fgbred" => Color16::FgBrightRed,
    "fgbgreen" => Color16::FgBrightGreen,
    "fgbyellow" => Color16::FgBrightYellow,
    "fgbblue" => Color16::FgBrightBlue,
    "fgbmagenta" => Color16::FgBrightMagenta,
    "fgbcyan" => Color16::FgBrightCyan,
    "fgbwhite" => Color16::FgBrightWhite,

    "bgblack" => Color16::BgBlack,
    "bgred" => Color16::BgRed,
    "bggreen" => Color16::BgGreen,
    "bgyellow" => Color16::BgYellow,
    "bgblue" => Color16::BgBlue,
    "bgmagenta" => Color16::BgMagenta,
    "bgcyan" => Color16::BgCyan,
    "bgwhite" => Color16::BgWhite,
    "bgdefault" => Color16::BgDefault,

    "bgbblack" => Color16::BgBrightBlack,
    "bgbred" => Color16::BgBrightRed,
    "bgbgreen" => Color16::BgBrightGreen,
    "bgbyellow" => Color16::BgBrightYellow,
    "bgbblue" => Color16::BgBrightBlue,
    "bgbmagenta" => Color16::BgBrightMagenta,
    "bgbcyan" => Color16::BgBrightCyan,
    "bgbwhite" => Color16::BgBrightWhite,
};

static MODE_TABLE: phf::Map<&'static str, TextMode> = phf_map! {
    "normal" => TextMode::Normal,
    "bold" => TextMode::Bold,
    "dim" => TextMode::Dim,
    "italic" => TextMode::Italic,
    "underline" => TextMode::Underline,
    "blinking" => TextMode::Blinking,
    "inverse" => TextMode::Inverse,
    "hidden" => TextMode::Hidden,
    "strike" => TextMode::Strike,
};

/// Lookups into the static color and mode tables.
pub struct ColorTable;

impl ColorTable {
    /// Look up a color name on a layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ansi::{Color16, ColorElement, ColorLayer};
    /// use chroma::ColorTable;
    ///
    /// let red = ColorTable::get_color("red", ColorLayer::Background).unwrap();
    /// assert_eq!(red, ColorElement::code16(Color16::BgRed));
    /// assert!(ColorTable::get_color("teal", ColorLayer::Foreground).is_err());
    /// ```
    pub fn get_color(name: &str, layer: ColorLayer) -> Result<ColorElement, NotationError> {
        let key = format!("{}{}", layer.prefix(), name.to_ascii_lowercase());

        COLOR_TABLE
            .get(key.as_str())
            .map(|code| ColorElement::code16(*code))
            .ok_or_else(|| NotationError::UnknownColor(name.to_string()))
    }

    /// Same as [`ColorTable::get_color`], discarding the error.
    pub fn try_get_color(name: &str, layer: ColorLayer) -> Option<ColorElement> {
        Self::get_color(name, layer).ok()
    }

    /// Look up a text mode by name.
    pub fn get_mode(name: &str) -> Result<TextMode, NotationError> {
        MODE_TABLE
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| NotationError::UnknownMode(name.to_string()))
    }

    /// Same as [`ColorTable::get_mode`], discarding the error.
    pub fn try_get_mode(name: &str) -> Option<TextMode> {
        Self::get_mode(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_prefix_selects_code() {
        assert_eq!(
            ColorTable::get_color("green", ColorLayer::Foreground),
            Ok(ColorElement::code16(Color16::FgGreen))
        );
        assert_eq!(
            ColorTable::get_color("green", ColorLayer::Background),
            Ok(ColorElement::code16(Color16::BgGreen))
        );
    }

    #[test]
    fn bright_names() {
        assert_eq!(
            ColorTable::try_get_color("bred", ColorLayer::Foreground),
            Some(ColorElement::code16(Color16::FgBrightRed))
        );
        assert_eq!(
            ColorTable::try_get_color("bwhite", ColorLayer::Background),
            Some(ColorElement::code16(Color16::BgBrightWhite))
        );
    }

    #[test]
    fn default_has_no_bright_variant() {
        assert!(ColorTable::try_get_color("bdefault", ColorLayer::Foreground).is_none());
        assert!(ColorTable::try_get_color("default", ColorLayer::Foreground).is_some());
    }

    #[test]
    fn unknown_color() {
        assert_eq!(
            ColorTable::get_color("purple", ColorLayer::Foreground),
            Err(NotationError::UnknownColor("purple".to_string()))
        );
    }

    #[test]
    fn modes() {
        assert_eq!(ColorTable::get_mode("strike"), Ok(TextMode::Strike));
        assert_eq!(ColorTable::try_get_mode("BOLD"), Some(TextMode::Bold));
        assert_eq!(
            ColorTable::get_mode("red"),
            Err(NotationError::UnknownMode("red".to_string()))
        );
    }
}
