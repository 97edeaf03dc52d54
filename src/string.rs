//! Styling methods on string slices.

use ansi::{ColorObject, value};
use paint::{ColorPattern, PatternPainter, Painter};

/// Color used by [`StringColoring::quote`].
pub const DEFAULT_QUOTE_COLOR: ColorObject = value::FG_GREEN;

macro_rules! color_methods {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            fn $name(&self) -> String {
                self.paint(&value::$color)
            }
        )*
    };
}

/// Extension trait painting a `str`.
///
/// ```
/// use specter::StringColoring;
///
/// assert_eq!("hi".fg_red(), "\x1b[31mhi\x1b[0m");
/// assert_eq!("x".quote(), "\x1b[32m\"x\"\x1b[0m");
/// ```
pub trait StringColoring {
    fn paint(&self, color: &ColorObject) -> String;

    fn paint_pattern(&self, pattern: &ColorPattern) -> String;

    fn paint_with(&self, painter: &mut dyn Painter) -> String;

    /// Wrap in double quotes, painted green.
    fn quote(&self) -> String;

    /// Wrap in double quotes, painted in `color`.
    fn quote_with(&self, color: &ColorObject) -> String;

    color_methods! {
        fg_black => FG_BLACK,
        fg_red => FG_RED,
        fg_green => FG_GREEN,
        fg_yellow => FG_YELLOW,
        fg_blue => FG_BLUE,
        fg_magenta => FG_MAGENTA,
        fg_cyan => FG_CYAN,
        fg_white => FG_WHITE,
        bg_black => BG_BLACK,
        bg_red => BG_RED,
        bg_green => BG_GREEN,
        bg_yellow => BG_YELLOW,
        bg_blue => BG_BLUE,
        bg_magenta => BG_MAGENTA,
        bg_cyan => BG_CYAN,
        bg_white => BG_WHITE,
        fg_bright_black => FG_BRIGHT_BLACK,
        fg_bright_red => FG_BRIGHT_RED,
        fg_bright_green => FG_BRIGHT_GREEN,
        fg_bright_yellow => FG_BRIGHT_YELLOW,
        fg_bright_blue => FG_BRIGHT_BLUE,
        fg_bright_magenta => FG_BRIGHT_MAGENTA,
        fg_bright_cyan => FG_BRIGHT_CYAN,
        fg_bright_white => FG_BRIGHT_WHITE,
        bg_bright_black => BG_BRIGHT_BLACK,
        bg_bright_red => BG_BRIGHT_RED,
        bg_bright_green => BG_BRIGHT_GREEN,
        bg_bright_yellow => BG_BRIGHT_YELLOW,
        bg_bright_blue => BG_BRIGHT_BLUE,
        bg_bright_magenta => BG_BRIGHT_MAGENTA,
        bg_bright_cyan => BG_BRIGHT_CYAN,
        bg_bright_white => BG_BRIGHT_WHITE,
    }
}

impl StringColoring for str {
    fn paint(&self, color: &ColorObject) -> String {
        color.paint(self)
    }

    fn paint_pattern(&self, pattern: &ColorPattern) -> String {
        PatternPainter::new(pattern.clone()).paint(self)
    }

    fn paint_with(&self, painter: &mut dyn Painter) -> String {
        painter.paint(self)
    }

    fn quote(&self) -> String {
        self.quote_with(&DEFAULT_QUOTE_COLOR)
    }

    fn quote_with(&self, color: &ColorObject) -> String {
        color.paint(&format!("\"{self}\""))
    }
}
