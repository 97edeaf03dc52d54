//! Predefined color objects for every 16-color code and text mode.

use crate::color::{Color16, TextMode};
use crate::element::ColorElement;
use crate::object::ColorObject;

const fn fg(code: Color16) -> ColorObject {
    ColorObject {
        foreground: Some(ColorElement::Code16(Some(code))),
        background: None,
        mode: None,
    }
}

const fn bg(code: Color16) -> ColorObject {
    ColorObject {
        foreground: None,
        background: Some(ColorElement::Code16(Some(code))),
        mode: None,
    }
}

const fn mode(mode: TextMode) -> ColorObject {
    ColorObject {
        foreground: None,
        background: None,
        mode: Some(mode),
    }
}

pub const RESET: ColorObject = fg(Color16::Reset);

pub const FG_BLACK: ColorObject = fg(Color16::FgBlack);
pub const FG_RED: ColorObject = fg(Color16::FgRed);
pub const FG_GREEN: ColorObject = fg(Color16::FgGreen);
pub const FG_YELLOW: ColorObject = fg(Color16::FgYellow);
pub const FG_BLUE: ColorObject = fg(Color16::FgBlue);
pub const FG_MAGENTA: ColorObject = fg(Color16::FgMagenta);
pub const FG_CYAN: ColorObject = fg(Color16::FgCyan);
pub const FG_WHITE: ColorObject = fg(Color16::FgWhite);
pub const FG_DEFAULT: ColorObject = fg(Color16::FgDefault);

pub const BG_BLACK: ColorObject = bg(Color16::BgBlack);
pub const BG_RED: ColorObject = bg(Color16::BgRed);
pub const BG_GREEN: ColorObject = bg(Color16::BgGreen);
pub const BG_YELLOW: ColorObject = bg(Color16::BgYellow);
pub const BG_BLUE: ColorObject = bg(Color16::BgBlue);
pub const BG_MAGENTA: ColorObject = bg(Color16::BgMagenta);
pub const BG_CYAN: ColorObject = bg(Color16::BgCyan);
pub const BG_WHITE: ColorObject = bg(Color16::BgWhite);
pub const BG_DEFAULT: ColorObject = bg(Color16::BgDefault);

pub const FG_BRIGHT_BLACK: ColorObject = fg(Color16::FgBrightBlack);
pub const FG_BRIGHT_RED: ColorObject = fg(Color16::FgBrightRed);
pub const FG_BRIGHT_GREEN: ColorObject = fg(Color16::FgBrightGreen);
pub const FG_BRIGHT_YELLOW: ColorObject = fg(Color16::FgBrightYellow);
pub const FG_BRIGHT_BLUE: ColorObject = fg(Color16::FgBrightBlue);
pub const FG_BRIGHT_MAGENTA: ColorObject = fg(Color16::FgBrightMagenta);
pub const FG_BRIGHT_CYAN: ColorObject = fg(Color16::FgBrightCyan);
pub const FG_BRIGHT_WHITE: ColorObject = fg(Color16::FgBrightWhite);

pub const BG_BRIGHT_BLACK: ColorObject = bg(Color16::BgBrightBlack);
pub const BG_BRIGHT_RED: ColorObject = bg(Color16::BgBrightRed);
pub const BG_BRIGHT_GREEN: ColorObject = bg(Color16::BgBrightGreen);
pub const BG_BRIGHT_YELLOW: ColorObject = bg(Color16::BgBrightYellow);
pub const BG_BRIGHT_BLUE: ColorObject = bg(Color16::BgBrightBlue);
pub const BG_BRIGHT_MAGENTA: ColorObject = bg(Color16::BgBrightMagenta);
pub const BG_BRIGHT_CYAN: ColorObject = bg(Color16::BgBrightCyan);
pub const BG_BRIGHT_WHITE: ColorObject = bg(Color16::BgBrightWhite);

pub const NORMAL: ColorObject = mode(TextMode::Normal);
pub const BOLD: ColorObject = mode(TextMode::Bold);
pub const DIM: ColorObject = mode(TextMode::Dim);
pub const ITALIC: ColorObject = mode(TextMode::Italic);
pub const UNDERLINE: ColorObject = mode(TextMode::Underline);
pub const BLINKING: ColorObject = mode(TextMode::Blinking);
pub const INVERSE: ColorObject = mode(TextMode::Inverse);
pub const HIDDEN: ColorObject = mode(TextMode::Hidden);
pub const STRIKE: ColorObject = mode(TextMode::Strike);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_sequences() {
        assert_eq!(RESET.sequence(), "\x1b[0m");
        assert_eq!(FG_RED.sequence(), "\x1b[31m");
        assert_eq!(BG_BRIGHT_CYAN.sequence(), "\x1b[106m");
        assert_eq!(INVERSE.sequence(), "\x1b[7m");
    }

    #[test]
    fn combine_predefined() {
        assert_eq!((FG_RED + UNDERLINE).sequence(), "\x1b[4;31m");
        assert_eq!((FG_WHITE + BG_BLUE).sequence(), "\x1b[37;44m");
    }
}
