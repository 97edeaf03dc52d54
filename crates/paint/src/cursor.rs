//! Text cursor drawn into painted output.

use ansi::{ColorObject, escape, value};

use crate::painter::RenderHook;
use crate::token::TokenRef;

/// A cursor at a character index.
///
/// Drawn inside the token containing it, or as a glyph after the last token
/// when the index is past the end of the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub color: ColorObject,
    pub end_glyph: String,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            color: value::INVERSE,
            end_glyph: "_".to_string(),
        }
    }

    pub fn with_color(mut self, color: ColorObject) -> Self {
        self.color = color;
        self
    }

    pub fn with_end_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.end_glyph = glyph.into();
        self
    }

    /// Draw one character under the cursor, then switch back to `resume`.
    pub fn draw(&self, ch: char, resume: &ColorObject) -> String {
        let mut out = self.color.sequence();
        out.push(ch);
        out.push_str(escape::RESET);
        out.push_str(&resume.sequence());
        out
    }

    /// Render `token` in `color` with the cursor over one of its characters.
    ///
    /// An empty `color` leaves the rest of the token unstyled. A cursor on
    /// the last character closes the token itself.
    pub fn draw_in_token(&self, token: TokenRef<'_>, color: &ColorObject) -> String {
        let inner = token.token();
        let open = color.sequence();
        let mut out = open.clone();

        for (offset, ch) in token.lexeme().chars().enumerate() {
            let position = inner.char_start + offset;
            if position == self.index && position + 1 == inner.char_end {
                out.push_str(&self.draw(ch, &ColorObject::none()));
                return out;
            } else if position == self.index {
                out.push_str(&self.draw(ch, color));
            } else {
                out.push(ch);
            }
        }

        if !open.is_empty() {
            out.push_str(escape::RESET);
        }
        out
    }

    pub fn draw_at_end(&self) -> String {
        self.color.paint(&self.end_glyph)
    }

    pub(crate) fn overlay(&self) -> CursorOverlay<'_> {
        CursorOverlay {
            cursor: self,
            drawn: false,
        }
    }
}

/// Per-run cursor rendering.
pub(crate) struct CursorOverlay<'c> {
    cursor: &'c Cursor,
    drawn: bool,
}

impl RenderHook for CursorOverlay<'_> {
    fn render_token(&mut self, token: TokenRef<'_>, color: &ColorObject) -> Option<String> {
        let inner = token.token();
        if self.drawn || !(inner.char_start..inner.char_end).contains(&self.cursor.index) {
            return None;
        }

        self.drawn = true;
        Some(self.cursor.draw_in_token(token, color))
    }

    fn finish(&mut self) -> Option<String> {
        (!self.drawn).then(|| self.cursor.draw_at_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn cursor_inside_token() {
        let tokens = scan("abc");
        let cursor = Cursor::new(1);
        assert_eq!(
            cursor.draw_in_token(tokens.get(0).unwrap(), &value::FG_RED),
            "\x1b[31ma\x1b[7mb\x1b[0m\x1b[31mc\x1b[0m"
        );
    }

    #[test]
    fn cursor_on_last_char_does_not_resume() {
        let tokens = scan("ab");
        let cursor = Cursor::new(1);
        assert_eq!(
            cursor.draw_in_token(tokens.get(0).unwrap(), &value::FG_RED),
            "\x1b[31ma\x1b[7mb\x1b[0m"
        );
    }

    #[test]
    fn cursor_at_end() {
        assert_eq!(Cursor::new(0).draw_at_end(), "\x1b[7m_\x1b[0m");
        assert_eq!(
            Cursor::new(0).with_end_glyph("|").with_color(value::BG_WHITE).draw_at_end(),
            "\x1b[47m|\x1b[0m"
        );
    }

    #[test]
    fn overlay_draws_once() {
        let tokens = scan("ab");
        let cursor = Cursor::new(0);
        let mut overlay = cursor.overlay();
        let token = tokens.get(0).unwrap();

        assert!(overlay.render_token(token, &ColorObject::none()).is_some());
        assert!(overlay.render_token(token, &ColorObject::none()).is_none());
        assert!(overlay.finish().is_none());
    }
}
