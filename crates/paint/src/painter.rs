//! Painters: turn plain text into styled text.

use ansi::ColorObject;

use crate::cursor::Cursor;
use crate::rule::PaintRule;
use crate::scanner::scan;
use crate::state::PaintingState;
use crate::token::{TokenRef, TokenStream};

/// Something that styles a whole string.
pub trait Painter {
    fn paint(&mut self, source: &str) -> String;
}

/// Paints the whole source in one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorPainter {
    pub color: ColorObject,
}

impl ColorPainter {
    pub fn new(color: ColorObject) -> Self {
        Self { color }
    }
}

impl Painter for ColorPainter {
    fn paint(&mut self, source: &str) -> String {
        self.color.paint(source)
    }
}

/// Intercepts token rendering during a [`RulePainter`] run.
pub trait RenderHook {
    /// Render `token` in place of the default; `None` keeps the default.
    fn render_token(&mut self, token: TokenRef<'_>, color: &ColorObject) -> Option<String>;

    /// Appended after the last token.
    fn finish(&mut self) -> Option<String> {
        None
    }
}

/// Paints tokens according to an ordered list of rules.
///
/// # Examples
///
/// ```
/// use ansi::value;
/// use paint::{BetweenRule, PaintRule, Painter, RulePainter};
///
/// let strings = BetweenRule::delimited(value::FG_GREEN, "\"", "\"");
/// let mut painter = RulePainter::new([PaintRule::from(strings)]);
/// assert_eq!(
///     painter.paint("a \"b\""),
///     "a \x1b[32m\"\x1b[0m\x1b[32mb\x1b[0m\x1b[32m\"\x1b[0m",
/// );
/// ```
#[derive(Debug, Default)]
pub struct RulePainter {
    rules: Vec<PaintRule>,
    state: PaintingState,
    cursor: Option<Cursor>,
}

impl RulePainter {
    pub fn new(rules: impl IntoIterator<Item = PaintRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Color of tokens no rule paints. Defaults to no styling.
    pub fn with_default_color(mut self, color: ColorObject) -> Self {
        self.state = PaintingState::new(color);
        self
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn push_rule(&mut self, rule: impl Into<PaintRule>) {
        self.rules.push(rule.into());
    }

    pub fn rules(&self) -> &[PaintRule] {
        &self.rules
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }

    /// Paint with a caller-supplied render hook instead of the cursor.
    pub fn paint_with(&mut self, source: &str, hook: &mut dyn RenderHook) -> String {
        let tokens = scan(source);
        paint_tokens(&self.rules, &mut self.state, &tokens, Some(hook))
    }
}

impl Painter for RulePainter {
    fn paint(&mut self, source: &str) -> String {
        let tokens = scan(source);
        match &self.cursor {
            Some(cursor) => {
                let mut overlay = cursor.overlay();
                paint_tokens(&self.rules, &mut self.state, &tokens, Some(&mut overlay))
            }
            None => paint_tokens(&self.rules, &mut self.state, &tokens, None),
        }
    }
}

/// Paint `source` with `rules`, optionally drawing a cursor at a character
/// index.
pub fn paint(source: &str, rules: &[PaintRule], cursor_index: Option<usize>) -> String {
    let tokens = scan(source);
    let mut state = PaintingState::default();

    match cursor_index.map(Cursor::new) {
        Some(cursor) => {
            let mut overlay = cursor.overlay();
            paint_tokens(rules, &mut state, &tokens, Some(&mut overlay))
        }
        None => paint_tokens(rules, &mut state, &tokens, None),
    }
}

fn paint_tokens(
    rules: &[PaintRule],
    state: &mut PaintingState,
    tokens: &TokenStream<'_>,
    mut hook: Option<&mut dyn RenderHook>,
) -> String {
    let mut out = String::new();

    for token in tokens.iter() {
        if !state.should_ignore_rule_matching() {
            if let Some(index) = rules.iter().position(|rule| rule.apply(state, token)) {
                log::trace!("rule {index} matched {:?}", token.lexeme());
            }
        }

        let color = state.active_color;
        let intercepted = hook
            .as_deref_mut()
            .and_then(|hook| hook.render_token(token, &color));
        match intercepted {
            Some(rendered) => out.push_str(&rendered),
            None => out.push_str(&color.paint(token.lexeme())),
        }

        state.update(token);
    }

    if let Some(tail) = hook.and_then(|hook| hook.finish()) {
        out.push_str(&tail);
    }

    state.full_reset();
    out
}
