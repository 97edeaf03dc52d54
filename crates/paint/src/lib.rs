//! Rule-driven painting of plain text.
//!
//! The painter splits text into tokens (runs of letters and digits, and one
//! token per other character), then walks them in order. At each token the
//! rules are tried until one matches; the match sets the color for that
//! token and possibly for a span or range of following tokens. Text is never
//! altered, only wrapped in escape sequences.
//!
//! ```
//! use ansi::value;
//! use paint::{EqualityRule, PaintRule, RuleCondition, ConditionalRule, paint};
//!
//! let rules = [
//!     PaintRule::from(EqualityRule::words(value::FG_BLUE, ["let"])),
//!     PaintRule::from(ConditionalRule::new(value::FG_CYAN).with_condition(RuleCondition::TokenIsNumber)),
//! ];
//! assert_eq!(
//!     paint("let x = 1", &rules, None),
//!     "\x1b[34mlet\x1b[0m x = \x1b[36m1\x1b[0m",
//! );
//! ```
//!
//! Painters are meant for one thread at a time; a [`RulePainter`] carries
//! state across a run and resets it when the run ends.

pub mod condition;
pub mod cursor;
pub mod painter;
pub mod pattern;
pub mod rule;
pub mod scanner;
pub mod state;
pub mod token;

pub use condition::{RuleCondition, TokenPredicate};
pub use cursor::Cursor;
pub use painter::{ColorPainter, Painter, RenderHook, RulePainter, paint};
pub use pattern::{ColorPattern, PatternColor, PatternPainter, ResetMode};
pub use rule::{
    BetweenRule, ConditionalRule, CustomMatchRule, CustomRule, EqualityRule, PaintRule,
    StateMatcher,
};
pub use scanner::scan;
pub use state::{PaintPhase, PaintingState};
pub use token::{Token, TokenRef, TokenStream, TokenTarget};
