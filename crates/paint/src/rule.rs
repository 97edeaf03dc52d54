//! Paint rules.
//!
//! A rule looks at the current token and, on a match, mutates the
//! [`PaintingState`] so the token (and possibly the ones after it) is
//! rendered in the rule's color. Rules are tried in order; the first
//! match wins.

use std::fmt;

use ansi::ColorObject;

use crate::condition::{RuleCondition, TokenPredicate};
use crate::state::PaintingState;
use crate::token::{TokenRef, TokenTarget};

/// Paints one token when an optional condition holds.
#[derive(Debug)]
pub struct ConditionalRule {
    pub color: ColorObject,
    pub condition: Option<RuleCondition>,
    /// Never match whitespace tokens. Defaults to true.
    pub ignore_whitespace: bool,
}

impl ConditionalRule {
    pub fn new(color: ColorObject) -> Self {
        Self {
            color,
            condition: None,
            ignore_whitespace: true,
        }
    }

    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    fn apply(&self, state: &mut PaintingState, token: TokenRef<'_>) -> bool {
        if self.ignore_whitespace && token.is_whitespace() {
            return false;
        }
        if self.condition.as_ref().is_some_and(|c| c.is_false(token)) {
            return false;
        }

        state.paint_length = 1;
        state.active_color = self.color;
        true
    }
}

/// Paints the span of the first target that matches.
#[derive(Debug)]
pub struct EqualityRule {
    pub color: ColorObject,
    pub targets: Vec<TokenTarget>,
    pub condition: Option<RuleCondition>,
    /// Tokens painted past the end of the match.
    pub extra_paint_length: usize,
}

impl EqualityRule {
    pub fn new(color: ColorObject, targets: impl IntoIterator<Item = TokenTarget>) -> Self {
        Self {
            color,
            targets: targets.into_iter().collect(),
            condition: None,
            extra_paint_length: 0,
        }
    }

    /// One single-lexeme target per word.
    ///
    /// ```
    /// use ansi::value;
    /// use paint::EqualityRule;
    ///
    /// let keywords = EqualityRule::words(value::FG_BLUE, ["fn", "let"]);
    /// assert_eq!(keywords.targets.len(), 2);
    /// ```
    pub fn words<I, S>(color: ColorObject, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(color, words.into_iter().map(TokenTarget::single))
    }

    pub fn with_condition(mut self, condition: RuleCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_extra_paint_length(mut self, extra: usize) -> Self {
        self.extra_paint_length = extra;
        self
    }

    fn apply(&self, state: &mut PaintingState, token: TokenRef<'_>) -> bool {
        if self.condition.as_ref().is_some_and(|c| c.is_false(token)) {
            return false;
        }

        let Some(span) = self.targets.iter().find_map(|target| target.match_at(token)) else {
            return false;
        };

        state.paint_length = span.saturating_add(self.extra_paint_length);
        state.active_color = self.color;
        true
    }
}

/// Paints everything from a left target through the next right target.
#[derive(Debug)]
pub struct BetweenRule {
    pub color: ColorObject,
    pub left: TokenTarget,
    pub right: TokenTarget,
}

impl BetweenRule {
    pub fn new(color: ColorObject, left: TokenTarget, right: TokenTarget) -> Self {
        Self { color, left, right }
    }

    /// A range between two single-lexeme delimiters.
    pub fn delimited(color: ColorObject, left: &str, right: &str) -> Self {
        Self::new(color, TokenTarget::single(left), TokenTarget::single(right))
    }

    fn apply(&self, state: &mut PaintingState, token: TokenRef<'_>) -> bool {
        if !self.left.matches(token) {
            return false;
        }

        log::trace!("range opened at token {}", token.index());
        state.pending_range_target = Some(self.right.clone());
        state.active_color = self.color;
        state.ignore_current_token = true;
        true
    }
}

/// Paints one token accepted by a caller predicate.
pub struct CustomMatchRule {
    pub color: ColorObject,
    predicate: TokenPredicate,
}

impl CustomMatchRule {
    pub fn new(color: ColorObject, predicate: impl Fn(TokenRef<'_>) -> bool + 'static) -> Self {
        Self {
            color,
            predicate: Box::new(predicate),
        }
    }

    fn apply(&self, state: &mut PaintingState, token: TokenRef<'_>) -> bool {
        if !(self.predicate)(token) {
            return false;
        }

        state.paint_length = 1;
        state.active_color = self.color;
        true
    }
}

impl fmt::Debug for CustomMatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMatchRule")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Signature of a [`CustomRule`] matcher.
pub type StateMatcher = Box<dyn Fn(&mut PaintingState, TokenRef<'_>) -> bool>;

/// A rule that edits the painting state itself.
///
/// The matcher returns whether it matched; it is responsible for setting
/// the active color and paint length.
pub struct CustomRule {
    matcher: StateMatcher,
}

impl CustomRule {
    pub fn new(matcher: impl Fn(&mut PaintingState, TokenRef<'_>) -> bool + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule").finish_non_exhaustive()
    }
}

/// Any paint rule.
#[derive(Debug)]
pub enum PaintRule {
    Conditional(ConditionalRule),
    Equality(EqualityRule),
    Between(BetweenRule),
    CustomMatch(CustomMatchRule),
    Custom(CustomRule),
}

impl PaintRule {
    /// Try the rule on `token`, updating `state` on a match.
    pub fn apply(&self, state: &mut PaintingState, token: TokenRef<'_>) -> bool {
        match self {
            Self::Conditional(rule) => rule.apply(state, token),
            Self::Equality(rule) => rule.apply(state, token),
            Self::Between(rule) => rule.apply(state, token),
            Self::CustomMatch(rule) => rule.apply(state, token),
            Self::Custom(rule) => (rule.matcher)(state, token),
        }
    }
}

impl From<ConditionalRule> for PaintRule {
    fn from(rule: ConditionalRule) -> Self {
        Self::Conditional(rule)
    }
}

impl From<EqualityRule> for PaintRule {
    fn from(rule: EqualityRule) -> Self {
        Self::Equality(rule)
    }
}

impl From<BetweenRule> for PaintRule {
    fn from(rule: BetweenRule) -> Self {
        Self::Between(rule)
    }
}

impl From<CustomMatchRule> for PaintRule {
    fn from(rule: CustomMatchRule) -> Self {
        Self::CustomMatch(rule)
    }
}

impl From<CustomRule> for PaintRule {
    fn from(rule: CustomRule) -> Self {
        Self::Custom(rule)
    }
}
