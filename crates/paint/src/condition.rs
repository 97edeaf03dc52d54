//! Conditions that gate paint rules.

use std::fmt;

use crate::token::{TokenRef, TokenTarget};

/// A caller-supplied token predicate.
pub type TokenPredicate = Box<dyn Fn(TokenRef<'_>) -> bool>;

/// A predicate over a token and its neighbors.
pub enum RuleCondition {
    /// All conditions hold.
    And(Vec<RuleCondition>),
    /// At least one condition holds.
    Or(Vec<RuleCondition>),
    /// The next token exists and satisfies `condition`.
    NextTokenIs {
        condition: Box<RuleCondition>,
        skip_whitespace: bool,
    },
    /// The previous token exists and satisfies `condition`.
    PreviousTokenIs {
        condition: Box<RuleCondition>,
        skip_whitespace: bool,
    },
    TokenIs(TokenPredicate),
    TokenIsTarget(TokenTarget),
    /// A letter followed by letters or digits.
    TokenIsWord,
    /// Parses as a number.
    TokenIsNumber,
}

impl RuleCondition {
    pub fn and(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::And(conditions.into_iter().collect())
    }

    pub fn or(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::Or(conditions.into_iter().collect())
    }

    /// Checks the next non-whitespace token.
    pub fn next_token_is(condition: RuleCondition) -> Self {
        Self::NextTokenIs {
            condition: Box::new(condition),
            skip_whitespace: true,
        }
    }

    /// Checks the previous non-whitespace token.
    pub fn previous_token_is(condition: RuleCondition) -> Self {
        Self::PreviousTokenIs {
            condition: Box::new(condition),
            skip_whitespace: true,
        }
    }

    pub fn token_is(predicate: impl Fn(TokenRef<'_>) -> bool + 'static) -> Self {
        Self::TokenIs(Box::new(predicate))
    }

    pub fn token_is_target(target: TokenTarget) -> Self {
        Self::TokenIsTarget(target)
    }

    pub fn is_true(&self, token: TokenRef<'_>) -> bool {
        match self {
            Self::And(conditions) => conditions.iter().all(|c| c.is_true(token)),
            Self::Or(conditions) => conditions.iter().any(|c| c.is_true(token)),
            Self::NextTokenIs {
                condition,
                skip_whitespace,
            } => {
                let next = if *skip_whitespace {
                    token.next_non_whitespace()
                } else {
                    token.next()
                };
                next.is_some_and(|next| condition.is_true(next))
            }
            Self::PreviousTokenIs {
                condition,
                skip_whitespace,
            } => {
                let previous = if *skip_whitespace {
                    token.previous_non_whitespace()
                } else {
                    token.previous()
                };
                previous.is_some_and(|previous| condition.is_true(previous))
            }
            Self::TokenIs(predicate) => predicate(token),
            Self::TokenIsTarget(target) => target.matches(token),
            Self::TokenIsWord => is_word(token.lexeme()),
            Self::TokenIsNumber => is_number(token.lexeme()),
        }
    }

    pub fn is_false(&self, token: TokenRef<'_>) -> bool {
        !self.is_true(token)
    }
}

impl fmt::Debug for RuleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(conditions) => f.debug_tuple("And").field(conditions).finish(),
            Self::Or(conditions) => f.debug_tuple("Or").field(conditions).finish(),
            Self::NextTokenIs {
                condition,
                skip_whitespace,
            } => f
                .debug_struct("NextTokenIs")
                .field("condition", condition)
                .field("skip_whitespace", skip_whitespace)
                .finish(),
            Self::PreviousTokenIs {
                condition,
                skip_whitespace,
            } => f
                .debug_struct("PreviousTokenIs")
                .field("condition", condition)
                .field("skip_whitespace", skip_whitespace)
                .finish(),
            Self::TokenIs(_) => f.write_str("TokenIs(..)"),
            Self::TokenIsTarget(target) => f.debug_tuple("TokenIsTarget").field(target).finish(),
            Self::TokenIsWord => f.write_str("TokenIsWord"),
            Self::TokenIsNumber => f.write_str("TokenIsNumber"),
        }
    }
}

fn is_word(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    chars.next().is_some_and(char::is_alphabetic) && chars.all(char::is_alphanumeric)
}

// `f64` also parses "inf" and "NaN", which are words here.
fn is_number(lexeme: &str) -> bool {
    lexeme.starts_with(|c: char| c.is_ascii_digit()) && lexeme.parse::<f64>().is_ok()
}
