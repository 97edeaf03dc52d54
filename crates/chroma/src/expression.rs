//! Renderable expressions and the formatter.

use std::borrow::Cow;

use ansi::ColorObject;

use crate::parser::Structure;

/// A renderable piece of formatted output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression<'a> {
    /// Literal text, emitted verbatim.
    Text(&'a str),
    /// A style change, emitted as its escape sequence.
    StyleChange(ColorObject),
}

impl Expression<'_> {
    pub fn stringify(&self) -> Cow<'_, str> {
        match self {
            Expression::Text(text) => Cow::Borrowed(text),
            Expression::StyleChange(color) => Cow::Owned(color.sequence()),
        }
    }
}

impl<'a> From<Structure<'a>> for Expression<'a> {
    fn from(structure: Structure<'a>) -> Self {
        match structure {
            Structure::Identifier(text) => Expression::Text(text),
            Structure::FormatTag(tag) => Expression::StyleChange(tag.to_color_object()),
        }
    }
}

/// Convert every structure to its expression, in order.
pub fn convert_all<'a>(structures: Vec<Structure<'a>>) -> Vec<Expression<'a>> {
    structures.into_iter().map(Expression::from).collect()
}

/// Concatenate the output of every expression.
pub fn format(expressions: &[Expression<'_>]) -> String {
    expressions
        .iter()
        .map(|expression| expression.stringify())
        .collect()
}
