//! Error types for Chroma markup.

use thiserror::Error;

use crate::highlight::HighlightTarget;

/// Structural errors raised while parsing markup.
///
/// Every variant carries the token span that caused it so the caller can
/// point at it with [`highlight`](crate::highlight::highlight).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// The input ended before a `>` (or `)`) closed the construct.
    #[error("unterminated tag starting at position {}", .target.from.start)]
    UnterminatedTag { target: HighlightTarget },

    /// An RGB notation with zero or more than three channels.
    #[error("RGB must have between 1 and 3 channels, got {count}")]
    RgbChannelCount {
        count: usize,
        target: HighlightTarget,
    },

    /// An RGB channel that is not an integer in `0..=255`.
    #[error("invalid RGB channel: {lexeme}")]
    InvalidRgbChannel {
        lexeme: String,
        target: HighlightTarget,
    },
}

impl MarkupError {
    /// The span of the source responsible for this error.
    pub fn target(&self) -> &HighlightTarget {
        match self {
            MarkupError::UnterminatedTag { target }
            | MarkupError::RgbChannelCount { target, .. }
            | MarkupError::InvalidRgbChannel { target, .. } => target,
        }
    }

    /// Short name of the error kind, used by error reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            MarkupError::UnterminatedTag { .. } => "UnterminatedTag",
            MarkupError::RgbChannelCount { .. } => "RgbChannelCount",
            MarkupError::InvalidRgbChannel { .. } => "InvalidRgbChannel",
        }
    }
}

/// Errors from strict color table lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NotationError {
    #[error("invalid color name: {0}")]
    UnknownColor(String),

    #[error("invalid color mode name: {0}")]
    UnknownMode(String),
}

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChromaError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Notation(#[from] NotationError),
}

impl ChromaError {
    pub fn target(&self) -> Option<&HighlightTarget> {
        match self {
            ChromaError::Markup(error) => Some(error.target()),
            ChromaError::Notation(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ChromaError::Markup(error) => error.kind_name(),
            ChromaError::Notation(NotationError::UnknownColor(_)) => "UnknownColor",
            ChromaError::Notation(NotationError::UnknownMode(_)) => "UnknownMode",
        }
    }
}
