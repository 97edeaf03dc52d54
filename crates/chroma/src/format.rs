//! Formatting entry points.
//!
//! [`compile`] runs the pipeline without side effects. [`Chroma`] also
//! remembers the last source it formatted so a parse error can be pointed
//! at afterwards. The free functions share one process-wide [`Chroma`].

use std::sync::{Mutex, PoisonError};

use ansi::{ColorObject, value};
use once_cell::sync::Lazy;

use crate::error::MarkupError;
use crate::expression::{self, Expression};
use crate::highlight::{HighlightTarget, highlight};
use crate::parser::{build_structures, scan};

/// Compile markup into a styled string.
///
/// # Examples
///
/// ```
/// let styled = chroma::compile("<red>hi</>").unwrap();
/// assert_eq!(styled, "\x1b[31mhi\x1b[0m");
/// ```
pub fn compile(source: &str) -> Result<String, MarkupError> {
    let tokens = scan(source);
    let structures = build_structures(&tokens)?;
    let expressions: Vec<Expression<'_>> = expression::convert_all(structures);

    Ok(expression::format(&expressions))
}

/// A markup formatter that remembers its last source.
///
/// A `Chroma` is not meant to be shared between threads without external
/// synchronisation; the process-wide instance behind [`format_markup`] is
/// guarded by a mutex.
#[derive(Clone, Debug, Default)]
pub struct Chroma {
    last_source: Option<String>,
}

impl Chroma {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `source`, remembering it as the last source even if it fails.
    pub fn format(&mut self, source: &str) -> Result<String, MarkupError> {
        self.last_source = Some(source.to_string());
        compile(source)
    }

    /// Same as [`Chroma::format`], but returns `None` instead of an error.
    pub fn try_format(&mut self, source: &str) -> Option<String> {
        self.format(source).ok()
    }

    pub fn last_source(&self) -> Option<&str> {
        self.last_source.as_deref()
    }

    /// Highlight `target` inside the last formatted source.
    ///
    /// Returns an empty string when nothing has been formatted yet. The color
    /// defaults to red.
    pub fn highlight_last_source(
        &self,
        target: &HighlightTarget,
        color: Option<&ColorObject>,
    ) -> String {
        match &self.last_source {
            Some(source) => highlight(source, target, color.unwrap_or(&value::FG_RED)),
            None => String::new(),
        }
    }
}

static GLOBAL: Lazy<Mutex<Chroma>> = Lazy::new(|| Mutex::new(Chroma::new()));

fn with_global<T>(f: impl FnOnce(&mut Chroma) -> T) -> T {
    let mut chroma = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut chroma)
}

/// Format markup with the process-wide formatter.
pub fn format_markup(source: &str) -> Result<String, MarkupError> {
    with_global(|chroma| chroma.format(source))
}

/// Same as [`format_markup`], but returns `None` instead of an error.
pub fn try_format_markup(source: &str) -> Option<String> {
    with_global(|chroma| chroma.try_format(source))
}

/// Highlight `target` inside the source last passed to [`format_markup`].
pub fn highlight_last_source(target: &HighlightTarget, color: Option<&ColorObject>) -> String {
    with_global(|chroma| chroma.highlight_last_source(target, color))
}

/// The source last passed to [`format_markup`].
pub fn last_source() -> Option<String> {
    with_global(|chroma| chroma.last_source().map(str::to_string))
}
