//! Terminal text styling: Chroma markup and rule-driven painting.
//!
//! This crate bundles the workspace crates behind one API:
//!
//! - [`ansi`] - color model and escape sequences
//! - [`chroma`] - `<fg bg mode>` markup compiled to escape sequences
//! - [`paint`] - rule-based token painting with an optional cursor
//!
//! ```
//! use specter::{StringColoring, format_markup};
//!
//! let styled = format_markup("<red>error:</> <_ _ bold>disk full</>")?;
//! assert!(styled.starts_with("\x1b[31merror:"));
//! assert_eq!("ok".fg_green(), "\x1b[32mok\x1b[0m");
//! # Ok::<(), specter::Error>(())
//! ```

pub mod error;
pub mod log_init;
pub mod string;

pub use ansi::{self, ColorObject, value};
pub use chroma::{
    self, Chroma, ChromaError, HighlightTarget, MarkupError, NotationError, compile,
    highlight_last_source, last_source, report::render_error, try_format_markup,
};
pub use error::{Error, Result};
pub use paint::{self, Cursor, PaintRule, Painter, RulePainter};
pub use string::StringColoring;

/// Format markup with the process-wide formatter.
///
/// Same as [`chroma::format_markup`], with the root [`Error`] type.
pub fn format_markup(source: &str) -> Result<String> {
    Ok(chroma::format_markup(source)?)
}

/// Render a colored report for an error raised while formatting `source`.
///
/// ```
/// let source = "<(1,2,3,4)>";
/// let error = specter::compile(source).unwrap_err();
/// let report = specter::report_markup_error(&error.into(), source);
/// assert!(report.contains("RgbChannelCount"));
/// ```
pub fn report_markup_error(error: &ChromaError, source: &str) -> String {
    log::debug!("markup error in {source:?}: {error}");
    render_error(error, source, Some("markup"))
}
