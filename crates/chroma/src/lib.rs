//! Chroma markup compiler for terminal text styling.
//!
//! This crate compiles strings with inline style tags, like
//! `<red>Error:</> something <_ _ bold>failed</>`, into text with ANSI escape
//! sequences.
//!
//! # Overview
//!
//! Tags use angle brackets and up to three space-separated slots, in order:
//! foreground, background, mode.
//!
//! - `<red>` - 16-color foreground (`bred` for bright red)
//! - `<_ blue>` - background only; `_` leaves a slot untouched
//! - `<231>` - 8-bit palette index
//! - `<(255, 0, 0)>` - RGB, 1 to 3 channels (missing channels are 0)
//! - `<bold>` or `<_ _ underline>` - text mode
//! - `</>` - reset everything
//!
//! Text outside tags, including whitespace and punctuation, is copied
//! verbatim. There is no escape for a literal `<`.
//!
//! # Pipeline
//!
//! source → [`parser::scan`] → tokens → [`parser::build_structures`] →
//! structures → [`expression::convert_all`] → expressions →
//! [`expression::format`] → styled string.
//!
//! # Usage
//!
//! ```
//! use chroma::{Chroma, format_markup};
//!
//! assert_eq!(format_markup("<red>hi</>").unwrap(), "\x1b[31mhi\x1b[0m");
//!
//! let mut chroma = Chroma::new();
//! let error = chroma.format("<()>").unwrap_err();
//! let pointed = chroma.highlight_last_source(error.target(), None);
//! assert_eq!(pointed, "<\x1b[31m()\x1b[0m>");
//! ```

pub mod error;
pub mod expression;
pub mod format;
pub mod highlight;
pub mod parser;
pub mod report;
pub mod table;

// Re-export main types at crate root
pub use error::{ChromaError, MarkupError, NotationError};
pub use expression::Expression;
pub use format::{
    Chroma, compile, format_markup, highlight_last_source, last_source, try_format_markup,
};
pub use highlight::HighlightTarget;
pub use table::ColorTable;
