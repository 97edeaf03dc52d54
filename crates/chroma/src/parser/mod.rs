//! Parser for Chroma markup.
//!
//! This module contains the scanner, the structure builder and the notation
//! resolver.

mod notation;
mod scanner;
mod structure;

pub use notation::{DEFAULT_NOTATION, parse_rgb_notation, to_color_element, to_mode};
pub use scanner::{Scanner, Token, TokenKind, scan};
pub use structure::{FormatTag, Notation, Structure, StructureBuilder, build_structures};
