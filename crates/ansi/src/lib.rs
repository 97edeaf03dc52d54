//! ANSI color model for terminal text styling.
//!
//! This crate provides the value types shared by the markup compiler and the
//! rule painter:
//!
//! - [`Color16`], [`TextMode`] and [`Rgb`] - primitive color values
//! - [`ColorElement`] - one foreground or background element (16-color,
//!   8-bit or RGB)
//! - [`ColorObject`] - a merged foreground, background and mode
//! - [`escape`] - the escape sequence builder and its constants
//! - [`value`] - predefined color objects
//!
//! # Usage
//!
//! ```
//! use ansi::{ColorObject, value};
//!
//! let warning = value::FG_YELLOW + value::BOLD;
//! assert_eq!(warning.paint("careful"), "\x1b[1;33mcareful\x1b[0m");
//!
//! let inherited = ColorObject::none() + value::FG_RED;
//! assert_eq!(inherited.sequence(), "\x1b[31m");
//! ```

pub mod color;
pub mod element;
pub mod escape;
pub mod object;
pub mod value;

// Re-export main types at crate root
pub use color::{Color16, ColorLayer, Rgb, TextMode};
pub use element::ColorElement;
pub use object::ColorObject;
