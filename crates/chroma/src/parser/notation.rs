//! Notation resolution.
//!
//! A notation is the textual form of a single style field:
//!
//! - 16-color names: `"red"`, `"bgreen"` (bright green)
//! - 8-bit codes: `"116"`, `"231"`
//! - RGB triples: `"255 100 210"` or `"255, 100, 210"`
//! - text modes: `"bold"`, `"underline"`

use ansi::{ColorElement, ColorLayer, TextMode};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{space0, space1, u8 as channel},
    combinator::{all_consuming, value},
    multi::separated_list1,
    sequence::delimited,
};

use crate::table::ColorTable;

/// The notation used for a field that was not given.
pub const DEFAULT_NOTATION: &str = "_";

/// Separator between RGB channels: a comma with optional spaces, or spaces.
fn channel_separator(input: &str) -> IResult<&str, ()> {
    alt((value((), delimited(space0, tag(","), space0)), value((), space1)))(input)
}

fn rgb_channels(input: &str) -> IResult<&str, Vec<u8>> {
    all_consuming(separated_list1(channel_separator, channel))(input)
}

/// Parse an RGB notation of exactly three 0-255 channels.
///
/// # Examples
///
/// ```
/// use chroma::parser::parse_rgb_notation;
///
/// assert_eq!(parse_rgb_notation("10 20 30"), Some((10, 20, 30)));
/// assert_eq!(parse_rgb_notation("1, 2,3"), Some((1, 2, 3)));
/// assert_eq!(parse_rgb_notation("1 2 256"), None);
/// assert_eq!(parse_rgb_notation("1 2"), None);
/// ```
pub fn parse_rgb_notation(notation: &str) -> Option<(u8, u8, u8)> {
    let (_, channels) = rgb_channels(notation.trim()).ok()?;

    match channels.as_slice() {
        [red, green, blue] => Some((*red, *green, *blue)),
        _ => None,
    }
}

/// Resolve a notation to a color element on `layer`.
///
/// Unknown or malformed notations resolve to `None`; resolution never fails.
pub fn to_color_element(notation: &str, layer: ColorLayer) -> Option<ColorElement> {
    if notation.is_empty() {
        return None;
    }

    if notation.chars().all(|c| c.is_ascii_digit()) {
        return notation
            .parse::<u8>()
            .ok()
            .map(|code| ColorElement::code256(code, layer));
    }

    if notation.chars().all(char::is_alphabetic) {
        return ColorTable::try_get_color(notation, layer);
    }

    parse_rgb_notation(notation).map(|rgb| ColorElement::rgb(rgb, layer))
}

/// Resolve a notation to a text mode.
pub fn to_mode(notation: &str) -> Option<TextMode> {
    ColorTable::try_get_mode(notation)
}
