//! Escape sequence constants and the SGR sequence builder.
//!
//! A Select Graphic Rendition sequence looks like `ESC [ 1 ; 31 ; 45 m`: the
//! control prefix, a `;`-separated list of numeric parameters, and the `m`
//! terminator.

/// The escape character.
pub const ESCAPE: &str = "\x1b";

/// Escape character followed by the control sequence introducer `[`.
pub const CONTROL_PREFIX: &str = "\x1b[";

/// Terminator of an SGR sequence.
pub const TERMINATOR: char = 'm';

/// The full reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Type code following `38`/`48` for 8-bit colors.
pub const COLOR_256_TYPE_CODE: &str = "5";

/// Type code following `38`/`48` for RGB colors.
pub const COLOR_RGB_TYPE_CODE: &str = "2";

/// Wrap a parameter list with the control prefix and terminator.
///
/// # Examples
///
/// ```
/// use ansi::escape::wrap;
///
/// assert_eq!(wrap("1;31"), "\x1b[1;31m");
/// ```
pub fn wrap(params: &str) -> String {
    let mut sequence = String::with_capacity(CONTROL_PREFIX.len() + params.len() + 1);
    sequence.push_str(CONTROL_PREFIX);
    sequence.push_str(params);
    sequence.push(TERMINATOR);
    sequence
}

/// Join parameters with `;`, skipping absent and empty entries.
///
/// # Examples
///
/// ```
/// use ansi::escape::join_params;
///
/// assert_eq!(join_params([Some("1"), None, Some(""), Some("34")]), "1;34");
/// ```
pub fn join_params<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    params
        .into_iter()
        .flatten()
        .filter(|param| !param.is_empty())
        .collect::<Vec<_>>()
        .join(";")
}

/// Build a complete escape sequence from a list of parameters.
///
/// Absent and empty parameters are skipped, so `["1", "34", "102"]`
/// produces `"\x1b[1;34;102m"`.
///
/// # Examples
///
/// ```
/// use ansi::escape::build_sequence;
///
/// assert_eq!(build_sequence([Some("1"), Some("34"), Some("102")]), "\x1b[1;34;102m");
/// assert_eq!(build_sequence([None, Some("0")]), "\x1b[0m");
/// ```
pub fn build_sequence<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    wrap(&join_params(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_bit_exact() {
        assert_eq!(RESET.as_bytes(), &[0x1b, b'[', b'0', b'm']);
        assert_eq!(wrap("0"), RESET);
    }

    #[test]
    fn join_skips_empty_params() {
        assert_eq!(join_params([Some(""), Some("38;5;10"), None]), "38;5;10");
        assert_eq!(join_params([None, None]), "");
    }

    #[test]
    fn build_empty_sequence() {
        assert_eq!(build_sequence([None, Some("")]), "\x1b[m");
    }

    #[test]
    fn build_keeps_order() {
        assert_eq!(
            build_sequence([Some("4"), Some("31"), Some("42")]),
            "\x1b[4;31;42m"
        );
    }
}
