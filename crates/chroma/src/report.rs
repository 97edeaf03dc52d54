//! Colored error reports for markup errors.

use ansi::value;

use crate::error::ChromaError;
use crate::highlight::highlight;

const ARROW: &str = "\n  --->> ";

/// Render an error as a colored, multi-line report.
///
/// ```text
/// RgbChannelCount Error (markup):
///   --->> RGB must have between 1 and 3 channels, got 4
///
/// <(1,2,3,4)>        (the offending span highlighted in red)
/// ```
///
/// `details` is shown in parentheses after the header. The source section is
/// omitted when the error has no span.
pub fn render_error(error: &ChromaError, source: &str, details: Option<&str>) -> String {
    let mut report = (value::FG_RED + value::UNDERLINE).paint(error.kind_name());
    report.push_str(&value::FG_BRIGHT_RED.paint(" Error"));

    match details {
        Some(details) => report.push_str(&format!(" ({details}):")),
        None => report.push(':'),
    }

    report.push_str(&value::FG_BRIGHT_RED.paint(ARROW));
    report.push_str(&error.to_string());

    if let Some(target) = error.target() {
        report.push_str("\n\n");
        report.push_str(&highlight(source, target, &value::FG_RED));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;
    use crate::error::NotationError;

    #[test]
    fn markup_error_report() {
        let source = "<(1,2,3,4)>";
        let error = ChromaError::from(compile(source).unwrap_err());
        let report = render_error(&error, source, Some("markup"));

        assert!(report.starts_with("\x1b[4;31mRgbChannelCount\x1b[0m\x1b[91m Error\x1b[0m (markup):"));
        assert!(report.contains("got 4"));
        assert!(report.ends_with("<\x1b[31m(1,2,3,4)\x1b[0m>"));
    }

    #[test]
    fn notation_error_has_no_source_section() {
        let error = ChromaError::from(NotationError::UnknownColor("teal".to_string()));
        let report = render_error(&error, "<teal>", None);

        assert!(report.contains("UnknownColor"));
        assert!(report.ends_with("invalid color name: teal"));
    }
}
