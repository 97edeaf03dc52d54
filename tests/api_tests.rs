//! Tests for the combined API.

use specter::paint::{BetweenRule, EqualityRule, TokenTarget};
use specter::{
    ChromaError, Cursor, Error, HighlightTarget, PaintRule, Painter, RulePainter, StringColoring,
    value,
};

/// Make escape characters visible for snapshots.
fn visible(styled: &str) -> String {
    styled.replace('\x1b', "ESC")
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn markup_errors_convert_to_root_error() {
    let error = specter::format_markup("<(1,2,3,4)>").unwrap_err();
    assert!(matches!(error, Error::Chroma(ChromaError::Markup(_))));
}

#[test]
fn markup_output_matches_string_helpers() {
    let markup = specter::format_markup("<red>hi</>").unwrap();
    assert_eq!(markup, "hi".fg_red());
}

#[test]
fn error_report() {
    let error = ChromaError::from(specter::compile("a <red").unwrap_err());
    let report = specter::report_markup_error(&error, "a <red");
    assert_eq!(
        visible(&report),
        "ESC[4;31mUnterminatedTagESC[0mESC[91m ErrorESC[0m (markup):\
         ESC[91m\n  --->> ESC[0munterminated tag starting at position 2\
         \n\na ESC[31m<redESC[0m"
    );
}

#[test]
fn highlight_target_is_public() {
    let target = HighlightTarget::new(0..1, 1..2);
    assert_eq!(target.from, 0..1);
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn editor_line() {
    let rules = [
        PaintRule::from(BetweenRule::delimited(value::FG_GREEN, "'", "'")),
        PaintRule::from(EqualityRule::new(
            value::FG_YELLOW,
            [TokenTarget::new(["-", ">"])],
        )),
    ];
    let mut painter = RulePainter::new(rules).with_cursor(Cursor::new(8));

    insta::assert_snapshot!(
        visible(&painter.paint("a -> 'b'")),
        @"a ESC[33m-ESC[0mESC[33m>ESC[0m ESC[32m'ESC[0mESC[32mbESC[0mESC[32m'ESC[0mESC[7m_ESC[0m"
    );
}
