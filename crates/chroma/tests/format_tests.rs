//! Comprehensive tests for Chroma formatting.

use chroma::{Chroma, HighlightTarget, MarkupError, compile, format_markup, try_format_markup};
use proptest::prelude::*;

/// Make escape characters visible for snapshots.
fn visible(styled: &str) -> String {
    styled.replace('\x1b', "ESC")
}

// ============================================================================
// Plain Text
// ============================================================================

#[test]
fn plain_text_is_unchanged() {
    let source = "Hello, World! (a/b) x > y";
    assert_eq!(compile(source).unwrap(), source);
}

#[test]
fn empty_source() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn unicode_text_is_unchanged() {
    assert_eq!(compile("日本語 ünï").unwrap(), "日本語 ünï");
}

proptest! {
    #[test]
    fn sources_without_tags_round_trip(source in "[^<]*") {
        prop_assert_eq!(compile(&source).unwrap(), source);
    }

    #[test]
    fn formatting_never_panics(source in "\\PC*") {
        let _ = compile(&source);
    }
}

// ============================================================================
// Tags
// ============================================================================

#[test]
fn red_then_reset() {
    assert_eq!(format_markup("<red>hi</>").unwrap(), "\x1b[31mhi\x1b[0m");
}

#[test]
fn rgb_foreground() {
    assert_eq!(
        compile("<(255,0,0)>x</>").unwrap(),
        "\x1b[38;2;255;0;0mx\x1b[0m"
    );
}

#[test]
fn rgb_with_one_channel_is_padded() {
    assert_eq!(compile("<(7)>").unwrap(), "\x1b[38;2;7;0;0m");
}

#[test]
fn rgb_background() {
    assert_eq!(compile("<_ (1 2 3)>").unwrap(), "\x1b[48;2;1;2;3m");
}

#[test]
fn bold_only() {
    assert_eq!(compile("<bold>").unwrap(), "\x1b[1m");
}

#[test]
fn all_three_slots() {
    insta::assert_snapshot!(visible(&compile("<bred black underline>!</>").unwrap()), @"ESC[4;91;40m!ESC[0m");
}

#[test]
fn palette_codes() {
    insta::assert_snapshot!(visible(&compile("<231 17>x").unwrap()), @"ESC[38;5;231;48;5;17mx");
}

#[test]
fn default_slots_emit_nothing() {
    assert_eq!(compile("a<_>b").unwrap(), "ab");
    assert_eq!(compile("<_ _ _>").unwrap(), "");
}

#[test]
fn unknown_names_are_ignored() {
    assert_eq!(compile("<teal>x").unwrap(), "x");
    assert_eq!(compile("<red teal>x").unwrap(), "\x1b[31mx");
}

#[test]
fn mixed_text_and_tags() {
    insta::assert_snapshot!(
        visible(&compile("Status: <green>ok</>, <_ red bold>failed</>").unwrap()),
        @"Status: ESC[32mokESC[0m, ESC[1;41mfailedESC[0m"
    );
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn whitespace_inside_tag_is_discarded() {
    assert_eq!(compile("<  red   >x").unwrap(), "\x1b[31mx");
}

#[test]
fn whitespace_outside_tag_is_kept() {
    assert_eq!(compile("  <red> a  b ").unwrap(), "  \x1b[31m a  b ");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn four_rgb_channels_fail() {
    assert!(matches!(
        compile("<(1,2,3,4)>"),
        Err(MarkupError::RgbChannelCount { count: 4, .. })
    ));
}

#[test]
fn zero_rgb_channels_fail() {
    assert!(matches!(
        compile("<()>"),
        Err(MarkupError::RgbChannelCount { count: 0, .. })
    ));
}

#[test]
fn non_numeric_rgb_channel_fails() {
    assert!(matches!(
        compile("<(1, x, 3)>"),
        Err(MarkupError::InvalidRgbChannel { .. })
    ));
}

#[test]
fn unterminated_tag_fails() {
    let error = compile("text <red").unwrap_err();
    assert_eq!(
        error,
        MarkupError::UnterminatedTag {
            target: HighlightTarget::new(5..6, 6..9),
        }
    );
}

#[test]
fn try_variant_swallows_errors() {
    assert_eq!(try_format_markup("<(1,2,3,4)>"), None);
    assert_eq!(try_format_markup("ok").as_deref(), Some("ok"));
}

// ============================================================================
// Highlighting
// ============================================================================

#[test]
fn highlight_without_prior_format_is_empty() {
    let chroma = Chroma::new();
    let target = HighlightTarget::new(0..1, 0..1);
    assert_eq!(chroma.highlight_last_source(&target, None), "");
}

#[test]
fn highlight_points_at_error() {
    let mut chroma = Chroma::new();
    let error = chroma.format("see <red").unwrap_err();
    insta::assert_snapshot!(
        visible(&chroma.highlight_last_source(error.target(), None)),
        @"see ESC[31m<redESC[0m"
    );
}
