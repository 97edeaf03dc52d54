//! Integration tests for rule painting.

use ansi::value;
use paint::{
    BetweenRule, ConditionalRule, Cursor, CustomRule, EqualityRule, PaintRule, Painter,
    RuleCondition, RulePainter, TokenTarget, paint,
};
use proptest::prelude::*;

/// Make escape characters visible for snapshots.
fn visible(styled: &str) -> String {
    styled.replace('\x1b', "ESC")
}

fn strip(styled: &str) -> String {
    let mut plain = String::new();
    let mut chars = styled.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            plain.push(ch);
        }
    }
    plain
}

fn code_rules() -> Vec<PaintRule> {
    let call = RuleCondition::next_token_is(RuleCondition::token_is_target(TokenTarget::single(
        "(",
    )));

    vec![
        BetweenRule::delimited(value::FG_GREEN, "\"", "\"").into(),
        EqualityRule::words(value::FG_BLUE, ["fn", "let"]).into(),
        ConditionalRule::new(value::FG_CYAN)
            .with_condition(RuleCondition::TokenIsNumber)
            .into(),
        ConditionalRule::new(value::FG_YELLOW)
            .with_condition(call)
            .into(),
    ]
}

// ============================================================================
// Between Rule
// ============================================================================

#[test]
fn quoted_string_is_painted() {
    let rules = [PaintRule::from(BetweenRule::delimited(value::FG_GREEN, "\"", "\""))];
    assert_eq!(
        paint("a \"bc\" d", &rules, None),
        "a \x1b[32m\"\x1b[0m\x1b[32mbc\x1b[0m\x1b[32m\"\x1b[0m d"
    );
}

#[test]
fn unclosed_range_paints_to_end() {
    let rules = [PaintRule::from(BetweenRule::delimited(value::FG_GREEN, "\"", "\""))];
    insta::assert_snapshot!(
        visible(&paint("\"a b", &rules, None)),
        @"ESC[32m\"ESC[0mESC[32maESC[0mESC[32m ESC[0mESC[32mbESC[0m"
    );
}

#[test]
fn multi_token_range_delimiters() {
    let comment = BetweenRule::new(
        value::FG_BRIGHT_BLACK,
        TokenTarget::new(["/", "*"]),
        TokenTarget::new(["*", "/"]),
    );
    let styled = paint("x /* y */ z", &[comment.into()], None);

    assert!(styled.starts_with("x "));
    assert!(styled.ends_with("\x1b[90m/\x1b[0m z"));
}

// ============================================================================
// Equality Rule
// ============================================================================

#[test]
fn double_equals_is_painted() {
    let rules = [PaintRule::from(EqualityRule::new(
        value::FG_RED,
        [TokenTarget::new(["=", "="])],
    ))];
    assert_eq!(
        paint("x==y", &rules, None),
        "x\x1b[31m=\x1b[0m\x1b[31m=\x1b[0my"
    );
}

#[test]
fn extra_paint_length_covers_following_tokens() {
    let rules = [PaintRule::from(
        EqualityRule::words(value::FG_MAGENTA, ["use"]).with_extra_paint_length(2),
    )];
    insta::assert_snapshot!(
        visible(&paint("use std x", &rules, None)),
        @"ESC[35museESC[0mESC[35m ESC[0mESC[35mstdESC[0m x"
    );
}

// ============================================================================
// Rule Sets
// ============================================================================

#[test]
fn code_highlighting() {
    insta::assert_snapshot!(
        visible(&paint("let n = max(1, \"s\");", &code_rules(), None)),
        @"ESC[34mletESC[0m n = ESC[33mmaxESC[0m(ESC[36m1ESC[0m, ESC[32m\"ESC[0mESC[32msESC[0mESC[32m\"ESC[0m);"
    );
}

#[test]
fn custom_rule_controls_state() {
    let upper_run = CustomRule::new(|state, token| {
        if !token.lexeme().chars().all(char::is_uppercase) {
            return false;
        }
        state.active_color = value::BOLD;
        state.paint_length = 2;
        true
    });
    assert_eq!(
        paint("A b", &[upper_run.into()], None),
        "\x1b[1mA\x1b[0m\x1b[1m \x1b[0mb"
    );
}

proptest! {
    #[test]
    fn painting_preserves_text(source in "\\PC*") {
        prop_assert_eq!(strip(&paint(&source, &code_rules(), None)), source);
    }
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn cursor_inside_painted_token() {
    let rules = [PaintRule::from(EqualityRule::words(value::FG_BLUE, ["let"]))];
    insta::assert_snapshot!(
        visible(&paint("let", &rules, Some(1))),
        @"ESC[34mlESC[7meESC[0mESC[34mtESC[0m"
    );
}

#[test]
fn cursor_past_end() {
    assert_eq!(paint("ab", &[], Some(2)), "ab\x1b[7m_\x1b[0m");
}

#[test]
fn cursor_on_plain_whitespace() {
    assert_eq!(paint("a b", &[], Some(1)), "a\x1b[7m \x1b[0mb");
}

#[test]
fn painter_with_cursor_and_default_color() {
    let mut painter = RulePainter::default()
        .with_default_color(value::FG_WHITE)
        .with_cursor(Cursor::new(0).with_color(value::BG_RED));

    assert_eq!(
        painter.paint("a"),
        "\x1b[37m\x1b[41ma\x1b[0m"
    );
}
