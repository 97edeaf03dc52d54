//! Painting state machine.
//!
//! A [`PaintingState`] is in one of three phases:
//!
//! - **Idle**: rules are tried on each token.
//! - **Counting**: a rule matched a multi-token span; the active color is
//!   kept until `paint_length` tokens have been painted.
//! - **AwaitingRangeEnd**: a between rule matched its left target; tokens
//!   keep the active color until the right target matches.
//!
//! [`PaintingState::update`] runs after every token is rendered.

use ansi::ColorObject;

use crate::token::{TokenRef, TokenTarget};

/// Derived phase of a [`PaintingState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintPhase {
    Idle,
    Counting,
    AwaitingRangeEnd,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintingState {
    /// Color used to render the current token.
    pub active_color: ColorObject,
    /// Color restored when a match finishes.
    pub default_color: ColorObject,
    /// Right target of an open range.
    pub pending_range_target: Option<TokenTarget>,
    /// Number of tokens the current match paints.
    pub paint_length: usize,
    pub default_paint_length: usize,
    /// Skips the next [`PaintingState::update`].
    pub ignore_current_token: bool,
    paint_counter: usize,
    counting: bool,
}

impl Default for PaintingState {
    fn default() -> Self {
        Self::new(ColorObject::none())
    }
}

impl PaintingState {
    pub fn new(default_color: ColorObject) -> Self {
        Self {
            active_color: default_color,
            default_color,
            pending_range_target: None,
            paint_length: 1,
            default_paint_length: 1,
            ignore_current_token: false,
            paint_counter: 0,
            counting: false,
        }
    }

    pub fn phase(&self) -> PaintPhase {
        if self.pending_range_target.is_some() {
            PaintPhase::AwaitingRangeEnd
        } else if self.counting {
            PaintPhase::Counting
        } else {
            PaintPhase::Idle
        }
    }

    pub fn paint_counter(&self) -> usize {
        self.paint_counter
    }

    /// Rules are not tried while a range is open or a span is being counted.
    pub fn should_ignore_rule_matching(&self) -> bool {
        self.phase() != PaintPhase::Idle
    }

    /// Advance the state after `token` has been rendered.
    pub fn update(&mut self, token: TokenRef<'_>) {
        if self.ignore_current_token {
            self.ignore_current_token = false;
            return;
        }

        if let Some(target) = &self.pending_range_target {
            match target.match_at(token) {
                Some(length) => {
                    log::trace!("range closed at token {}", token.index());
                    self.paint_length = length;
                }
                None => return,
            }
        }

        self.pending_range_target = None;
        self.paint_counter += 1;

        if self.paint_counter < self.paint_length {
            self.counting = true;
            return;
        }

        self.reset_state();
    }

    /// Reset everything between paint runs.
    pub fn full_reset(&mut self) {
        self.reset_state();
        self.pending_range_target = None;
        self.ignore_current_token = false;
    }

    fn reset_state(&mut self) {
        self.active_color = self.default_color;
        self.paint_length = self.default_paint_length;
        self.paint_counter = 0;
        self.counting = false;
    }
}
