// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard stepping: discrete key presses mapped to value changes.
//!
//! Keyboard input bypasses the drag session entirely. Each recognized key
//! computes a candidate value and applies it at once; there are no
//! intermediate drag notifications.
//!
//! The large-step and small-step paths differ on purpose: large steps are
//! re-quantized, small steps are only clamped. A small step from an unaligned
//! value therefore stays unaligned until the next quantization.

use crate::config::ResolvedRange;

/// Navigation intent decoded from a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Small increment (arrow right / arrow up).
    StepUp,
    /// Small decrement (arrow left / arrow down).
    StepDown,
    /// Large increment (page up).
    PageUp,
    /// Large decrement (page down).
    PageDown,
    /// Jump to the minimum (home).
    Home,
    /// Jump to the maximum (end).
    End,
}

impl KeyAction {
    /// Computes the value this action would produce from `value`.
    #[must_use]
    pub fn target(self, value: f64, range: &ResolvedRange) -> f64 {
        match self {
            Self::PageUp => range.quantize(value + large_step(range)),
            Self::PageDown => range.quantize(value - large_step(range)),
            Self::Home => range.min(),
            Self::End => range.max(),
            Self::StepUp => (value + small_step(range)).min(range.max()),
            Self::StepDown => (value - small_step(range)).max(range.min()),
        }
    }

    /// Applies this action to `value`.
    ///
    /// Returns the new value, or `None` if the candidate equals the current
    /// value (in which case `value` is left untouched).
    pub fn apply(self, value: &mut f64, range: &ResolvedRange) -> Option<f64> {
        let candidate = self.target(*value, range);
        if candidate == *value {
            return None;
        }
        *value = candidate;
        Some(candidate)
    }
}

/// Size of a page step: the larger of `step` and a tenth of the span, or `1`
/// if both are zero.
#[must_use]
pub fn large_step(range: &ResolvedRange) -> f64 {
    let step = range.step().max(range.span() / 10.0);
    if step <= 0.0 { 1.0 } else { step }
}

/// Size of an arrow step: `step`, or a tenth of the span when continuous.
#[must_use]
pub fn small_step(range: &ResolvedRange) -> f64 {
    if range.step() > 0.0 {
        range.step()
    } else {
        range.span() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeConfig;

    fn range(min: f64, max: f64, step: f64) -> ResolvedRange {
        RangeConfig::new(min, max).with_step(step).resolve()
    }

    #[test]
    fn step_sizes() {
        assert_eq!(large_step(&range(0.0, 100.0, 1.0)), 10.0);
        assert_eq!(large_step(&range(0.0, 100.0, 25.0)), 25.0);
        assert_eq!(large_step(&range(5.0, 5.0, 0.0)), 1.0);
        assert_eq!(small_step(&range(0.0, 100.0, 2.0)), 2.0);
        assert_eq!(small_step(&range(0.0, 50.0, 0.0)), 5.0);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let r = range(0.0, 10.0, 3.0);
        let mut value = 6.0;
        assert_eq!(KeyAction::End.apply(&mut value, &r), Some(10.0));
        assert_eq!(KeyAction::Home.apply(&mut value, &r), Some(0.0));
    }

    #[test]
    fn page_steps_requantize() {
        let r = range(0.0, 100.0, 5.0);
        let mut value = 42.0;
        assert_eq!(KeyAction::PageUp.apply(&mut value, &r), Some(50.0));
        assert_eq!(KeyAction::PageDown.apply(&mut value, &r), Some(40.0));
    }

    #[test]
    fn arrow_steps_do_not_requantize() {
        let r = range(0.0, 100.0, 5.0);
        let mut value = 42.0;
        assert_eq!(KeyAction::StepUp.apply(&mut value, &r), Some(47.0));
        assert_eq!(KeyAction::StepDown.apply(&mut value, &r), Some(42.0));
    }

    #[test]
    fn arrow_steps_clamp_at_bounds() {
        let r = range(0.0, 10.0, 3.0);
        let mut value = 9.0;
        assert_eq!(KeyAction::StepUp.apply(&mut value, &r), Some(10.0));
        let mut value = 1.0;
        assert_eq!(KeyAction::StepDown.apply(&mut value, &r), Some(0.0));
    }

    #[test]
    fn unchanged_candidate_is_a_no_op() {
        let r = range(0.0, 10.0, 1.0);
        let mut value = 10.0;
        assert_eq!(KeyAction::End.apply(&mut value, &r), None);
        assert_eq!(KeyAction::StepUp.apply(&mut value, &r), None);
        assert_eq!(KeyAction::PageUp.apply(&mut value, &r), None);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn continuous_range_uses_tenth_of_span() {
        let r = range(0.0, 10.0, 0.0);
        let mut value = 5.0;
        assert_eq!(KeyAction::StepUp.apply(&mut value, &r), Some(6.0));
        assert_eq!(KeyAction::PageDown.apply(&mut value, &r), Some(5.0));
    }

    #[test]
    fn degenerate_range_never_moves() {
        let r = range(3.0, 3.0, 1.0);
        let mut value = 3.0;
        for action in [
            KeyAction::StepUp,
            KeyAction::StepDown,
            KeyAction::PageUp,
            KeyAction::PageDown,
            KeyAction::Home,
            KeyAction::End,
        ] {
            assert_eq!(action.apply(&mut value, &r), None);
        }
    }
}
