// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step quantization: snap a value to the nearest step from `min`, then clamp.
//!
//! [`quantize`] is the one numeric contract the slider shares with the outside
//! world. Hosts can call it directly to pre-quantize values typed into a text
//! field, guaranteeing that what they feed back in is exactly what the slider
//! would display.
//!
//! ```
//! use understory_slider::quantize;
//!
//! assert_eq!(quantize(37.0, 0.0, 100.0, 10.0), 40.0);
//! assert_eq!(quantize(150.0, 0.0, 100.0, 0.0), 100.0);
//! assert_eq!(quantize(7.0, 50.0, 50.0, 5.0), 50.0);
//! ```
//!
//! ## Rounding
//!
//! The nearest step index is computed with `libm::round`, which rounds halves
//! away from zero. Negative indices always clamp to `min`, so this matches
//! rounding halves upward on every input. Rounding goes through `libm` in every
//! build configuration so results are bit-identical between `std` and `no_std`
//! targets.

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`], this never panics: if `min > max`, `max` wins.
/// A NaN `value` resolves to `min`.
#[must_use]
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Quantizes `value` to the step grid anchored at `min` and clamps it to `[min, max]`.
///
/// - If `max - min <= 0`, the range is degenerate and `min` is returned.
/// - If `step <= 0`, no stepping happens and `value` is only clamped.
/// - Otherwise the range is split into `steps = ceil((max - min) / step)`
///   whole steps, the nearest index is
///   `round(steps * (value - min) / (max - min))`, and `min + index * step` is
///   clamped to `[min, max]`.
///
/// When `step` evenly divides `max - min` the index is simply the nearest step
/// and the function is idempotent. Otherwise the last step is partial: it
/// clamps to `max`, and indices are spread over the whole span, so a value on
/// the grid near the top may move up a step (`0..10` step `3` maps `9` to `10`).
///
/// The function is total over finite inputs.
#[must_use]
pub fn quantize(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return min;
    }
    if step <= 0.0 {
        return clamp(value, min, max);
    }
    let steps = libm::ceil(span / step);
    let index = libm::round(steps * (value - min) / span);
    clamp(min + index * step, min, max)
}
