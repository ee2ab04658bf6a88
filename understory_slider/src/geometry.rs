// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry mapping between pointer coordinates, track fractions, and values.
//!
//! A *fractional position* is the handle location expressed as `0..=1` along
//! the track, measured from the minimum end. Horizontal tracks grow left to
//! right; vertical tracks grow bottom to top, so the visual top is the maximum.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_slider::RangeConfig;
//! use understory_slider::geometry::{position_to_value, value_to_position};
//!
//! let range = RangeConfig::new(0.0, 100.0).resolve();
//! let track = Rect::new(10.0, 0.0, 210.0, 20.0);
//!
//! assert_eq!(position_to_value(Point::new(110.0, 5.0), track, &range), 50.0);
//! assert_eq!(value_to_position(50.0, &range), 0.5);
//! ```

use kurbo::{Point, Rect};

use crate::config::{Orientation, ResolvedRange};
use crate::quantize::clamp;

/// Returns the fractional position of `point` along `track`.
///
/// The coordinate is clamped to the track first. A track with zero or negative
/// length yields `0`.
#[must_use]
pub fn track_fraction(point: Point, track: Rect, orientation: Orientation) -> f64 {
    let (length, delta) = match orientation {
        Orientation::Horizontal => (track.x1 - track.x0, point.x - track.x0),
        Orientation::Vertical => (track.y1 - track.y0, track.y1 - point.y),
    };
    if length <= 0.0 {
        return 0.0;
    }
    clamp(delta, 0.0, length) / length
}

/// Maps a pointer coordinate on `track` to a quantized value in `range`.
#[must_use]
pub fn position_to_value(point: Point, track: Rect, range: &ResolvedRange) -> f64 {
    let fraction = track_fraction(point, track, range.orientation());
    range.quantize(fraction * range.span() + range.min())
}

/// Maps `value` to the handle's offset along the track, as a fraction of its length.
///
/// The offset is measured the way a renderer positions the handle: from the
/// left edge for horizontal tracks and from the top edge for vertical ones.
/// A degenerate range places the handle at the minimum end.
#[must_use]
pub fn value_to_position(value: f64, range: &ResolvedRange) -> f64 {
    let fraction = value_fraction(value, range);
    match range.orientation() {
        Orientation::Horizontal => fraction,
        Orientation::Vertical => 1.0 - fraction,
    }
}

/// Fraction of the range covered by `value`, measured from `min`.
fn value_fraction(value: f64, range: &ResolvedRange) -> f64 {
    let span = range.span();
    if span <= 0.0 {
        return 0.0;
    }
    clamp((value - range.min()) / span, 0.0, 1.0)
}

/// Visual hint for placing the handle and the two fill bars.
///
/// This is cheap to compute and carries no allocation, so it can be emitted on
/// every pointer move and applied directly to retained visuals between full
/// renders. The authoritative value stays with the slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackFill {
    /// Handle offset from the left (horizontal) or top (vertical) edge, `0..=1`.
    pub handle: f64,
    /// Length of the bar between the minimum end and the handle, `0..=1`.
    pub filled: f64,
    /// Length of the bar between the handle and the maximum end, `0..=1`.
    pub remaining: f64,
    /// Axis the fractions apply to.
    pub orientation: Orientation,
}

impl TrackFill {
    /// Computes the fill for `value` in `range`.
    #[must_use]
    pub fn new(value: f64, range: &ResolvedRange) -> Self {
        let fraction = value_fraction(value, range);
        Self {
            handle: value_to_position(value, range),
            filled: fraction,
            remaining: 1.0 - fraction,
            orientation: range.orientation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeConfig;

    fn horizontal(min: f64, max: f64, step: f64) -> ResolvedRange {
        RangeConfig::new(min, max).with_step(step).resolve()
    }

    fn vertical(min: f64, max: f64, step: f64) -> ResolvedRange {
        RangeConfig::new(min, max)
            .with_step(step)
            .with_orientation(Orientation::Vertical)
            .resolve()
    }

    const TRACK: Rect = Rect::new(100.0, 50.0, 300.0, 250.0);

    #[test]
    fn horizontal_fraction_clamps_to_track() {
        let o = Orientation::Horizontal;
        assert_eq!(track_fraction(Point::new(100.0, 0.0), TRACK, o), 0.0);
        assert_eq!(track_fraction(Point::new(150.0, 0.0), TRACK, o), 0.25);
        assert_eq!(track_fraction(Point::new(300.0, 0.0), TRACK, o), 1.0);
        assert_eq!(track_fraction(Point::new(-50.0, 0.0), TRACK, o), 0.0);
        assert_eq!(track_fraction(Point::new(900.0, 0.0), TRACK, o), 1.0);
    }

    #[test]
    fn vertical_fraction_grows_upward() {
        let o = Orientation::Vertical;
        assert_eq!(track_fraction(Point::new(0.0, 250.0), TRACK, o), 0.0);
        assert_eq!(track_fraction(Point::new(0.0, 200.0), TRACK, o), 0.25);
        assert_eq!(track_fraction(Point::new(0.0, 50.0), TRACK, o), 1.0);
        assert_eq!(track_fraction(Point::new(0.0, 0.0), TRACK, o), 1.0);
    }

    #[test]
    fn zero_length_track_maps_to_min() {
        let flat = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(
            track_fraction(Point::new(50.0, 50.0), flat, Orientation::Horizontal),
            0.0
        );
        assert_eq!(
            position_to_value(Point::new(50.0, 50.0), flat, &horizontal(5.0, 15.0, 1.0)),
            5.0
        );
    }

    #[test]
    fn position_maps_into_range_and_quantizes() {
        let range = horizontal(0.0, 100.0, 10.0);
        assert_eq!(position_to_value(Point::new(173.0, 0.0), TRACK, &range), 40.0);

        let range = vertical(-1.0, 1.0, 0.0);
        assert_eq!(position_to_value(Point::new(0.0, 150.0), TRACK, &range), 0.0);
    }

    #[test]
    fn value_to_position_inverts_vertical() {
        assert_eq!(value_to_position(25.0, &horizontal(0.0, 100.0, 1.0)), 0.25);
        assert_eq!(value_to_position(25.0, &vertical(0.0, 100.0, 1.0)), 0.75);
        assert_eq!(value_to_position(500.0, &horizontal(0.0, 100.0, 1.0)), 1.0);
    }

    #[test]
    fn value_to_position_degenerate_range() {
        assert_eq!(value_to_position(5.0, &horizontal(5.0, 5.0, 1.0)), 0.0);
        assert_eq!(value_to_position(5.0, &vertical(5.0, 5.0, 1.0)), 1.0);
    }

    #[test]
    fn round_trip_through_track() {
        let range = horizontal(0.0, 100.0, 1.0);
        for value in [0.0, 13.0, 50.0, 99.0, 100.0] {
            let x = TRACK.x0 + value_to_position(value, &range) * TRACK.width();
            assert_eq!(position_to_value(Point::new(x, 0.0), TRACK, &range), value);
        }
    }

    #[test]
    fn fill_splits_the_track() {
        let fill = TrackFill::new(25.0, &horizontal(0.0, 100.0, 1.0));
        assert_eq!(fill.handle, 0.25);
        assert_eq!(fill.filled, 0.25);
        assert_eq!(fill.remaining, 0.75);

        let fill = TrackFill::new(25.0, &vertical(0.0, 100.0, 1.0));
        assert_eq!(fill.handle, 0.75);
        assert_eq!(fill.filled, 0.25);
        assert_eq!(fill.remaining, 0.75);
        assert_eq!(fill.orientation, Orientation::Vertical);
    }
}
