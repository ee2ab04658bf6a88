// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state: track one press-to-release interaction on the track.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::press`], passing the current value,
//!    the pressing device, the press position, and the track rectangle.
//! 2) On each move event, call [`DragSession::update`]; it reports a
//!    [`SessionEvent::Drag`] whenever the mapped value changes.
//! 3) Finish with [`DragSession::release`] (or [`DragSession::cancel`]); the
//!    returned [`SessionEnd`] carries the terminal change, if any.
//! 4) [`DragSession::end`] drops a session without reporting anything.
//!
//! The session never owns the value. It mutates the caller's value in place so
//! that keyboard input and configuration changes can share it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_slider::RangeConfig;
//! use understory_slider::arbiter::Device;
//! use understory_slider::session::{DragSession, SessionEvent};
//!
//! let range = RangeConfig::new(0.0, 100.0).resolve();
//! let track = Rect::new(0.0, 0.0, 100.0, 10.0);
//! let mut value = 0.0;
//! let mut session = DragSession::default();
//!
//! let event = session.press(&mut value, Device::Pointer, Point::new(50.0, 5.0), track, &range);
//! assert_eq!(event, Some(SessionEvent::Drag(50.0)));
//!
//! let event = session.update(&mut value, Point::new(90.0, 5.0), &range);
//! assert_eq!(event, Some(SessionEvent::Drag(90.0)));
//!
//! let end = session.release(&mut value, Point::new(90.0, 5.0), &range).unwrap();
//! assert_eq!(end.change, Some(90.0));
//! assert!(!session.is_active());
//! ```

use kurbo::{Point, Rect};

use crate::arbiter::Device;
use crate::config::ResolvedRange;
use crate::geometry::position_to_value;

/// Notification produced by a session step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The value changed while the handle is held.
    Drag(f64),
}

/// Summary of a finished session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionEnd {
    /// Device that drove the session.
    pub device: Device,
    /// Value when the session started.
    pub start_value: f64,
    /// Final value, present only if it differs from `start_value`.
    pub change: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Active {
    device: Device,
    start_value: f64,
    track: Rect,
}

/// Tracks the state of one drag session.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragSession {
    active: Option<Active>,
}

impl DragSession {
    /// Starts a session at `point`, snapshotting `value` and `track`.
    ///
    /// A press while a session is already active restarts it from the current value.
    pub fn press(
        &mut self,
        value: &mut f64,
        device: Device,
        point: Point,
        track: Rect,
        range: &ResolvedRange,
    ) -> Option<SessionEvent> {
        self.active = Some(Active {
            device,
            start_value: *value,
            track,
        });
        Self::apply(value, position_to_value(point, track, range)).map(SessionEvent::Drag)
    }

    /// Moves the handle to `point`, returning a drag event if the value changed.
    ///
    /// Ignored when no session is active.
    pub fn update(
        &mut self,
        value: &mut f64,
        point: Point,
        range: &ResolvedRange,
    ) -> Option<SessionEvent> {
        let active = self.active?;
        Self::apply(value, position_to_value(point, active.track, range)).map(SessionEvent::Drag)
    }

    /// Ends the session at `point`.
    ///
    /// The final value is compared against the value at press time, not the
    /// last drag value, so a press that moved the handle still reports a change
    /// even when no move followed. Returns `None` when no session is active.
    pub fn release(
        &mut self,
        value: &mut f64,
        point: Point,
        range: &ResolvedRange,
    ) -> Option<SessionEnd> {
        let active = self.active.take()?;
        *value = position_to_value(point, active.track, range);
        Some(Self::finish(active, *value))
    }

    /// Ends the session at the current value without mapping a new position.
    ///
    /// Returns `None` when no session is active.
    pub fn cancel(&mut self, value: f64) -> Option<SessionEnd> {
        let active = self.active.take()?;
        Some(Self::finish(active, value))
    }

    /// Drops the session without reporting anything.
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Device driving the active session.
    #[must_use]
    pub fn device(&self) -> Option<Device> {
        self.active.map(|a| a.device)
    }

    /// Value at the start of the active session.
    #[must_use]
    pub fn start_value(&self) -> Option<f64> {
        self.active.map(|a| a.start_value)
    }

    /// Track rectangle captured when the active session started.
    #[must_use]
    pub fn track(&self) -> Option<Rect> {
        self.active.map(|a| a.track)
    }

    fn apply(value: &mut f64, new_value: f64) -> Option<f64> {
        if new_value == *value {
            return None;
        }
        *value = new_value;
        Some(new_value)
    }

    fn finish(active: Active, value: f64) -> SessionEnd {
        SessionEnd {
            device: active.device,
            start_value: active.start_value,
            change: (value != active.start_value).then_some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Orientation, RangeConfig};

    const TRACK: Rect = Rect::new(0.0, 0.0, 100.0, 10.0);

    fn range() -> ResolvedRange {
        RangeConfig::new(0.0, 100.0).resolve()
    }

    fn at(x: f64) -> Point {
        Point::new(x, 5.0)
    }

    #[test]
    fn new_session_is_idle() {
        let session = DragSession::default();
        assert!(!session.is_active());
        assert_eq!(session.device(), None);
        assert_eq!(session.start_value(), None);
        assert_eq!(session.track(), None);
    }

    #[test]
    fn press_snapshots_start_and_track() {
        let mut session = DragSession::default();
        let mut value = 20.0;

        session.press(&mut value, Device::Touch, at(60.0), TRACK, &range());

        assert!(session.is_active());
        assert_eq!(session.device(), Some(Device::Touch));
        assert_eq!(session.start_value(), Some(20.0));
        assert_eq!(session.track(), Some(TRACK));
        assert_eq!(value, 60.0);
    }

    #[test]
    fn press_on_current_value_reports_nothing() {
        let mut session = DragSession::default();
        let mut value = 30.0;

        let event = session.press(&mut value, Device::Pointer, at(30.0), TRACK, &range());

        assert_eq!(event, None);
        assert!(session.is_active());
    }

    #[test]
    fn update_reports_only_changes() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Pointer, at(10.0), TRACK, &range());

        assert_eq!(
            session.update(&mut value, at(20.0), &range()),
            Some(SessionEvent::Drag(20.0))
        );
        assert_eq!(session.update(&mut value, at(20.2), &range()), None);
        assert_eq!(value, 20.0);
    }

    #[test]
    fn update_without_session_is_ignored() {
        let mut session = DragSession::default();
        let mut value = 5.0;

        assert_eq!(session.update(&mut value, at(80.0), &range()), None);
        assert_eq!(value, 5.0);
    }

    #[test]
    fn release_without_session_is_ignored() {
        let mut session = DragSession::default();
        let mut value = 5.0;

        assert_eq!(session.release(&mut value, at(80.0), &range()), None);
        assert_eq!(value, 5.0);
    }

    #[test]
    fn release_compares_against_session_start() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Pointer, at(40.0), TRACK, &range());

        let end = session.release(&mut value, at(40.0), &range()).unwrap();

        assert_eq!(end.start_value, 0.0);
        assert_eq!(end.change, Some(40.0));
        assert!(!session.is_active());
    }

    #[test]
    fn returning_to_start_reports_no_change() {
        let mut session = DragSession::default();
        let mut value = 50.0;
        session.press(&mut value, Device::Pointer, at(70.0), TRACK, &range());
        session.update(&mut value, at(10.0), &range());

        let end = session.release(&mut value, at(50.0), &range()).unwrap();

        assert_eq!(end.change, None);
        assert_eq!(value, 50.0);
    }

    #[test]
    fn geometry_is_held_for_the_whole_session() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Pointer, at(0.0), TRACK, &range());

        // A relayout would not be observed: the snapshot stays in use.
        session.update(&mut value, at(100.0), &range());
        assert_eq!(value, 100.0);
        assert_eq!(session.track(), Some(TRACK));
    }

    #[test]
    fn range_changes_apply_mid_session() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Pointer, at(33.0), TRACK, &range());
        assert_eq!(value, 33.0);

        let coarse = RangeConfig::new(0.0, 100.0).with_step(25.0).resolve();
        session.update(&mut value, at(40.0), &coarse);
        assert_eq!(value, 50.0);
    }

    #[test]
    fn vertical_session_maps_upward() {
        let track = Rect::new(0.0, 0.0, 10.0, 100.0);
        let range = RangeConfig::new(0.0, 100.0)
            .with_orientation(Orientation::Vertical)
            .resolve();
        let mut session = DragSession::default();
        let mut value = 0.0;

        session.press(&mut value, Device::Touch, Point::new(5.0, 25.0), track, &range);

        assert_eq!(value, 75.0);
    }

    #[test]
    fn cancel_keeps_current_value() {
        let mut session = DragSession::default();
        let mut value = 10.0;
        session.press(&mut value, Device::Touch, at(60.0), TRACK, &range());

        let end = session.cancel(value).unwrap();

        assert_eq!(end.device, Device::Touch);
        assert_eq!(end.change, Some(60.0));
        assert!(!session.is_active());
        assert_eq!(session.cancel(value), None);
    }

    #[test]
    fn end_drops_session() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Pointer, at(10.0), TRACK, &range());

        session.end();

        assert!(!session.is_active());
        assert_eq!(session.update(&mut value, at(90.0), &range()), None);
    }

    #[test]
    fn press_overwrites_previous_session() {
        let mut session = DragSession::default();
        let mut value = 0.0;
        session.press(&mut value, Device::Touch, at(10.0), TRACK, &range());
        session.update(&mut value, at(30.0), &range());

        session.press(&mut value, Device::Touch, at(50.0), TRACK, &range());

        assert_eq!(session.start_value(), Some(30.0));
        assert_eq!(value, 50.0);
    }
}
