// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine: one value, one drag session, one device arbiter.
//!
//! [`Slider`] ties the smaller pieces of this crate together. The host feeds it
//! input with the latest [`RangeConfig`] and a monotonic timestamp; the slider
//! updates its value, runs the host's handlers, and answers with a
//! [`Response`] describing what the host should do next.

use kurbo::{Point, Rect};

use crate::arbiter::{ArbiterConfig, Device, DeviceArbiter};
use crate::config::{Orientation, RangeConfig, ResolvedRange};
use crate::geometry::TrackFill;
use crate::keyboard::KeyAction;
use crate::notify::{Notification, Notifier, Redraw};
use crate::session::{DragSession, SessionEnd, SessionEvent};
use crate::trace::{SliderTrace, TraceEvent, ValueSource};

/// What the host should do after feeding an event to the slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Response {
    /// The event was consumed; the host should prevent its default action.
    pub handled: bool,
    /// A handler ran and did not suppress the refresh.
    pub refresh: bool,
    /// Where the handle and fill bars belong after this event.
    ///
    /// Present whenever the value may have moved, even if `refresh` is `false`,
    /// so retained visuals can track the handle between full renders.
    pub fill: Option<TrackFill>,
    /// A touch press started a drag session.
    ///
    /// See [`ScrollWorkaround`](crate::platform::ScrollWorkaround).
    pub touch_started: bool,
}

impl Response {
    /// The event was not for the slider.
    pub const IGNORED: Self = Self {
        handled: false,
        refresh: false,
        fill: None,
        touch_started: false,
    };
}

/// Accessibility snapshot of a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderSemantics {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Current value.
    pub value: f64,
    /// Axis along which the handle travels.
    pub orientation: Orientation,
    /// Whether the slider refuses input.
    pub disabled: bool,
}

/// A single-value range slider.
///
/// The slider owns its current value and interaction state. Configuration is
/// owned by the host and passed to every event, which lets the host change
/// bounds, step, orientation, or the disabled flag at any time.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_slider::arbiter::Device;
/// use understory_slider::{RangeConfig, Slider};
///
/// let config = RangeConfig::new(0.0, 100.0);
/// let track = Rect::new(0.0, 0.0, 200.0, 20.0);
/// let mut slider = Slider::new(&config);
/// slider.on_change(|value| assert_eq!(value, 50.0));
///
/// slider.pointer_down(&config, Device::Pointer, Point::new(100.0, 10.0), 0, || track);
/// assert!(slider.wants_global_pointer());
///
/// let response = slider.pointer_up(&config, Device::Pointer, Point::new(100.0, 10.0), 16);
/// assert!(response.refresh);
/// assert_eq!(slider.value(), 50.0);
/// ```
#[derive(Debug)]
pub struct Slider<T: SliderTrace = ()> {
    value: f64,
    range: ResolvedRange,
    session: DragSession,
    arbiter: DeviceArbiter,
    notifier: Notifier,
    trace: T,
    last_event: u64,
}

impl Slider<()> {
    /// Creates a slider at the minimum of `config`.
    #[must_use]
    pub fn new(config: &RangeConfig) -> Self {
        let range = config.resolve();
        Self {
            value: range.min(),
            range,
            session: DragSession::default(),
            arbiter: DeviceArbiter::new(ArbiterConfig::default()),
            notifier: Notifier::default(),
            trace: (),
            last_event: 0,
        }
    }
}

impl<T: SliderTrace> Slider<T> {
    /// Sets the initial value, quantized to the current range.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.range.quantize(value);
        self
    }

    /// Replaces the device arbitration settings.
    #[must_use]
    pub fn with_arbiter(mut self, config: ArbiterConfig) -> Self {
        self.arbiter.set_config(config);
        self
    }

    /// Attaches a trace sink, replacing the current one.
    #[must_use]
    pub fn with_trace<U: SliderTrace>(self, trace: U) -> Slider<U> {
        Slider {
            value: self.value,
            range: self.range,
            session: self.session,
            arbiter: self.arbiter,
            notifier: self.notifier,
            trace,
            last_event: self.last_event,
        }
    }

    /// Installs the handler for committed changes.
    ///
    /// See [`notify`](crate::notify) for what the handler may return.
    pub fn on_change<F, R>(&mut self, handler: F)
    where
        F: FnMut(f64) -> R + 'static,
        R: Into<Redraw>,
    {
        self.notifier.set_on_change(handler);
    }

    /// Installs the handler for drag updates.
    pub fn on_drag<F, R>(&mut self, handler: F)
    where
        F: FnMut(f64) -> R + 'static,
        R: Into<Redraw>,
    {
        self.notifier.set_on_drag(handler);
    }

    /// Direct access to the handlers, for example to remove one.
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Replaces the device arbitration settings.
    pub fn set_arbiter_config(&mut self, config: ArbiterConfig) {
        self.arbiter.set_config(config);
    }

    /// Current value. Always inside the last resolved range.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Range resolved from the most recent configuration.
    #[must_use]
    pub fn range(&self) -> &ResolvedRange {
        &self.range
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Returns `true` while the host should route window-level pointer
    /// moves and releases to this slider.
    ///
    /// Attach window listeners when this becomes `true` and detach them when it
    /// becomes `false`.
    #[must_use]
    pub fn wants_global_pointer(&self) -> bool {
        self.session.is_active()
    }

    /// Device kind that currently owns the slider.
    #[must_use]
    pub fn owner(&self) -> Option<Device> {
        self.arbiter.owner()
    }

    /// When the pending ownership reset is due; see [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.arbiter.next_deadline()
    }

    /// Latest timestamp seen by any pointer handler or [`poll`](Self::poll).
    #[must_use]
    pub fn last_event_time(&self) -> u64 {
        self.last_event
    }

    /// Handle and fill placement for the current value.
    #[must_use]
    pub fn fill(&self) -> TrackFill {
        TrackFill::new(self.value, &self.range)
    }

    /// Accessibility snapshot under `config`.
    #[must_use]
    pub fn semantics(&self, config: &RangeConfig) -> SliderSemantics {
        let range = config.resolve();
        SliderSemantics {
            min: range.min(),
            max: range.max(),
            value: range.quantize(self.value),
            orientation: range.orientation(),
            disabled: range.is_disabled(),
        }
    }

    /// The attached trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The attached trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Re-reads `config` and re-quantizes the value against it.
    ///
    /// Every handler starts with this, so the value is back on the grid after
    /// any event even if the previous one left it off (see [`KeyAction`]).
    /// No handler runs. Returns `true` if the value moved.
    pub fn sync(&mut self, config: &RangeConfig) -> bool {
        self.range = config.resolve();
        let from = self.value;
        self.value = self.range.quantize(from);
        if self.value == from {
            return false;
        }
        self.trace.event(TraceEvent::ValueChanged {
            from,
            to: self.value,
            source: ValueSource::Config,
        });
        true
    }

    /// Sets the value from outside, quantized under `config`.
    ///
    /// No handler runs. Returns the stored value.
    pub fn set_value(&mut self, config: &RangeConfig, value: f64) -> f64 {
        self.sync(config);
        let from = self.value;
        self.value = self.range.quantize(value);
        if self.value != from {
            self.trace.event(TraceEvent::ValueChanged {
                from,
                to: self.value,
                source: ValueSource::Config,
            });
        }
        self.value
    }

    /// Applies an expired ownership reset.
    ///
    /// Hosts with a timer call this when [`next_deadline`](Self::next_deadline)
    /// passes. Returns `true` if ownership was cleared.
    pub fn poll(&mut self, now: u64) -> bool {
        self.last_event = self.last_event.max(now);
        let cleared = self.arbiter.poll(now, self.session.is_active());
        if cleared {
            self.trace.event(TraceEvent::OwnershipReset);
        }
        cleared
    }

    /// Handles a press on the slider's hit area.
    ///
    /// `track` is read once, only when a session actually starts, and held for
    /// the whole session.
    pub fn pointer_down(
        &mut self,
        config: &RangeConfig,
        device: Device,
        point: Point,
        now: u64,
        track: impl FnOnce() -> Rect,
    ) -> Response {
        self.poll(now);
        self.sync(config);
        if self.range.is_disabled() {
            self.trace.event(TraceEvent::IgnoredDisabled);
            return Response::IGNORED;
        }
        if !self.arbiter.claim(device, now) {
            self.trace.event(TraceEvent::PressRejected {
                device,
                owner: self.arbiter.owner(),
            });
            return Response::IGNORED;
        }

        let start_value = self.value;
        let event = self
            .session
            .press(&mut self.value, device, point, track(), &self.range);
        self.trace.event(TraceEvent::SessionStarted {
            device,
            start_value,
        });
        let refresh = self.dragged(start_value, event);
        Response {
            handled: true,
            refresh,
            fill: Some(self.fill()),
            touch_started: device == Device::Touch,
        }
    }

    /// Handles a move from the device driving the session.
    ///
    /// Ignored when no session is active or `device` did not start it.
    pub fn pointer_move(
        &mut self,
        config: &RangeConfig,
        device: Device,
        point: Point,
        now: u64,
    ) -> Response {
        self.poll(now);
        self.sync(config);
        if self.session.device() != Some(device) {
            return Response::IGNORED;
        }
        let from = self.value;
        let event = self.session.update(&mut self.value, point, &self.range);
        let refresh = self.dragged(from, event);
        Response {
            handled: true,
            refresh,
            fill: Some(self.fill()),
            touch_started: false,
        }
    }

    /// Handles the release that ends the session.
    ///
    /// Ignored when no session is active or `device` did not start it.
    pub fn pointer_up(
        &mut self,
        config: &RangeConfig,
        device: Device,
        point: Point,
        now: u64,
    ) -> Response {
        self.poll(now);
        self.sync(config);
        if self.session.device() != Some(device) {
            return Response::IGNORED;
        }
        let from = self.value;
        let Some(end) = self.session.release(&mut self.value, point, &self.range) else {
            return Response::IGNORED;
        };
        if self.value != from {
            self.trace.event(TraceEvent::ValueChanged {
                from,
                to: self.value,
                source: ValueSource::Drag,
            });
        }
        self.finish(end, now, false)
    }

    /// Handles a platform cancel or a lost pointer capture.
    ///
    /// The session ends at the current value. If that differs from where the
    /// session started, the change handler runs.
    pub fn pointer_cancel(&mut self, config: &RangeConfig, device: Device, now: u64) -> Response {
        self.poll(now);
        self.sync(config);
        if self.session.device() != Some(device) {
            return Response::IGNORED;
        }
        match self.session.cancel(self.value) {
            Some(end) => self.finish(end, now, true),
            None => Response::IGNORED,
        }
    }

    /// Handles a navigation key.
    ///
    /// A key whose target equals the current value is still handled, so the
    /// host suppresses its default action, but no handler runs.
    pub fn key_down(&mut self, config: &RangeConfig, action: KeyAction) -> Response {
        self.sync(config);
        if self.range.is_disabled() {
            self.trace.event(TraceEvent::IgnoredDisabled);
            return Response::IGNORED;
        }
        let from = self.value;
        let Some(value) = action.apply(&mut self.value, &self.range) else {
            return Response {
                handled: true,
                ..Response::IGNORED
            };
        };
        self.trace.event(TraceEvent::ValueChanged {
            from,
            to: value,
            source: ValueSource::Keyboard,
        });
        let refresh = self.notify(Notification::Change, value);
        Response {
            handled: true,
            refresh,
            fill: Some(self.fill()),
            touch_started: false,
        }
    }

    /// Releases everything the slider holds.
    ///
    /// Any session ends silently, ownership and the pending reset are dropped,
    /// and the handlers are removed. Afterwards
    /// [`wants_global_pointer`](Self::wants_global_pointer) is `false`.
    pub fn teardown(&mut self) {
        self.session.end();
        self.arbiter.reset();
        self.notifier.clear();
    }

    fn dragged(&mut self, from: f64, event: Option<SessionEvent>) -> bool {
        match event {
            Some(SessionEvent::Drag(value)) => {
                self.trace.event(TraceEvent::ValueChanged {
                    from,
                    to: value,
                    source: ValueSource::Drag,
                });
                self.notify(Notification::Drag, value)
            }
            None => false,
        }
    }

    fn finish(&mut self, end: SessionEnd, now: u64, cancelled: bool) -> Response {
        self.arbiter.release(now);
        self.trace.event(TraceEvent::SessionEnded {
            device: end.device,
            start_value: end.start_value,
            value: self.value,
            cancelled,
        });
        let refresh = match end.change {
            Some(value) => self.notify(Notification::Change, value),
            None => false,
        };
        Response {
            handled: true,
            refresh,
            fill: Some(self.fill()),
            touch_started: false,
        }
    }

    fn notify(&mut self, kind: Notification, value: f64) -> bool {
        let refresh = self.notifier.notify(kind, value);
        self.trace.event(TraceEvent::Notified {
            kind,
            value,
            refresh,
        });
        refresh
    }
}
