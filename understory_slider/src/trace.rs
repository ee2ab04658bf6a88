// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for slider interactions.
//!
//! The slider itself keeps no history. Hosts that want to answer questions
//! like "why did this drag not start?" or "which input produced this value?"
//! can attach a [`SliderTrace`] sink with
//! [`Slider::with_trace`](crate::Slider::with_trace). The default sink is `()`,
//! which discards everything.
//!
//! [`TraceLog`] is a small recorder that keeps every event in order.

use alloc::vec::Vec;

use crate::arbiter::Device;
use crate::notify::Notification;

/// Input that produced a value change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Pointer or touch drag.
    Drag,
    /// Keyboard stepping.
    Keyboard,
    /// Host configuration change or an explicit `set_value`.
    Config,
}

/// A single observable step inside the slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TraceEvent {
    /// A press started a drag session.
    SessionStarted {
        /// Device that pressed.
        device: Device,
        /// Value before the press was mapped.
        start_value: f64,
    },
    /// A press was refused because the other device kind owns the slider.
    PressRejected {
        /// Device that pressed.
        device: Device,
        /// Device kind that currently owns the slider.
        owner: Option<Device>,
    },
    /// Input was ignored because the slider is disabled.
    IgnoredDisabled,
    /// A drag session ended.
    SessionEnded {
        /// Device that drove the session.
        device: Device,
        /// Value when the session started.
        start_value: f64,
        /// Value when the session ended.
        value: f64,
        /// `true` if the session was cancelled rather than released.
        cancelled: bool,
    },
    /// The debounce window expired and device ownership was cleared.
    OwnershipReset,
    /// The current value changed.
    ValueChanged {
        /// Previous value.
        from: f64,
        /// New value.
        to: f64,
        /// Input that caused the change.
        source: ValueSource,
    },
    /// A host handler was invoked.
    Notified {
        /// Which handler ran.
        kind: Notification,
        /// Value passed to the handler.
        value: f64,
        /// Whether the handler left the refresh in place.
        refresh: bool,
    },
}

/// A callback sink for slider tracing.
pub trait SliderTrace {
    /// Called for every traced step, in order.
    fn event(&mut self, event: TraceEvent);
}

impl SliderTrace for () {
    #[inline]
    fn event(&mut self, _event: TraceEvent) {}
}

/// Records every trace event in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        core::mem::take(&mut self.events)
    }
}

impl SliderTrace for TraceLog {
    fn event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
