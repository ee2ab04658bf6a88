// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification gate: invoke host handlers and decide whether to refresh.
//!
//! The slider reports value changes through two optional handlers, one for
//! continuous drag updates and one for committed changes. After a handler
//! runs, the host normally refreshes its view. A handler can opt out by
//! returning [`Redraw::Suppress`], which is useful for cheap state updates
//! during high-frequency drags.
//!
//! Handlers may return anything that converts into [`Redraw`]:
//!
//! - `()` requests a refresh.
//! - `bool`: `false` suppresses, `true` requests.
//! - [`Redraw`] itself.
//!
//! A missing handler is a no-op: nothing is called and no refresh is requested.
//!
//! ```
//! use understory_slider::notify::{Notifier, Redraw};
//!
//! let mut notifier = Notifier::default();
//! assert!(!notifier.change(1.0));
//!
//! notifier.set_on_change(|_| ());
//! assert!(notifier.change(1.0));
//!
//! notifier.set_on_drag(|_| Redraw::Suppress);
//! assert!(!notifier.drag(2.0));
//! ```

use alloc::boxed::Box;
use core::fmt;

/// What the host should do after a handler runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Redraw {
    /// Perform the usual refresh.
    #[default]
    Request,
    /// Skip the refresh for this notification.
    Suppress,
}

impl From<()> for Redraw {
    fn from((): ()) -> Self {
        Self::Request
    }
}

impl From<bool> for Redraw {
    fn from(refresh: bool) -> Self {
        if refresh { Self::Request } else { Self::Suppress }
    }
}

/// Which handler a notification went to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Continuous update while dragging.
    Drag,
    /// Committed change.
    Change,
}

/// Boxed value handler.
pub type ValueHandler = Box<dyn FnMut(f64) -> Redraw>;

/// Holds the optional drag and change handlers.
#[derive(Default)]
pub struct Notifier {
    on_change: Option<ValueHandler>,
    on_drag: Option<ValueHandler>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("on_change", &self.on_change.as_ref().map(|_| "<function>"))
            .field("on_drag", &self.on_drag.as_ref().map(|_| "<function>"))
            .finish()
    }
}

impl Notifier {
    /// Installs the handler for committed changes, replacing any previous one.
    pub fn set_on_change<F, R>(&mut self, mut handler: F)
    where
        F: FnMut(f64) -> R + 'static,
        R: Into<Redraw>,
    {
        self.on_change = Some(Box::new(move |value| handler(value).into()));
    }

    /// Installs the handler for drag updates, replacing any previous one.
    pub fn set_on_drag<F, R>(&mut self, mut handler: F)
    where
        F: FnMut(f64) -> R + 'static,
        R: Into<Redraw>,
    {
        self.on_drag = Some(Box::new(move |value| handler(value).into()));
    }

    /// Removes the change handler.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Removes the drag handler.
    pub fn clear_on_drag(&mut self) {
        self.on_drag = None;
    }

    /// Removes both handlers.
    pub fn clear(&mut self) {
        self.on_change = None;
        self.on_drag = None;
    }

    /// Notifies the change handler. Returns `true` if a refresh is requested.
    pub fn change(&mut self, value: f64) -> bool {
        gate(self.on_change.as_mut(), value)
    }

    /// Notifies the drag handler. Returns `true` if a refresh is requested.
    pub fn drag(&mut self, value: f64) -> bool {
        gate(self.on_drag.as_mut(), value)
    }

    /// Notifies the handler for `kind`. Returns `true` if a refresh is requested.
    pub fn notify(&mut self, kind: Notification, value: f64) -> bool {
        match kind {
            Notification::Drag => self.drag(value),
            Notification::Change => self.change(value),
        }
    }
}

fn gate(handler: Option<&mut ValueHandler>, value: f64) -> bool {
    handler.is_some_and(|handler| handler(value) != Redraw::Suppress)
}
