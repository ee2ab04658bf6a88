// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time platform setup triggered by the first touch interaction.
//!
//! Some touch platforms only honor "prevent scrolling" from a touch-move
//! handler if at least one touch-move listener is already attached at the
//! window level. The fix is a no-op listener installed once per process.
//!
//! The slider does not detect platforms or touch global state. The host
//! describes its platform with [`PlatformQuirks`], owns one
//! [`ScrollWorkaround`] for all of its sliders, and forwards each slider
//! [`Response`](crate::Response) to [`ScrollWorkaround::after_response`].
//!
//! ```
//! use understory_slider::platform::{PlatformQuirks, ScrollWorkaround};
//!
//! let quirks = PlatformQuirks::default().with_touch_scroll_workaround(true);
//! let mut workaround = ScrollWorkaround::default();
//! let mut installs = 0;
//!
//! assert!(workaround.ensure(quirks, || installs += 1));
//! assert!(!workaround.ensure(quirks, || installs += 1));
//! assert_eq!(installs, 1);
//! ```

use crate::slider::Response;

/// Platform traits the host knows about.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformQuirks {
    /// The platform needs a window-level touch-move listener before touch
    /// scrolling can be prevented.
    pub touch_scroll_workaround: bool,
}

impl PlatformQuirks {
    /// Sets [`touch_scroll_workaround`](Self::touch_scroll_workaround).
    #[must_use]
    pub fn with_touch_scroll_workaround(mut self, needed: bool) -> Self {
        self.touch_scroll_workaround = needed;
        self
    }
}

/// Remembers whether the scroll workaround has been installed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollWorkaround {
    applied: bool,
}

impl ScrollWorkaround {
    /// Runs `install` if the platform needs it and it has not run yet.
    ///
    /// Returns `true` if `install` ran.
    pub fn ensure(&mut self, quirks: PlatformQuirks, install: impl FnOnce()) -> bool {
        if !quirks.touch_scroll_workaround || self.applied {
            return false;
        }
        install();
        self.applied = true;
        true
    }

    /// Calls [`ensure`](Self::ensure) when `response` started a touch session.
    pub fn after_response(
        &mut self,
        quirks: PlatformQuirks,
        response: &Response,
        install: impl FnOnce(),
    ) -> bool {
        response.touch_started && self.ensure(quirks, install)
    }

    /// Returns `true` once the workaround has been installed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_needed_never_installs() {
        let mut workaround = ScrollWorkaround::default();
        let mut ran = false;
        assert!(!workaround.ensure(PlatformQuirks::default(), || ran = true));
        assert!(!ran);
        assert!(!workaround.is_applied());
    }

    #[test]
    fn only_touch_sessions_trigger_install() {
        let quirks = PlatformQuirks::default().with_touch_scroll_workaround(true);
        let mut workaround = ScrollWorkaround::default();

        assert!(!workaround.after_response(quirks, &Response::IGNORED, || {}));
        assert!(!workaround.is_applied());

        let touch = Response {
            touch_started: true,
            ..Response::IGNORED
        };
        assert!(workaround.after_response(quirks, &touch, || {}));
        assert!(!workaround.after_response(quirks, &touch, || {}));
        assert!(workaround.is_applied());
    }
}
