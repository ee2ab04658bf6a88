// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device arbitration: keep one input device in charge of an interaction.
//!
//! Many touch platforms follow a touch gesture with synthesized mouse events.
//! Without arbitration those echoes would start a second, unwanted drag
//! session. [`DeviceArbiter`] records which device kind owns the slider and
//! refuses presses from the other kind until ownership is released and a
//! debounce window has passed.
//!
//! ## Time
//!
//! The arbiter never starts timers itself. Callers pass a monotonic timestamp
//! in milliseconds to [`claim`](DeviceArbiter::claim),
//! [`release`](DeviceArbiter::release), and [`poll`](DeviceArbiter::poll). A
//! release schedules an ownership reset at `now + debounce_ms`, visible through
//! [`next_deadline`](DeviceArbiter::next_deadline). Hosts with a timer facility
//! can arm a timer for that deadline and call `poll` when it fires; hosts
//! without one can simply rely on the next event to apply the expired reset.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::arbiter::{ArbiterConfig, Device, DeviceArbiter};
//!
//! let mut arbiter = DeviceArbiter::new(ArbiterConfig::default());
//!
//! assert!(arbiter.claim(Device::Touch, 0));
//! arbiter.release(100);
//! assert_eq!(arbiter.next_deadline(), Some(450));
//!
//! // The mouse event echoed after the touch is refused.
//! assert!(!arbiter.claim(Device::Pointer, 120));
//!
//! // After the debounce window the mouse may take over.
//! assert!(arbiter.poll(450, false));
//! assert!(arbiter.claim(Device::Pointer, 500));
//! ```

/// Default debounce window, in milliseconds, after a release.
pub const DEFAULT_DEBOUNCE_MS: u64 = 350;

/// Kind of physical input device driving an interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Device {
    /// Mouse, pen, or any other pointer that is not a touch contact.
    Pointer,
    /// Touch contact.
    Touch,
}

/// Arbitration settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// When `false`, every press is accepted and ownership is not tracked.
    ///
    /// Only turn this off on platforms known not to echo touch input as mouse input.
    pub enabled: bool,
    /// How long ownership outlives a release, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl ArbiterConfig {
    /// Sets the debounce window.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Enables or disables arbitration.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Tracks which device kind currently owns the slider.
#[derive(Clone, Debug, Default)]
pub struct DeviceArbiter {
    config: ArbiterConfig,
    owner: Option<Device>,
    reset_at: Option<u64>,
}

impl DeviceArbiter {
    /// Creates an arbiter with no owner.
    #[must_use]
    pub fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            owner: None,
            reset_at: None,
        }
    }

    /// Returns the active settings.
    #[must_use]
    pub fn config(&self) -> ArbiterConfig {
        self.config
    }

    /// Replaces the settings. Disabling arbitration drops the current owner.
    pub fn set_config(&mut self, config: ArbiterConfig) {
        self.config = config;
        if !config.enabled {
            self.reset();
        }
    }

    /// Returns the device kind that owns the slider, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Device> {
        self.owner
    }

    /// Returns when the pending ownership reset is due, if one is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.reset_at
    }

    /// Attempts to take ownership for `device`.
    ///
    /// Returns `false` if the other device kind owns the slider. A successful
    /// claim cancels any pending reset.
    pub fn claim(&mut self, device: Device, now: u64) -> bool {
        if !self.config.enabled {
            return true;
        }
        self.poll(now, false);
        match self.owner {
            Some(owner) if owner != device => false,
            _ => {
                self.owner = Some(device);
                self.reset_at = None;
                true
            }
        }
    }

    /// Schedules an ownership reset `debounce_ms` after `now`.
    ///
    /// Does nothing when no device owns the slider.
    pub fn release(&mut self, now: u64) {
        if self.config.enabled && self.owner.is_some() {
            self.reset_at = Some(now.saturating_add(self.config.debounce_ms));
        }
    }

    /// Applies the pending reset if it is due.
    ///
    /// The owner is cleared only when `pressed` is `false`; a due reset that
    /// finds a press in progress is discarded, leaving the press's own release
    /// to schedule the next one. Returns `true` if ownership was cleared.
    pub fn poll(&mut self, now: u64, pressed: bool) -> bool {
        match self.reset_at {
            Some(at) if now >= at => {
                self.reset_at = None;
                if pressed || self.owner.is_none() {
                    return false;
                }
                self.owner = None;
                true
            }
            _ => false,
        }
    }

    /// Clears ownership and any pending reset immediately.
    pub fn reset(&mut self) {
        self.owner = None;
        self.reset_at = None;
    }
}
