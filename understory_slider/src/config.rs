// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range configuration supplied by the host, and the resolved form the engine uses.
//!
//! The host owns a [`RangeConfig`] and may change it at any time. Every slider
//! operation takes the latest configuration and resolves it into a
//! [`ResolvedRange`] before doing anything else, so the engine never acts on a
//! stale or malformed range.
//!
//! Resolution never fails. Malformed values fall back to safe defaults:
//!
//! - A non-finite `min` becomes `0`.
//! - A non-finite `max`, or a `max` below `min`, collapses to `min`.
//! - A NaN `step` becomes `1`.
//! - `step` is then clamped to `[0, max - min]`.
//!
//! Hosts that prefer to surface these mistakes can call
//! [`RangeConfig::validate`] first.
//!
//! ```
//! use understory_slider::{Orientation, RangeConfig};
//!
//! let config = RangeConfig::new(0.0, 100.0)
//!     .with_step(f64::NAN)
//!     .with_orientation(Orientation::Vertical);
//! assert!(config.validate().is_err());
//!
//! let range = config.resolve();
//! assert_eq!(range.step(), 1.0);
//! assert_eq!(range.quantize(42.4), 42.0);
//! ```

use core::fmt;

use crate::quantize::{clamp, quantize};

/// Axis along which the handle travels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Minimum on the left, maximum on the right.
    #[default]
    Horizontal,
    /// Minimum at the bottom, maximum at the top.
    Vertical,
}

/// Host-owned slider configuration.
///
/// Defaults mirror a fresh slider: `0..=10`, step `1`, horizontal, enabled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeConfig {
    /// Lower bound of the value range.
    pub min: f64,
    /// Upper bound of the value range.
    pub max: f64,
    /// Step size. `0` means continuous values.
    pub step: f64,
    /// Axis along which the handle travels.
    pub orientation: Orientation,
    /// When set, new presses and key presses are ignored.
    pub disabled: bool,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            disabled: false,
        }
    }
}

impl RangeConfig {
    /// Creates a configuration over `min..=max` with the default step and orientation.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Sets the step size.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Reports the first problem that [`resolve`](Self::resolve) would silently repair.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBound {
                min: self.min,
                max: self.max,
            });
        }
        if self.max < self.min {
            return Err(ConfigError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.step.is_nan() || self.step < 0.0 {
            return Err(ConfigError::InvalidStep { step: self.step });
        }
        let span = self.max - self.min;
        if self.step > span {
            return Err(ConfigError::StepExceedsSpan {
                step: self.step,
                span,
            });
        }
        Ok(())
    }

    /// Resolves this configuration into the normalized form used by the engine.
    #[must_use]
    pub fn resolve(&self) -> ResolvedRange {
        let min = if self.min.is_finite() { self.min } else { 0.0 };
        let max = if self.max.is_finite() && self.max >= min {
            self.max
        } else {
            min
        };
        let step = if self.step.is_nan() { 1.0 } else { self.step };
        ResolvedRange {
            min,
            max,
            step: clamp(step, 0.0, max - min),
            orientation: self.orientation,
            disabled: self.disabled,
        }
    }
}

/// A [`RangeConfig`] after normalization.
///
/// Invariants: all fields are finite, `min <= max`, and `0 <= step <= max - min`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedRange {
    min: f64,
    max: f64,
    step: f64,
    orientation: Orientation,
    disabled: bool,
}

impl Default for ResolvedRange {
    fn default() -> Self {
        RangeConfig::default().resolve()
    }
}

impl ResolvedRange {
    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Effective step size (`0` for continuous).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Distance from `min` to `max`; never negative.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Axis along which the handle travels.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether new interactions are currently refused.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Quantizes `value` to this range.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        quantize(value, self.min, self.max, self.step)
    }

    /// Clamps `value` to this range without stepping.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }
}

/// Problems reported by [`RangeConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `min` or `max` is NaN or infinite.
    NonFiniteBound {
        /// Supplied lower bound.
        min: f64,
        /// Supplied upper bound.
        max: f64,
    },
    /// `max` is below `min`.
    InvertedBounds {
        /// Supplied lower bound.
        min: f64,
        /// Supplied upper bound.
        max: f64,
    },
    /// `step` is NaN or negative.
    InvalidStep {
        /// Supplied step.
        step: f64,
    },
    /// `step` is larger than `max - min`.
    StepExceedsSpan {
        /// Supplied step.
        step: f64,
        /// `max - min`.
        span: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound { min, max } => {
                write!(f, "range bounds must be finite (min {min}, max {max})")
            }
            Self::InvertedBounds { min, max } => {
                write!(f, "range max {max} is below min {min}")
            }
            Self::InvalidStep { step } => {
                write!(f, "step {step} must be a non-negative number")
            }
            Self::StepExceedsSpan { step, span } => {
                write!(f, "step {step} exceeds the range span {span}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
