// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for input event crates.
//!
//! Modules in this file are behind feature flags so `understory_slider` can
//! remain usable by hosts that decode their own input.
//!
//! - [`ui_events`] (`ui_events_adapter` feature): drive a [`crate::Slider`]
//!   from `ui-events` pointer and keyboard events.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
