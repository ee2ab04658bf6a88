// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a renderer-agnostic single-value range slider engine.
//!
//! This crate holds the interaction logic of a slider: step quantization,
//! pointer-to-value mapping, drag sessions, keyboard stepping, and arbitration
//! between touch input and the mouse events many platforms synthesize after
//! it. Drawing, layout, and event delivery stay with the host.
//!
//! - [`quantize`](mod@quantize): snap a value to the step grid and clamp it.
//! - [`config`]: host-owned [`RangeConfig`] and its normalized [`ResolvedRange`].
//! - [`geometry`]: map pointer coordinates to values and values to handle offsets.
//! - [`arbiter`]: keep one device kind in charge, with a debounce window.
//! - [`session`]: press, move, release, and cancel of one drag.
//! - [`keyboard`]: arrow, page, home, and end stepping.
//! - [`notify`]: drag and change handlers, with optional refresh suppression.
//! - [`platform`]: one-time touch scroll workaround.
//! - [`trace`]: opt-in record of what the slider did and why.
//! - [`adapters`]: feature-gated translation from `ui-events`.
//!
//! ## Usage
//!
//! The host keeps a [`RangeConfig`], passes it to every call, and reads the
//! value back from the [`Slider`]. Timestamps are monotonic milliseconds.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_slider::arbiter::Device;
//! use understory_slider::{KeyAction, RangeConfig, Redraw, Slider};
//!
//! let config = RangeConfig::new(0.0, 100.0).with_step(5.0);
//! let track = Rect::new(0.0, 0.0, 200.0, 24.0);
//!
//! let changes = Rc::new(RefCell::new(Vec::new()));
//! let mut slider = Slider::new(&config);
//! let sink = changes.clone();
//! slider.on_change(move |value| sink.borrow_mut().push(value));
//! // Drag updates are cheap to apply; skip the full refresh for them.
//! slider.on_drag(|_| Redraw::Suppress);
//!
//! slider.pointer_down(&config, Device::Pointer, Point::new(62.0, 12.0), 0, || track);
//! let moved = slider.pointer_move(&config, Device::Pointer, Point::new(150.0, 12.0), 16);
//! assert!(!moved.refresh);
//! assert_eq!(moved.fill.map(|fill| fill.handle), Some(0.75));
//! slider.pointer_up(&config, Device::Pointer, Point::new(150.0, 12.0), 32);
//!
//! slider.key_down(&config, KeyAction::PageDown);
//!
//! assert_eq!(*changes.borrow(), [75.0, 65.0]);
//! assert_eq!(slider.value(), 65.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile Kurbo with the standard library.
//! - `libm`: compile Kurbo for `no_std` targets.
//! - `ui_events_adapter` (default): [`adapters::ui_events`].
//!
//! This crate is `no_std` and uses `alloc` for boxed handlers and the trace log.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod arbiter;
pub mod config;
pub mod geometry;
pub mod keyboard;
pub mod notify;
pub mod platform;
pub mod quantize;
pub mod session;
pub mod slider;
pub mod trace;

pub use config::{ConfigError, Orientation, RangeConfig, ResolvedRange};
pub use geometry::{TrackFill, position_to_value, value_to_position};
pub use keyboard::KeyAction;
pub use notify::Redraw;
pub use quantize::{clamp, quantize};
pub use slider::{Response, Slider, SliderSemantics};
