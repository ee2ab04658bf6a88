// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ui-events` adapter: translate pointer and keyboard events into slider calls.
//!
//! - Mouse, pen, and unknown pointers map to [`Device::Pointer`]; touch maps
//!   to [`Device::Touch`].
//! - Only primary-button presses start a session.
//! - Event timestamps are converted from nanoseconds to milliseconds.
//! - `Cancel` ends the session at the current value.
//! - Key releases are ignored.
//!
//! Positions are read in logical coordinates, so `track` must be expressed in
//! the same space.

use kurbo::Rect;
use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::{PointerButton, PointerEvent, PointerType};

use crate::arbiter::Device;
use crate::config::RangeConfig;
use crate::keyboard::KeyAction;
use crate::slider::{Response, Slider};
use crate::trace::SliderTrace;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Maps a `ui-events` pointer type to the arbitration device kind.
#[must_use]
pub fn device_for(pointer_type: PointerType) -> Device {
    match pointer_type {
        PointerType::Touch => Device::Touch,
        _ => Device::Pointer,
    }
}

/// Maps a logical key to a slider action.
///
/// Arrow right and arrow up increase; arrow left and arrow down decrease.
#[must_use]
pub fn key_action(key: &Key) -> Option<KeyAction> {
    let Key::Named(named) = key else {
        return None;
    };
    match named {
        NamedKey::ArrowRight | NamedKey::ArrowUp => Some(KeyAction::StepUp),
        NamedKey::ArrowLeft | NamedKey::ArrowDown => Some(KeyAction::StepDown),
        NamedKey::PageUp => Some(KeyAction::PageUp),
        NamedKey::PageDown => Some(KeyAction::PageDown),
        NamedKey::Home => Some(KeyAction::Home),
        NamedKey::End => Some(KeyAction::End),
        _ => None,
    }
}

/// Feeds a pointer event to `slider`.
///
/// `track` is only read when a press starts a session.
pub fn handle_pointer<T: SliderTrace>(
    slider: &mut Slider<T>,
    config: &RangeConfig,
    event: &PointerEvent,
    track: impl FnOnce() -> Rect,
) -> Response {
    match event {
        PointerEvent::Down(e) => {
            if !matches!(e.button, None | Some(PointerButton::Primary)) {
                return Response::IGNORED;
            }
            slider.pointer_down(
                config,
                device_for(e.pointer.pointer_type),
                e.state.logical_point(),
                e.state.time / NANOS_PER_MILLI,
                track,
            )
        }
        PointerEvent::Move(e) => slider.pointer_move(
            config,
            device_for(e.pointer.pointer_type),
            e.current.logical_point(),
            e.current.time / NANOS_PER_MILLI,
        ),
        PointerEvent::Up(e) => slider.pointer_up(
            config,
            device_for(e.pointer.pointer_type),
            e.state.logical_point(),
            e.state.time / NANOS_PER_MILLI,
        ),
        PointerEvent::Cancel(info) => {
            let now = slider.last_event_time();
            slider.pointer_cancel(config, device_for(info.pointer_type), now)
        }
        _ => Response::IGNORED,
    }
}

/// Feeds a keyboard event to `slider`.
///
/// Unrecognized keys and key releases return [`Response::IGNORED`].
pub fn handle_keyboard<T: SliderTrace>(
    slider: &mut Slider<T>,
    config: &RangeConfig,
    event: &KeyboardEvent,
) -> Response {
    if !event.state.is_down() {
        return Response::IGNORED;
    }
    match key_action(&event.key) {
        Some(action) => slider.key_down(config, action),
        None => Response::IGNORED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_is_its_own_device() {
        assert_eq!(device_for(PointerType::Touch), Device::Touch);
        assert_eq!(device_for(PointerType::Mouse), Device::Pointer);
        assert_eq!(device_for(PointerType::Pen), Device::Pointer);
    }

    #[test]
    fn navigation_keys_map_to_actions() {
        let named = |k| key_action(&Key::Named(k));
        assert_eq!(named(NamedKey::ArrowRight), Some(KeyAction::StepUp));
        assert_eq!(named(NamedKey::ArrowUp), Some(KeyAction::StepUp));
        assert_eq!(named(NamedKey::ArrowLeft), Some(KeyAction::StepDown));
        assert_eq!(named(NamedKey::ArrowDown), Some(KeyAction::StepDown));
        assert_eq!(named(NamedKey::PageUp), Some(KeyAction::PageUp));
        assert_eq!(named(NamedKey::PageDown), Some(KeyAction::PageDown));
        assert_eq!(named(NamedKey::Home), Some(KeyAction::Home));
        assert_eq!(named(NamedKey::End), Some(KeyAction::End));
        assert_eq!(named(NamedKey::Enter), None);
    }

    #[test]
    fn character_keys_are_not_handled() {
        assert_eq!(key_action(&Key::Character("a".into())), None);
    }
}
