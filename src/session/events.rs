// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session events and the subscriber dispatch mechanism.
//!
//! Consumers subscribe to a session and receive decoded hardware
//! events plus connection lifecycle notifications over a standard mpsc
//! channel, keeping the session decoupled from any particular listener.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// A button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Note number (0-127)
    pub note: u8,
    /// Velocity (0-127); presses carry the strike velocity
    pub velocity: u8,
    /// Channel (0-15); selects the track for track-scoped buttons
    pub channel: u8,
}

/// A knob or fader movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerEvent {
    /// Controller id (0-127)
    pub control_id: u8,
    /// Controller value (0-127)
    pub value: u8,
    /// Channel (0-15)
    pub channel: u8,
}

/// A press or release in the clip launch matrix, in grid coordinates.
///
/// Emitted in addition to the raw [`ButtonEvent`] whenever the note
/// falls in the clip launch range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipLaunchEvent {
    /// Track column (0-7)
    pub x: u8,
    /// Clip row (0-4)
    pub y: u8,
    /// True on press, false on release
    pub pressed: bool,
}

/// Everything a session can notify its subscribers about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Apc40Event {
    /// The session reached the connected state
    Connected,
    /// The session was disconnected
    Disconnected,
    /// A connection or transport failure, described for diagnostics
    Error(String),
    /// Button pressed
    ButtonDown(ButtonEvent),
    /// Button released
    ButtonUp(ButtonEvent),
    /// Knob or fader moved
    Controller(ControllerEvent),
    /// Clip launch matrix press or release
    ClipLaunch(ClipLaunchEvent),
}

/// Fans session events out to every live subscriber.
///
/// Subscribers that have dropped their receiver are pruned on the next
/// emit. Shared between the session and the transport input callback,
/// which runs on the transport's delivery context.
pub struct EventDispatcher {
    subscribers: Mutex<Vec<Sender<Apc40Event>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&self) -> Receiver<Apc40Event> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Deliver an event to every live subscriber.
    pub fn emit(&self, event: Apc40Event) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_emit() {
        let dispatcher = EventDispatcher::new();
        let rx = dispatcher.subscribe();

        dispatcher.emit(Apc40Event::Connected);

        assert_eq!(rx.try_recv(), Ok(Apc40Event::Connected));
    }

    #[test]
    fn test_fan_out_to_all_subscribers() {
        let dispatcher = EventDispatcher::new();
        let rx1 = dispatcher.subscribe();
        let rx2 = dispatcher.subscribe();

        let event = Apc40Event::ButtonDown(ButtonEvent {
            note: 0x35,
            velocity: 100,
            channel: 5,
        });
        dispatcher.emit(event.clone());

        assert_eq!(rx1.try_recv(), Ok(event.clone()));
        assert_eq!(rx2.try_recv(), Ok(event));
    }

    #[test]
    fn test_dead_subscribers_are_pruned() {
        let dispatcher = EventDispatcher::new();
        let rx1 = dispatcher.subscribe();
        let rx2 = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 2);

        drop(rx1);
        dispatcher.emit(Apc40Event::Disconnected);

        assert_eq!(dispatcher.subscriber_count(), 1);
        assert_eq!(rx2.try_recv(), Ok(Apc40Event::Disconnected));
    }

    #[test]
    fn test_emit_with_no_subscribers() {
        let dispatcher = EventDispatcher::new();
        // Must not panic
        dispatcher.emit(Apc40Event::Error("nothing listening".to_string()));
    }
}
