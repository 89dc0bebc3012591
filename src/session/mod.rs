// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! APC40 device session.
//!
//! Owns the connection lifecycle (port resolution, initialization
//! handshake, reset sweep, teardown), decodes inbound messages into
//! semantic events for subscribers, and exposes the outbound LED and
//! controller commands.
//!
//! The session always initializes the device into alternate Ableton
//! mode: every button is momentary and all LEDs (including the knob
//! rings) are host-controlled, so no firmware-side banking or
//! special-casing has to be accounted for.

pub mod events;

pub use events::{Apc40Event, ButtonEvent, ClipLaunchEvent, ControllerEvent, EventDispatcher};

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use thiserror::Error;

use crate::config::Apc40Options;
use crate::midi::{list_inputs, list_outputs, InputConnection, MidiOutput, MidiTransport, MidirTransport};
use crate::protocol::{codec, Apc40Mode};
use crate::surface::{buttons, controllers::ids, grid, ClipLedColor, LedRingType, LedState};

/// Operating mode sent in the initialization handshake. Fixed, not
/// configurable.
const SESSION_MODE: Apc40Mode = Apc40Mode::AlternateAbleton;
const VERSION_HIGH: u8 = 1;
const VERSION_LOW: u8 = 0;
const BUGFIX_LEVEL: u8 = 0;

/// Session-level errors.
#[derive(Debug, Error)]
pub enum Apc40Error {
    /// No MIDI port matched the configured device name at connect time.
    #[error("could not find APC40 device; available inputs: [{inputs}], available outputs: [{outputs}]")]
    DeviceNotFound { inputs: String, outputs: String },

    /// An outbound operation was invoked while disconnected.
    #[error("not connected to APC40")]
    NotConnected,

    /// The transport failed while opening a connection.
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
}

/// An APC40 device session.
///
/// Created disconnected; [`connect`](Apc40::connect) resolves the MIDI
/// ports by name, performs the initialization handshake and reset
/// sweep, and starts delivering decoded events to subscribers.
pub struct Apc40 {
    options: Apc40Options,
    transport: Box<dyn MidiTransport>,
    input: Option<Box<dyn InputConnection>>,
    output: Option<Box<dyn MidiOutput>>,
    dispatcher: Arc<EventDispatcher>,
    connected: bool,
}

impl Apc40 {
    /// Create a session over the system MIDI transport.
    pub fn new(options: Apc40Options) -> Self {
        let transport = MidirTransport::new(options.client_name.clone());
        Self::with_transport(options, Box::new(transport))
    }

    /// Create a session over a custom transport (used by tests and
    /// embedders with their own MIDI plumbing).
    pub fn with_transport(options: Apc40Options, transport: Box<dyn MidiTransport>) -> Self {
        Self {
            options,
            transport,
            input: None,
            output: None,
            dispatcher: Arc::new(EventDispatcher::new()),
            connected: false,
        }
    }

    /// Register a subscriber for session events.
    pub fn subscribe(&self) -> Receiver<Apc40Event> {
        self.dispatcher.subscribe()
    }

    /// Whether the session is currently connected.
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// List all available MIDI input port names.
    pub fn list_inputs() -> Vec<String> {
        list_inputs()
    }

    /// List all available MIDI output port names.
    pub fn list_outputs() -> Vec<String> {
        list_outputs()
    }

    /// Connect to the device.
    ///
    /// Resolves input and output ports by substring match against the
    /// configured device name, opens both, sends the initialization
    /// frame, and runs the reset sweep. Emits `Connected` and returns
    /// true on success; emits `Error` and returns false otherwise,
    /// leaving the session disconnected.
    pub fn connect(&mut self) -> bool {
        match self.try_connect() {
            Ok(()) => {
                tracing::info!("Connected to {}", self.options.device_name);
                self.dispatcher.emit(Apc40Event::Connected);
                true
            }
            Err(e) => {
                tracing::warn!("APC40 connection failed: {}", e);
                self.dispatcher.emit(Apc40Event::Error(e.to_string()));
                false
            }
        }
    }

    fn try_connect(&mut self) -> Result<(), Apc40Error> {
        let inputs = self.transport.input_port_names();
        let outputs = self.transport.output_port_names();

        let input_name = inputs
            .iter()
            .find(|name| name.contains(&self.options.device_name))
            .cloned();
        let output_name = outputs
            .iter()
            .find(|name| name.contains(&self.options.device_name))
            .cloned();

        let (input_name, output_name) = match (input_name, output_name) {
            (Some(input_name), Some(output_name)) => (input_name, output_name),
            _ => {
                return Err(Apc40Error::DeviceNotFound {
                    inputs: inputs.join(", "),
                    outputs: outputs.join(", "),
                })
            }
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let input = self.transport.connect_input(
            &input_name,
            Box::new(move |bytes| dispatch_message(&dispatcher, bytes)),
        )?;
        // If the output fails to open, the input connection is dropped
        // again and the session stays disconnected.
        let output = self.transport.connect_output(&output_name)?;

        self.input = Some(input);
        self.output = Some(output);
        self.connected = true;

        self.initialize();
        self.reset_surface();
        Ok(())
    }

    /// Disconnect from the device.
    ///
    /// Closes both connections if open and emits `Disconnected`
    /// unconditionally; safe to call repeatedly.
    pub fn disconnect(&mut self) {
        self.input = None;
        self.output = None;
        self.connected = false;
        tracing::info!("Disconnected from {}", self.options.device_name);
        self.dispatcher.emit(Apc40Event::Disconnected);
    }

    /// Send the initialization handshake (fixed mode, version 1.0.0).
    fn initialize(&mut self) {
        let message =
            codec::encode_initialize(SESSION_MODE, VERSION_HIGH, VERSION_LOW, BUGFIX_LEVEL);
        self.send_best_effort(&message);
    }

    /// Reset every LED and controller to its default state.
    ///
    /// Best-effort device hygiene after the handshake: individual send
    /// failures are counted and logged but never abort the sweep or
    /// the surrounding connect.
    fn reset_surface(&mut self) {
        let mut failures = 0usize;

        // Track-scoped button LEDs, one per channel
        for note in buttons::CHANNEL_BUTTONS {
            for channel in 0..8 {
                if !self.send_best_effort(&codec::encode_note_on(note, 0, channel)) {
                    failures += 1;
                }
            }
        }

        // Global button LEDs
        for note in buttons::GLOBAL_BUTTONS {
            if !self.send_best_effort(&codec::encode_note_on(note, 0, 0)) {
                failures += 1;
            }
        }

        // Per-channel track levels
        for channel in 0..8 {
            if !self.send_best_effort(&codec::encode_control_change(ids::TRACK_LEVEL, 0, channel))
            {
                failures += 1;
            }
        }

        // Global levels, knob banks, footswitches
        let globals = [ids::MASTER_LEVEL, ids::CROSSFADER, ids::CUE_LEVEL];
        let knobs = (ids::DEVICE_KNOB_1..=ids::DEVICE_KNOB_8)
            .chain(ids::TRACK_KNOB_1..=ids::TRACK_KNOB_8);
        let footswitches = [ids::FOOTSWITCH_1, ids::FOOTSWITCH_2];

        for control_id in globals.into_iter().chain(knobs).chain(footswitches) {
            if !self.send_best_effort(&codec::encode_control_change(control_id, 0, 0)) {
                failures += 1;
            }
        }

        if failures > 0 {
            tracing::warn!("Reset sweep completed with {} failed sends", failures);
        }
    }

    /// Set a single-color button LED.
    pub fn set_led(&mut self, note: u8, state: LedState, channel: u8) -> Result<(), Apc40Error> {
        self.send_command(&codec::encode_note_on(note, state.into(), channel))
    }

    /// Set a clip launch LED color by raw note address.
    pub fn set_clip_led(
        &mut self,
        note: u8,
        color: ClipLedColor,
        channel: u8,
    ) -> Result<(), Apc40Error> {
        self.send_command(&codec::encode_note_on(note, color.into(), channel))
    }

    /// Set a clip launch LED color by grid coordinate.
    pub fn set_clip_launch_color(
        &mut self,
        x: u8,
        y: u8,
        color: ClipLedColor,
    ) -> Result<(), Apc40Error> {
        let (note, channel) = grid::from_grid(x, y);
        self.send_command(&codec::encode_note_on(note, color.into(), channel))
    }

    /// Turn an LED off.
    pub fn clear_led(&mut self, note: u8, channel: u8) -> Result<(), Apc40Error> {
        self.send_command(&codec::encode_note_off(note, channel))
    }

    /// Set a controller (knob, fader, LED ring) value.
    pub fn set_controller(
        &mut self,
        control_id: u8,
        value: u8,
        channel: u8,
    ) -> Result<(), Apc40Error> {
        self.send_command(&codec::encode_control_change(control_id, value, channel))
    }

    /// Set the LED ring style around a device knob (0-7).
    pub fn set_led_ring_type(
        &mut self,
        knob_index: u8,
        ring_type: LedRingType,
        channel: u8,
    ) -> Result<(), Apc40Error> {
        let control_id = ids::LED_RING_BASE + (knob_index & 0x07);
        self.set_controller(control_id, ring_type.into(), channel)
    }

    /// Send an outbound command message.
    ///
    /// Requires the connected state; transport send failures are
    /// logged and swallowed, never surfaced to the caller.
    fn send_command(&mut self, message: &[u8]) -> Result<(), Apc40Error> {
        if !self.connected {
            return Err(Apc40Error::NotConnected);
        }
        self.send_best_effort(message);
        Ok(())
    }

    fn send_best_effort(&mut self, message: &[u8]) -> bool {
        match self.output.as_mut() {
            Some(output) => match output.send(message) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("MIDI send failed: {}", e);
                    false
                }
            },
            None => false,
        }
    }
}

/// Decode one inbound wire message and notify subscribers.
///
/// Note On with velocity > 0 is a press; Note Off or Note On with
/// velocity 0 is a release. Notes in the clip launch range emit an
/// additional grid-coordinate event. Messages outside the interpreted
/// subset are ignored.
fn dispatch_message(dispatcher: &EventDispatcher, bytes: &[u8]) {
    if let Some(note_message) = codec::parse_note_message(bytes) {
        let event = ButtonEvent {
            note: note_message.note,
            velocity: note_message.velocity,
            channel: note_message.channel,
        };
        let pressed = note_message.is_note_on && note_message.velocity > 0;

        if pressed {
            dispatcher.emit(Apc40Event::ButtonDown(event));
        } else {
            dispatcher.emit(Apc40Event::ButtonUp(event));
        }

        if let Some(coord) = grid::to_grid(note_message.note, note_message.channel) {
            dispatcher.emit(Apc40Event::ClipLaunch(ClipLaunchEvent {
                x: coord.x,
                y: coord.y,
                pressed,
            }));
        }
        return;
    }

    if let Some(cc) = codec::parse_controller_message(bytes) {
        dispatcher.emit(Apc40Event::Controller(ControllerEvent {
            control_id: cc.control_id,
            value: cc.value,
            channel: cc.channel,
        }));
    }
}
