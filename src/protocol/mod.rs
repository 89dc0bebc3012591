// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! APC40 wire protocol.
//!
//! This module defines the byte-level vocabulary of the APC40 (SysEx
//! framing, message type ids, operating modes) and a pure codec for
//! building and parsing wire messages.

pub mod codec;

pub use codec::{
    encode_control_change, encode_initialize, encode_note_off, encode_note_on, encode_sysex,
    parse_controller_message, parse_note_message, ControllerMessage, NoteMessage,
};

/// SysEx framing and device identification bytes
pub mod frame {
    pub const SYSEX_START: u8 = 0xF0;
    pub const SYSEX_END: u8 = 0xF7;
    /// Akai Professional
    pub const MANUFACTURER_ID: u8 = 0x47;
    /// Broadcast device id
    pub const DEVICE_ID: u8 = 0x7F;
    /// APC40
    pub const PRODUCT_ID: u8 = 0x73;
}

/// SysEx message type ids
pub mod message_types {
    pub const INQUIRY_REQUEST: u8 = 0x06;
    pub const INQUIRY_RESPONSE: u8 = 0x02;
    pub const INITIALIZE: u8 = 0x60;
}

/// Channel-voice status bytes (upper nibble; lower nibble is channel 0-15)
pub mod status {
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
    pub const CONTROL_CHANGE: u8 = 0xB0;
}

/// APC40 operating mode, selected by the initialize message.
///
/// The device session always uses `AlternateAbleton`: every button is
/// momentary and all LEDs (including knob rings) are host-controlled,
/// so the firmware performs no banking or special-casing of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Apc40Mode {
    /// Generic mode (firmware-managed LEDs and banking)
    Generic = 0x40,
    /// Ableton Live mode
    AbletonLive = 0x41,
    /// Alternate Ableton mode (all buttons momentary, host owns LEDs)
    AlternateAbleton = 0x42,
}

impl From<Apc40Mode> for u8 {
    fn from(mode: Apc40Mode) -> u8 {
        mode as u8
    }
}
