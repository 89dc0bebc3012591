// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pure encoders and parsers for APC40 wire messages.
//!
//! All encoders mask their numeric inputs to the valid bit ranges
//! (7 bits for data bytes, 4 bits for channels) rather than rejecting
//! out-of-range values, matching the wire format's native behavior.

use super::{frame, message_types, status, Apc40Mode};

/// A parsed inbound note message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteMessage {
    /// True for Note On (0x9 status nibble), false for Note Off
    pub is_note_on: bool,
    /// Note number (0-127)
    pub note: u8,
    /// Velocity (0-127)
    pub velocity: u8,
    /// Channel (0-15)
    pub channel: u8,
}

/// A parsed inbound control change message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerMessage {
    /// Controller id (0-127)
    pub control_id: u8,
    /// Controller value (0-127)
    pub value: u8,
    /// Channel (0-15)
    pub channel: u8,
}

/// Build a framed SysEx message for the APC40.
///
/// The frame is `[start, manufacturer, device, product, type, lenMSB,
/// lenLSB, ..payload, end]`. The length field covers the payload only,
/// split into two 7-bit-safe bytes because SysEx data bytes may not
/// have the high bit set.
pub fn encode_sysex(message_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(8 + payload.len());

    message.push(frame::SYSEX_START);
    message.push(frame::MANUFACTURER_ID);
    message.push(frame::DEVICE_ID);
    message.push(frame::PRODUCT_ID);
    message.push(message_type);

    let len = payload.len();
    message.push(((len >> 8) & 0x7F) as u8);
    message.push((len & 0x7F) as u8);

    message.extend_from_slice(payload);
    message.push(frame::SYSEX_END);

    message
}

/// Build the device initialization message (type 0x60).
pub fn encode_initialize(
    mode: Apc40Mode,
    version_high: u8,
    version_low: u8,
    bugfix_level: u8,
) -> Vec<u8> {
    let payload = [mode.into(), version_high, version_low, bugfix_level];
    encode_sysex(message_types::INITIALIZE, &payload)
}

/// Build a Note On message (LED on / button press).
pub fn encode_note_on(note: u8, velocity: u8, channel: u8) -> [u8; 3] {
    [
        status::NOTE_ON | (channel & 0x0F),
        note & 0x7F,
        velocity & 0x7F,
    ]
}

/// Build a Note Off message (LED off / button release).
pub fn encode_note_off(note: u8, channel: u8) -> [u8; 3] {
    [status::NOTE_OFF | (channel & 0x0F), note & 0x7F, 0x00]
}

/// Build a Control Change message (knob/fader value).
pub fn encode_control_change(control_id: u8, value: u8, channel: u8) -> [u8; 3] {
    [
        status::CONTROL_CHANGE | (channel & 0x0F),
        control_id & 0x7F,
        value & 0x7F,
    ]
}

/// Parse an inbound note message.
///
/// Returns `None` for messages shorter than 3 bytes or with a status
/// nibble that is neither Note On nor Note Off.
pub fn parse_note_message(bytes: &[u8]) -> Option<NoteMessage> {
    if bytes.len() < 3 {
        return None;
    }

    let message_status = bytes[0];
    let is_note_on = (message_status & 0xF0) == status::NOTE_ON;

    if !is_note_on && (message_status & 0xF0) != status::NOTE_OFF {
        return None;
    }

    Some(NoteMessage {
        is_note_on,
        note: bytes[1] & 0x7F,
        velocity: bytes[2] & 0x7F,
        channel: message_status & 0x0F,
    })
}

/// Parse an inbound control change message.
///
/// Returns `None` for messages shorter than 3 bytes or with a status
/// nibble other than Control Change.
pub fn parse_controller_message(bytes: &[u8]) -> Option<ControllerMessage> {
    if bytes.len() < 3 {
        return None;
    }

    let message_status = bytes[0];

    if (message_status & 0xF0) != status::CONTROL_CHANGE {
        return None;
    }

    Some(ControllerMessage {
        control_id: bytes[1] & 0x7F,
        value: bytes[2] & 0x7F,
        channel: message_status & 0x0F,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_initialize_frame() {
        let msg = encode_initialize(Apc40Mode::AlternateAbleton, 1, 0, 0);

        assert_eq!(msg.len(), 12);
        assert_eq!(msg[0], 0xF0);
        assert_eq!(&msg[1..4], &[0x47, 0x7F, 0x73]);
        assert_eq!(msg[4], 0x60);
        // Length field covers the payload only
        assert_eq!(msg[5], 0x00);
        assert_eq!(msg[6], 0x04);
        assert_eq!(&msg[7..11], &[0x42, 1, 0, 0]);
        assert_eq!(msg[11], 0xF7);
    }

    #[test]
    fn test_sysex_length_split() {
        let payload = vec![0u8; 200];
        let msg = encode_sysex(0x60, &payload);

        assert_eq!(msg[5], ((200 >> 8) & 0x7F) as u8);
        assert_eq!(msg[6], (200 & 0x7F) as u8);
        assert_eq!(msg.len(), 8 + 200);
    }

    #[test]
    fn test_encode_note_on() {
        assert_eq!(encode_note_on(0x35, 100, 5), [0x95, 0x35, 100]);
    }

    #[test]
    fn test_encode_note_off() {
        assert_eq!(encode_note_off(0x35, 5), [0x85, 0x35, 0x00]);
    }

    #[test]
    fn test_encode_control_change() {
        assert_eq!(encode_control_change(0x0E, 127, 0), [0xB0, 0x0E, 127]);
    }

    #[test]
    fn test_encode_masks_out_of_range() {
        // Note and velocity masked to 7 bits, channel to 4 bits
        assert_eq!(encode_note_on(0x85, 0xFF, 0x12), [0x92, 0x05, 0x7F]);
        assert_eq!(encode_control_change(0x80, 0x80, 16), [0xB0, 0x00, 0x00]);
    }

    #[test]
    fn test_note_round_trip() {
        for &channel in &[0u8, 5, 15] {
            for &note in &[0u8, 0x35, 0x65, 127] {
                for &velocity in &[1u8, 64, 127] {
                    let bytes = encode_note_on(note, velocity, channel);
                    let parsed = parse_note_message(&bytes).unwrap();
                    assert_eq!(
                        parsed,
                        NoteMessage {
                            is_note_on: true,
                            note,
                            velocity,
                            channel,
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn test_note_off_round_trip() {
        let bytes = encode_note_off(0x52, 3);
        let parsed = parse_note_message(&bytes).unwrap();
        assert!(!parsed.is_note_on);
        assert_eq!(parsed.note, 0x52);
        assert_eq!(parsed.velocity, 0);
        assert_eq!(parsed.channel, 3);
    }

    #[test]
    fn test_controller_round_trip() {
        for &channel in &[0u8, 7, 15] {
            for &control_id in &[0x07u8, 0x0E, 0x30, 0x43] {
                let bytes = encode_control_change(control_id, 100, channel);
                let parsed = parse_controller_message(&bytes).unwrap();
                assert_eq!(
                    parsed,
                    ControllerMessage {
                        control_id,
                        value: 100,
                        channel,
                    }
                );
            }
        }
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert_eq!(parse_note_message(&[]), None);
        assert_eq!(parse_note_message(&[0x90]), None);
        assert_eq!(parse_note_message(&[0x90, 0x35]), None);
        assert_eq!(parse_controller_message(&[0xB0, 0x07]), None);
    }

    #[test]
    fn test_parse_rejects_wrong_status() {
        // CC is not a note message and vice versa
        assert_eq!(parse_note_message(&[0xB0, 0x07, 100]), None);
        assert_eq!(parse_controller_message(&[0x90, 0x35, 100]), None);
        // Pitch bend is neither
        assert_eq!(parse_note_message(&[0xE0, 0x00, 0x40]), None);
        assert_eq!(parse_controller_message(&[0xE0, 0x00, 0x40]), None);
    }

    #[test]
    fn test_parse_masks_data_bytes() {
        let parsed = parse_note_message(&[0x90, 0xB5, 0xE4]).unwrap();
        assert_eq!(parsed.note, 0x35);
        assert_eq!(parsed.velocity, 0x64);
    }
}
