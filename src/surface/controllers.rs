// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Controller (knob/fader) address map.
//!
//! Controller ids live in a separate numeric space from button notes:
//! 0x30 is TRACK_KNOB_1 here and RECORD_ARM there. Per-track
//! controllers (track level, knob banks) are disambiguated by channel.

/// Controller ids
pub mod ids {
    pub const TRACK_LEVEL: u8 = 0x07;
    pub const MASTER_LEVEL: u8 = 0x0E;
    pub const CROSSFADER: u8 = 0x0F;
    pub const DEVICE_KNOB_1: u8 = 0x10;
    pub const DEVICE_KNOB_8: u8 = 0x17;
    /// LED ring type ids run parallel to the device knobs
    pub const LED_RING_BASE: u8 = 0x18;
    pub const CUE_LEVEL: u8 = 0x2F;
    pub const TRACK_KNOB_1: u8 = 0x30;
    pub const TRACK_KNOB_8: u8 = 0x37;
    pub const FOOTSWITCH_1: u8 = 0x40;
    pub const FOOTSWITCH_2: u8 = 0x43;
}

/// Semantic controller classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerType {
    TrackLevel,
    MasterLevel,
    Crossfader,
    DeviceKnob,
    TrackKnob,
    Footswitch,
    CueLevel,
}

/// Classify a controller id.
///
/// Returns `None` for ids outside the APC40 controller map.
pub fn controller_type(control_id: u8) -> Option<ControllerType> {
    match control_id {
        ids::TRACK_LEVEL => Some(ControllerType::TrackLevel),
        ids::MASTER_LEVEL => Some(ControllerType::MasterLevel),
        ids::CROSSFADER => Some(ControllerType::Crossfader),
        ids::DEVICE_KNOB_1..=ids::DEVICE_KNOB_8 => Some(ControllerType::DeviceKnob),
        ids::TRACK_KNOB_1..=ids::TRACK_KNOB_8 => Some(ControllerType::TrackKnob),
        ids::FOOTSWITCH_1 | ids::FOOTSWITCH_2 => Some(ControllerType::Footswitch),
        ids::CUE_LEVEL => Some(ControllerType::CueLevel),
        _ => None,
    }
}

/// Human-readable controller name, optionally channel-aware.
///
/// With a channel, per-track controllers get a computed label: track
/// level reports the 1-based track, device knobs report the 1-based
/// knob position in the bank. Never fails; unmapped ids report an
/// `UNKNOWN` label with the raw hex value.
pub fn controller_name(control_id: u8, channel: Option<u8>) -> String {
    if let Some(ch) = channel {
        if control_id == ids::TRACK_LEVEL {
            return format!("TRACK_LEVEL_{}", ch + 1);
        }
        if (ids::DEVICE_KNOB_1..=ids::DEVICE_KNOB_8).contains(&control_id) {
            return format!("DEVICE_KNOB_{}", control_id - ids::DEVICE_KNOB_1 + 1);
        }
    }

    let name = match control_id {
        ids::TRACK_LEVEL => "TRACK_LEVEL",
        ids::MASTER_LEVEL => "MASTER_LEVEL",
        ids::CROSSFADER => "CROSSFADER",
        ids::CUE_LEVEL => "CUE_LEVEL",
        ids::FOOTSWITCH_1 => "FOOTSWITCH_1",
        ids::FOOTSWITCH_2 => "FOOTSWITCH_2",
        ids::DEVICE_KNOB_1..=ids::DEVICE_KNOB_8 => {
            return format!("DEVICE_KNOB_{}", control_id - ids::DEVICE_KNOB_1 + 1);
        }
        ids::TRACK_KNOB_1..=ids::TRACK_KNOB_8 => {
            return format!("TRACK_KNOB_{}", control_id - ids::TRACK_KNOB_1 + 1);
        }
        _ => return format!("UNKNOWN (0x{:X})", control_id),
    };
    name.to_string()
}
