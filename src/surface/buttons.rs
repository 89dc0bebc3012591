// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Button address map.
//!
//! Every APC40 button is addressed by a note number; the track-scoped
//! buttons (record arm, solo, clip launch, ...) reuse the same note on
//! channels 0-7 to select the track, while global buttons always arrive
//! on channel 0.

/// Button note numbers
pub mod notes {
    // Track-scoped (channel 0-7 selects the track)
    pub const RECORD_ARM: u8 = 0x30;
    pub const SOLO: u8 = 0x31;
    pub const ACTIVATOR: u8 = 0x32;
    pub const TRACK_SELECTION: u8 = 0x33;
    pub const CLIP_STOP: u8 = 0x34;
    pub const CLIP_LAUNCH_1: u8 = 0x35;
    pub const CLIP_LAUNCH_2: u8 = 0x36;
    pub const CLIP_LAUNCH_3: u8 = 0x37;
    pub const CLIP_LAUNCH_4: u8 = 0x38;
    pub const CLIP_LAUNCH_5: u8 = 0x39;

    // Global
    pub const CLIP_TRACK: u8 = 0x3A;
    pub const DEVICE_ON_OFF: u8 = 0x3B;
    pub const DETAIL_VIEW: u8 = 0x3E;
    pub const REC_QUANT: u8 = 0x3F;
    pub const MIDI_OVERDUB: u8 = 0x40;
    pub const METRONOME: u8 = 0x41;
    pub const MASTER: u8 = 0x50;
    pub const STOP_ALL_CLIPS: u8 = 0x51;
    pub const SCENE_LAUNCH_1: u8 = 0x52;
    pub const SCENE_LAUNCH_2: u8 = 0x53;
    pub const SCENE_LAUNCH_3: u8 = 0x54;
    pub const SCENE_LAUNCH_4: u8 = 0x55;
    pub const SCENE_LAUNCH_5: u8 = 0x56;
    pub const PAN: u8 = 0x57;
    pub const SEND_A: u8 = 0x58;
    pub const SEND_B: u8 = 0x59;
    pub const SEND_C: u8 = 0x5A;
    pub const PLAY: u8 = 0x5B;
    pub const STOP: u8 = 0x5C;
    pub const RECORD: u8 = 0x5D;
    pub const UP: u8 = 0x5E;
    pub const DOWN: u8 = 0x5F;
    pub const RIGHT: u8 = 0x60;
    pub const LEFT: u8 = 0x61;
    pub const SHIFT: u8 = 0x62;
    pub const TAP_TEMPO: u8 = 0x63;
    pub const NUDGE_PLUS: u8 = 0x64;
    pub const NUDGE_MINUS: u8 = 0x65;
}

/// Buttons whose LEDs exist once per track; the reset sweep clears
/// these on every channel 0-7.
pub const CHANNEL_BUTTONS: [u8; 10] = [
    notes::RECORD_ARM,
    notes::SOLO,
    notes::ACTIVATOR,
    notes::TRACK_SELECTION,
    notes::CLIP_STOP,
    notes::CLIP_LAUNCH_1,
    notes::CLIP_LAUNCH_2,
    notes::CLIP_LAUNCH_3,
    notes::CLIP_LAUNCH_4,
    notes::CLIP_LAUNCH_5,
];

/// LED-bearing global buttons, cleared once on channel 0 by the reset
/// sweep. MIDI overdub and metronome are input-only here.
pub const GLOBAL_BUTTONS: [u8; 26] = [
    notes::CLIP_TRACK,
    notes::DEVICE_ON_OFF,
    notes::DETAIL_VIEW,
    notes::REC_QUANT,
    notes::MASTER,
    notes::STOP_ALL_CLIPS,
    notes::SCENE_LAUNCH_1,
    notes::SCENE_LAUNCH_2,
    notes::SCENE_LAUNCH_3,
    notes::SCENE_LAUNCH_4,
    notes::SCENE_LAUNCH_5,
    notes::PAN,
    notes::SEND_A,
    notes::SEND_B,
    notes::SEND_C,
    notes::PLAY,
    notes::STOP,
    notes::RECORD,
    notes::UP,
    notes::DOWN,
    notes::RIGHT,
    notes::LEFT,
    notes::SHIFT,
    notes::TAP_TEMPO,
    notes::NUDGE_PLUS,
    notes::NUDGE_MINUS,
];

/// Semantic button classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonType {
    // Track buttons (channel selects the track)
    RecordArm,
    Solo,
    Activator,
    TrackSelection,

    // Clip buttons (channel selects the track)
    ClipLaunch,
    ClipStop,
    ClipTrack,

    // Scene buttons
    SceneLaunch,

    // Device/navigation buttons
    DeviceOnOff,
    DetailView,

    // Recording/quantization
    RecQuant,
    MidiOverdub,
    Metronome,

    // Control buttons
    Master,
    StopAllClips,
    Pan,
    SendA,
    SendB,
    SendC,

    // Transport buttons
    Play,
    Stop,
    Record,
    TapTempo,

    // Navigation buttons
    Up,
    Down,
    Right,
    Left,

    // Modifiers
    Shift,

    // Nudge buttons
    NudgePlus,
    NudgeMinus,
}

/// Classify a note number as a button type.
///
/// Returns `None` for notes outside the APC40 button map.
pub fn button_type(note: u8) -> Option<ButtonType> {
    match note {
        notes::RECORD_ARM => Some(ButtonType::RecordArm),
        notes::SOLO => Some(ButtonType::Solo),
        notes::ACTIVATOR => Some(ButtonType::Activator),
        notes::TRACK_SELECTION => Some(ButtonType::TrackSelection),
        notes::CLIP_STOP => Some(ButtonType::ClipStop),
        notes::CLIP_LAUNCH_1..=notes::CLIP_LAUNCH_5 => Some(ButtonType::ClipLaunch),
        notes::CLIP_TRACK => Some(ButtonType::ClipTrack),
        notes::DEVICE_ON_OFF => Some(ButtonType::DeviceOnOff),
        notes::DETAIL_VIEW => Some(ButtonType::DetailView),
        notes::REC_QUANT => Some(ButtonType::RecQuant),
        notes::MIDI_OVERDUB => Some(ButtonType::MidiOverdub),
        notes::METRONOME => Some(ButtonType::Metronome),
        notes::MASTER => Some(ButtonType::Master),
        notes::STOP_ALL_CLIPS => Some(ButtonType::StopAllClips),
        notes::SCENE_LAUNCH_1..=notes::SCENE_LAUNCH_5 => Some(ButtonType::SceneLaunch),
        notes::PAN => Some(ButtonType::Pan),
        notes::SEND_A => Some(ButtonType::SendA),
        notes::SEND_B => Some(ButtonType::SendB),
        notes::SEND_C => Some(ButtonType::SendC),
        notes::PLAY => Some(ButtonType::Play),
        notes::STOP => Some(ButtonType::Stop),
        notes::RECORD => Some(ButtonType::Record),
        notes::UP => Some(ButtonType::Up),
        notes::DOWN => Some(ButtonType::Down),
        notes::RIGHT => Some(ButtonType::Right),
        notes::LEFT => Some(ButtonType::Left),
        notes::SHIFT => Some(ButtonType::Shift),
        notes::TAP_TEMPO => Some(ButtonType::TapTempo),
        notes::NUDGE_PLUS => Some(ButtonType::NudgePlus),
        notes::NUDGE_MINUS => Some(ButtonType::NudgeMinus),
        _ => None,
    }
}

/// 1-based position within a multi-instance button family.
///
/// Only the clip launch and scene launch families are indexed; every
/// other note returns `None`.
pub fn button_index(note: u8) -> Option<u8> {
    match note {
        notes::CLIP_LAUNCH_1..=notes::CLIP_LAUNCH_5 => Some(note - notes::CLIP_LAUNCH_1 + 1),
        notes::SCENE_LAUNCH_1..=notes::SCENE_LAUNCH_5 => Some(note - notes::SCENE_LAUNCH_1 + 1),
        _ => None,
    }
}

/// Human-readable button name for a note number.
///
/// Never fails: unmapped notes report an `UNKNOWN` label carrying the
/// raw hex value, so unexpected hardware input stays loggable.
pub fn button_name(note: u8) -> String {
    let name = match note {
        notes::RECORD_ARM => "RECORD_ARM",
        notes::SOLO => "SOLO",
        notes::ACTIVATOR => "ACTIVATOR",
        notes::TRACK_SELECTION => "TRACK_SELECTION",
        notes::CLIP_STOP => "CLIP_STOP",
        notes::CLIP_LAUNCH_1 => "CLIP_LAUNCH_1",
        notes::CLIP_LAUNCH_2 => "CLIP_LAUNCH_2",
        notes::CLIP_LAUNCH_3 => "CLIP_LAUNCH_3",
        notes::CLIP_LAUNCH_4 => "CLIP_LAUNCH_4",
        notes::CLIP_LAUNCH_5 => "CLIP_LAUNCH_5",
        notes::CLIP_TRACK => "CLIP_TRACK",
        notes::DEVICE_ON_OFF => "DEVICE_ON_OFF",
        notes::DETAIL_VIEW => "DETAIL_VIEW",
        notes::REC_QUANT => "REC_QUANT",
        notes::MIDI_OVERDUB => "MIDI_OVERDUB",
        notes::METRONOME => "METRONOME",
        notes::MASTER => "MASTER",
        notes::STOP_ALL_CLIPS => "STOP_ALL_CLIPS",
        notes::SCENE_LAUNCH_1 => "SCENE_LAUNCH_1",
        notes::SCENE_LAUNCH_2 => "SCENE_LAUNCH_2",
        notes::SCENE_LAUNCH_3 => "SCENE_LAUNCH_3",
        notes::SCENE_LAUNCH_4 => "SCENE_LAUNCH_4",
        notes::SCENE_LAUNCH_5 => "SCENE_LAUNCH_5",
        notes::PAN => "PAN",
        notes::SEND_A => "SEND_A",
        notes::SEND_B => "SEND_B",
        notes::SEND_C => "SEND_C",
        notes::PLAY => "PLAY",
        notes::STOP => "STOP",
        notes::RECORD => "RECORD",
        notes::UP => "UP",
        notes::DOWN => "DOWN",
        notes::RIGHT => "RIGHT",
        notes::LEFT => "LEFT",
        notes::SHIFT => "SHIFT",
        notes::TAP_TEMPO => "TAP_TEMPO",
        notes::NUDGE_PLUS => "NUDGE_PLUS",
        notes::NUDGE_MINUS => "NUDGE_MINUS",
        _ => return format!("UNKNOWN (0x{:X})", note),
    };
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_button_classification() {
        assert_eq!(button_type(notes::RECORD_ARM), Some(ButtonType::RecordArm));
        assert_eq!(button_type(notes::SOLO), Some(ButtonType::Solo));
        assert_eq!(button_type(notes::ACTIVATOR), Some(ButtonType::Activator));
        assert_eq!(button_type(notes::CLIP_STOP), Some(ButtonType::ClipStop));
    }

    #[test]
    fn test_clip_launch_range_classification() {
        for note in notes::CLIP_LAUNCH_1..=notes::CLIP_LAUNCH_5 {
            assert_eq!(button_type(note), Some(ButtonType::ClipLaunch));
        }
        assert_eq!(button_type(0x37), Some(ButtonType::ClipLaunch));
    }

    #[test]
    fn test_scene_launch_range_classification() {
        for note in notes::SCENE_LAUNCH_1..=notes::SCENE_LAUNCH_5 {
            assert_eq!(button_type(note), Some(ButtonType::SceneLaunch));
        }
    }

    #[test]
    fn test_unmapped_notes() {
        assert_eq!(button_type(0x00), None);
        assert_eq!(button_type(0x3C), None);
        assert_eq!(button_type(0x7F), None);
    }

    #[test]
    fn test_button_index() {
        assert_eq!(button_index(0x35), Some(1));
        assert_eq!(button_index(0x37), Some(3));
        assert_eq!(button_index(0x39), Some(5));
        assert_eq!(button_index(notes::SCENE_LAUNCH_1), Some(1));
        assert_eq!(button_index(notes::SCENE_LAUNCH_5), Some(5));
        // Singleton buttons are not indexed
        assert_eq!(button_index(notes::PLAY), None);
        assert_eq!(button_index(notes::RECORD_ARM), None);
    }

    #[test]
    fn test_button_name() {
        assert_eq!(button_name(notes::PLAY), "PLAY");
        assert_eq!(button_name(notes::CLIP_LAUNCH_3), "CLIP_LAUNCH_3");
        assert_eq!(button_name(0x3C), "UNKNOWN (0x3C)");
        assert_eq!(button_name(0x0A), "UNKNOWN (0xA)");
    }

    #[test]
    fn test_sweep_tables_are_disjoint() {
        for note in CHANNEL_BUTTONS {
            assert!(!GLOBAL_BUTTONS.contains(&note));
        }
        assert_eq!(CHANNEL_BUTTONS.len(), 10);
        assert_eq!(GLOBAL_BUTTONS.len(), 26);
    }

    #[test]
    fn test_sweep_tables_are_mapped() {
        // Every swept note must classify to a known button
        for note in CHANNEL_BUTTONS.iter().chain(GLOBAL_BUTTONS.iter()) {
            assert!(button_type(*note).is_some(), "unmapped note 0x{:X}", note);
        }
    }
}
