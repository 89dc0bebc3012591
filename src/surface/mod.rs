// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! APC40 control surface address map.
//!
//! Static tables translating between raw wire addresses (note numbers,
//! controller ids, channels) and semantic identifiers (button types,
//! controller types, clip-grid coordinates). Note-space and
//! controller-space are two distinct numeric spaces: the same value can
//! name a button in one and a knob in the other.

pub mod buttons;
pub mod controllers;
pub mod grid;

pub use buttons::{button_index, button_name, button_type, ButtonType};
pub use controllers::{controller_name, controller_type, ControllerType};
pub use grid::{from_grid, to_grid, GridCoord};

/// LED state for single-color buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedState {
    Off = 0,
    On = 1,
    Blink = 2,
}

impl From<LedState> for u8 {
    fn from(state: LedState) -> u8 {
        state as u8
    }
}

/// LED color for the bi-color clip launch matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClipLedColor {
    Off = 0,
    Green = 1,
    GreenBlink = 2,
    Red = 3,
    RedBlink = 4,
    Yellow = 5,
    YellowBlink = 6,
}

impl From<ClipLedColor> for u8 {
    fn from(color: ClipLedColor) -> u8 {
        color as u8
    }
}

/// Display style for the LED rings around the device knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedRingType {
    Off = 0,
    Single = 1,
    VolumeStyle = 2,
    PanStyle = 3,
}

impl From<LedRingType> for u8 {
    fn from(ring: LedRingType) -> u8 {
        ring as u8
    }
}
