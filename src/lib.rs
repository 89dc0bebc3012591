// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! APC40 control surface protocol layer.
//!
//! Wraps the Akai APC40's MIDI protocol in a typed API: a wire codec
//! for the device's SysEx and channel-voice messages, an address map
//! for its buttons, knobs, and the 8x5 clip launch grid, and a device
//! session that manages connection lifecycle, decodes hardware input
//! into semantic events, and drives the LEDs.
//!
//! ```no_run
//! use apc40::{Apc40, Apc40Event, Apc40Options, ClipLedColor};
//!
//! let mut device = Apc40::new(Apc40Options::default());
//! let events = device.subscribe();
//!
//! if device.connect() {
//!     device.set_clip_launch_color(0, 0, ClipLedColor::Green)?;
//!     for event in events {
//!         if let Apc40Event::ClipLaunch(clip) = event {
//!             println!("clip ({}, {}) pressed={}", clip.x, clip.y, clip.pressed);
//!         }
//!     }
//! }
//! # Ok::<(), apc40::Apc40Error>(())
//! ```

pub mod config;
pub mod midi;
pub mod protocol;
pub mod session;
pub mod surface;

pub use config::Apc40Options;
pub use protocol::{Apc40Mode, ControllerMessage, NoteMessage};
pub use session::{
    Apc40, Apc40Error, Apc40Event, ButtonEvent, ClipLaunchEvent, ControllerEvent,
};
pub use surface::{
    ButtonType, ClipLedColor, ControllerType, GridCoord, LedRingType, LedState,
};
