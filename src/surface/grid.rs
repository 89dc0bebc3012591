// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Clip launch grid coordinate transform.
//!
//! The 8x5 clip launch matrix is addressed on the wire by (note,
//! channel): the note selects the row within 0x35-0x39 and the channel
//! selects the track column. `to_grid` and `from_grid` convert between
//! that raw addressing and (x, y) coordinates, and are exact inverses
//! of each other. The track axis is masked to 0-7 on both paths.

use super::buttons::notes;

/// Number of track columns in the clip launch matrix.
pub const GRID_WIDTH: u8 = 8;
/// Number of clip rows in the clip launch matrix.
pub const GRID_HEIGHT: u8 = 5;

/// A position in the clip launch matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCoord {
    /// Track column (0-7)
    pub x: u8,
    /// Clip row (0-4)
    pub y: u8,
}

/// Convert a raw (note, channel) address to a grid coordinate.
///
/// Returns `None` for notes outside the clip launch range.
pub fn to_grid(note: u8, channel: u8) -> Option<GridCoord> {
    if !(notes::CLIP_LAUNCH_1..=notes::CLIP_LAUNCH_5).contains(&note) {
        return None;
    }

    Some(GridCoord {
        x: channel & 0x07,
        y: note - notes::CLIP_LAUNCH_1,
    })
}

/// Convert a grid coordinate to its raw (note, channel) address.
///
/// The row is taken modulo the grid height so the note always lands in
/// the clip launch range.
pub fn from_grid(x: u8, y: u8) -> (u8, u8) {
    (notes::CLIP_LAUNCH_1 + (y % GRID_HEIGHT), x & 0x07)
}
