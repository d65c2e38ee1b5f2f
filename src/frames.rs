//! Boot animation frames
//!
//! Frames are raw buffers, so they bypass character encoding and can light
//! any segment combination. `0x40` is the middle bar.

use crate::display::DisplayBuffer;

/// One animation keyframe.
pub type Frame = DisplayBuffer;

const BAR: u8 = 0x40;

/// Dash bouncing across the digits while waiting for configuration.
pub const AWAITING_FRAMES: [Frame; 6] = [
    [BAR, 0, 0, 0, 0],
    [0, BAR, 0, 0, 0],
    [0, 0, 0, BAR, 0],
    [0, 0, 0, 0, BAR],
    [0, 0, 0, BAR, 0],
    [0, BAR, 0, 0, 0],
];

/// All four dashes flashing twice.
pub const TRANSITION_FRAMES: [Frame; 8] = [
    [BAR, BAR, 0, BAR, BAR],
    [BAR, BAR, 0, BAR, BAR],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [BAR, BAR, 0, BAR, BAR],
    [BAR, BAR, 0, BAR, BAR],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

/// How a frame set is replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Playback {
    /// Wrap to the first frame after the last
    Cyclic,
    /// Play each frame once, then finish
    Once,
}

/// Ordered frames with a replay mode
#[derive(Debug, Clone, Copy)]
pub struct FrameSet {
    pub frames: &'static [Frame],
    pub playback: Playback,
}

impl FrameSet {
    pub const AWAITING: Self = Self {
        frames: &AWAITING_FRAMES,
        playback: Playback::Cyclic,
    };

    pub const TRANSITION: Self = Self {
        frames: &TRANSITION_FRAMES,
        playback: Playback::Once,
    };

    /// Number of frames in the set.
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the final frame.
    pub const fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Frame at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&'static Frame> {
        self.frames.get(index)
    }

    /// Index that follows `index`.
    ///
    /// Cyclic sets wrap; once sets run to `len()` which marks the end.
    pub const fn next_index(&self, index: usize) -> usize {
        match self.playback {
            Playback::Cyclic => (index + 1) % self.frames.len(),
            Playback::Once => index + 1,
        }
    }

    /// Check if `index` is past the end of a once set.
    pub const fn is_finished(&self, index: usize) -> bool {
        matches!(self.playback, Playback::Once) && index >= self.frames.len()
    }
}
