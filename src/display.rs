//! Buffered HT16K33 display driver
//!
//! Character and colon updates only touch the in-memory buffer; nothing
//! reaches the device until [`Display::write`]. The one exception is
//! [`Display::set_raw_buffer`], which writes immediately so an animation
//! frame is a single call.

use crate::Transport;
use crate::command::{self, BlinkRate};
use crate::segment::{self, BLANK, COLON, SegmentPattern};

/// Number of addressable display positions.
pub const POSITION_COUNT: usize = 5;

/// Position that doubles as the colon.
pub const COLON_POSITION: usize = 2;

/// Digit positions used by [`Display::set_text`], skipping the colon slot.
pub const DIGIT_POSITIONS: [usize; 4] = [0, 1, 3, 4];

/// Length of the serialized display write.
pub const WIRE_FRAME_LEN: usize = 1 + POSITION_COUNT * 2;

/// Segment state of every display position.
pub type DisplayBuffer = [SegmentPattern; POSITION_COUNT];

/// Errors that can occur while talking to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The transport failed to deliver a command or frame
    Transport(E),
}

impl<E> From<E> for DisplayError<E> {
    fn from(error: E) -> Self {
        Self::Transport(error)
    }
}

/// Convert a caller supplied position into a buffer index.
///
/// Returns `None` for positions outside the display.
pub fn position_index(position: usize) -> Option<usize> {
    (position < POSITION_COUNT).then_some(position)
}

/// Serialize a buffer into the device write.
///
/// The device stores a 16-bit word per position; only the low byte is wired
/// to segments, so every pattern is followed by a zero byte.
pub fn wire_frame(buffer: &DisplayBuffer) -> [u8; WIRE_FRAME_LEN] {
    let mut frame = [0u8; WIRE_FRAME_LEN];
    frame[0] = command::DISPLAY_RAM_START;
    for (slot, pattern) in frame[1..].chunks_exact_mut(2).zip(buffer) {
        slot[0] = *pattern;
    }
    frame
}

/// HT16K33 segment display driver
pub struct Display<T: Transport> {
    transport: T,
    buffer: DisplayBuffer,
}

impl<T: Transport> Display<T> {
    /// Create a driver with a blank buffer.
    ///
    /// Does not talk to the device; call [`Display::init`] first.
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: [BLANK; POSITION_COUNT],
        }
    }

    /// Run the device bring-up sequence.
    pub fn init(&mut self) -> Result<(), DisplayError<T::Error>> {
        self.send_command(command::SYSTEM_RUN)?;
        self.send_command(command::ROW_INT_SETUP)?;
        self.send_command(command::display_setup(BlinkRate::Off))
    }

    /// Stop the device oscillator.
    pub fn standby(&mut self) -> Result<(), DisplayError<T::Error>> {
        self.send_command(command::SYSTEM_STANDBY)
    }

    /// Set the dimming level. Levels above 15 are clamped.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError<T::Error>> {
        self.send_command(command::brightness(level))
    }

    /// Turn the display on with the given blink rate.
    pub fn set_blink(&mut self, blink: BlinkRate) -> Result<(), DisplayError<T::Error>> {
        self.send_command(command::display_setup(blink))
    }

    /// Turn the display on (without blinking) or off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError<T::Error>> {
        let state = if on { command::DISPLAY_ON } else { 0 };
        self.send_command(command::DISPLAY_SETUP | state)
    }

    /// Render `ch` at `position`. Out of range positions are ignored.
    pub fn set_char(&mut self, position: usize, ch: char) {
        self.set_pattern(position, segment::encode(ch));
    }

    /// Render `ch` with the decimal point lit.
    pub fn set_char_with_dot(&mut self, position: usize, ch: char) {
        self.set_pattern(position, segment::encode_with_dot(ch));
    }

    /// Show or hide the colon.
    ///
    /// The colon shares its position with a digit, so this replaces whatever
    /// was rendered there.
    pub fn set_colon(&mut self, on: bool) {
        self.buffer[COLON_POSITION] = if on { COLON } else { BLANK };
    }

    /// Render up to four characters onto the digit positions.
    ///
    /// The colon slot is left alone, extra characters are ignored.
    pub fn set_text(&mut self, text: &str) {
        for (position, ch) in DIGIT_POSITIONS.into_iter().zip(text.chars()) {
            self.set_char(position, ch);
        }
    }

    /// Blank every position. Takes effect on the next write.
    pub fn clear(&mut self) {
        self.buffer = [BLANK; POSITION_COUNT];
    }

    /// Replace the whole buffer and write it out.
    pub fn set_raw_buffer(&mut self, frame: &DisplayBuffer) -> Result<(), DisplayError<T::Error>> {
        self.buffer = *frame;
        self.write()
    }

    /// Current buffer contents.
    pub const fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Live buffer for direct manipulation. Changes need a [`Display::write`].
    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    /// Push the buffer to the device in one transaction.
    pub fn write(&mut self) -> Result<(), DisplayError<T::Error>> {
        let frame = wire_frame(&self.buffer);
        self.transport.send(&frame)?;
        Ok(())
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport.
    pub fn release(self) -> T {
        self.transport
    }

    fn set_pattern(&mut self, position: usize, pattern: SegmentPattern) {
        if let Some(index) = position_index(position) {
            self.buffer[index] = pattern;
        }
    }

    fn send_command(&mut self, byte: u8) -> Result<(), DisplayError<T::Error>> {
        self.transport.send(&[byte])?;
        Ok(())
    }
}
