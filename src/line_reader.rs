//! Non-blocking line reader
//!
//! Collects bytes from a [`CharSource`] until `\n` or `\r` and hands out
//! whole lines only. Bytes past the line capacity are dropped until the
//! next terminator.

use core::ops::Deref;

use heapless::Vec;

/// Size of the line buffer, including the terminator slot.
pub const LINE_BUFFER_SIZE: usize = 128;

/// Bytes a line can hold.
pub const LINE_CAPACITY: usize = LINE_BUFFER_SIZE - 1;

/// Source of input bytes that never blocks.
pub trait CharSource {
    /// Return the next byte if one is available right now.
    fn read_char(&mut self) -> Option<u8>;
}

/// A complete input line without its terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line(Vec<u8, LINE_CAPACITY>);

impl Line {
    /// Raw line bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Line as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }
}

impl Deref for Line {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

/// Returns true if `byte` ends a line.
pub const fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Accumulates input into lines.
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8, LINE_CAPACITY>,
}

impl LineReader {
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Drain available input and return a line once a terminator is seen.
    ///
    /// Stops at the first terminator; anything after it stays in `source`
    /// for the next call. Returns `None` when the source runs dry first.
    pub fn poll<S: CharSource + ?Sized>(&mut self, source: &mut S) -> Option<Line> {
        while let Some(byte) = source.read_char() {
            if is_terminator(byte) {
                return Some(Line(core::mem::take(&mut self.buffer)));
            }
            // Full: drop until the terminator.
            let _ = self.buffer.push(byte);
        }
        None
    }

    /// Bytes collected for the line in progress.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop the line in progress.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
