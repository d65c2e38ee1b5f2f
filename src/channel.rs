//! Interrupt-safe byte queue for console input.
//!
//! An RX interrupt pushes received bytes through an [`InputSender`]; the
//! polling loop drains them through an [`InputReceiver`], which is a
//! [`CharSource`] for the line reader. Both sides go through
//! `critical-section`, so the queue can live in a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::line_reader::CharSource;

/// Error returned when the queue has no room for a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub u8);

/// Bounded byte queue shared between an interrupt and the main loop.
pub struct InputChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> InputChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle, for the RX interrupt.
    pub const fn sender(&self) -> InputSender<'_, SIZE> {
        InputSender { channel: self }
    }

    /// Consumer handle, for the polling loop.
    pub const fn receiver(&self) -> InputReceiver<'_, SIZE> {
        InputReceiver { channel: self }
    }

    /// Queue one byte.
    ///
    /// Returns `Err(QueueFull(byte))` if the queue is full.
    pub fn try_push(&self, byte: u8) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(QueueFull)
        })
    }

    /// Take the oldest byte, if any.
    pub fn try_pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of bytes waiting.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    /// Check if no bytes are waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for InputChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of an [`InputChannel`].
#[derive(Clone, Copy)]
pub struct InputSender<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> InputSender<'_, SIZE> {
    /// Queue one byte.
    pub fn try_push(&self, byte: u8) -> Result<(), QueueFull> {
        self.channel.try_push(byte)
    }

    /// Queue as many bytes as fit.
    ///
    /// Returns the number of bytes queued; the rest are dropped.
    pub fn push_slice(&self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .take_while(|byte| self.channel.try_push(**byte).is_ok())
            .count()
    }
}

/// Consumer side of an [`InputChannel`].
#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> CharSource for InputReceiver<'_, SIZE> {
    fn read_char(&mut self) -> Option<u8> {
        self.channel.try_pop()
    }
}
