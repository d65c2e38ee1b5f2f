//! I2C transport for the HT16K33
//!
//! Wraps any [`embedded_hal::i2c::I2c`] bus and sends every payload as a
//! single write transaction to a fixed device address.

use embedded_hal::i2c::I2c;

use crate::Transport;
use crate::command::HT16K33_ADDRESS;

/// Transport over a blocking `embedded-hal` I2C bus.
pub struct I2cTransport<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> I2cTransport<I> {
    /// Create a transport on the default HT16K33 address (`0x70`).
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: HT16K33_ADDRESS,
        }
    }

    /// Bus address writes are sent to.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    type Error = I::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }
}
