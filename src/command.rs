//! HT16K33 command bytes
//!
//! Every command is a single byte sent on its own transaction. The low bits
//! carry the argument (brightness level, blink rate, display on).

/// 7-bit bus address of the display backpack.
pub const HT16K33_ADDRESS: u8 = 0x70;

/// Start oscillator.
pub const SYSTEM_RUN: u8 = 0x21;
/// Stop oscillator.
pub const SYSTEM_STANDBY: u8 = 0x20;
/// Row driver output, no interrupt pin.
pub const ROW_INT_SETUP: u8 = 0xA0;
/// Display setup base. OR with [`DISPLAY_ON`] and a blink rate.
pub const DISPLAY_SETUP: u8 = 0x80;
/// Display setup "on" bit.
pub const DISPLAY_ON: u8 = 0x01;
/// Dimming base. OR with a level in `0..=15`.
pub const BRIGHTNESS: u8 = 0xE0;

/// Highest brightness level the device accepts.
pub const MAX_BRIGHTNESS: u8 = 15;

/// Display memory start address used by the data write.
pub const DISPLAY_RAM_START: u8 = 0x00;

/// Blink rate of the whole display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BlinkRate {
    #[default]
    Off = 0x00,
    Hz2 = 0x02,
    Hz1 = 0x04,
    HalfHz = 0x06,
}

impl BlinkRate {
    /// Map a numeric blink mode to a rate.
    ///
    /// `1` is 2 Hz, `2` is 1 Hz and `3` is 0.5 Hz. Anything else is [`BlinkRate::Off`].
    pub const fn from_raw(mode: u8) -> Self {
        match mode {
            1 => Self::Hz2,
            2 => Self::Hz1,
            3 => Self::HalfHz,
            _ => Self::Off,
        }
    }

    /// Bits to OR into [`DISPLAY_SETUP`].
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Clamp a brightness level to the device range.
pub const fn clamp_brightness(level: u8) -> u8 {
    if level > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        level
    }
}

/// Brightness command byte for `level`, clamped.
pub const fn brightness(level: u8) -> u8 {
    BRIGHTNESS | clamp_brightness(level)
}

/// Display setup command byte with the display on and `blink` applied.
pub const fn display_setup(blink: BlinkRate) -> u8 {
    DISPLAY_SETUP | DISPLAY_ON | blink.bits()
}
