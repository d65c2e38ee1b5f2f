//! 7-segment character encoding
//!
//! Bit order is `bit0 = A` through `bit6 = G`, with `bit7` driving the
//! decimal point.

/// Raw segment bits for one display position.
pub type SegmentPattern = u8;

/// All segments off.
pub const BLANK: SegmentPattern = 0x00;

/// Decimal point overlay bit.
pub const DOT: SegmentPattern = 0x80;

/// Colon bit. Only meaningful at the colon position of the buffer.
pub const COLON: SegmentPattern = 0x02;

/// Encode a character into its segment pattern.
///
/// Supports `0-9`, `A-F`, space and hyphen. Any other character encodes
/// as [`BLANK`].
pub const fn encode(ch: char) -> SegmentPattern {
    match ch {
        '0' => 0b0011_1111,
        '1' => 0b0000_0110,
        '2' => 0b0101_1011,
        '3' => 0b0100_1111,
        '4' => 0b0110_0110,
        '5' => 0b0110_1101,
        '6' => 0b0111_1101,
        '7' => 0b0000_0111,
        '8' => 0b0111_1111,
        '9' => 0b0110_1111,
        'A' => 0b0111_0111,
        'B' => 0b0111_1100,
        'C' => 0b0011_1001,
        'D' => 0b0101_1110,
        'E' => 0b0111_1001,
        'F' => 0b0111_0001,
        '-' => 0b0100_0000,
        _ => BLANK,
    }
}

/// Encode a character with the decimal point lit.
pub const fn encode_with_dot(ch: char) -> SegmentPattern {
    encode(ch) | DOT
}
