mod tests {
    use myrtio_segment_display::segment::{BLANK, DOT, encode, encode_with_dot};

    const TABLE: [(char, u8); 18] = [
        ('0', 0x3F),
        ('1', 0x06),
        ('2', 0x5B),
        ('3', 0x4F),
        ('4', 0x66),
        ('5', 0x6D),
        ('6', 0x7D),
        ('7', 0x07),
        ('8', 0x7F),
        ('9', 0x6F),
        ('-', 0x40),
        (' ', 0x00),
        ('A', 0x77),
        ('B', 0x7C),
        ('C', 0x39),
        ('D', 0x5E),
        ('E', 0x79),
        ('F', 0x71),
    ];

    #[test]
    fn test_encode_supported_chars() {
        for (ch, pattern) in TABLE {
            assert_eq!(encode(ch), pattern, "pattern for {ch:?}");
        }
    }

    #[test]
    fn test_encode_unsupported_ascii_is_blank() {
        for byte in 0u8..=127 {
            let ch = char::from(byte);
            if TABLE.iter().any(|(supported, _)| *supported == ch) {
                continue;
            }
            assert_eq!(encode(ch), BLANK, "pattern for {ch:?}");
        }
    }

    #[test]
    fn test_encode_lowercase_hex_is_blank() {
        assert_eq!(encode('a'), BLANK);
        assert_eq!(encode('f'), BLANK);
        assert_eq!(encode(':'), BLANK);
    }

    #[test]
    fn test_encode_with_dot() {
        assert_eq!(encode_with_dot('8'), 0xFF);
        assert_eq!(encode_with_dot('1'), 0x86);
        assert_eq!(encode_with_dot('?'), DOT);
    }
}
