mod tests {
    use myrtio_segment_display::channel::{InputChannel, QueueFull};
    use myrtio_segment_display::line_reader::{CharSource, LineReader};

    #[test]
    fn test_push_and_pop_in_order() {
        let channel = InputChannel::<4>::new();
        assert!(channel.is_empty());
        channel.try_push(b'a').unwrap();
        channel.try_push(b'b').unwrap();
        assert_eq!(channel.len(), 2);
        assert_eq!(channel.try_pop(), Some(b'a'));
        assert_eq!(channel.try_pop(), Some(b'b'));
        assert_eq!(channel.try_pop(), None);
    }

    #[test]
    fn test_full_channel_rejects_byte() {
        let channel = InputChannel::<2>::new();
        let sender = channel.sender();
        assert_eq!(sender.push_slice(b"xyz"), 2);
        assert_eq!(sender.try_push(b'q'), Err(QueueFull(b'q')));
    }

    #[test]
    fn test_receiver_feeds_line_reader() {
        static INPUT: InputChannel<16> = InputChannel::new();

        let sender = INPUT.sender();
        let mut receiver = INPUT.receiver();
        let mut reader = LineReader::new();

        sender.push_slice(b"ti");
        assert_eq!(reader.poll(&mut receiver), None);
        sender.push_slice(b"me\n");
        assert_eq!(reader.poll(&mut receiver).unwrap().as_bytes(), b"time");
        assert_eq!(receiver.read_char(), None);
    }
}
