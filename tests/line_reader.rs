mod tests {
    use std::collections::VecDeque;

    use myrtio_segment_display::line_reader::{CharSource, LINE_CAPACITY, LineReader};

    #[derive(Default)]
    struct Feed(VecDeque<u8>);

    impl Feed {
        fn push(&mut self, bytes: &[u8]) {
            self.0.extend(bytes);
        }
    }

    impl CharSource for Feed {
        fn read_char(&mut self) -> Option<u8> {
            self.0.pop_front()
        }
    }

    #[test]
    fn test_line_split_across_polls() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();

        for byte in b"time" {
            feed.push(&[*byte]);
            assert_eq!(reader.poll(&mut feed), None);
        }
        assert_eq!(reader.pending(), b"time");

        feed.push(b"\n");
        let line = reader.poll(&mut feed).unwrap();
        assert_eq!(line.as_bytes(), b"time");
        assert_eq!(line.as_str(), Some("time"));
        assert!(reader.pending().is_empty());
    }

    #[test]
    fn test_empty_source_is_not_a_line() {
        let mut reader = LineReader::new();
        assert_eq!(reader.poll(&mut Feed::default()), None);
    }

    #[test]
    fn test_carriage_return_terminates() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();
        feed.push(b"12:30\r");
        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"12:30");
    }

    #[test]
    fn test_crlf_yields_empty_second_line() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();
        feed.push(b"time\r\n");

        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"time");
        assert!(reader.poll(&mut feed).unwrap().is_empty());
        assert_eq!(reader.poll(&mut feed), None);
    }

    #[test]
    fn test_bytes_after_terminator_wait_for_next_poll() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();
        feed.push(b"first\nsecond\n");

        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"first");
        assert_eq!(feed.0.len(), 7);
        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"second");
    }

    #[test]
    fn test_overflow_is_truncated() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();
        let input: Vec<u8> = (0..130u8).map(|i| b'a' + i % 26).collect();
        feed.push(&input);
        assert_eq!(reader.poll(&mut feed), None);
        assert_eq!(reader.pending().len(), LINE_CAPACITY);

        feed.push(b"\n");
        let line = reader.poll(&mut feed).unwrap();
        assert_eq!(line.len(), 127);
        assert_eq!(line.as_bytes(), &input[..127]);

        // Next line starts clean
        feed.push(b"ok\n");
        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"ok");
    }

    #[test]
    fn test_reset_drops_partial_line() {
        let mut reader = LineReader::new();
        let mut feed = Feed::default();
        feed.push(b"garbage");
        assert_eq!(reader.poll(&mut feed), None);
        reader.reset();
        feed.push(b"time\n");
        assert_eq!(reader.poll(&mut feed).unwrap().as_bytes(), b"time");
    }
}
