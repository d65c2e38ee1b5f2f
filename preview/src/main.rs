//! Terminal preview for myrtio-segment-display
//!
//! Runs the boot loop against a fake display that draws every frame as
//! ASCII 7-segment digits. Type `time` and press enter to finish the boot
//! animation.

use std::io::{Read, Write};
use std::thread;

use myrtio_segment_display::display::{POSITION_COUNT, WIRE_FRAME_LEN};
use myrtio_segment_display::segment::{COLON, DOT};
use myrtio_segment_display::{
    BootConfig, BootLoop, Display, DisplayBuffer, DisplayError, InputChannel, Instant, Transport,
};

/// Console input queue, filled by the stdin thread
static INPUT: InputChannel<64> = InputChannel::new();

/// Rows of the ASCII digit rendering
const ROWS: usize = 3;

/// Fake HT16K33 that prints what it receives
struct TerminalTransport {
    /// Whether a frame has been drawn and must be overwritten
    drawn: bool,
}

impl Transport for TerminalTransport {
    type Error = std::io::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let mut out = std::io::stdout().lock();
        if bytes.len() == WIRE_FRAME_LEN {
            let mut buffer: DisplayBuffer = [0; POSITION_COUNT];
            for (position, pattern) in buffer.iter_mut().enumerate() {
                *pattern = bytes[1 + position * 2];
            }
            if self.drawn {
                write!(out, "\x1b[{ROWS}A")?;
            }
            for row in render(&buffer) {
                writeln!(out, "{row}")?;
            }
            self.drawn = true;
        } else {
            writeln!(out, "command {bytes:02X?}")?;
            self.drawn = false;
        }
        out.flush()
    }
}

/// Draw a buffer as three text rows.
fn render(buffer: &DisplayBuffer) -> [String; ROWS] {
    let mut rows: [String; ROWS] = Default::default();
    for (position, &pattern) in buffer.iter().enumerate() {
        if position == 2 {
            let colon = if pattern & COLON != 0 { '.' } else { ' ' };
            rows[0].push_str("   ");
            rows[1].push_str(&format!(" {colon} "));
            rows[2].push_str(&format!(" {colon} "));
            continue;
        }
        let lit = |bit: u8, ch: char| if pattern & (1 << bit) != 0 { ch } else { ' ' };
        rows[0].push_str(&format!(" {}  ", lit(0, '_')));
        rows[1].push_str(&format!("{}{}{} ", lit(5, '|'), lit(6, '_'), lit(1, '|')));
        let dot = if pattern & DOT != 0 { '.' } else { ' ' };
        rows[2].push_str(&format!("{}{}{}{dot}", lit(4, '|'), lit(3, '_'), lit(2, '|')));
    }
    rows
}

fn main() -> Result<(), DisplayError<std::io::Error>> {
    thread::spawn(|| {
        let sender = INPUT.sender();
        for byte in std::io::stdin().bytes().map_while(Result::ok) {
            let _ = sender.try_push(byte);
        }
    });

    let display = Display::new(TerminalTransport { drawn: false });
    let mut boot = BootLoop::new(display, BootConfig::default(), Instant::now());
    let mut console = INPUT.receiver();

    boot.start()?;
    boot.run(&mut console)?;

    let mut display = boot.into_display();
    display.set_text("8888");
    display.set_colon(true);
    display.set_char_with_dot(4, 'F');
    display.write()
}
