#![no_std]

pub mod boot;
pub mod channel;
pub mod command;
pub mod display;
pub mod frame_scheduler;
pub mod frames;
pub mod line_reader;
pub mod segment;
pub mod transport;

pub use boot::{BootConfig, BootLoop, BootSequence, SystemState};
pub use channel::{InputChannel, InputReceiver, InputSender};
pub use command::{BlinkRate, HT16K33_ADDRESS};
pub use display::{Display, DisplayBuffer, DisplayError};
pub use frame_scheduler::TickScheduler;
pub use frames::{Frame, FrameSet, Playback};
pub use line_reader::{CharSource, Line, LineReader};
pub use segment::{SegmentPattern, encode};
pub use transport::I2cTransport;
pub use embassy_time::{Duration, Instant};

/// Abstract display transport
///
/// Implement this trait to reach the display over a different bus.
/// The display driver is generic over this trait.
pub trait Transport {
    /// Error reported by the bus
    type Error;

    /// Send one complete transaction to the display
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}
