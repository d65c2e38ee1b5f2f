//! Boot animation state machine and polling loop
//!
//! [`BootSequence`] holds the pure state machine: ticks pick the next frame,
//! input lines move it forward. [`BootLoop`] owns the display, the line
//! reader and the tick scheduler and drives the sequence from a busy poll.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Transport;
use crate::command::BlinkRate;
use crate::display::{Display, DisplayError};
use crate::frame_scheduler::{DEFAULT_FRAME_PERIOD, TickScheduler};
use crate::frames::{Frame, FrameSet};
use crate::line_reader::{CharSource, LineReader};

/// Default startup brightness (about 25%).
pub const DEFAULT_BRIGHTNESS: u8 = 3;

/// Line prefix that ends the waiting animation.
pub const DEFAULT_CONFIG_COMMAND: &str = "time";

/// Boot progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Waiting animation loops until configuration arrives
    #[default]
    AwaitingConfig,
    /// Configuration received, waiting animation plays out to its last frame
    ClosingInitial,
    /// Transition animation plays once
    Transition,
    /// Boot finished, the display belongs to the application
    Ready,
}

impl SystemState {
    /// Frame set animated in this state.
    pub const fn frame_set(self) -> Option<FrameSet> {
        match self {
            Self::AwaitingConfig | Self::ClosingInitial => Some(FrameSet::AWAITING),
            Self::Transition => Some(FrameSet::TRANSITION),
            Self::Ready => None,
        }
    }
}

/// Configuration for the boot loop
#[derive(Debug, Clone, Copy)]
pub struct BootConfig {
    /// Brightness applied on start, `0..=15`
    pub brightness: u8,
    /// Blink rate applied on start
    pub blink: BlinkRate,
    /// Time between animation frames
    pub frame_period: Duration,
    /// Line prefix that ends the waiting animation
    pub config_command: &'static str,
}

impl BootConfig {
    pub const DEFAULT: Self = Self {
        brightness: DEFAULT_BRIGHTNESS,
        blink: BlinkRate::Off,
        frame_period: DEFAULT_FRAME_PERIOD,
        config_command: DEFAULT_CONFIG_COMMAND,
    };
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Boot animation state machine
#[derive(Debug, Clone)]
pub struct BootSequence {
    state: SystemState,
    frame_index: usize,
    config_command: &'static str,
}

impl BootSequence {
    pub const fn new(config_command: &'static str) -> Self {
        Self {
            state: SystemState::AwaitingConfig,
            frame_index: 0,
            config_command,
        }
    }

    pub const fn state(&self) -> SystemState {
        self.state
    }

    /// Index of the frame the next tick will show.
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self.state, SystemState::Ready)
    }

    /// Feed a complete input line.
    ///
    /// Only a configuration line received while waiting has an effect; the
    /// frame index is kept so the animation continues smoothly. Returns true
    /// if the state changed.
    pub fn handle_line(&mut self, line: &[u8]) -> bool {
        if self.state != SystemState::AwaitingConfig
            || !line.starts_with(self.config_command.as_bytes())
        {
            return false;
        }
        self.state = SystemState::ClosingInitial;
        true
    }

    /// Advance one tick.
    ///
    /// Returns the frame to show, or `None` once ready.
    pub fn tick(&mut self) -> Option<&'static Frame> {
        let set = self.state.frame_set()?;
        debug_assert!(self.frame_index < set.len(), "frame index out of range");
        let frame = set.get(self.frame_index)?;

        match self.state {
            SystemState::ClosingInitial if self.frame_index == set.last_index() => {
                self.state = SystemState::Transition;
                self.frame_index = 0;
            }
            SystemState::Transition => {
                self.frame_index = set.next_index(self.frame_index);
                if set.is_finished(self.frame_index) {
                    self.state = SystemState::Ready;
                }
            }
            _ => {
                self.frame_index = set.next_index(self.frame_index);
            }
        }

        Some(frame)
    }
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_COMMAND)
    }
}

/// Cooperative boot loop
///
/// Every poll checks for a complete input line and for a due frame. Neither
/// check blocks.
pub struct BootLoop<T: Transport> {
    display: Display<T>,
    reader: LineReader,
    sequence: BootSequence,
    ticks: TickScheduler,
    config: BootConfig,
}

impl<T: Transport> BootLoop<T> {
    /// Create a boot loop whose first frame is due at `start`.
    pub const fn new(display: Display<T>, config: BootConfig, start: Instant) -> Self {
        Self {
            display,
            reader: LineReader::new(),
            sequence: BootSequence::new(config.config_command),
            ticks: TickScheduler::new(start, config.frame_period),
            config,
        }
    }

    /// Bring up the display and apply the configured brightness and blink.
    pub fn start(&mut self) -> Result<(), DisplayError<T::Error>> {
        self.display.init()?;
        self.display.set_brightness(self.config.brightness)?;
        if self.config.blink != BlinkRate::Off {
            self.display.set_blink(self.config.blink)?;
        }
        Ok(())
    }

    /// Run one loop iteration at time `now`.
    ///
    /// Returns the state after the iteration.
    pub fn poll<S: CharSource + ?Sized>(
        &mut self,
        source: &mut S,
        now: Instant,
    ) -> Result<SystemState, DisplayError<T::Error>> {
        if self.sequence.is_ready() {
            return Ok(SystemState::Ready);
        }

        #[cfg(feature = "esp32-log")]
        let before = self.sequence.state();

        if let Some(line) = self.reader.poll(source) {
            #[cfg(feature = "esp32-log")]
            println!("Received config: {}", line.as_str().unwrap_or("<binary>"));

            self.sequence.handle_line(&line);
        }

        if self.ticks.poll(now) {
            if let Some(frame) = self.sequence.tick() {
                self.display.set_raw_buffer(frame)?;
            }
        }

        #[cfg(feature = "esp32-log")]
        if before != self.sequence.state() {
            println!("Boot state: {:?}", self.sequence.state());
        }

        Ok(self.sequence.state())
    }

    /// Busy-poll until the boot sequence is ready.
    pub fn run<S: CharSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(), DisplayError<T::Error>> {
        while self.poll(source, Instant::now())? != SystemState::Ready {}
        Ok(())
    }

    pub const fn state(&self) -> SystemState {
        self.sequence.state()
    }

    pub const fn sequence(&self) -> &BootSequence {
        &self.sequence
    }

    pub const fn display(&self) -> &Display<T> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut Display<T> {
        &mut self.display
    }

    /// Hand the display over to the application.
    pub fn into_display(self) -> Display<T> {
        self.display
    }
}
