//! Control lines of the shift register cascade.

use embedded_hal::digital::{OutputPin, PinState};

/// One of the three lines driving the 74HC595 pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// ST_CP, storage register clock
    Latch,
    /// SH_CP, shift register clock
    Clock,
    /// DS, serial data input
    Data,
}

/// Line-level access to the display port.
///
/// Keeps the driver free of any board register names; a board provides this
/// once and the driver only ever sets lines high or low.
pub trait PinInterface {
    type Error;

    /// Make `line` an output. Called once per line by [`crate::SSD595::init`].
    fn configure_as_output(&mut self, line: Line) -> Result<(), Self::Error>;

    /// Drive `line` to `level`.
    fn set(&mut self, line: Line, level: PinState) -> Result<(), Self::Error>;
}

/// [`PinInterface`] over three `embedded-hal` output pins.
///
/// HAL pins are already outputs by type, so configuring a line only drives
/// it low, which is where a freshly configured AVR port pin sits.
pub struct Outputs<LATCH, CLK, DATA> {
    pub latch: LATCH,
    pub clock: CLK,
    pub data: DATA,
}

impl<LATCH, CLK, DATA, E> Outputs<LATCH, CLK, DATA>
where
    LATCH: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DATA: OutputPin<Error = E>,
{
    pub fn new(latch: LATCH, clock: CLK, data: DATA) -> Self {
        Self { latch, clock, data }
    }

    pub fn destroy(self) -> (LATCH, CLK, DATA) {
        (self.latch, self.clock, self.data)
    }
}

impl<LATCH, CLK, DATA, E> PinInterface for Outputs<LATCH, CLK, DATA>
where
    LATCH: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DATA: OutputPin<Error = E>,
{
    type Error = E;

    fn configure_as_output(&mut self, line: Line) -> Result<(), E> {
        self.set(line, PinState::Low)
    }

    fn set(&mut self, line: Line, level: PinState) -> Result<(), E> {
        match line {
            Line::Latch => self.latch.set_state(level),
            Line::Clock => self.clock.set_state(level),
            Line::Data => self.data.set_state(level),
        }
    }
}
