#![no_std]

mod constants;
mod digits;
mod pins;
pub mod report;
pub mod sampler;
pub mod sensor;

pub use constants::*;
pub use digits::{glyph, Digits};
pub use pins::{Line, Outputs, PinInterface};

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

/// Four-digit seven-segment display behind two cascaded 74HC595s.
///
/// The position byte is shifted first and ends up in the far register, the
/// segment byte follows into the near one. Both parallel outputs change
/// together on the rising LATCH edge, so a frame is never seen half written.
///
/// The hardware holds a single frame; lighting more than one position means
/// calling [`SSD595::show`] for each of them, fast enough to fool the eye.
pub struct SSD595<P, D> {
    pub pins: P,
    delay: D,
    initialized: bool,
}

impl<P, D, E> SSD595<P, D>
where
    P: PinInterface<Error = E>,
    D: DelayNs,
{
    pub fn new(pins: P, delay: D) -> Self {
        Self {
            pins,
            delay,
            initialized: false,
        }
    }

    pub fn destroy(self) -> (P, D) {
        (self.pins, self.delay)
    }

    /// Configure LATCH, CLOCK and DATA as outputs. Sends nothing, so the
    /// display shows whatever the registers powered up with until the first
    /// frame.
    pub fn init(&mut self) -> Result<(), Ssd595Error<E>> {
        self.pins.configure_as_output(Line::Latch)?;
        self.pins.configure_as_output(Line::Clock)?;
        self.pins.configure_as_output(Line::Data)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd595: lines configured");

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Turn off all segments.
    pub fn clear(&mut self) -> Result<(), Ssd595Error<E>> {
        self.show_digit(SEGMENTS_OFF, POSITIONS[0])
    }

    /// Show `digits[index]` at position `index`.
    pub fn show(&mut self, digits: &Digits, index: u8) -> Result<(), Ssd595Error<E>> {
        let segments = digits
            .segments(index)
            .ok_or(Ssd595Error::InvalidLocation(index))?;
        self.show_digit(segments, POSITIONS[index as usize])
    }

    /// Latch one 16-bit frame.
    ///
    /// `segments` is `DP g f e d c b a`, active low. `position` is
    /// `p3 p2 p1 p0 xxxx`, active high. Neither is checked; the low nibble of
    /// `position` goes out on the wire as given.
    pub fn show_digit(&mut self, segments: u8, position: u8) -> Result<(), Ssd595Error<E>> {
        self.ensure_initialized()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("ssd595: frame {=u16:#x}", frame(segments, position));

        self.pins.set(Line::Latch, PinState::Low)?;
        self.shift_out(position)?;
        self.shift_out(segments)?;
        self.pins.set(Line::Latch, PinState::High)?;
        Ok(())
    }

    /// Shift one byte MSB first. LATCH is left alone and must already be low.
    /// DATA keeps the value of bit 0 afterwards.
    pub fn shift_out(&mut self, data: u8) -> Result<(), Ssd595Error<E>> {
        self.ensure_initialized()?;
        for bit in (0..8).rev() {
            let level = PinState::from(data & (1 << bit) != 0);
            self.pins.set(Line::Data, level)?;
            self.clk_pulse()?;
        }
        Ok(())
    }

    /// One CLOCK pulse, held high for [`CLOCK_PULSE_US`].
    pub fn clk_pulse(&mut self) -> Result<(), Ssd595Error<E>> {
        self.ensure_initialized()?;
        self.pins.set(Line::Clock, PinState::High)?;
        self.delay.delay_us(CLOCK_PULSE_US);
        self.pins.set(Line::Clock, PinState::Low)?;
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), Ssd595Error<E>> {
        if !self.initialized {
            return Err(Ssd595Error::NotInitialized);
        }
        Ok(())
    }
}

/// The 16 bits put on the wire for one frame, first bit in the MSB.
pub const fn frame(segments: u8, position: u8) -> u16 {
    (position as u16) << 8 | segments as u16
}

/// `E` is the pin error. Encoding a [`Digits`] touches no pin and uses the
/// `Infallible` default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ssd595Error<E = Infallible> {
    Pin(E),
    NotInitialized,
    InvalidLocation(u8),
    InvalidValue,
}

impl<E> From<E> for Ssd595Error<E> {
    fn from(error: E) -> Self {
        Ssd595Error::Pin(error)
    }
}
