//! Handing sensor samples from a timer interrupt to the main loop.
//!
//! The interrupt counts timer overflows with a [`Prescaler`] and raises a
//! [`SampleFlag`] when it has fresh data; the main loop takes the flag and
//! reports. Only load and store are used, since AVR has no atomic swap.

use core::sync::atomic::{AtomicBool, Ordering};

pub struct SampleFlag(AtomicBool);

impl Default for SampleFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Producer side, after the sample buffer is written.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Consumer side. True if a raise happened since the last `take`.
    ///
    /// Raises coalesce, and a raise landing between the load and the clear
    /// is lost; the producer must tolerate a skipped sample or the consumer
    /// must call this with its interrupt masked.
    pub fn take(&self) -> bool {
        if self.0.load(Ordering::Acquire) {
            self.0.store(false, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Divides a periodic tick: every `N`th call to [`Prescaler::tick`] fires.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prescaler<const N: u8> {
    count: u8,
}

impl<const N: u8> Prescaler<N> {
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= N {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_EVERY_TICKS;

    #[test]
    fn fires_every_fifth_tick() {
        let mut prescaler = Prescaler::<SAMPLE_EVERY_TICKS>::new();
        let fired: [bool; 10] = core::array::from_fn(|_| prescaler.tick());
        assert_eq!(
            fired,
            [false, false, false, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn raises_coalesce_into_one_take() {
        let flag = SampleFlag::new();
        assert!(!flag.take());
        flag.raise();
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.take());
    }
}
