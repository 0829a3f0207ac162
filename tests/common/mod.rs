#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use ssd595::{Line, PinInterface, SSD595};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Configure(Line),
    Set(Line, bool),
    DelayNs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct MockPins(pub Log);

impl PinInterface for MockPins {
    type Error = Infallible;

    fn configure_as_output(&mut self, line: Line) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(Event::Configure(line));
        Ok(())
    }

    fn set(&mut self, line: Line, level: PinState) -> Result<(), Self::Error> {
        self.0
            .borrow_mut()
            .push(Event::Set(line, level == PinState::High));
        Ok(())
    }
}

pub struct MockDelay(pub Log);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::DelayNs(ns));
    }
}

pub fn display() -> (SSD595<MockPins, MockDelay>, Log) {
    let log = Log::default();
    let display = SSD595::new(MockPins(log.clone()), MockDelay(log.clone()));
    (display, log)
}

pub fn ready_display() -> (SSD595<MockPins, MockDelay>, Log) {
    let (mut display, log) = display();
    display.init().unwrap();
    log.borrow_mut().clear();
    (display, log)
}

/// Two cascaded 74HC595s fed from the recorded line events.
///
/// Bits enter the near register on each rising CLOCK edge and overflow into
/// the far one; a rising LATCH edge copies all 16 to the outputs.
#[derive(Debug, Default)]
pub struct Cascade {
    latch: bool,
    clock: bool,
    data: bool,
    shift: u16,
    pub outputs: u16,
    pub latch_edges: usize,
    pub clock_edges: usize,
    /// DATA level sampled at every rising clock edge, in order
    pub sampled: Vec<bool>,
    /// Clock edges seen while LATCH was high
    pub clocks_with_latch_high: usize,
}

impl Cascade {
    pub fn run(events: &[Event]) -> Self {
        let mut cascade = Self::default();
        for event in events {
            cascade.apply(*event);
        }
        cascade
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Set(Line::Data, level) => self.data = level,
            Event::Set(Line::Clock, level) => {
                if level && !self.clock {
                    self.clock_edges += 1;
                    if self.latch {
                        self.clocks_with_latch_high += 1;
                    }
                    self.sampled.push(self.data);
                    self.shift = self.shift << 1 | self.data as u16;
                }
                self.clock = level;
            }
            Event::Set(Line::Latch, level) => {
                if level && !self.latch {
                    self.latch_edges += 1;
                    self.outputs = self.shift;
                }
                self.latch = level;
            }
            Event::Configure(_) | Event::DelayNs(_) => {}
        }
    }

    /// Far register: position mask
    pub fn position(&self) -> u8 {
        (self.outputs >> 8) as u8
    }

    /// Near register: segment pattern
    pub fn segments(&self) -> u8 {
        self.outputs as u8
    }
}

pub fn bits(value: u16) -> Vec<bool> {
    (0..16).rev().map(|i| value & (1 << i) != 0).collect()
}
