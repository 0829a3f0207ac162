#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use core::cell::Cell;

use arduino_hal::prelude::*;
use avr_device::interrupt::Mutex;
use panic_halt as _;
use ssd595::report::{write_not_detected, write_reading};
use ssd595::sampler::{Prescaler, SampleFlag};
use ssd595::sensor::Dht12;
use ssd595::{Digits, Outputs, NUM_DIGITS, SAMPLE_EVERY_TICKS, SSD595};

const REFRESH_MS: u16 = 2; // per position

static SAMPLE_DUE: SampleFlag = SampleFlag::new();
static PRESCALER: Mutex<Cell<Prescaler<SAMPLE_EVERY_TICKS>>> =
    Mutex::new(Cell::new(Prescaler::new()));

#[avr_device::interrupt(atmega328p)]
fn TIMER1_OVF() {
    avr_device::interrupt::free(|cs| {
        let cell = PRESCALER.borrow(cs);
        let mut prescaler = cell.get();
        if prescaler.tick() {
            SAMPLE_DUE.raise();
        }
        cell.set(prescaler);
    });
}

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 115200);

    // Multi-function shield: LATCH = D4, CLK = D7, DATA = D8
    let outputs = Outputs::new(
        pins.d4.into_output(),
        pins.d7.into_output(),
        pins.d8.into_output(),
    );
    let mut display = SSD595::new(outputs, arduino_hal::Delay::new());
    display.init().unwrap();
    display.clear().unwrap();

    let i2c = arduino_hal::I2c::new(
        dp.TWI,
        pins.a4.into_pull_up_input(),
        pins.a5.into_pull_up_input(),
        50_000,
    );
    let mut sensor = Dht12::new(i2c);

    // needed for the serial output buffer to drain
    unsafe { avr_device::interrupt::enable() };

    if sensor.probe().is_err() {
        write_not_detected(&mut serial).unwrap_infallible();
        loop {}
    }

    // Timer1 overflow, 16 MHz / 256 / 65536 ~ 1 s
    let tc1 = dp.TC1;
    tc1.tccr1a().reset();
    tc1.tccr1b().write(|w| w.cs1().prescale_256());
    tc1.timsk1().write(|w| w.toie1().set_bit());

    let mut digits = Digits::from_ascii(b"----").unwrap_or_default();
    loop {
        if avr_device::interrupt::free(|_| SAMPLE_DUE.take()) {
            if let Ok(reading) = sensor.read() {
                write_reading(&mut serial, &reading).unwrap_infallible();

                let (t, t_dec) = reading.temperature;
                digits = Digits::from_decimal(t as u16 * 10 + t_dec as u16)
                    .and_then(|d| d.with_dot(NUM_DIGITS - 2))
                    .unwrap_or_default();
            }
        }

        for index in 0..NUM_DIGITS {
            display.show(&digits, index).unwrap();
            arduino_hal::delay_ms(REFRESH_MS as u32);
        }
    }
}
