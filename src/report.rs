//! Serial report lines for the sampling loop.

use crate::sensor::Reading;
use ufmt::{uWrite, uwrite};

pub const NOT_DETECTED: &str = "[\x1b[31;1mERROR\x1b[0m] I2C device not detected\r\n";

/// `23.8 °C\t\t55.3 %\t\t89\r\n`
pub fn write_reading<W: uWrite + ?Sized>(w: &mut W, reading: &Reading) -> Result<(), W::Error> {
    let (t, t_dec) = reading.temperature;
    let (h, h_dec) = reading.humidity;
    uwrite!(w, "{}.{} °C\t\t", t, t_dec)?;
    uwrite!(w, "{}.{} %\t\t", h, h_dec)?;
    uwrite!(w, "{}\r\n", reading.checksum)
}

pub fn write_not_detected<W: uWrite + ?Sized>(w: &mut W) -> Result<(), W::Error> {
    w.write_str(NOT_DETECTED)
}
