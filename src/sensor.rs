//! DHT12 temperature and humidity sensor on I2C.

use crate::constants::{dht12, DHT12_ADDRESS};
use embedded_hal::i2c::I2c;

pub struct Dht12<I2C> {
    pub i2c: I2C,
    pub address: u8,
}

impl<I2C, E> Dht12<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DHT12_ADDRESS,
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Address-only write; any error means nothing acknowledged.
    pub fn probe(&mut self) -> Result<(), Dht12Error<E>> {
        self.i2c
            .write(self.address, &[])
            .map_err(|_| Dht12Error::NotDetected)
    }

    /// Read all five data registers starting at humidity.
    pub fn read(&mut self) -> Result<Reading, Dht12Error<E>> {
        let mut buffer = [0; dht12::READING_LEN];
        self.i2c
            .write_read(self.address, &[dht12::HUMIDITY_INT], &mut buffer)?;
        let reading = Reading::from_bytes(buffer);

        #[cfg(feature = "defmt")]
        if !reading.checksum_ok() {
            defmt::warn!("dht12: checksum mismatch {}", reading);
        }

        Ok(reading)
    }
}

/// Raw DHT12 register contents: integer and tenths for each quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub humidity: (u8, u8),
    pub temperature: (u8, u8),
    pub checksum: u8,
}

impl Reading {
    pub fn from_bytes(bytes: [u8; dht12::READING_LEN]) -> Self {
        Self {
            humidity: (bytes[0], bytes[1]),
            temperature: (bytes[2], bytes[3]),
            checksum: bytes[4],
        }
    }

    pub fn checksum_ok(&self) -> bool {
        let sum = self
            .humidity
            .0
            .wrapping_add(self.humidity.1)
            .wrapping_add(self.temperature.0)
            .wrapping_add(self.temperature.1);
        sum == self.checksum
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dht12Error<E> {
    I2c(E),
    NotDetected,
}

impl<E> From<E> for Dht12Error<E> {
    fn from(error: E) -> Self {
        Dht12Error::I2c(error)
    }
}
