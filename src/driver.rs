//! Low-level register access.
//!
//! Implements the BQ32000's register-addressing protocol on top of a
//! blocking I2C bus: a read sends the register address with the bus held
//! and then reads the data byte (repeated start), a write sends the
//! register address immediately followed by the data byte in one
//! transaction.
//!
//! Every access is a single-register, single-byte transaction even though
//! the chip supports bursts — one logical field change is then at most a
//! read/write pair, which keeps bus cost and atomicity easy to reason
//! about.
//!
//! This module is crate-private — consumers interact with [`Bq32000`]
//! in `bq32000.rs` instead.

use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::registers::{Register, DEVICE_ADDRESS};

/// Register bus primitives.
///
/// Owns the I2C peripheral; the device address is fixed by the hardware.
pub(crate) struct RegisterBus<I2C> {
    i2c: I2C,
}

impl<I2C> RegisterBus<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Read one register byte.
    pub fn read_byte(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[reg.addr()], &mut buf)?;
        Ok(buf[0])
    }

    /// Write one register byte.
    pub fn write_byte(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(DEVICE_ADDRESS, &[reg.addr(), value])?;
        Ok(())
    }
}
