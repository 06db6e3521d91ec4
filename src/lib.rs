//! Driver for the Texas Instruments BQ32000 real-time clock.
//!
//! This crate provides a blocking I2C driver for the BQ32000 RTC. The chip
//! stores calendar/time fields as packed BCD, shares control bits with the
//! time fields inside single register bytes, and exposes only a one-bit
//! century overflow flag — the driver handles the masking, the BCD
//! conversion, and the century bookkeeping.
//!
//! # Architecture
//!
//! The crate is split into small layers:
//!
//! - **`registers`** — Register address map and bit-mask constants.
//! - **`bcd`** (crate-private) — Pure packed-BCD codec.
//! - **`century`** (crate-private) — Reconstructs a four-digit year from the
//!   chip's single century-overflow bit and a software-held baseline.
//! - **`driver`** (crate-private) — Single-byte register read/write
//!   primitives and the chip's register-addressing protocol.
//! - **[`Bq32000`]** (public) — High-level get/set/start/stop API.
//!
//! # Quick start
//!
//! ```no_run
//! use bq32000_driver::{Bq32000, Error};
//! use embedded_hal::i2c::I2c;
//!
//! // Construct with any `embedded-hal` blocking I2C implementation
//! fn read_minutes<I2C: I2c>(i2c: I2C) -> Result<u8, Error<I2C::Error>> {
//!     let mut rtc = Bq32000::new(i2c);
//!
//!     rtc.start()?;
//!     rtc.set_minutes(45)?;
//!     rtc.get_minutes()
//! }
//! ```
//!
//! # Concurrency
//!
//! Every operation is a sequence of blocking bus transactions. Operations
//! that read-modify-write a shared register byte (`start`, `stop`,
//! `set_seconds`, `set_minutes`, `set_hours`, `set_year`) are not atomic
//! across the two transactions, so access to one driver instance must be
//! externally serialized.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   for embedded logging.

#![no_std]

pub use bq32000::{Bq32000, DayOfWeek};
pub use error::Error;
pub use registers::{Register, DEVICE_ADDRESS};

mod bcd;
mod bq32000;
mod century;
mod driver;
mod error;
mod registers;
