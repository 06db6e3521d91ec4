//! High-level interface for the BQ32000 real-time clock.
//!
//! [`Bq32000`] wraps the low-level register bus with the per-field BCD
//! masking, the read-modify-write discipline for registers that share a
//! byte with a control bit, and the century bookkeeping for full-year
//! reads and writes.

use embedded_hal::i2c::I2c;

use crate::bcd;
use crate::century::CenturyTracker;
use crate::driver::RegisterBus;
use crate::error::Error;
use crate::registers::{
    Register, CENTURY_BIT, CENT_HOURS_CTRL_MASK, DATE_TENS_MASK, DAY_MASK, HOURS_TENS_MASK,
    MINUTES_TENS_MASK, MONTH_TENS_MASK, OSC_FAIL_BIT, SECONDS_TENS_MASK, STOP_BIT, UNITS_MASK,
    YEAR_TENS_MASK,
};

/// Day of the week as the chip indexes it (1–7).
///
/// The numbering carries no calendar meaning beyond the device's own
/// counter; `None` is the sentinel read back before the field was ever
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DayOfWeek {
    None = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl From<u8> for DayOfWeek {
    fn from(value: u8) -> Self {
        match value & DAY_MASK {
            1 => DayOfWeek::Sunday,
            2 => DayOfWeek::Monday,
            3 => DayOfWeek::Tuesday,
            4 => DayOfWeek::Wednesday,
            5 => DayOfWeek::Thursday,
            6 => DayOfWeek::Friday,
            7 => DayOfWeek::Saturday,
            _ => DayOfWeek::None,
        }
    }
}

/// High-level interface for the BQ32000 real-time clock.
///
/// Owns the I2C peripheral and the century baseline exclusively — the chip
/// has no change notification, so reading its registers behind the
/// driver's back would desynchronize the baseline.
///
/// Operations that read-modify-write a shared register byte are not atomic
/// across the two bus transactions; serialize access externally. On a bus
/// error the enclosing operation aborts without rollback, so a failed
/// read-modify-write leaves the device state unknown.
///
/// # Example
///
/// ```no_run
/// use bq32000_driver::{Bq32000, DayOfWeek, Error};
/// use embedded_hal::i2c::I2c;
///
/// fn setup<I2C: I2c>(i2c: I2C) -> Result<(), Error<I2C::Error>> {
///     let mut rtc = Bq32000::new(i2c);
///     rtc.set_year(2026)?;
///     rtc.set_day(DayOfWeek::Friday)?;
///     rtc.start()
/// }
/// ```
pub struct Bq32000<I2C> {
    bus: RegisterBus<I2C>,
    century: CenturyTracker,
}

impl<I2C> Bq32000<I2C>
where
    I2C: I2c,
{
    /// Create a new driver instance.
    ///
    /// The century baseline starts at 2000; call [`set_year`](Self::set_year)
    /// to align it with reality before trusting [`get_year`](Self::get_year).
    pub fn new(i2c: I2C) -> Self {
        Self {
            bus: RegisterBus::new(i2c),
            century: CenturyTracker::new(),
        }
    }

    /// Release the I2C peripheral.
    pub fn release(self) -> I2C {
        self.bus.release()
    }

    // -----------------------------------------------------------------------
    // Raw register access
    // -----------------------------------------------------------------------

    /// Read one register byte.
    ///
    /// Every higher-level operation decomposes into these two primitives;
    /// they are exposed for the registers this driver does not manage
    /// (configuration, trickle charge, special function).
    pub fn read_byte(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        self.bus.read_byte(reg)
    }

    /// Write one register byte.
    ///
    /// Raw writes to a time register bypass the control-bit preservation
    /// the field-level setters do.
    pub fn write_byte(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.bus.write_byte(reg, value)
    }

    // -----------------------------------------------------------------------
    // Oscillator control
    // -----------------------------------------------------------------------

    /// Start the clock by clearing the STOP bit.
    ///
    /// Read-modify-write of the Seconds register: the current seconds value
    /// is preserved. Idempotent if the clock is already running.
    pub fn start(&mut self) -> Result<(), Error<I2C::Error>> {
        let seconds = self.bus.read_byte(Register::Seconds)?;
        self.bus.write_byte(Register::Seconds, seconds & !STOP_BIT)
    }

    /// Halt the clock by setting the STOP bit.
    ///
    /// Read-modify-write of the Seconds register; idempotent.
    pub fn stop(&mut self) -> Result<(), Error<I2C::Error>> {
        let seconds = self.bus.read_byte(Register::Seconds)?;
        self.bus.write_byte(Register::Seconds, seconds | STOP_BIT)
    }

    /// Whether the chip has latched an oscillation failure since the flag
    /// was last cleared.
    pub fn oscillator_failed(&mut self) -> Result<bool, Error<I2C::Error>> {
        let minutes = self.bus.read_byte(Register::Minutes)?;
        Ok(minutes & OSC_FAIL_BIT != 0)
    }

    // -----------------------------------------------------------------------
    // Read operations
    // -----------------------------------------------------------------------

    /// Seconds since the last minute (0–59).
    pub fn get_seconds(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Seconds)?;
        Ok(bcd::decode(byte, SECONDS_TENS_MASK, 4, UNITS_MASK))
    }

    /// Minutes since the last hour (0–59).
    pub fn get_minutes(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Minutes)?;
        Ok(bcd::decode(byte, MINUTES_TENS_MASK, 4, UNITS_MASK))
    }

    /// Hours since midnight (0–23).
    pub fn get_hours(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::CentHours)?;
        Ok(bcd::decode(byte, HOURS_TENS_MASK, 4, UNITS_MASK))
    }

    /// Day of the week.
    pub fn get_day(&mut self) -> Result<DayOfWeek, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Day)?;
        Ok(DayOfWeek::from(byte))
    }

    /// Day of the month (1–31).
    pub fn get_date(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Date)?;
        Ok(bcd::decode(byte, DATE_TENS_MASK, 4, UNITS_MASK))
    }

    /// Month of the year, 1 = January.
    pub fn get_month(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Month)?;
        Ok(bcd::decode(byte, MONTH_TENS_MASK, 4, UNITS_MASK))
    }

    /// Last two digits of the year (0–99).
    pub fn get_short_year(&mut self) -> Result<u8, Error<I2C::Error>> {
        let byte = self.bus.read_byte(Register::Year)?;
        Ok(bcd::decode(byte, YEAR_TENS_MASK, 4, UNITS_MASK))
    }

    /// Full four-digit year.
    ///
    /// Reads the century-overflow bit and the year register, then combines
    /// them with the in-memory century baseline. The baseline is only
    /// meaningful after a [`set_year`](Self::set_year) in the current
    /// process; see the crate docs for the restart limitation.
    pub fn get_year(&mut self) -> Result<u16, Error<I2C::Error>> {
        let cent_hours = self.bus.read_byte(Register::CentHours)?;
        let raw_year = self.bus.read_byte(Register::Year)?;
        let rolled = cent_hours & CENTURY_BIT != 0;
        Ok(self.century.decode_year(raw_year, rolled))
    }

    // -----------------------------------------------------------------------
    // Write operations
    // -----------------------------------------------------------------------

    /// Set the seconds value, preserving the STOP bit.
    pub fn set_seconds(&mut self, seconds: u8) -> Result<(), Error<I2C::Error>> {
        let current = self.bus.read_byte(Register::Seconds)?;
        let byte = bcd::encode(seconds, 0x7, UNITS_MASK, STOP_BIT, current);
        self.bus.write_byte(Register::Seconds, byte)
    }

    /// Set the minutes value, preserving the oscillator-fail flag.
    pub fn set_minutes(&mut self, minutes: u8) -> Result<(), Error<I2C::Error>> {
        let current = self.bus.read_byte(Register::Minutes)?;
        let byte = bcd::encode(minutes, 0x7, UNITS_MASK, OSC_FAIL_BIT, current);
        self.bus.write_byte(Register::Minutes, byte)
    }

    /// Set the hours value, preserving the century control bits.
    pub fn set_hours(&mut self, hours: u8) -> Result<(), Error<I2C::Error>> {
        let current = self.bus.read_byte(Register::CentHours)?;
        let byte = bcd::encode(hours, 0x3, UNITS_MASK, CENT_HOURS_CTRL_MASK, current);
        self.bus.write_byte(Register::CentHours, byte)
    }

    /// Set the day of the week. Direct write, not BCD.
    pub fn set_day(&mut self, day: DayOfWeek) -> Result<(), Error<I2C::Error>> {
        self.bus.write_byte(Register::Day, day as u8)
    }

    /// Set the day of the month.
    pub fn set_date(&mut self, date: u8) -> Result<(), Error<I2C::Error>> {
        let byte = bcd::encode(date, 0x3, UNITS_MASK, 0, 0);
        self.bus.write_byte(Register::Date, byte)
    }

    /// Set the month, 1 = January.
    pub fn set_month(&mut self, month: u8) -> Result<(), Error<I2C::Error>> {
        let byte = bcd::encode(month, 0x1, UNITS_MASK, 0, 0);
        self.bus.write_byte(Register::Month, byte)
    }

    /// Set the last two digits of the year without touching the century
    /// baseline or the overflow bit.
    pub fn set_short_year(&mut self, year: u8) -> Result<(), Error<I2C::Error>> {
        let byte = bcd::encode(year, 0xF, UNITS_MASK, 0, 0);
        self.bus.write_byte(Register::Year, byte)
    }

    /// Set the full four-digit year.
    ///
    /// When the year's century differs from the current baseline, the
    /// chip's century-overflow bit is cleared first (read-modify-write of
    /// the CentHours register, hours untouched) and the baseline is
    /// updated; the year register write follows. Within the same century
    /// only the year register is written.
    pub fn set_year(&mut self, year: u16) -> Result<(), Error<I2C::Error>> {
        let write = self.century.prepare_write(year);
        if write.clear_overflow {
            let cent_hours = self.bus.read_byte(Register::CentHours)?;
            self.bus
                .write_byte(Register::CentHours, cent_hours & !CENTURY_BIT)?;
        }
        self.set_short_year(write.short_year)
    }
}
