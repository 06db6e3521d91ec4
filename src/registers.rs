//! Register address map and bit layout for the BQ32000.
//!
//! Time registers pack a BCD tens nibble and a BCD units nibble into one
//! byte, and some of them share the byte with an unrelated control bit
//! (the STOP bit lives in Seconds, the oscillator-fail flag in Minutes,
//! the century bits in CentHours). Writes to a time field must preserve
//! those co-located bits.

/// 7-bit I2C address of the BQ32000 (datasheet gives 0xD0 as the 8-bit
/// read/write address).
pub const DEVICE_ADDRESS: u8 = 0xD0 >> 1;

/// BQ32000 register addresses.
///
/// The addresses are fixed by the hardware and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Seconds = 0x00,
    Minutes = 0x01,
    CentHours = 0x02,
    Day = 0x03,
    Date = 0x04,
    Month = 0x05,
    Year = 0x06,
    Config1 = 0x07,
    Trickle = 0x08,
    Config2 = 0x09,
    SfKey1 = 0x20,
    SfKey2 = 0x21,
    Sfr = 0x22,
}

impl Register {
    /// Raw register address byte.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

// ---------------------------------------------------------------------------
// Seconds register (0x00)
// ---------------------------------------------------------------------------

/// STOP bit: set halts the oscillator, clear runs it.
pub const STOP_BIT: u8 = 0x80;

/// In-register mask of the seconds tens nibble (0–5).
pub const SECONDS_TENS_MASK: u8 = 0x70;

// ---------------------------------------------------------------------------
// Minutes register (0x01)
// ---------------------------------------------------------------------------

/// Oscillator-fail flag. Latched by the chip on oscillation loss; writes to
/// the minutes field must leave it alone.
pub const OSC_FAIL_BIT: u8 = 0x80;

/// In-register mask of the minutes tens nibble (0–5).
pub const MINUTES_TENS_MASK: u8 = 0x70;

// ---------------------------------------------------------------------------
// CentHours register (0x02)
// ---------------------------------------------------------------------------

/// Century-overflow bit. Toggles once when the year counter rolls over
/// from 99 to 00.
pub const CENTURY_BIT: u8 = 0x80;

/// Both century control bits (overflow + enable); preserved by hour writes.
pub const CENT_HOURS_CTRL_MASK: u8 = 0xC0;

/// In-register mask of the hours tens nibble (0–2).
pub const HOURS_TENS_MASK: u8 = 0x30;

// ---------------------------------------------------------------------------
// Remaining time registers
// ---------------------------------------------------------------------------

/// Day-of-week field, a direct 3-bit counter (1–7), not BCD.
pub const DAY_MASK: u8 = 0x07;

/// In-register mask of the date tens nibble (0–3).
pub const DATE_TENS_MASK: u8 = 0x30;

/// In-register mask of the month tens nibble (0–1).
pub const MONTH_TENS_MASK: u8 = 0x10;

/// In-register mask of the year tens nibble (0–9).
pub const YEAR_TENS_MASK: u8 = 0xF0;

/// In-register mask of the units nibble, common to every BCD field.
pub const UNITS_MASK: u8 = 0x0F;
