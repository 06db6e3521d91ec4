//! Century bookkeeping for the BQ32000's one-bit overflow design.
//!
//! The chip stores only the last two digits of the year plus a single
//! century-overflow bit that toggles when the year counter wraps from 99
//! to 00. Reconstructing a four-digit year therefore needs a software-held
//! baseline: the century the overflow bit was last cleared in.
//!
//! The baseline lives in the driver instance, never in a static, so
//! separate instances (tests against a simulated bus included) cannot race
//! on it. It is not persisted: after a process restart in a different
//! century the reconstructed year is off by a multiple of 100 until the
//! next explicit year write.

use crate::bcd;
use crate::registers::{UNITS_MASK, YEAR_TENS_MASK};

/// What a full-year write has to do on the wire.
pub(crate) struct YearWrite {
    /// The target century differs from the old baseline, so the chip's
    /// overflow bit must be cleared before the year register is written.
    pub clear_overflow: bool,
    /// Last two digits of the year, ready for BCD encoding.
    pub short_year: u8,
}

/// Tracks which century the chip's overflow bit is relative to.
pub(crate) struct CenturyTracker {
    baseline: u16,
}

impl CenturyTracker {
    pub(crate) const fn new() -> Self {
        Self { baseline: 2000 }
    }

    /// Reconstruct a four-digit year from the raw year register and the
    /// state of the century-overflow bit.
    pub(crate) fn decode_year(&self, raw_year: u8, century_rolled: bool) -> u16 {
        let short = bcd::decode(raw_year, YEAR_TENS_MASK, 4, UNITS_MASK) as u16;
        let overflow = if century_rolled { 100 } else { 0 };
        self.baseline + overflow + short
    }

    /// Work out the register effects of writing `full_year`, adopting its
    /// century as the new baseline when it differs from the current one.
    ///
    /// This is the only path that mutates the baseline. A jump of more
    /// than 100 years is indistinguishable from a single rollover at this
    /// layer: any century change clears the overflow bit and adopts the
    /// new baseline, which is only exact for forward time-setting one
    /// century at a time. That limitation is inherent to the hardware's
    /// one-bit design.
    pub(crate) fn prepare_write(&mut self, full_year: u16) -> YearWrite {
        let century = full_year / 100 * 100;
        let clear_overflow = century != self.baseline;
        if clear_overflow {
            self.baseline = century;
        }
        YearWrite {
            clear_overflow,
            short_year: (full_year % 100) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_year_within_baseline_century() {
        let tracker = CenturyTracker::new();
        assert_eq!(tracker.decode_year(0x23, false), 2023);
    }

    #[test]
    fn overflow_bit_adds_a_century() {
        let tracker = CenturyTracker::new();
        assert_eq!(tracker.decode_year(0x23, true), 2123);
    }

    #[test]
    fn century_change_signals_overflow_reset() {
        let mut tracker = CenturyTracker::new();

        let write = tracker.prepare_write(2100);
        assert!(write.clear_overflow);
        assert_eq!(write.short_year, 0);

        // Same century again: baseline already adopted, bit untouched.
        let write = tracker.prepare_write(2105);
        assert!(!write.clear_overflow);
        assert_eq!(write.short_year, 5);

        assert_eq!(tracker.decode_year(0x05, false), 2105);
    }

    #[test]
    fn same_century_write_leaves_baseline_alone() {
        let mut tracker = CenturyTracker::new();
        let write = tracker.prepare_write(2042);
        assert!(!write.clear_overflow);
        assert_eq!(write.short_year, 42);
        assert_eq!(tracker.decode_year(0x42, false), 2042);
    }
}
