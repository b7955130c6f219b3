//! Count-to-percentage helpers behind every progress bar.
//!
//! Attendance rate, event/session occupancy, carpool seat usage, and
//! packing completion all reduce to [`rate`]. The numeric label is never
//! clamped; only the rendered bar width is, via [`bar_width`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// `round(100 * numerator / denominator)`, or 0 when `denominator <= 0`.
///
/// Halves round up (`1/8` is 12.5% and yields 13). Over-full ratios are
/// returned as-is: `rate(13, 12) == 108`.
pub fn rate(numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    let n = i128::from(numerator);
    let d = i128::from(denominator);
    // floor(100n/d + 1/2) without going through floating point.
    let pct = (200 * n + d).div_euclid(2 * d);
    i64::try_from(pct).unwrap_or(if pct > 0 { i64::MAX } else { i64::MIN })
}

/// Clamp a percentage to the `[0, 100]` range used for bar widths.
pub fn bar_width(percent: i64) -> u8 {
    percent.clamp(0, 100) as u8
}

/// Attendance rate: late campers count as attended.
pub fn attendance_rate(present: i64, late: i64, total: i64) -> i64 {
    rate(present + late, total)
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// Filled-vs-capacity pair for events, sessions, and carpools.
///
/// `filled` may exceed `capacity`; over-booking is reported, not blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Occupancy {
    pub capacity: i64,
    pub filled: i64,
}

impl Occupancy {
    pub fn new(capacity: i64, filled: i64) -> Self {
        Self { capacity, filled }
    }

    /// Unclamped occupancy percentage.
    pub fn percent(&self) -> i64 {
        rate(self.filled, self.capacity)
    }

    /// Occupancy percentage clamped for display.
    pub fn bar_width(&self) -> u8 {
        bar_width(self.percent())
    }

    /// Open spots, never negative.
    pub fn remaining(&self) -> i64 {
        (self.capacity - self.filled).max(0)
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.filled >= self.capacity
    }

    pub fn is_overbooked(&self) -> bool {
        self.filled > self.capacity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- rate ----------------------------------------------------------------

    #[test]
    fn rate_three_quarters() {
        assert_eq!(rate(9, 12), 75);
    }

    #[test]
    fn rate_zero_denominator_is_zero() {
        assert_eq!(rate(0, 0), 0);
        assert_eq!(rate(5, 0), 0);
    }

    #[test]
    fn rate_negative_denominator_is_zero() {
        assert_eq!(rate(5, -3), 0);
    }

    #[test]
    fn rate_over_full_is_not_clamped() {
        assert_eq!(rate(13, 12), 108);
    }

    #[test]
    fn rate_rounds_half_up() {
        assert_eq!(rate(1, 8), 13);
        assert_eq!(rate(1, 200), 1);
        assert_eq!(rate(1, 3), 33);
        assert_eq!(rate(2, 3), 67);
    }

    #[test]
    fn rate_full() {
        assert_eq!(rate(40, 40), 100);
    }

    #[test]
    fn rate_handles_large_counts() {
        assert_eq!(rate(i64::MAX / 2, i64::MAX), 50);
    }

    // -- bar_width -----------------------------------------------------------

    #[test]
    fn bar_width_clamps_over_full() {
        assert_eq!(bar_width(108), 100);
    }

    #[test]
    fn bar_width_clamps_negative() {
        assert_eq!(bar_width(-4), 0);
    }

    #[test]
    fn bar_width_passes_through_in_range() {
        assert_eq!(bar_width(42), 42);
    }

    // -- attendance_rate -----------------------------------------------------

    #[test]
    fn attendance_rate_counts_late_as_attended() {
        assert_eq!(attendance_rate(6, 3, 12), 75);
    }

    #[test]
    fn attendance_rate_empty_roster() {
        assert_eq!(attendance_rate(0, 0, 0), 0);
    }

    // -- Occupancy -----------------------------------------------------------

    #[test]
    fn occupancy_half_full() {
        let o = Occupancy::new(20, 10);
        assert_eq!(o.percent(), 50);
        assert_eq!(o.bar_width(), 50);
        assert_eq!(o.remaining(), 10);
        assert!(!o.is_full());
        assert!(!o.is_overbooked());
    }

    #[test]
    fn occupancy_overbooked_keeps_label_clamps_bar() {
        let o = Occupancy::new(12, 13);
        assert_eq!(o.percent(), 108);
        assert_eq!(o.bar_width(), 100);
        assert_eq!(o.remaining(), 0);
        assert!(o.is_full());
        assert!(o.is_overbooked());
    }

    #[test]
    fn occupancy_zero_capacity() {
        let o = Occupancy::new(0, 0);
        assert_eq!(o.percent(), 0);
        assert!(!o.is_full());
    }

    #[test]
    fn occupancy_default_is_empty() {
        assert_eq!(Occupancy::default().percent(), 0);
    }
}
