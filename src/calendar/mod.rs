//! Month-based calendars
//!
//! [`YearMonth`] designates the month a calendar screen is looking at;
//! [`grid::MonthGrid`] lays that month out cell by cell, the way the app renders it.

pub mod grid;

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// English month names, in calendar order
pub static MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// The column headers of a week row. Weeks start on Sunday
pub static WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The standard Gregorian rule: every 4th year, except the centuries that are
/// not multiples of 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// A specific month of a specific year, e.g. "January 2025".
///
/// Months are zero-based (`0` = January ... `11` = December), matching the
/// convention of the app this crate backs. Navigation never mutates: asking for
/// the [`next`](YearMonth::next) or [`previous`](YearMonth::previous) month
/// hands back a new value, rolling over year boundaries as needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Create from a year and a zero-based month.
    ///
    /// Out-of-range months are folded into the neighboring years, the way the
    /// source app's date type does it: `(2025, 12)` is January 2026 and
    /// `(2025, -1)` is December 2024. This is what makes navigation total.
    pub fn new(year: i32, month0: i32) -> Self {
        let year = year + month0.div_euclid(12);
        let month0 = month0.rem_euclid(12) as u32;
        Self { year, month0 }
    }

    /// The month holding the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month0: date.month0() }
    }

    /// The month holding the host's current date
    pub fn current() -> Self {
        Self::containing(crate::date::today())
    }

    pub fn year(&self) -> i32   { self.year   }
    /// Zero-based month (`0` = January)
    pub fn month0(&self) -> u32 { self.month0 }
    /// One-based month (`1` = January), as used in the canonical `YYYY-MM-DD` texts
    pub fn month1(&self) -> u32 { self.month0 + 1 }

    pub fn next(&self) -> Self {
        Self::new(self.year, self.month0 as i32 + 1)
    }
    pub fn previous(&self) -> Self {
        Self::new(self.year, self.month0 as i32 - 1)
    }

    /// How many days this month has, leap Februaries included
    pub fn day_count(&self) -> u32 {
        match self.month0 {
            0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
            3 | 5 | 8 | 10 => 30,
            _ => if is_leap_year(self.year) { 29 } else { 28 },
        }
    }

    /// The weekday column of day 1 (`0` = Sunday ... `6` = Saturday).
    ///
    /// This is also how many blank cells pad the first week of the month grid.
    pub fn leading_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month1(), 1)
            .unwrap(/* month1 is always in 1..=12, and every month has a day 1 */)
    }

    /// The English name of this month
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }
}

/// Displays as the app's calendar header, e.g. `January 2025`
impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_the_gregorian_rule() {
        assert_eq!(is_leap_year(2024), true);
        assert_eq!(is_leap_year(2023), false);
        assert_eq!(is_leap_year(2000), true);
        assert_eq!(is_leap_year(1900), false);
    }

    #[test]
    fn day_counts() {
        assert_eq!(YearMonth::new(2025, 0).day_count(), 31);   // January
        assert_eq!(YearMonth::new(2025, 3).day_count(), 30);   // April
        assert_eq!(YearMonth::new(2024, 1).day_count(), 29);   // leap February
        assert_eq!(YearMonth::new(2023, 1).day_count(), 28);
        assert_eq!(YearMonth::new(2000, 1).day_count(), 29);
        assert_eq!(YearMonth::new(1900, 1).day_count(), 28);
    }

    #[test]
    fn day_counts_agree_with_chrono() {
        for year in 1990..=2040 {
            for month0 in 0..12 {
                let month = YearMonth::new(year, month0);
                let chrono_days = month.next().first_day()
                    .signed_duration_since(month.first_day())
                    .num_days();
                assert_eq!(month.day_count() as i64, chrono_days, "wrong length for {}", month);
            }
        }
    }

    #[test]
    fn navigation_rolls_over_years() {
        let december = YearMonth::new(2024, 11);
        let january = december.next();
        assert_eq!(january, YearMonth::new(2025, 0));
        assert_eq!(january.previous(), december);

        // Out-of-range months fold over as well
        assert_eq!(YearMonth::new(2025, 12), YearMonth::new(2026, 0));
        assert_eq!(YearMonth::new(2025, -1), YearMonth::new(2024, 11));
        assert_eq!(YearMonth::new(2025, -13), YearMonth::new(2023, 11));
    }

    #[test]
    fn first_weekday_columns() {
        // January 1st, 2025 was a Wednesday
        assert_eq!(YearMonth::new(2025, 0).leading_weekday(), 3);
        // December 1st, 2024 was a Sunday: no padding at all
        assert_eq!(YearMonth::new(2024, 11).leading_weekday(), 0);
        // February 1st, 2024 was a Thursday
        assert_eq!(YearMonth::new(2024, 1).leading_weekday(), 4);
    }

    #[test]
    fn header_titles() {
        assert_eq!(YearMonth::new(2025, 0).to_string(), "January 2025");
        assert_eq!(YearMonth::new(2024, 11).to_string(), "December 2024");
    }
}
