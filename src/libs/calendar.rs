//! Calendar arithmetic for floating (timezone-free) dates and times.
//!
//! This module provides the `Date` and `DateTime` value types used across
//! the application together with the Gregorian calendar math they rely on:
//! leap years, month lengths, day-of-week via Zeller's congruence, and
//! day/month addition with overflow normalization.
//!
//! All values are naive local times. Comparison is lexicographic on
//! (year, month, day[, hour, minute]), which the derived `Ord`
//! implementations provide directly.

use chrono::{Datelike, Local};
use std::fmt;
use std::str::FromStr;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const DAYS_PER_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date. Field order matters: the derived `Ord` is the
/// canonical date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// A calendar date with a time of day. Derived `Ord` compares
/// lexicographically down to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

/// Gregorian leap year rule: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month. `month` must be in 1..=12; callers are
/// responsible for passing a normalized month.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_PER_MONTH[(month - 1) as usize]
}

/// Day of week for a Gregorian date, Sunday = 0 .. Saturday = 6.
///
/// Zeller's congruence, with January and February counted as months 13
/// and 14 of the previous year. Zeller numbers days Saturday = 0, so the
/// result is rotated to the Sunday-based convention used for display.
pub fn day_of_week(year: i32, month: i32, day: i32) -> i32 {
    let (mut year, mut month) = (year, month);
    if month < 3 {
        month += 12;
        year -= 1;
    }

    let k = year % 100;
    let j = year / 100;
    let h = (day + 13 * (month + 1) / 5 + k + k / 4 + j / 4 + 5 * j) % 7;

    (h + 6) % 7
}

/// Day of week of the first day of a month, Sunday = 0.
pub fn first_day_of_month(year: i32, month: i32) -> i32 {
    day_of_week(year, month, 1)
}

pub fn month_name(month: i32) -> &'static str {
    if (1..=12).contains(&month) {
        MONTH_NAMES[(month - 1) as usize]
    } else {
        "Invalid"
    }
}

pub fn day_name(day_of_week: i32) -> &'static str {
    if (0..=6).contains(&day_of_week) {
        DAY_NAMES[day_of_week as usize]
    } else {
        "Invalid"
    }
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Today according to the local wall clock.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self {
            year: now.year(),
            month: now.month() as i32,
            day: now.day() as i32,
        }
    }

    /// Adds `days` (may be negative), rolling over month and year
    /// boundaries in either direction.
    pub fn add_days(mut self, days: i32) -> Self {
        self.day += days;

        while self.day > days_in_month(self.year, self.month) {
            self.day -= days_in_month(self.year, self.month);
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }

        while self.day < 1 {
            self.month -= 1;
            if self.month < 1 {
                self.month = 12;
                self.year -= 1;
            }
            self.day += days_in_month(self.year, self.month);
        }

        self
    }

    /// Adds `months` (may be negative). The day of month is clamped down
    /// to the target month's maximum instead of rolling into the next
    /// month, so Jan 31 + 1 month lands on the last day of February.
    pub fn add_months(mut self, months: i32) -> Self {
        self.month += months;

        while self.month > 12 {
            self.month -= 12;
            self.year += 1;
        }
        while self.month < 1 {
            self.month += 12;
            self.year -= 1;
        }

        let max_days = days_in_month(self.year, self.month);
        if self.day > max_days {
            self.day = max_days;
        }

        self
    }

    pub fn day_of_week(&self) -> i32 {
        day_of_week(self.year, self.month, self.day)
    }
}

impl DateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self { year, month, day, hour, minute }
    }

    pub fn from_date(date: Date, hour: i32, minute: i32) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour,
            minute,
        }
    }

    /// The date portion, dropping the time of day.
    pub fn date(&self) -> Date {
        Date {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Adds a non-negative number of minutes, carrying minute overflow
    /// into hours, hours into days, and days across month and year
    /// boundaries. Overflow always normalizes forward; nothing is
    /// clamped.
    pub fn add_minutes(mut self, minutes: i32) -> Self {
        self.minute += minutes;

        self.hour += self.minute.div_euclid(60);
        self.minute = self.minute.rem_euclid(60);

        self.day += self.hour.div_euclid(24);
        self.hour = self.hour.rem_euclid(24);

        while self.day > days_in_month(self.year, self.month) {
            self.day -= days_in_month(self.year, self.month);
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }

        self
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} {:02}:{:02}", self.year, self.month, self.day, self.hour, self.minute)
    }
}

/// Parses `YYYY-MM-DD`. Rejects out-of-range months and days so CLI
/// input cannot smuggle an unnormalized date into the stores.
impl FromStr for Date {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok());
        let month = parts.next().and_then(|p| p.parse::<i32>().ok());
        let day = parts.next().and_then(|p| p.parse::<i32>().ok());

        match (year, month, day) {
            (Some(year), Some(month), Some(day)) if (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month) => {
                Ok(Date { year, month, day })
            }
            _ => Err(format!("invalid date '{}', expected YYYY-MM-DD", s)),
        }
    }
}
