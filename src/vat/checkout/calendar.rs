use std::iter::FusedIterator;

use chrono::{Days, NaiveDate};

use crate::vat::checkout::config::Config;

/// Length of one checkout window in days.
pub const CHECKOUT_PERIOD_DAYS: u64 = 7;

/// One weekly checkout window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePair {
    pub checkout: NaiveDate,
    pub due: NaiveDate,
}

impl DatePair {
    /// Checkout date as printed in the item table, e.g. `Monday, August 25`.
    pub fn checkout_label(&self) -> String {
        format_label(self.checkout)
    }

    /// Due date as printed in the item table, e.g. `Monday, September 1`.
    pub fn due_label(&self) -> String {
        format_label(self.due)
    }
}

/// Month name and day of month without padding, behind the fixed `Monday, `
/// prefix the forms have always printed.
pub fn format_label(date: NaiveDate) -> String {
    date.format("Monday, %B %-d").to_string()
}

/// Semester-wide schedule of back-to-back weekly checkout windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutCalendar {
    first_day: NaiveDate,
    weeks: u32,
}

impl CheckoutCalendar {
    pub fn new(first_day: NaiveDate, weeks: u32) -> Self {
        Self { first_day, weeks }
    }

    /// Like [`CheckoutCalendar::new`], but `None` when the last due date falls
    /// outside the representable date range.
    pub fn checked(first_day: NaiveDate, weeks: u32) -> Option<Self> {
        let span = CHECKOUT_PERIOD_DAYS * (u64::from(weeks) + 1);
        first_day.checked_add_days(Days::new(span))?;
        Some(Self::new(first_day, weeks))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.first_day, config.checkout_weeks)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Number of regular checkout windows.
    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Lazily yields every window in order. Each call starts from the first day.
    pub fn iter(&self) -> DatePairs {
        DatePairs {
            first_day: self.first_day,
            next: 0,
            end: self.weeks,
        }
    }
}

impl IntoIterator for &CheckoutCalendar {
    type Item = DatePair;
    type IntoIter = DatePairs;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the windows of a [`CheckoutCalendar`].
#[derive(Debug, Clone)]
pub struct DatePairs {
    first_day: NaiveDate,
    next: u32,
    end: u32,
}

impl DatePairs {
    // Saturates at `NaiveDate::MAX`; calendars built from a validated config
    // never get there.
    fn pair_at(&self, index: u32) -> DatePair {
        let start = u64::from(index) * CHECKOUT_PERIOD_DAYS;
        let offset = |days: u64| {
            self.first_day
                .checked_add_days(Days::new(days))
                .unwrap_or(NaiveDate::MAX)
        };
        DatePair {
            checkout: offset(start),
            due: offset(start + CHECKOUT_PERIOD_DAYS),
        }
    }
}

impl Iterator for DatePairs {
    type Item = DatePair;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pair = self.pair_at(self.next);
        self.next += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DatePairs {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.pair_at(self.end))
    }
}

impl ExactSizeIterator for DatePairs {}

impl FusedIterator for DatePairs {}
