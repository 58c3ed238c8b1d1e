use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

// NOTE: Why pass `today` explicitly?
// - Every function here is pure; the caller takes one "today" snapshot per
//   presentation pass so two items can never be classified against
//   different days when a pass straddles midnight.
// - Tests pin the date instead of mocking a clock.
// - NaiveDate has no time component, so partial-day differences cannot
//   produce off-by-one counts.

/// Urgency bucket derived from the number of days until expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Already expired
    Gray,
    /// Expires within 0..=2 days
    Red,
    /// Expires within 3..=6 days
    Yellow,
    /// A week or more left
    Green,
}

impl Urgency {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Urgency::Gray,
            0..=2 => Urgency::Red,
            3..=6 => Urgency::Yellow,
            _ => Urgency::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Gray => "gray",
            Urgency::Red => "red",
            Urgency::Yellow => "yellow",
            Urgency::Green => "green",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Today's date in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed number of calendar days from `today` until `date`.
///
/// Positive means the date is in the future, zero is today, negative is past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

pub fn urgency(date: NaiveDate, today: NaiveDate) -> Urgency {
    Urgency::from_days(days_until(date, today))
}

pub fn status_text(date: NaiveDate, today: NaiveDate) -> String {
    status_for_days(days_until(date, today))
}

fn status_for_days(days: i64) -> String {
    match days {
        d if d < 0 => format!("Expired {}d ago", d.abs()),
        0 => "Expires today!".to_string(),
        1 => "Expires tomorrow!".to_string(),
        d => format!("{}d left", d),
    }
}

/// All three classifications of one date against one `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expiry {
    pub days_until: i64,
    pub urgency: Urgency,
    pub status: String,
}

impl Expiry {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until(date, today);
        Self {
            days_until: days,
            urgency: Urgency::from_days(days),
            status: status_for_days(days),
        }
    }
}
