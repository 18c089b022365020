use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that can be placed on the transaction timeline.
///
/// Institution records expose whichever of their date fields is the booking
/// date; the date filter only ever looks at this.
pub trait Timestamped {
    fn timestamp(&self) -> NaiveDate;
}

/// An inclusive date window with optional ends. `None` leaves that end open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.since, self.until) {
            (Some(s), Some(u)) => write!(f, "{s} to {u}"),
            (Some(s), None) => write!(f, "{s} onward"),
            (None, Some(u)) => write!(f, "up to {u}"),
            (None, None) => write!(f, "all dates"),
        }
    }
}

impl DateWindow {
    pub fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        DateWindow { since, until }
    }

    /// The unbounded window; every record passes.
    pub fn all() -> Self {
        DateWindow::default()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        if let Some(since) = self.since {
            if date < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if date > until {
                return false;
            }
        }
        true
    }

    /// Keeps the records whose timestamp falls inside the window, preserving
    /// input order.
    pub fn retain<T: Timestamped>(self, records: Vec<T>) -> Vec<T> {
        records
            .into_iter()
            .filter(|r| self.contains(r.timestamp()))
            .collect()
    }
}
