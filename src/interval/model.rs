use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First and last opening date known to the service. `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    /// Earliest day with published rates.
    pub first: NaiveDate,
    /// Most recent day with published rates.
    pub last: NaiveDate,
}

impl DateInterval {
    /// Whether `date` lies within the interval (inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}
