use crate::core::MnbError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that names a publishing day.
///
/// Implemented for ISO date strings (`2025-04-22`), RFC 3339 and `YYYY-MM-DD HH:MM:SS`
/// timestamps, and the `chrono` date and date-time types. Timestamps keep only their calendar
/// date, taken in their own offset, so cache keys and queries never depend on the time of day.
pub trait ToRateDate {
    /// Reduces `self` to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`MnbError::InvalidDate`] when a string cannot be read as a date.
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError>;
}

impl ToRateDate for NaiveDate {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        Ok(*self)
    }
}

impl ToRateDate for NaiveDateTime {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> ToRateDate for DateTime<Tz> {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        Ok(self.date_naive())
    }
}

impl ToRateDate for str {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        let s = self.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(d);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
            .ok_or_else(|| MnbError::InvalidDate(format!("{self:?} is not a recognized date")))
    }
}

impl ToRateDate for String {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        self.as_str().to_rate_date()
    }
}

impl<T: ToRateDate + ?Sized> ToRateDate for &T {
    fn to_rate_date(&self) -> Result<NaiveDate, MnbError> {
        (**self).to_rate_date()
    }
}
