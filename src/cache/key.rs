use chrono::NaiveDate;
use std::fmt;

/// Identifies one cached result.
///
/// Rendered as `<prefix>.<suffix>`; each variant owns a distinct suffix shape so two different
/// queries never share a key. Currency codes and dates are used verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The supported currency list.
    Currencies,
    /// The current-day rate table.
    Current,
    /// A single currency's rate on a single day.
    Rate {
        /// Currency code as requested.
        code: String,
        /// Publishing day.
        date: NaiveDate,
    },
    /// The first opening date.
    Start,
    /// The last opening date.
    End,
    /// Both opening dates.
    Interval,
}

impl CacheKey {
    /// Renders the full key under `prefix`.
    #[must_use]
    pub fn render(&self, prefix: &str) -> String {
        format!("{prefix}.{self}")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Currencies => f.write_str("currencies"),
            CacheKey::Current => f.write_str("current"),
            CacheKey::Rate { code, date } => {
                write!(f, "currencies.rate.{code}.{}", date.format("%Y-%m-%d"))
            }
            CacheKey::Start => f.write_str("start"),
            CacheKey::End => f.write_str("end"),
            CacheKey::Interval => f.write_str("interval"),
        }
    }
}
