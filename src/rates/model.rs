use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The official HUF price of `unit` units of a foreign currency on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// HUF price of `unit` foreign units. Never negative.
    pub rate: Decimal,
    /// How many foreign units `rate` is quoted for (e.g. 100 for JPY). At least 1.
    pub unit: u32,
}

impl ExchangeRate {
    /// HUF price of a single foreign unit.
    #[must_use]
    pub fn per_unit(&self) -> Decimal {
        self.rate / Decimal::from(self.unit)
    }

    /// Converts `amount` foreign units to HUF.
    #[must_use]
    pub fn to_huf(&self, amount: Decimal) -> Decimal {
        amount * self.rate / Decimal::from(self.unit)
    }
}

/// Rates of one publishing day keyed by currency code.
pub type RateTable = BTreeMap<String, ExchangeRate>;
