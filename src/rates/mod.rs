//! Current and historical exchange rates.

mod api;
mod model;
mod wire;

pub use model::{ExchangeRate, RateTable};
