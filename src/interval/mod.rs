//! The range of days the bank has published rates for.

mod api;
mod model;
mod wire;

pub use model::DateInterval;
