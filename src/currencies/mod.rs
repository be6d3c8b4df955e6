//! Supported currency codes.

mod api;
mod wire;
