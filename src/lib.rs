//! Client for the exchangerate.host API: supported currencies, latest and
//! historical rates, time series, and exact decimal conversion of amounts.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;

pub use api::{RateSource, RequestBuilder};
pub use config::ClientConfig;
pub use errors::{Error, InvalidDateError, Result};
pub use models::{CurrencyCode, CurrencySymbol, RateSet, Rates, Symbols, TimeSeries};
pub use services::ExchangeRate;
