pub mod currency;
pub mod rates;
pub mod symbols;

pub use currency::{CurrencyCode, CurrencySymbol};
pub use rates::{RateSet, Rates, TimeSeries};
pub use symbols::Symbols;
