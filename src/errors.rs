use reqwest::StatusCode;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::CurrencyCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected date input. Raised before any request is sent.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvalidDateError {
    #[error("The date must be in the past.")]
    NotInPast,
    #[error("The date cannot be before 4th January 1999.")]
    BeforeEarliest,
    #[error("The 'from' date must be before the 'to' date.")]
    StartAfterEnd,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(StatusCode),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to find '{0}' in the response")]
    MissingField(&'static str),

    #[error("No exchange rate for {0} in the response")]
    MissingRate(CurrencyCode),

    #[error("Invalid exchange rate for {currency}: {value}")]
    InvalidRate { currency: CurrencyCode, value: String },

    #[error("Converting {amount} at rate {rate} overflows")]
    Overflow { amount: i64, rate: Decimal },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
