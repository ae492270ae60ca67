use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};

use crate::{
    errors::{Error, Result},
    models::{RateSet, TimeSeries},
};

/// Fractional digits of every converted amount.
pub const CONVERSION_SCALE: u32 = 8;

/// Reads a rate from its JSON representation. Numbers keep the literal text
/// of the response body (serde_json `arbitrary_precision`), so no digits are
/// lost to `f64`. Numeric strings are accepted as well.
pub fn parse_rate(currency: &str, value: &Value) -> Result<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        other => {
            return Err(Error::InvalidRate {
                currency: currency.to_string(),
                value: other.to_string(),
            });
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| Error::InvalidRate {
            currency: currency.to_string(),
            value: text,
        })
}

pub fn parse_rate_set(rates: Value) -> Result<RateSet> {
    let rates: Map<String, Value> = serde_json::from_value(rates)?;
    rates
        .into_iter()
        .map(|(currency, value)| {
            let rate = parse_rate(&currency, &value)?;
            Ok((currency, rate))
        })
        .collect()
}

pub fn parse_time_series(rates: Value) -> Result<TimeSeries> {
    let days: Map<String, Value> = serde_json::from_value(rates)?;
    days.into_iter()
        .map(|(date, rates)| Ok((date, parse_rate_set(rates)?)))
        .collect()
}

/// `amount * rate`, truncated to [`CONVERSION_SCALE`] fractional digits and
/// zero padded to exactly that many.
pub fn convert_money(amount: i64, rate: Decimal) -> Result<Decimal> {
    let mut converted = Decimal::from(amount)
        .checked_mul(rate)
        .ok_or(Error::Overflow { amount, rate })?
        .round_dp_with_strategy(CONVERSION_SCALE, RoundingStrategy::ToZero);
    converted.rescale(CONVERSION_SCALE);

    // rescale stops short when 8 fractional digits exceed the 28 digit mantissa
    if converted.scale() != CONVERSION_SCALE {
        return Err(Error::Overflow { amount, rate });
    }

    Ok(converted)
}

pub fn convert_rate_set(amount: i64, rates: RateSet) -> Result<RateSet> {
    rates
        .into_iter()
        .map(|(currency, rate)| Ok((currency, convert_money(amount, rate)?)))
        .collect()
}
