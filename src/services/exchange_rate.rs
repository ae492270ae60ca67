use chrono::NaiveDate;
use indexmap::IndexMap;
use log::debug;
use rust_decimal::Decimal;

use super::{
    calc::{convert_money, convert_rate_set, parse_rate_set, parse_time_series},
    validation::{validate_date, validate_start_and_end_dates},
};
use crate::{
    api::{
        QueryParams, RateSource, RequestBuilder,
        utils::{parse_response_object, take_field},
    },
    config::ClientConfig,
    errors::{Error, Result},
    models::{CurrencyCode, CurrencySymbol, Rates, Symbols, TimeSeries},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry point for rate lookups and conversions.
///
/// Every operation sends at most one request through the [`RateSource`].
/// Date arguments are validated first; an invalid date never reaches the
/// source.
#[derive(Clone, Debug)]
pub struct ExchangeRate<S = RequestBuilder> {
    source: S,
}

impl Default for ExchangeRate<RequestBuilder> {
    fn default() -> Self {
        Self::new(RequestBuilder::default())
    }
}

impl ExchangeRate<RequestBuilder> {
    /// Client against the real API, configured from the environment.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::new(RequestBuilder::from_config(config)?))
    }
}

impl<S: RateSource> ExchangeRate<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All currencies the API supports, keyed by code.
    pub async fn currencies(&self) -> Result<IndexMap<CurrencyCode, CurrencySymbol>> {
        let res = self.source.make_request("symbols", &[]).await?;
        parse_response_object(take_field(res, "symbols")?)
    }

    /// Rate(s) from `from` into `to`, on `date` or the latest available.
    /// Values keep the precision the API delivered them with.
    pub async fn exchange_rate(
        &self,
        from: &str,
        to: impl Into<Symbols>,
        date: Option<NaiveDate>,
    ) -> Result<Rates<Decimal>> {
        let to = to.into();

        if let Some(date) = date {
            validate_date(date)?;
        }

        let query: QueryParams = vec![("base", from.to_string()), ("symbols", to.to_param())];
        let path = match date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => String::from("latest"),
        };

        let res = self.source.make_request(&path, &query).await?;
        let mut rates = parse_rate_set(take_field(res, "rates")?)?;
        debug!("Received {} rates for base {} ({})", rates.len(), from, path);

        match to {
            Symbols::Single(code) => match rates.swap_remove(&code) {
                Some(rate) => Ok(Rates::Single(rate)),
                None => Err(Error::MissingRate(code)),
            },
            Symbols::Many(_) => Ok(Rates::Many(rates)),
        }
    }

    /// Daily rates from `from` into `to` for every date in `start..=end`.
    pub async fn exchange_rate_between_date_range(
        &self,
        from: &str,
        to: impl Into<Symbols>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries> {
        validate_start_and_end_dates(start, end)?;

        let to = to.into();
        let query: QueryParams = vec![
            ("base", from.to_string()),
            ("start_date", start.format(DATE_FORMAT).to_string()),
            ("end_date", end.format(DATE_FORMAT).to_string()),
            ("symbols", to.to_param()),
        ];

        let res = self.source.make_request("/timeseries", &query).await?;
        let series = parse_time_series(take_field(res, "rates")?)?;
        debug!("Received {} days of rates for base {}", series.len(), from);

        Ok(series)
    }

    /// Converts `amount` of `from` into `to`, on `date` or at the latest
    /// rate. Results carry exactly eight fractional digits.
    pub async fn convert(
        &self,
        amount: i64,
        from: &str,
        to: impl Into<Symbols>,
        date: Option<NaiveDate>,
    ) -> Result<Rates<Decimal>> {
        if let Some(date) = date {
            validate_date(date)?;
        }

        self.exchange_rate(from, to, date)
            .await?
            .try_map(|rate| convert_money(amount, rate))
    }

    /// Converts `amount` at each day's rate in `start..=end`.
    pub async fn convert_between_date_range(
        &self,
        amount: i64,
        from: &str,
        to: impl Into<Symbols>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries> {
        self.exchange_rate_between_date_range(from, to, start, end)
            .await?
            .into_iter()
            .map(|(date, rates)| Ok((date, convert_rate_set(amount, rates)?)))
            .collect()
    }
}
