use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::CurrencyCode;

/// Rates for one base currency on one date, keyed by target currency in
/// the order the API listed them.
pub type RateSet = IndexMap<CurrencyCode, Decimal>;

/// Rate sets keyed by ISO date (`YYYY-MM-DD`), in response order
/// (ascending from the API).
pub type TimeSeries = IndexMap<String, RateSet>;

/// Result of a lookup: a bare value when a single target currency was
/// requested, otherwise one value per currency.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rates<T> {
    Single(T),
    Many(IndexMap<CurrencyCode, T>),
}

impl<T> Rates<T> {
    /// The value of a single-currency result, `None` for [`Rates::Many`].
    pub fn single(&self) -> Option<&T> {
        match self {
            Rates::Single(value) => Some(value),
            Rates::Many(_) => None,
        }
    }

    /// The per-currency values of a multi-currency result, `None` for
    /// [`Rates::Single`].
    pub fn many(&self) -> Option<&IndexMap<CurrencyCode, T>> {
        match self {
            Rates::Single(_) => None,
            Rates::Many(values) => Some(values),
        }
    }

    /// Applies `f` to every value, keeping the shape and the key order.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Rates<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Rates::Single(value) => Ok(Rates::Single(f(value)?)),
            Rates::Many(values) => values
                .into_iter()
                .map(|(code, value)| Ok((code, f(value)?)))
                .collect::<Result<IndexMap<_, _>, E>>()
                .map(Rates::Many),
        }
    }
}
