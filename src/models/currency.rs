use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

/// Three letter ISO 4217 code, e.g. `GBP`.
pub type CurrencyCode = String;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, new)]
pub struct CurrencySymbol {
    description: String,
    code: CurrencyCode,
}
