pub mod calc;
pub mod exchange_rate;
pub mod validation;

pub use exchange_rate::ExchangeRate;
