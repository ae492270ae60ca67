pub mod request_builder;
pub mod utils;

pub use request_builder::{RateSource, RequestBuilder};
pub use utils::QueryParams;
