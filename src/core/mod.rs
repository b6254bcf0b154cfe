pub mod engine;
pub mod pipeline;
pub mod pricing;
pub mod quote;
pub mod render;

pub use crate::domain::model::{Quote, QuoteInputs, QuoteLine};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RateSource, Storage};
pub use crate::utils::error::Result;
