use crate::config::request::QuoteRequest;
use crate::core::pricing::{parse_rate_csv, PriceBook};
use crate::core::quote::build_quote;
use crate::core::render::render_csv;
use crate::core::{ConfigProvider, Pipeline, Quote, QuoteInputs, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// The calculation run as the standard three-step pipeline: read the rate
/// table and the quote request, aggregate, write the quote table.
pub struct QuotePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> QuotePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuotePipeline<S, C> {
    async fn extract(&self) -> Result<QuoteInputs> {
        tracing::debug!("Reading rate table from: {}", self.config.pricing_path());
        let pricing_data = self.storage.read_file(self.config.pricing_path()).await?;
        let rates = parse_rate_csv(&pricing_data)?;
        tracing::debug!("Parsed {} rate rows", rates.len());

        tracing::debug!("Reading quote request from: {}", self.config.request_path());
        let request_data = self.storage.read_file(self.config.request_path()).await?;
        let request = QuoteRequest::from_bytes(self.config.request_path(), &request_data)?;
        request.validate()?;

        Ok(QuoteInputs {
            rates,
            type_a: request.type_a,
            type_b: request.type_b,
        })
    }

    async fn transform(&self, inputs: QuoteInputs) -> Result<Quote> {
        let price_book = PriceBook::from_entries(inputs.rates)?;
        tracing::debug!(
            "Rate table loaded with {} unique (finish, category) pairs",
            price_book.len()
        );

        let quote = build_quote(&price_book, &inputs.type_a, &inputs.type_b);
        tracing::debug!(
            "Quoted {} of {} requested items",
            quote.lines.len(),
            inputs.type_a.len() + inputs.type_b.len()
        );
        Ok(quote)
    }

    async fn load(&self, quote: Quote) -> Result<String> {
        let csv_path = format!("{}/quote.csv", self.config.output_path());
        let json_path = format!("{}/quote.json", self.config.output_path());

        let table = render_csv(&quote)?;
        self.storage.write_file(&csv_path, table.as_bytes()).await?;

        let json = serde_json::to_vec_pretty(&quote)?;
        self.storage.write_file(&json_path, &json).await?;

        Ok(csv_path)
    }
}
