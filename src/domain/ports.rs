use crate::domain::model::{Category, Finish, Quote, QuoteInputs};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Lookup side of the pricing table. A miss is `None`, never an error; the
/// aggregator decides what a miss is worth (zero, by policy).
pub trait RateSource {
    fn rate_for(&self, finish: Finish, category: Option<Category>) -> Option<f64>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn pricing_path(&self) -> &str;
    fn request_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<QuoteInputs>;
    async fn transform(&self, inputs: QuoteInputs) -> Result<Quote>;
    async fn load(&self, quote: Quote) -> Result<String>;
}
