use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs a quote pipeline end to end and reports progress.
pub struct QuoteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> QuoteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading rate table and quote request...");
        let inputs = self.pipeline.extract().await?;
        tracing::info!(
            "Read {} rate rows, {} Type A items, {} Type B items",
            inputs.rates.len(),
            inputs.type_a.len(),
            inputs.type_b.len()
        );

        tracing::info!("Calculating quote...");
        let quote = self.pipeline.transform(inputs).await?;
        if quote.is_empty() {
            tracing::info!("No quotable items in the request");
        } else {
            tracing::info!("Quoted {} items", quote.lines.len());
        }

        tracing::info!("Writing quote table...");
        let output_path = self.pipeline.load(quote).await?;
        tracing::info!("Quote saved to: {}", output_path);

        Ok(output_path)
    }
}
