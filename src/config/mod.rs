pub mod cli;
pub mod request;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "furniture-quote")]
#[command(about = "Price-quotation calculator for furniture items")]
pub struct CliConfig {
    /// Rate table CSV (columns: Finish, Category, Price_per_sqft)
    #[arg(long, default_value = "./pricing_data.csv")]
    pub pricing_path: String,

    /// Quote request file (.toml or .json)
    #[arg(long, default_value = "./quote_request.toml")]
    pub request_path: String,

    /// Directory the quote table is written to
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn pricing_path(&self) -> &str {
        &self.pricing_path
    }

    fn request_path(&self) -> &str {
        &self.request_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("pricing_path", &self.pricing_path)?;
        validate_path("request_path", &self.request_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
