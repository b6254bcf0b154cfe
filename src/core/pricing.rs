use crate::domain::model::{Category, Finish, RateEntry};
use crate::domain::ports::RateSource;
use crate::utils::error::{QuoteError, Result};
use std::collections::HashMap;

/// Immutable rate table, loaded once per run. Keys are the full
/// (finish, category) pair, so a category-less row is a distinct key and a
/// lookup with a concrete category can never fall through to it.
#[derive(Debug, Clone)]
pub struct PriceBook {
    rates: HashMap<(Finish, Option<Category>), f64>,
}

impl PriceBook {
    pub fn from_entries(entries: Vec<RateEntry>) -> Result<Self> {
        let mut rates = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.finish, entry.category);
            if rates.insert(key, entry.rate_per_sqft).is_some() {
                return Err(QuoteError::PricingError {
                    message: format!(
                        "duplicate rate row for finish {} and category {}",
                        entry.finish,
                        entry
                            .category
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "(none)".to_string()),
                    ),
                });
            }
        }
        Ok(Self { rates })
    }

    /// Parses the tabular rate source: columns Finish, Category (empty for
    /// category-less rows), Price_per_sqft.
    pub fn from_csv(data: &[u8]) -> Result<Self> {
        Self::from_entries(parse_rate_csv(data)?)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Raw rows of the rate CSV, before the uniqueness check.
pub fn parse_rate_csv(data: &[u8]) -> Result<Vec<RateEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut entries = Vec::new();
    for row in reader.deserialize::<RateEntry>() {
        entries.push(row?);
    }
    Ok(entries)
}

impl RateSource for PriceBook {
    fn rate_for(&self, finish: Finish, category: Option<Category>) -> Option<f64> {
        self.rates.get(&(finish, category)).copied()
    }
}
