use crate::domain::model::{Category, Finish, ItemType, Quote, QuoteLine, TypeAItem, TypeBItem};
use crate::domain::ports::RateSource;
use chrono::Utc;

/// Missing rate rows price as zero instead of failing the quote. The miss is
/// still logged so data-entry gaps in the rate table stay visible.
fn rate_or_zero(rates: &impl RateSource, finish: Finish, category: Option<Category>) -> f64 {
    match rates.rate_for(finish, category) {
        Some(rate) => rate,
        None => {
            tracing::warn!(
                "no rate row for finish {} / category {}, pricing as 0",
                finish,
                category.map(|c| c.to_string()).unwrap_or_else(|| "(none)".to_string()),
            );
            0.0
        }
    }
}

/// Price of a Type A item: area × rate over its three sub-regions. A zero
/// area removes that sub-region's term no matter what finish or category it
/// carries.
pub fn type_a_price(rates: &impl RateSource, item: &TypeAItem) -> f64 {
    let external =
        rate_or_zero(rates, item.external_finish, Some(item.external_category)) * item.exposed_area;
    let internal =
        rate_or_zero(rates, item.internal_finish, Some(item.internal_category)) * item.internal_area;
    let shutter =
        rate_or_zero(rates, item.shutter_finish, Some(item.shutter_category)) * item.shutter_area;

    external + internal + shutter
}

/// Price of a Type B item: single region against the category-less rate row
/// for its finish.
pub fn type_b_price(rates: &impl RateSource, item: &TypeBItem) -> f64 {
    rate_or_zero(rates, item.finish, None) * item.total_area
}

/// Builds the line-itemized quote. Records failing their gating condition are
/// dropped entirely (no zero-price line); survivors keep their 1-based
/// position in the original request, counted within their own type.
pub fn build_quote(rates: &impl RateSource, type_a: &[TypeAItem], type_b: &[TypeBItem]) -> Quote {
    let mut lines = Vec::new();

    for (idx, item) in type_a.iter().enumerate() {
        if !item.is_quotable() {
            continue;
        }
        lines.push(QuoteLine {
            item_type: ItemType::TypeA,
            item_number: idx + 1,
            price: type_a_price(rates, item),
            // {:?} keeps the trailing ".0" on whole areas, as the form printed them.
            details: format!(
                "Carcass Area: {:?} sq.ft, Shutter Area: {:?} sq.ft",
                item.exposed_area, item.shutter_area
            ),
        });
    }

    for (idx, item) in type_b.iter().enumerate() {
        if !item.is_quotable() {
            continue;
        }
        lines.push(QuoteLine {
            item_type: ItemType::TypeB,
            item_number: idx + 1,
            price: type_b_price(rates, item),
            details: format!(
                "Total Area: {:?} sq.ft, Finish: {}",
                item.total_area, item.finish
            ),
        });
    }

    let total = lines.iter().map(|line| line.price).sum();

    Quote {
        lines,
        total,
        generated_at: Utc::now(),
    }
}
