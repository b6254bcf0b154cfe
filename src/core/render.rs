use crate::domain::model::Quote;
use crate::utils::error::{QuoteError, Result};

pub fn format_price(price: f64) -> String {
    format!("₹{:.2}", price)
}

/// Renders the quote as the output table: columns
/// {Item Type, Item Number, Price, Details}, terminated by a TOTAL row with
/// empty Item Number and Details. An empty quote renders headers only, with
/// no TOTAL row.
pub fn render_csv(quote: &Quote) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Item Type", "Item Number", "Price", "Details"])?;
    for line in &quote.lines {
        writer.write_record([
            line.item_type.to_string(),
            line.item_number.to_string(),
            format_price(line.price),
            line.details.clone(),
        ])?;
    }
    if !quote.is_empty() {
        writer.write_record(["TOTAL", "", &format_price(quote.total), ""])?;
    }

    let bytes = writer.into_inner().map_err(|e| QuoteError::ProcessingError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| QuoteError::ProcessingError {
        message: e.to_string(),
    })
}
