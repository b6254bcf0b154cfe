use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of items of each type in a single quote request.
pub const MAX_ITEMS: usize = 10;

/// Surface treatment, first pricing dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finish {
    Laminate,
    #[serde(rename = "PU")]
    Pu,
    Duco,
    Acrylic,
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Finish::Laminate => "Laminate",
            Finish::Pu => "PU",
            Finish::Duco => "Duco",
            Finish::Acrylic => "Acrylic",
        };
        write!(f, "{}", name)
    }
}

/// Pricing tier, second pricing dimension. Absent for Type B items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Budget,
    Mainstream,
    Premium,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Budget => "Budget",
            Category::Mainstream => "Mainstream",
            Category::Premium => "Premium",
        };
        write!(f, "{}", name)
    }
}

/// One row of the rate table. `category: None` is the row Type B items price
/// against; it never matches a lookup that carries a concrete category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    #[serde(rename = "Finish")]
    pub finish: Finish,
    #[serde(rename = "Category")]
    pub category: Option<Category>,
    #[serde(rename = "Price_per_sqft")]
    pub rate_per_sqft: f64,
}

/// Wardrobe/unit item priced over three sub-regions, each with its own
/// finish, category and area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAItem {
    pub exposed_area: f64,
    pub internal_area: f64,
    pub shutter_area: f64,
    pub external_finish: Finish,
    pub external_category: Category,
    pub internal_finish: Finish,
    pub internal_category: Category,
    pub shutter_finish: Finish,
    pub shutter_category: Category,
}

impl TypeAItem {
    /// Inclusion gate: only the exposed carcass area is checked. A record with
    /// exposed_area = 0 is dropped even when internal or shutter areas are
    /// positive (observed behavior of the quoting rule, kept as-is).
    pub fn is_quotable(&self) -> bool {
        self.exposed_area > 0.0
    }
}

/// Wall-decor item priced over a single region against category-less rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeBItem {
    pub total_area: f64,
    pub finish: Finish,
}

impl TypeBItem {
    pub fn is_quotable(&self) -> bool {
        self.total_area > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    TypeA,
    TypeB,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::TypeA => write!(f, "Type A"),
            ItemType::TypeB => write!(f, "Type B"),
        }
    }
}

/// One priced line of a quote. `item_number` is the item's 1-based position in
/// the original request within its own type, not its position after filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLine {
    pub item_type: ItemType,
    pub item_number: usize,
    pub price: f64,
    pub details: String,
}

/// Ordered quote lines (all Type A lines before Type B lines) plus their
/// exact sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total: f64,
    pub generated_at: DateTime<Utc>,
}

impl Quote {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything the transform step needs: the raw rate rows and the item
/// records extracted from the request file.
#[derive(Debug, Clone)]
pub struct QuoteInputs {
    pub rates: Vec<RateEntry>,
    pub type_a: Vec<TypeAItem>,
    pub type_b: Vec<TypeBItem>,
}
