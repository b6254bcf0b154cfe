use furniture_quote::core::Pipeline;
use furniture_quote::{CliConfig, LocalStorage, QuoteEngine, QuotePipeline};
use tempfile::TempDir;

const PRICING_CSV: &str = "\
Finish,Category,Price_per_sqft
Laminate,Budget,100
Laminate,Mainstream,150
Laminate,Premium,200
PU,Premium,350
Acrylic,Mainstream,220
Laminate,,50
PU,,80
Duco,,120
";

const REQUEST_TOML: &str = r#"
[[type_a]]
exposed_area = 2.0
internal_area = 3.0
shutter_area = 4.0
external_finish = "Laminate"
external_category = "Budget"
internal_finish = "PU"
internal_category = "Premium"
shutter_finish = "Acrylic"
shutter_category = "Mainstream"

# Gated out: the exposed carcass area is zero, even though the shutter
# area is positive.
[[type_a]]
exposed_area = 0.0
internal_area = 0.0
shutter_area = 5.0
external_finish = "Laminate"
external_category = "Budget"
internal_finish = "Laminate"
internal_category = "Budget"
shutter_finish = "Laminate"
shutter_category = "Budget"

[[type_a]]
exposed_area = 1.0
internal_area = 0.0
shutter_area = 0.0
external_finish = "Laminate"
external_category = "Premium"
internal_finish = "Laminate"
internal_category = "Budget"
shutter_finish = "Laminate"
shutter_category = "Budget"

[[type_b]]
total_area = 0.0
finish = "Duco"

[[type_b]]
total_area = 3.0
finish = "Laminate"
"#;

fn setup(pricing: &str, request_name: &str, request: &str) -> (TempDir, CliConfig, LocalStorage) {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("pricing_data.csv"), pricing).unwrap();
    std::fs::write(temp_dir.path().join(request_name), request).unwrap();

    let config = CliConfig {
        pricing_path: "pricing_data.csv".to_string(),
        request_path: request_name.to_string(),
        output_path: "output".to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path());
    (temp_dir, config, storage)
}

#[tokio::test]
async fn test_end_to_end_quote() {
    let (temp_dir, config, storage) = setup(PRICING_CSV, "quote_request.toml", REQUEST_TOML);

    let engine = QuoteEngine::new(QuotePipeline::new(storage, config));
    let output_path = engine.run().await.unwrap();
    assert_eq!(output_path, "output/quote.csv");

    let csv =
        std::fs::read_to_string(temp_dir.path().join("output").join("quote.csv")).unwrap();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some("Item Type,Item Number,Price,Details"));
    // Item 1: 2*100 + 3*350 + 4*220 = 2130
    assert_eq!(
        lines.next(),
        Some("Type A,1,₹2130.00,\"Carcass Area: 2.0 sq.ft, Shutter Area: 4.0 sq.ft\"")
    );
    // Item 2 is gated out; item 3 keeps its original number: 1*200 = 200
    assert_eq!(
        lines.next(),
        Some("Type A,3,₹200.00,\"Carcass Area: 1.0 sq.ft, Shutter Area: 0.0 sq.ft\"")
    );
    // Type B item 1 is gated out; item 2: 3*50 = 150
    assert_eq!(
        lines.next(),
        Some("Type B,2,₹150.00,\"Total Area: 3.0 sq.ft, Finish: Laminate\"")
    );
    assert_eq!(lines.next(), Some("TOTAL,,₹2480.00,"));
    assert_eq!(lines.next(), None);

    // JSON sibling carries the same totals.
    let json = std::fs::read(temp_dir.path().join("output").join("quote.json")).unwrap();
    let quote: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(quote["total"], 2480.0);
    assert_eq!(quote["lines"].as_array().unwrap().len(), 3);
    assert!(quote["generated_at"].is_string());
}

#[tokio::test]
async fn test_empty_request_writes_headers_only() {
    let (temp_dir, config, storage) = setup(PRICING_CSV, "quote_request.toml", "");

    let engine = QuoteEngine::new(QuotePipeline::new(storage, config));
    engine.run().await.unwrap();

    let csv =
        std::fs::read_to_string(temp_dir.path().join("output").join("quote.csv")).unwrap();
    assert_eq!(csv.trim_end(), "Item Type,Item Number,Price,Details");
    assert!(!csv.contains("TOTAL"));
}

#[tokio::test]
async fn test_json_request_format() {
    let request = serde_json::json!({
        "type_b": [
            { "total_area": 3.0, "finish": "Laminate" },
            { "total_area": 2.0, "finish": "PU" }
        ]
    })
    .to_string();
    let (temp_dir, config, storage) = setup(PRICING_CSV, "quote_request.json", &request);

    let engine = QuoteEngine::new(QuotePipeline::new(storage, config));
    engine.run().await.unwrap();

    let csv =
        std::fs::read_to_string(temp_dir.path().join("output").join("quote.csv")).unwrap();
    // 3*50 + 2*80
    assert!(csv.contains("TOTAL,,₹310.00,"));
}

#[tokio::test]
async fn test_unmatched_finish_prices_as_zero() {
    // Acrylic has no category-less row, so a Type B Acrylic item costs 0 but
    // still gets a line (its gating area is positive).
    let request = r#"
[[type_b]]
total_area = 6.0
finish = "Acrylic"
"#;
    let (temp_dir, config, storage) = setup(PRICING_CSV, "quote_request.toml", request);

    let engine = QuoteEngine::new(QuotePipeline::new(storage, config));
    engine.run().await.unwrap();

    let csv =
        std::fs::read_to_string(temp_dir.path().join("output").join("quote.csv")).unwrap();
    assert!(csv.contains("Type B,1,₹0.00,"));
    assert!(csv.contains("TOTAL,,₹0.00,"));
}

#[tokio::test]
async fn test_oversized_request_is_rejected() {
    let mut request = String::new();
    for _ in 0..11 {
        request.push_str("[[type_b]]\ntotal_area = 1.0\nfinish = \"Laminate\"\n\n");
    }
    let (_temp_dir, config, storage) = setup(PRICING_CSV, "quote_request.toml", &request);

    let pipeline = QuotePipeline::new(storage, config);
    let result = pipeline.extract().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_missing_request_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("pricing_data.csv"), PRICING_CSV).unwrap();

    let config = CliConfig {
        pricing_path: "pricing_data.csv".to_string(),
        request_path: "quote_request.toml".to_string(),
        output_path: "output".to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path());

    let engine = QuoteEngine::new(QuotePipeline::new(storage, config));
    assert!(engine.run().await.is_err());
}
