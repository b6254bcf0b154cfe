use clap::Parser;
use furniture_quote::utils::{logger, validation::Validate};
use furniture_quote::{CliConfig, LocalStorage, QuoteEngine, QuotePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting furniture-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Paths in the config are resolved relative to the working directory.
    let storage = LocalStorage::new(".".to_string());
    let pipeline = QuotePipeline::new(storage, config);
    let engine = QuoteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Quote calculated successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Quote calculated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Quote calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                furniture_quote::utils::error::ErrorSeverity::Medium => 2,
                furniture_quote::utils::error::ErrorSeverity::High => 1,
                furniture_quote::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
