use clap::Parser;
use tweet_etl::utils::{logger, validation::Validate};
use tweet_etl::{CliConfig, EtlEngine, LocalStorage, TweetPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tweet-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TweetPipeline::new(storage, config);

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ ETL process completed successfully!");
            tracing::info!("📁 Landing file: {}", report.landing_path);
            println!("✅ ETL process completed successfully!");
            println!("📁 Landing file: {}", report.landing_path);
            println!(
                "📊 {} records loaded, {} valid, {} rejected",
                report.records_loaded,
                report.records_valid,
                report.rejections.total()
            );
            println!(
                "📊 {} charts rendered, {} skipped",
                report.charts.rendered, report.charts.skipped
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                tweet_etl::utils::error::ErrorSeverity::Low => 0,
                tweet_etl::utils::error::ErrorSeverity::Medium => 2,
                tweet_etl::utils::error::ErrorSeverity::High => 1,
                tweet_etl::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
