use clap::Parser;
use tweet_etl::config::toml_config::TomlConfig;
use tweet_etl::ingest::{landing, loader};
use tweet_etl::utils::{logger, validation::Validate};
use tweet_etl::EtlEngine;
use tweet_etl::LocalStorage;
use tweet_etl::TweetPipeline;

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Tweet pipeline driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "etl-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the input file from config
    #[arg(long)]
    input: Option<String>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based tweet pipeline");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(input) = &args.input {
        config.source.path = input.clone();
        tracing::info!("🔧 Input file overridden to: {}", input);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.load.output_path.clone());
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Source: {}", config.source.path);
    println!("  Output: {}", config.load.output_path);
    println!(
        "  Required Fields: {}",
        config.transform.required_fields.join(", ")
    );
    println!(
        "  Charts: top {} hashtags, top {} authors",
        config.charts.top_hashtags, config.charts.top_authors
    );
    println!("  Monitoring: {}", config.monitoring_enabled());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("📡 Data Source Analysis:");
    println!("  Path: {}", config.source.path);
    let format = if loader::is_json_array_path(std::path::Path::new(&config.source.path)) {
        "JSON array"
    } else {
        "newline-delimited JSON"
    };
    println!("  Format: {}", format);

    println!();
    println!("⚙️ Validation:");
    if config.transform.required_fields.is_empty() {
        println!("  Every JSON object will be accepted");
    } else {
        println!(
            "  Records must carry: {}",
            config.transform.required_fields.join(", ")
        );
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.load.output_path);
    println!("  Landing file: {}", landing::LANDING_FILE);

    println!();
    println!("📊 Charts:");
    println!("  Top {} hashtags (bar)", config.charts.top_hashtags);
    println!("  Sentiment distribution (pie)");
    println!("  Top {} active authors (bar)", config.charts.top_authors);

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
