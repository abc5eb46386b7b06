use clap::Parser;
use feature_fetch::utils::{logger, validation::Validate};
use feature_fetch::{CliConfig, FetchEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting feature-fetch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let engine = FetchEngine::new(config);

    match engine.run().await {
        Ok(report) => {
            println!(
                "Successfully downloaded {} feature files",
                report.files_written
            );
        }
        Err(e) => {
            tracing::error!("Fetch failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
