use anyhow::Result;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;

use wfm_item_fetcher::{ErrorKind, FetchConfig, Fetcher};

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("wfm-item-fetcher")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "fetcher_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    WriteLogger::init(LevelFilter::Info, config, fs::File::create(log_file)?)?;

    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    info!("Warframe Market item fetcher starting");
    println!("Fetching the full item list from Warframe Market...");

    let config = FetchConfig::default();
    let output_path = config.output_path.clone();
    let fetcher = Fetcher::new(config)?;

    match fetcher.fetch_and_save() {
        Ok(count) => {
            info!("Saved {} items to {:?}", count, output_path);
            println!("Saved {} items to {}", count, output_path.display());
        }
        Err(e) => {
            error!("Fetch failed: {}", e);
            match e.kind() {
                ErrorKind::Network => println!("Network error while querying the API: {}", e),
                ErrorKind::Unexpected => println!("Unexpected error: {}", e),
            }
        }
    }

    Ok(())
}
