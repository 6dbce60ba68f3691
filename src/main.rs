use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::domain::NearestGymResponse;
use crate::geocoder::NominatimGeocoder;
use crate::locator::{NearestLocator, load_catalog_from};
use crate::lookup::lookup;
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};

mod app_config;
mod cli;
mod domain;
mod geocoder;
mod gym_deserializer;
mod locator;
mod lookup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let catalog = load_catalog_from(config.catalog().path()).await?;
    info!("✅  Loaded {} gyms", catalog.gyms().len());

    let client = geocoder::new_client(&config)?;
    let geocoder = NominatimGeocoder::new(client, &config);
    let locator = NearestLocator::new(catalog, Arc::new(geocoder), config.geocoder().timeout());

    let query = cli.query()?;
    let result = lookup(&locator, &query, &config).await?;
    debug!("Nearest gym is {} km away", result.distance.kilometers());

    println!("{}", serde_json::to_string_pretty(&NearestGymResponse::from(&result))?);

    Ok(())
}
