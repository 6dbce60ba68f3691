use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    catalog: Catalog,
    geocoder: Geocoder,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GYM_LOCATOR").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    path: String,
}

impl Catalog {
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    max_retries: usize,
}

impl Geocoder {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay_ms(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                catalog: Catalog {
                    path: format!("{}/tests/resources/gyms.json", env!("CARGO_MANIFEST_DIR")),
                },
                geocoder: Geocoder {
                    url: "https://nominatim.url".to_string(),
                    user_agent: "GymLocator/test".to_string(),
                    timeout: Duration::from_secs(2),
                    retry_ms: 1,
                    retry_max_delay_ms: 5,
                    max_retries: 2,
                },
            },
        }
    }

    pub fn geocoder_url(mut self, url: String) -> Self {
        self.config.geocoder.url = url;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.geocoder.user_agent = user_agent;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.geocoder.max_retries = max_retries;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
